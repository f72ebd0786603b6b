use core::fmt;
use core::marker::PhantomData;

use crate::dispatch::{Dispatch, DispatchMut};
use crate::range::Nat;
use crate::record::{FieldAt, Record};

// -----------------------------------------------------------------------------
// Descriptor

/// A view of one field of a record instance.
///
/// Implemented by [`Field`] (read-only) and [`FieldMut`]. Capability
/// handlers are generic over this trait so the same handler body serves
/// both kinds of visitation.
pub trait Descriptor {
    /// The record that owns the field.
    type Owner: Record;
    /// The declared type of the field.
    type Value;

    /// Position of the field in declaration order.
    const INDEX: usize;

    /// Borrows the field value.
    fn value(&self) -> &Self::Value;

    /// Declared type display string.
    fn declared_type_name(&self) -> &'static str;

    /// Field display name.
    fn field_name(&self) -> &'static str;

    /// Position of the field in declaration order.
    #[inline]
    fn index(&self) -> usize {
        Self::INDEX
    }

    /// Display name of the owning record.
    #[inline]
    fn owner_name(&self) -> &'static str {
        <Self::Owner as Record>::STRUCT_NAME
    }
}

/// A [`Descriptor`] that also allows writing the field.
pub trait DescriptorMut: Descriptor {
    /// Mutably borrows the field value.
    fn value_mut(&mut self) -> &mut Self::Value;
}

// -----------------------------------------------------------------------------
// Field

/// Read-only descriptor of field `I` of a `R` instance.
///
/// It does not own the field and lives no longer than the borrow of the
/// record it was created from. There is no way to obtain a mutable
/// reference through it, even with [`DescriptorMut`] in scope:
///
/// ```compile_fail
/// use vc_introspect::{Descriptor, DescriptorMut, Field, derive::declare_record, range::Z};
///
/// declare_record! {
///     struct Counter {
///         hits: u32,
///     }
/// }
///
/// let counter = Counter { hits: 0 };
/// let mut field = Field::<Counter, Z>::new(&counter);
/// *field.value_mut() += 1;
/// ```
///
/// Read-only visitation hands out this descriptor, so a [`Visitor`] cannot
/// write either:
///
/// ```compile_fail
/// use vc_introspect::{DescriptorMut, Field, FieldAt, Visitor, range::Nat};
///
/// struct Reset;
///
/// impl Visitor<()> for Reset {
///     fn visit<R, I>(&mut self, mut field: Field<'_, R, I>, _: ()) -> i32
///     where
///         R: FieldAt<I>,
///         I: Nat,
///     {
///         let _ = field.value_mut();
///         1
///     }
/// }
/// ```
///
/// [`Visitor`]: crate::Visitor
pub struct Field<'a, R, I> {
    record: &'a R,
    _index: PhantomData<I>,
}

impl<'a, R, I> Field<'a, R, I>
where
    R: FieldAt<I>,
    I: Nat,
{
    /// Binds the descriptor to `record`.
    #[inline(always)]
    pub const fn new(record: &'a R) -> Self {
        Self {
            record,
            _index: PhantomData,
        }
    }

    /// The record this descriptor is bound to.
    #[inline(always)]
    pub const fn record(&self) -> &'a R {
        self.record
    }

    /// Returns the field value with the full lifetime of the record borrow.
    #[inline(always)]
    pub fn into_value(self) -> &'a R::Type {
        self.record.field()
    }

    /// Routes this field to the `handler` method matching its capability.
    #[inline(always)]
    pub fn dispatch<H, A>(self, handler: &mut H, args: A) -> i32
    where
        H: Dispatch<A>,
    {
        <R as FieldAt<I>>::dispatch(self, handler, args)
    }
}

impl<R, I> Descriptor for Field<'_, R, I>
where
    R: FieldAt<I>,
    I: Nat,
{
    type Owner = R;
    type Value = R::Type;

    const INDEX: usize = I::VALUE;

    #[inline(always)]
    fn value(&self) -> &R::Type {
        self.record.field()
    }

    #[inline(always)]
    fn declared_type_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    #[inline(always)]
    fn field_name(&self) -> &'static str {
        R::NAME
    }
}

impl<R, I> Clone for Field<'_, R, I> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<R, I> Copy for Field<'_, R, I> {}

impl<R, I> fmt::Debug for Field<'_, R, I>
where
    R: FieldAt<I>,
    I: Nat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("owner", &R::STRUCT_NAME)
            .field("index", &I::VALUE)
            .field("type_name", &R::TYPE_NAME)
            .field("name", &R::NAME)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// FieldMut

/// Mutable descriptor of field `I` of a `R` instance.
///
/// Produced by mutable visitation; writes through [`DescriptorMut::value_mut`]
/// land directly in the record.
///
/// ```
/// use vc_introspect::{Descriptor, DescriptorMut, FieldMut, derive::declare_record, range::Z};
///
/// declare_record! {
///     struct Counter {
///         hits: u32,
///     }
/// }
///
/// let mut counter = Counter { hits: 0 };
/// let mut field = FieldMut::<Counter, Z>::new(&mut counter);
/// *field.value_mut() += 1;
/// assert_eq!(*field.value(), 1);
/// ```
pub struct FieldMut<'a, R, I> {
    record: &'a mut R,
    _index: PhantomData<I>,
}

impl<'a, R, I> FieldMut<'a, R, I>
where
    R: FieldAt<I>,
    I: Nat,
{
    /// Binds the descriptor to `record`.
    #[inline(always)]
    pub const fn new(record: &'a mut R) -> Self {
        Self {
            record,
            _index: PhantomData,
        }
    }

    /// Returns the field value with the full lifetime of the record borrow.
    #[inline(always)]
    pub fn into_value_mut(self) -> &'a mut R::Type {
        self.record.field_mut()
    }

    /// Downgrades to a read-only descriptor.
    #[inline(always)]
    pub fn as_field(&self) -> Field<'_, R, I> {
        Field::new(self.record)
    }

    /// Routes this field to the `handler` method matching its capability.
    #[inline(always)]
    pub fn dispatch<H, A>(self, handler: &mut H, args: A) -> i32
    where
        H: DispatchMut<A>,
    {
        <R as FieldAt<I>>::dispatch_mut(self, handler, args)
    }
}

impl<R, I> Descriptor for FieldMut<'_, R, I>
where
    R: FieldAt<I>,
    I: Nat,
{
    type Owner = R;
    type Value = R::Type;

    const INDEX: usize = I::VALUE;

    #[inline(always)]
    fn value(&self) -> &R::Type {
        self.record.field()
    }

    #[inline(always)]
    fn declared_type_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    #[inline(always)]
    fn field_name(&self) -> &'static str {
        R::NAME
    }
}

impl<R, I> DescriptorMut for FieldMut<'_, R, I>
where
    R: FieldAt<I>,
    I: Nat,
{
    #[inline(always)]
    fn value_mut(&mut self) -> &mut R::Type {
        self.record.field_mut()
    }
}

impl<R, I> fmt::Debug for FieldMut<'_, R, I>
where
    R: FieldAt<I>,
    I: Nat,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.as_field(), f)
            .and_then(|()| f.write_str(" (mut)"))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use super::{Descriptor, DescriptorMut, Field, FieldMut};
    use crate::derive::declare_record;
    use crate::range::{S, Z};

    declare_record! {
        #[derive(Debug, PartialEq)]
        struct Sample {
            id: u64,
            tags: Vec<u8>,
        }
    }

    #[test]
    fn read_only_view() {
        let sample = Sample {
            id: 7,
            tags: vec![1, 2],
        };
        let id = Field::<Sample, Z>::new(&sample);
        let tags = Field::<Sample, S<Z>>::new(&sample);

        assert_eq!(*id.value(), 7);
        assert_eq!(id.index(), 0);
        assert_eq!(id.field_name(), "id");
        assert_eq!(id.declared_type_name(), "u64");
        assert_eq!(id.owner_name(), "Sample");
        assert!(core::ptr::eq(id.record(), &sample));

        assert_eq!(tags.into_value(), &[1, 2]);
        assert_eq!(tags.declared_type_name(), "Vec<u8>");
        assert_eq!(<Field<'_, Sample, S<Z>> as Descriptor>::INDEX, 1);
    }

    #[test]
    fn write_through() {
        let mut sample = Sample {
            id: 7,
            tags: vec![],
        };

        let mut id = FieldMut::<Sample, Z>::new(&mut sample);
        *id.value_mut() = 9;
        assert_eq!(*id.value(), 9);

        FieldMut::<Sample, S<Z>>::new(&mut sample)
            .into_value_mut()
            .push(3);

        assert_eq!(
            sample,
            Sample {
                id: 9,
                tags: vec![3]
            }
        );
    }

    #[test]
    fn debug_output() {
        let sample = Sample { id: 1, tags: vec![] };
        let text = format!("{:?}", Field::<Sample, Z>::new(&sample));
        assert!(text.contains("Sample"));
        assert!(text.contains("\"id\""));
    }
}
