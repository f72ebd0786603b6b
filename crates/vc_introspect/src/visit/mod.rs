//! Field visitation.
//!
//! [`visit_each`] calls a [`Visitor`] once per field of a reflectable
//! record, in declaration order, and returns the sum of the results. The
//! registration macros emit one call per field index, so there is no loop
//! left at run time; each call builds one [`Field`] descriptor.
//!
//! ## Menu
//!
//! - [`Visitor`] / [`VisitorMut`]: per-field callbacks.
//! - [`visit_each`] / [`visit_each_mut`]: the entry points.
//! - [`VisitFields`] / [`VisitFieldsMut`]: per-index adapters called by
//!   generated code, also usable with [`unroll::for_each`](crate::unroll::for_each).
//! - [`CountFields`], [`CollectNames`]: small ready-made visitors.

// -----------------------------------------------------------------------------
// Modules

mod builtin;

// -----------------------------------------------------------------------------
// Exports

pub use builtin::{CollectNames, CountFields};

use crate::range::Nat;
use crate::record::{Field, FieldAt, FieldMut};
use crate::reflectable::Reflectable;
use crate::unroll::IndexFn;

// -----------------------------------------------------------------------------
// Visitor

/// Callback invoked once per field during read-only visitation.
///
/// The field type is opaque to a generic visitor; use
/// [`Field::dispatch`] (or [`dispatch_each`](crate::dispatch_each)) to
/// reach type-specific handling.
pub trait Visitor<A> {
    /// Visits one field.
    fn visit<R, I>(&mut self, field: Field<'_, R, I>, args: A) -> i32
    where
        R: FieldAt<I>,
        I: Nat;
}

/// Callback invoked once per field during mutable visitation.
pub trait VisitorMut<A> {
    /// Visits one field.
    fn visit_mut<R, I>(&mut self, field: FieldMut<'_, R, I>, args: A) -> i32
    where
        R: FieldAt<I>,
        I: Nat;
}

/// Calls `visitor` with a descriptor of each field of `instance`, in
/// declaration order, passing a clone of `args` each time. Returns the sum
/// of the visitor results; a record without fields returns `0`.
///
/// # Examples
///
/// ```
/// use vc_introspect::visit::CollectNames;
/// use vc_introspect::{derive::declare_record, mark_reflectable, visit_each};
///
/// declare_record! {
///     struct Vec3 {
///         x: f32,
///         y: f32,
///         z: f32,
///     }
/// }
///
/// mark_reflectable!(Vec3);
///
/// let mut names = CollectNames::default();
/// let count = visit_each(&Vec3 { x: 0.0, y: 1.0, z: 2.0 }, &mut names, ());
///
/// assert_eq!(count, 3);
/// assert_eq!(names.names(), ["x", "y", "z"]);
/// ```
#[inline]
pub fn visit_each<T, V, A>(instance: &T, visitor: &mut V, args: A) -> i32
where
    T: Reflectable,
    V: Visitor<A>,
    A: Clone,
{
    instance.for_each_field(visitor, args)
}

/// Mutable counterpart of [`visit_each`]. Writes made through the
/// descriptors are visible in `instance` afterwards.
#[inline]
pub fn visit_each_mut<T, V, A>(instance: &mut T, visitor: &mut V, args: A) -> i32
where
    T: Reflectable,
    V: VisitorMut<A>,
    A: Clone,
{
    instance.for_each_field_mut(visitor, args)
}

// -----------------------------------------------------------------------------
// Adapters

/// Binds a record and a [`Visitor`] into an [`IndexFn`].
///
/// For index `I` it builds `Field<R, I>` and forwards it to the visitor.
pub struct VisitFields<'r, 'v, R, V> {
    record: &'r R,
    visitor: &'v mut V,
}

impl<'r, 'v, R, V> VisitFields<'r, 'v, R, V> {
    #[inline(always)]
    pub const fn new(record: &'r R, visitor: &'v mut V) -> Self {
        Self { record, visitor }
    }
}

impl<R, V, I, A> IndexFn<I, A> for VisitFields<'_, '_, R, V>
where
    R: FieldAt<I>,
    V: Visitor<A>,
    I: Nat,
{
    #[inline(always)]
    fn call(&mut self, args: A) -> i32 {
        self.visitor.visit(Field::<R, I>::new(self.record), args)
    }
}

/// Mutable counterpart of [`VisitFields`].
pub struct VisitFieldsMut<'r, 'v, R, V> {
    record: &'r mut R,
    visitor: &'v mut V,
}

impl<'r, 'v, R, V> VisitFieldsMut<'r, 'v, R, V> {
    #[inline(always)]
    pub const fn new(record: &'r mut R, visitor: &'v mut V) -> Self {
        Self { record, visitor }
    }
}

impl<R, V, I, A> IndexFn<I, A> for VisitFieldsMut<'_, '_, R, V>
where
    R: FieldAt<I>,
    V: VisitorMut<A>,
    I: Nat,
{
    #[inline(always)]
    fn call(&mut self, args: A) -> i32 {
        self.visitor
            .visit_mut(FieldMut::<R, I>::new(&mut *self.record), args)
    }
}
