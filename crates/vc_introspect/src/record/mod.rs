//! Type registration records.
//!
//! ## Menu
//!
//! - [`Record`]: implemented once per registered type; field count, display
//!   name, metadata table and the generated field loops.
//! - [`FieldAt`]: implemented once per field index; typed access, display
//!   strings and capability dispatch for that field.
//! - [`RecordInfo`] / [`FieldInfo`]: const metadata tables.
//! - [`Field`] / [`FieldMut`]: non-owning field descriptors.
//! - [`Descriptor`] / [`DescriptorMut`]: the descriptor interface.
//!
//! All of these are produced by the registration macros in
//! [`derive`](crate::derive); implementing them by hand is possible but
//! rarely useful.
//!
//! ## Registration errors
//!
//! Generic structs cannot be registered:
//!
//! ```compile_fail
//! vc_introspect::derive::declare_record! {
//!     struct Wrapper<T> {
//!         value: T,
//!     }
//! }
//! ```
//!
//! Field identifiers must be unique:
//!
//! ```compile_fail
//! vc_introspect::derive::declare_record! {
//!     struct Twice {
//!         a: u8,
//!         a: u16,
//!     }
//! }
//! ```
//!
//! The aliased form needs every alias:
//!
//! ```compile_fail
//! vc_introspect::derive::declare_record_aliased! {
//!     struct Pet as "HoomansPet" {
//!         name: String as ("std:stringy", "petsname"),
//!         species: String,
//!     }
//! }
//! ```
//!
//! Only structs with named fields can derive [`Record`]:
//!
//! ```compile_fail
//! #[derive(vc_introspect::derive::Record)]
//! struct Meters(f64);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod descriptor;
mod info;

// -----------------------------------------------------------------------------
// Exports

pub use descriptor::{Descriptor, DescriptorMut, Field, FieldMut};
pub use info::{FieldInfo, RecordInfo};

use crate::dispatch::{Capability, Dispatch, DispatchMut};
use crate::range::Nat;
use crate::visit::{Visitor, VisitorMut};

// -----------------------------------------------------------------------------
// Record

/// A type whose fields were registered.
///
/// Querying this information for a type that was never registered does not
/// compile:
///
/// ```compile_fail
/// struct Plain {
///     value: i32,
/// }
///
/// let _ = vc_introspect::field_count::<Plain>();
/// ```
///
/// # Examples
///
/// ```
/// use vc_introspect::{Record, derive::declare_record_aliased};
///
/// declare_record_aliased! {
///     struct Pet as "HoomansPet" {
///         name: String as ("std:stringy", "petsname"),
///         species: String as ("std:stringy_t", "speciesname"),
///     }
/// }
///
/// assert_eq!(Pet::FIELD_COUNT, 2);
/// assert_eq!(Pet::STRUCT_NAME, "HoomansPet");
/// assert_eq!(Pet::INFO.field_at(0).unwrap().type_name(), "std:stringy");
/// ```
pub trait Record: Sized {
    /// The number of fields, as a type.
    type FieldCount: Nat;

    /// The number of fields.
    const FIELD_COUNT: usize = <Self::FieldCount as Nat>::VALUE;

    /// Struct display name.
    const STRUCT_NAME: &'static str;

    /// Per-field metadata in declaration order.
    const FIELDS: &'static [FieldInfo];

    /// The whole metadata table.
    const INFO: RecordInfo = RecordInfo::new(Self::STRUCT_NAME, Self::FIELDS);

    /// Struct display name.
    #[inline]
    fn struct_name(&self) -> &'static str {
        Self::STRUCT_NAME
    }

    /// Calls `visitor` once per field in declaration order and sums the
    /// results. Prefer [`visit_each`](crate::visit_each), which also checks
    /// that the type was opted in.
    fn for_each_field<V, A>(&self, visitor: &mut V, args: A) -> i32
    where
        V: Visitor<A>,
        A: Clone;

    /// Mutable counterpart of [`for_each_field`](Record::for_each_field).
    fn for_each_field_mut<V, A>(&mut self, visitor: &mut V, args: A) -> i32
    where
        V: VisitorMut<A>,
        A: Clone;
}

/// The field of a [`Record`] at index `I`.
pub trait FieldAt<I: Nat>: Record {
    /// Declared type of the field.
    type Type;

    /// Declared type display string.
    const TYPE_NAME: &'static str;

    /// Field display name.
    const NAME: &'static str;

    /// Borrows the field.
    fn field(&self) -> &Self::Type;

    /// Mutably borrows the field.
    fn field_mut(&mut self) -> &mut Self::Type;

    /// The capability category of [`Type`](FieldAt::Type).
    fn capability() -> Capability;

    /// Calls the `handler` method matching the capability of the field type.
    fn dispatch<D, H, A>(field: D, handler: &mut H, args: A) -> i32
    where
        D: Descriptor<Value = Self::Type>,
        H: Dispatch<A>;

    /// Mutable counterpart of [`dispatch`](FieldAt::dispatch).
    fn dispatch_mut<D, H, A>(field: D, handler: &mut H, args: A) -> i32
    where
        D: DescriptorMut<Value = Self::Type>,
        H: DispatchMut<A>;
}

/// Returns the number of registered fields of `T`.
///
/// # Examples
///
/// ```
/// use vc_introspect::{derive::declare_record, field_count};
///
/// declare_record! {
///     struct Empty {}
/// }
///
/// declare_record! {
///     struct Pair {
///         a: u8,
///         b: u8,
///     }
/// }
///
/// const PAIR_LEN: usize = field_count::<Pair>();
///
/// assert_eq!(field_count::<Empty>(), 0);
/// assert_eq!(PAIR_LEN, 2);
/// ```
#[inline]
pub const fn field_count<T: Record>() -> usize {
    T::FIELD_COUNT
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{FieldAt, Record, field_count};
    use crate::derive::{Record, declare_record, declare_record_aliased};
    use crate::dispatch::Capability;
    use crate::range::{S, Z};

    declare_record! {
        #[derive(Default)]
        struct Plain {
            label: String,
            weight: f64,
            flags: [bool; 4],
        }
    }

    declare_record_aliased! {
        struct Renamed as "Renamed<Display>" {
            raw: u16 as ("uint16", "Raw value"),
        }
    }

    #[derive(Record)]
    #[record(name = "DerivedLabel")]
    struct Derived {
        plain: Plain,
        #[record(name = "count_alias")]
        count: usize,
    }

    crate::mark_reflectable!(Plain);

    #[test]
    fn counts() {
        assert_eq!(field_count::<Plain>(), 3);
        assert_eq!(field_count::<Renamed>(), 1);
        assert_eq!(Derived::FIELD_COUNT, 2);
    }

    #[test]
    fn derived_names() {
        assert_eq!(Plain::STRUCT_NAME, "Plain");
        assert_eq!(<Plain as FieldAt<Z>>::NAME, "label");
        assert_eq!(<Plain as FieldAt<Z>>::TYPE_NAME, "String");
        assert_eq!(<Plain as FieldAt<S<S<Z>>>>::TYPE_NAME, "[bool; 4]");
        assert_eq!(Plain::default().struct_name(), "Plain");
    }

    #[test]
    fn aliased_names() {
        assert_eq!(Renamed::STRUCT_NAME, "Renamed<Display>");
        assert_eq!(<Renamed as FieldAt<Z>>::TYPE_NAME, "uint16");
        assert_eq!(<Renamed as FieldAt<Z>>::NAME, "Raw value");
        assert_eq!(Renamed { raw: 3 }.raw, 3);
    }

    #[test]
    fn derive_attributes() {
        assert_eq!(Derived::STRUCT_NAME, "DerivedLabel");
        assert_eq!(<Derived as FieldAt<Z>>::NAME, "plain");
        assert_eq!(<Derived as FieldAt<S<Z>>>::NAME, "count_alias");
        assert_eq!(<Derived as FieldAt<S<Z>>>::TYPE_NAME, "usize");
    }

    #[test]
    fn info_table() {
        let info = Plain::INFO;
        assert_eq!(info.name(), "Plain");
        assert_eq!(info.field_len(), Plain::FIELD_COUNT);
        for (index, field) in info.fields().iter().enumerate() {
            assert_eq!(field.index(), index);
        }
        assert_eq!(info.field_named("weight").unwrap().type_name(), "f64");
    }

    #[test]
    fn field_capabilities() {
        assert_eq!(<Plain as FieldAt<Z>>::capability(), Capability::Fallback);
        assert_eq!(<Plain as FieldAt<S<Z>>>::capability(), Capability::Primitive);
        assert_eq!(<Plain as FieldAt<S<S<Z>>>>::capability(), Capability::Fallback);
        assert_eq!(<Derived as FieldAt<Z>>::capability(), Capability::Reflectable);
    }

    #[test]
    fn typed_access() {
        let mut derived = Derived {
            plain: Plain::default(),
            count: 1,
        };
        *<Derived as FieldAt<S<Z>>>::field_mut(&mut derived) += 1;
        <Derived as FieldAt<Z>>::field_mut(&mut derived).weight = 2.5;

        assert_eq!(*<Derived as FieldAt<S<Z>>>::field(&derived), 2);
        assert_eq!(derived.plain.weight, 2.5);
    }
}
