//! Capability dispatch.
//!
//! Every registered field is classified, while its record is being
//! registered, into exactly one [`Capability`]:
//!
//! 1. [`Reflectable`]: the type was opted in; handlers usually recurse.
//! 2. [`Primitive`]: `bool`, `char`, integers and floats.
//! 3. [`Fallback`]: any other type with a handling rule.
//! 4. Unknown: everything else; handlers emit a placeholder.
//!
//! A type matching several categories takes the first one in this list.
//! The routing happens in generated code; [`Dispatch`] and [`DispatchMut`]
//! are the handler interfaces receiving the routed fields.
//!
//! # Examples
//!
//! ```
//! use vc_introspect::{Capability, capability_of, derive::declare_record, mark_reflectable};
//!
//! declare_record! {
//!     struct Registered {}
//! }
//!
//! declare_record! {
//!     struct NotOptedIn {}
//! }
//!
//! mark_reflectable!(Registered);
//!
//! assert_eq!(capability_of!(Registered), Capability::Reflectable);
//! assert_eq!(capability_of!(NotOptedIn), Capability::Unknown);
//! assert_eq!(capability_of!(f64), Capability::Primitive);
//! assert_eq!(capability_of!(String), Capability::Fallback);
//! assert_eq!(capability_of!(std::time::Duration), Capability::Unknown);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod fallback;
mod primitive;

#[doc(hidden)]
pub mod probe;

// -----------------------------------------------------------------------------
// Exports

pub use fallback::Fallback;
pub use primitive::Primitive;

use core::fmt;

use crate::range::Nat;
use crate::record::{Descriptor, DescriptorMut, Field, FieldAt, FieldMut};
use crate::reflectable::Reflectable;
use crate::visit::{Visitor, VisitorMut, visit_each, visit_each_mut};

// -----------------------------------------------------------------------------
// Capability

/// The handling category of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Opted in with [`mark_reflectable!`](crate::mark_reflectable).
    Reflectable,
    /// A built-in scalar.
    Primitive,
    /// Has a [`Fallback`] rule.
    Fallback,
    /// No handling rule.
    Unknown,
}

impl Capability {
    /// Returns the category name.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reflectable => "Reflectable",
            Self::Primitive => "Primitive",
            Self::Fallback => "Fallback",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returns the [`Capability`] of a concrete type.
///
/// See the [module documentation](crate::dispatch) for an example.
#[macro_export]
macro_rules! capability_of {
    ($ty:ty) => {{
        #[allow(unused_imports)]
        use $crate::__macro_exports::probe::{
            ViaFallback as _, ViaPrimitive as _, ViaReflectable as _, ViaUnknown as _,
        };
        (&&&&$crate::__macro_exports::probe::Probe::<$ty>::new())
            .select()
            .capability()
    }};
}

// -----------------------------------------------------------------------------
// Handlers

/// Per-capability handler for read-only visitation.
///
/// Each method receives the field descriptor and the extra arguments and
/// returns the integer that visitation sums up.
pub trait Dispatch<A> {
    /// The field type is reflectable.
    fn reflectable<D>(&mut self, field: D, args: A) -> i32
    where
        D: Descriptor,
        D::Value: Reflectable;

    /// The field type is primitive.
    fn primitive<D>(&mut self, field: D, args: A) -> i32
    where
        D: Descriptor,
        D::Value: Primitive;

    /// The field type has a fallback rule.
    fn fallback<D>(&mut self, field: D, args: A) -> i32
    where
        D: Descriptor,
        D::Value: Fallback;

    /// The field type has no handling rule.
    fn unknown<D>(&mut self, field: D, args: A) -> i32
    where
        D: Descriptor;
}

/// Per-capability handler for mutable visitation.
///
/// The fallback and unknown categories default to leaving the field alone
/// and counting it.
pub trait DispatchMut<A> {
    /// The field type is reflectable.
    fn reflectable_mut<D>(&mut self, field: D, args: A) -> i32
    where
        D: DescriptorMut,
        D::Value: Reflectable;

    /// The field type is primitive.
    fn primitive_mut<D>(&mut self, field: D, args: A) -> i32
    where
        D: DescriptorMut,
        D::Value: Primitive;

    /// The field type has a fallback rule.
    fn fallback_mut<D>(&mut self, field: D, args: A) -> i32
    where
        D: DescriptorMut,
        D::Value: Fallback,
    {
        let _ = (field, args);
        1
    }

    /// The field type has no handling rule.
    fn unknown_mut<D>(&mut self, field: D, args: A) -> i32
    where
        D: DescriptorMut,
    {
        let _ = (field, args);
        1
    }
}

// -----------------------------------------------------------------------------
// Visitation

struct Dispatched<'h, H>(&'h mut H);

impl<H: Dispatch<A>, A> Visitor<A> for Dispatched<'_, H> {
    #[inline(always)]
    fn visit<R, I>(&mut self, field: Field<'_, R, I>, args: A) -> i32
    where
        R: FieldAt<I>,
        I: Nat,
    {
        field.dispatch(self.0, args)
    }
}

struct DispatchedMut<'h, H>(&'h mut H);

impl<H: DispatchMut<A>, A> VisitorMut<A> for DispatchedMut<'_, H> {
    #[inline(always)]
    fn visit_mut<R, I>(&mut self, field: FieldMut<'_, R, I>, args: A) -> i32
    where
        R: FieldAt<I>,
        I: Nat,
    {
        field.dispatch(self.0, args)
    }
}

/// Visits every field of `instance`, routing each one to the `handler`
/// method of its capability. Returns the sum of the handler results.
#[inline]
pub fn dispatch_each<T, H, A>(instance: &T, handler: &mut H, args: A) -> i32
where
    T: Reflectable,
    H: Dispatch<A>,
    A: Clone,
{
    visit_each(instance, &mut Dispatched(handler), args)
}

/// Mutable counterpart of [`dispatch_each`].
#[inline]
pub fn dispatch_each_mut<T, H, A>(instance: &mut T, handler: &mut H, args: A) -> i32
where
    T: Reflectable,
    H: DispatchMut<A>,
    A: Clone,
{
    visit_each_mut(instance, &mut DispatchedMut(handler), args)
}

#[cfg(test)]
mod tests {
    use alloc::borrow::Cow;
    use alloc::boxed::Box;
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;
    use alloc::{format, vec};

    use super::{Capability, Dispatch, DispatchMut, Fallback, Primitive};
    use super::{dispatch_each, dispatch_each_mut};
    use crate::Reflectable;
    use crate::derive::declare_record;
    use crate::record::{Descriptor, DescriptorMut};

    struct Opaque;

    declare_record! {
        #[derive(Default)]
        struct Inner {
            level: u8,
            note: String,
        }
    }

    declare_record! {
        struct Outer {
            inner: Inner,
            ratio: f32,
            opaque: Opaque,
            words: Vec<&'static str>,
        }
    }

    // Both reflectable and a fallback type: reflectable wins.
    declare_record! {
        #[derive(Debug, Default)]
        struct Both {
            value: i64,
        }
    }

    impl Fallback for Both {
        const KIND: &'static str = "Both";

        fn render(&self, out: &mut dyn core::fmt::Write) -> core::fmt::Result {
            write!(out, "{self:?}")
        }
    }

    declare_record! {
        struct HoldsBoth {
            both: Both,
        }
    }

    // Registered, never opted in.
    declare_record! {
        #[derive(Debug)]
        struct Shy {}
    }

    crate::mark_reflectable!(Inner, Outer, Both, HoldsBoth);

    #[derive(Default)]
    struct Trace(Vec<String>);

    impl Dispatch<usize> for Trace {
        fn reflectable<D>(&mut self, field: D, depth: usize) -> i32
        where
            D: Descriptor,
            D::Value: Reflectable,
        {
            self.0.push(format!("{depth}:R:{}", field.field_name()));
            dispatch_each(field.value(), self, depth + 1) + 1
        }

        fn primitive<D>(&mut self, field: D, depth: usize) -> i32
        where
            D: Descriptor,
            D::Value: Primitive,
        {
            self.0.push(format!("{depth}:P:{}={}", field.field_name(), field.value()));
            1
        }

        fn fallback<D>(&mut self, field: D, depth: usize) -> i32
        where
            D: Descriptor,
            D::Value: Fallback,
        {
            let mut rendered = String::new();
            field.value().render(&mut rendered).unwrap();
            self.0.push(format!("{depth}:F:{}={rendered}", field.field_name()));
            1
        }

        fn unknown<D>(&mut self, field: D, depth: usize) -> i32
        where
            D: Descriptor,
        {
            self.0.push(format!("{depth}:U:{}", field.field_name()));
            1
        }
    }

    #[test]
    fn classification() {
        assert_eq!(capability_of!(Inner), Capability::Reflectable);
        assert_eq!(capability_of!(u128), Capability::Primitive);
        assert_eq!(capability_of!(char), Capability::Primitive);
        assert_eq!(capability_of!(Cow<'static, str>), Capability::Fallback);
        assert_eq!(capability_of!(Box<str>), Capability::Fallback);
        assert_eq!(capability_of!(Vec<Inner>), Capability::Unknown);
        assert_eq!(capability_of!(Vec<Both>), Capability::Fallback);
        assert_eq!(capability_of!(Opaque), Capability::Unknown);
        assert_eq!(capability_of!(Shy), Capability::Unknown);
        assert_eq!(Capability::Fallback.to_string(), "Fallback");
    }

    #[test]
    fn reflectable_beats_fallback() {
        assert_eq!(capability_of!(Both), Capability::Reflectable);

        let mut trace = Trace::default();
        let count = dispatch_each(&HoldsBoth { both: Both { value: -3 } }, &mut trace, 0);
        assert_eq!(count, 2);
        assert_eq!(trace.0, ["0:R:both", "1:P:value=-3"]);
    }

    #[test]
    fn routes_every_category() {
        let outer = Outer {
            inner: Inner {
                level: 2,
                note: String::from("hi"),
            },
            ratio: 0.5,
            opaque: Opaque,
            words: vec!["a", "b"],
        };

        let mut trace = Trace::default();
        let count = dispatch_each(&outer, &mut trace, 0);

        assert_eq!(count, 6);
        assert_eq!(
            trace.0,
            [
                "0:R:inner",
                "1:P:level=2",
                "1:F:note=\"hi\"",
                "0:P:ratio=0.5",
                "0:U:opaque",
                "0:F:words=[\"a\", \"b\"]",
            ]
        );
    }

    struct Reset;

    impl DispatchMut<()> for Reset {
        fn reflectable_mut<D>(&mut self, mut field: D, args: ()) -> i32
        where
            D: DescriptorMut,
            D::Value: Reflectable,
        {
            dispatch_each_mut(field.value_mut(), self, args)
        }

        fn primitive_mut<D>(&mut self, mut field: D, _: ()) -> i32
        where
            D: DescriptorMut,
            D::Value: Primitive,
        {
            *field.value_mut() = Default::default();
            1
        }
    }

    #[test]
    fn mutable_dispatch() {
        let mut outer = Outer {
            inner: Inner {
                level: 9,
                note: String::from("kept"),
            },
            ratio: 4.0,
            opaque: Opaque,
            words: vec![],
        };

        // level, note, ratio, opaque, words
        assert_eq!(dispatch_each_mut(&mut outer, &mut Reset, ()), 5);
        assert_eq!(outer.inner.level, 0);
        assert_eq!(outer.inner.note, "kept");
        assert_eq!(outer.ratio, 0.0);

        let mut trace = Trace::default();
        dispatch_each(&outer.inner, &mut trace, 0);
        assert_eq!(trace.0[0], "0:P:level=0");
    }
}
