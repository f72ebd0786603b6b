use crate::record::Record;

/// A [`Record`] explicitly opted in to visitation.
///
/// Registration alone does not make a type reflectable, and nesting a
/// registered type inside another does not either; every type must be
/// opted in on its own with [`mark_reflectable!`](crate::mark_reflectable).
///
/// Visiting a type that was not opted in is a build error:
///
/// ```compile_fail
/// use vc_introspect::{derive::declare_record, visit::CountFields, visit_each};
///
/// declare_record! {
///     struct Hidden {
///         secret: u32,
///     }
/// }
///
/// visit_each(&Hidden { secret: 1 }, &mut CountFields, ());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` must be explicitly registered as reflectable",
    label = "not registered as reflectable",
    note = "opt the type in with `mark_reflectable!({Self})`"
)]
pub trait Reflectable: Record {}

/// Opts one or more registered types in to visitation.
///
/// Each type can be marked once; a second registration is rejected as a
/// conflicting implementation. The macro may be used in any module of the
/// crate that defines the type.
///
/// # Examples
///
/// ```
/// use vc_introspect::{derive::declare_record, is_reflectable, mark_reflectable};
///
/// mod shapes {
///     vc_introspect::derive::declare_record! {
///         pub struct Circle {
///             pub radius: f32,
///         }
///     }
/// }
///
/// declare_record! {
///     struct Square {
///         side: f32,
///     }
/// }
///
/// mark_reflectable!(shapes::Circle, Square);
///
/// assert!(is_reflectable!(shapes::Circle));
/// assert!(is_reflectable!(Square));
/// ```
///
/// ```compile_fail
/// use vc_introspect::{derive::declare_record, mark_reflectable};
///
/// declare_record! {
///     struct Twice {}
/// }
///
/// mark_reflectable!(Twice);
/// mark_reflectable!(Twice);
/// ```
#[macro_export]
macro_rules! mark_reflectable {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflectable for $ty {}
        )+
    };
}

/// Returns whether a concrete type was opted in with
/// [`mark_reflectable!`](crate::mark_reflectable).
///
/// The answer is nominal: primitives, standard containers (even of
/// reflectable elements) and registered records that were never opted in
/// all report `false`.
///
/// # Examples
///
/// ```
/// use vc_introspect::{derive::declare_record, is_reflectable, mark_reflectable};
///
/// declare_record! {
///     struct Person {
///         age: i32,
///     }
/// }
///
/// declare_record! {
///     struct Lookalike {
///         age: i32,
///     }
/// }
///
/// mark_reflectable!(Person);
///
/// assert!(is_reflectable!(Person));
/// assert!(!is_reflectable!(Lookalike));
/// assert!(!is_reflectable!(i32));
/// assert!(!is_reflectable!(f64));
/// assert!(!is_reflectable!(String));
/// assert!(!is_reflectable!(Vec<f64>));
/// assert!(!is_reflectable!(Vec<Person>));
/// ```
#[macro_export]
macro_rules! is_reflectable {
    ($ty:ty) => {
        ::core::matches!($crate::capability_of!($ty), $crate::Capability::Reflectable)
    };
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use crate::derive::declare_record;

    declare_record! {
        struct Marked {
            value: u8,
        }
    }

    declare_record! {
        struct Unmarked {
            value: u8,
        }
    }

    mod nested {
        crate::mark_reflectable!(super::Marked);
    }

    #[test]
    fn nominal() {
        assert!(is_reflectable!(Marked));
        assert!(!is_reflectable!(Unmarked));
        assert!(!is_reflectable!(u8));
        assert!(!is_reflectable!(String));
        assert!(!is_reflectable!(Vec<Marked>));
        assert!(!is_reflectable!(Option<Marked>));
    }
}
