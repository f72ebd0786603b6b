use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Handling rule for field types that are neither reflectable nor
/// primitive.
///
/// Implement it for your own types to give them a rendering in
/// [`Dispatch::fallback`](crate::dispatch::Dispatch::fallback). A type
/// that is also [`Reflectable`](crate::Reflectable) is still dispatched as
/// reflectable.
///
/// Built-in implementations cover the string types and the common
/// sequence/option shapes of any [`Debug`](fmt::Debug) element.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use vc_introspect::{Capability, Fallback, capability_of};
///
/// struct Rgb(u8, u8, u8);
///
/// impl Fallback for Rgb {
///     const KIND: &'static str = "color";
///
///     fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
///         write!(out, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
///     }
/// }
///
/// assert_eq!(capability_of!(Rgb), Capability::Fallback);
/// ```
pub trait Fallback {
    /// Short label for the kind of value, used in annotations.
    const KIND: &'static str;

    /// Writes a human-readable rendering of the value.
    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

macro_rules! impl_quoted {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl Fallback for $ty {
                const KIND: &'static str = $kind;

                #[inline]
                fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
                    write!(out, "{:?}", &**self)
                }
            }
        )*
    };
}

impl_quoted! {
    String => "String",
    &'static str => "&str",
    Box<str> => "Box<str>",
    Cow<'static, str> => "Cow<str>",
}

impl<T: fmt::Debug> Fallback for Vec<T> {
    const KIND: &'static str = "Vec";

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{self:?}")
    }
}

impl<T: fmt::Debug, const N: usize> Fallback for [T; N] {
    const KIND: &'static str = "array";

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{self:?}")
    }
}

impl<T: fmt::Debug> Fallback for Option<T> {
    const KIND: &'static str = "Option";

    fn render(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        match self {
            Some(value) => write!(out, "Some({value:?})"),
            None => out.write_str("None"),
        }
    }
}
