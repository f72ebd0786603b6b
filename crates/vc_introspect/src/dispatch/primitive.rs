use core::fmt;

/// Built-in scalar types: `bool`, `char`, the integers and the floats.
///
/// The set is closed; this trait is sealed.
pub trait Primitive:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display + sealed::Sealed + 'static
{
    /// The Rust spelling of the type.
    const NAME: &'static str;
}

mod sealed {
    pub trait Sealed {}
}

macro_rules! impl_primitive {
    ($($ty:ident)*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Primitive for $ty {
                const NAME: &'static str = stringify!($ty);
            }
        )*
    };
}

impl_primitive! {
    bool char
    i8 i16 i32 i64 i128 isize
    u8 u16 u32 u64 u128 usize
    f32 f64
}
