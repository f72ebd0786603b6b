//! Compile-time capability selection.
//!
//! Stable Rust has no specialization, but method resolution on a concrete
//! receiver type already picks the first matching impl while peeling
//! references off one at a time. Starting from `&&&&Probe<T>`:
//!
//! | receiver     | trait            | bound on `T`  | selected tag       |
//! |--------------|------------------|---------------|--------------------|
//! | `&&&Probe<T>`| [`ViaReflectable`] | `Reflectable` | [`ReflectableTag`] |
//! | `&&Probe<T>` | [`ViaPrimitive`]   | `Primitive`   | [`PrimitiveTag`]   |
//! | `&Probe<T>`  | [`ViaFallback`]    | `Fallback`    | [`FallbackTag`]    |
//! | `Probe<T>`   | [`ViaUnknown`]     | none          | [`UnknownTag`]     |
//!
//! The row order is the priority order, which is why a reflectable type
//! that also implements [`Fallback`] is treated as reflectable.
//!
//! This only works when `T` is a concrete type at the call site, which is
//! the case inside the code generated for each registered field. Generic
//! code falls straight through to the unknown tag.

use core::marker::PhantomData;

use crate::dispatch::{Capability, Dispatch, DispatchMut, Fallback, Primitive};
use crate::record::{Descriptor, DescriptorMut};
use crate::reflectable::Reflectable;

/// Zero-sized marker carrying the probed type.
pub struct Probe<T>(PhantomData<fn() -> T>);

impl<T> Probe<T> {
    #[inline(always)]
    pub const fn new() -> Self {
        Probe(PhantomData)
    }
}

macro_rules! define_tag {
    ($($(#[$meta:meta])* $tag:ident,)*) => {
        $(
            $(#[$meta])*
            pub struct $tag<T>(PhantomData<fn() -> T>);

            impl<T> $tag<T> {
                #[inline(always)]
                const fn new() -> Self {
                    $tag(PhantomData)
                }
            }
        )*
    };
}

define_tag! {
    /// `T` was opted in with [`mark_reflectable!`](crate::mark_reflectable).
    ReflectableTag,
    /// `T` implements [`Primitive`].
    PrimitiveTag,
    /// `T` implements [`Fallback`].
    FallbackTag,
    /// None of the above.
    UnknownTag,
}

// -----------------------------------------------------------------------------
// Selection

pub trait ViaReflectable {
    type Tag;
    fn select(&self) -> Self::Tag;
}

pub trait ViaPrimitive {
    type Tag;
    fn select(&self) -> Self::Tag;
}

pub trait ViaFallback {
    type Tag;
    fn select(&self) -> Self::Tag;
}

pub trait ViaUnknown {
    type Tag;
    fn select(&self) -> Self::Tag;
}

impl<T: Reflectable> ViaReflectable for &&&Probe<T> {
    type Tag = ReflectableTag<T>;

    #[inline(always)]
    fn select(&self) -> ReflectableTag<T> {
        ReflectableTag::new()
    }
}

impl<T: Primitive> ViaPrimitive for &&Probe<T> {
    type Tag = PrimitiveTag<T>;

    #[inline(always)]
    fn select(&self) -> PrimitiveTag<T> {
        PrimitiveTag::new()
    }
}

impl<T: Fallback> ViaFallback for &Probe<T> {
    type Tag = FallbackTag<T>;

    #[inline(always)]
    fn select(&self) -> FallbackTag<T> {
        FallbackTag::new()
    }
}

impl<T> ViaUnknown for Probe<T> {
    type Tag = UnknownTag<T>;

    #[inline(always)]
    fn select(&self) -> UnknownTag<T> {
        UnknownTag::new()
    }
}

// -----------------------------------------------------------------------------
// Routing

impl<T: Reflectable> ReflectableTag<T> {
    #[inline(always)]
    pub const fn capability(self) -> Capability {
        Capability::Reflectable
    }

    #[inline(always)]
    pub fn dispatch<D, H, A>(self, field: D, handler: &mut H, args: A) -> i32
    where
        D: Descriptor<Value = T>,
        H: Dispatch<A>,
    {
        handler.reflectable(field, args)
    }

    #[inline(always)]
    pub fn dispatch_mut<D, H, A>(self, field: D, handler: &mut H, args: A) -> i32
    where
        D: DescriptorMut<Value = T>,
        H: DispatchMut<A>,
    {
        handler.reflectable_mut(field, args)
    }
}

impl<T: Primitive> PrimitiveTag<T> {
    #[inline(always)]
    pub const fn capability(self) -> Capability {
        Capability::Primitive
    }

    #[inline(always)]
    pub fn dispatch<D, H, A>(self, field: D, handler: &mut H, args: A) -> i32
    where
        D: Descriptor<Value = T>,
        H: Dispatch<A>,
    {
        handler.primitive(field, args)
    }

    #[inline(always)]
    pub fn dispatch_mut<D, H, A>(self, field: D, handler: &mut H, args: A) -> i32
    where
        D: DescriptorMut<Value = T>,
        H: DispatchMut<A>,
    {
        handler.primitive_mut(field, args)
    }
}

impl<T: Fallback> FallbackTag<T> {
    #[inline(always)]
    pub const fn capability(self) -> Capability {
        Capability::Fallback
    }

    #[inline(always)]
    pub fn dispatch<D, H, A>(self, field: D, handler: &mut H, args: A) -> i32
    where
        D: Descriptor<Value = T>,
        H: Dispatch<A>,
    {
        handler.fallback(field, args)
    }

    #[inline(always)]
    pub fn dispatch_mut<D, H, A>(self, field: D, handler: &mut H, args: A) -> i32
    where
        D: DescriptorMut<Value = T>,
        H: DispatchMut<A>,
    {
        handler.fallback_mut(field, args)
    }
}

impl<T> UnknownTag<T> {
    #[inline(always)]
    pub const fn capability(self) -> Capability {
        Capability::Unknown
    }

    #[inline(always)]
    pub fn dispatch<D, H, A>(self, field: D, handler: &mut H, args: A) -> i32
    where
        D: Descriptor<Value = T>,
        H: Dispatch<A>,
    {
        handler.unknown(field, args)
    }

    #[inline(always)]
    pub fn dispatch_mut<D, H, A>(self, field: D, handler: &mut H, args: A) -> i32
    where
        D: DescriptorMut<Value = T>,
        H: DispatchMut<A>,
    {
        handler.unknown_mut(field, args)
    }
}
