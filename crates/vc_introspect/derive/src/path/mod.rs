//! This independent module is used to provide the required path.
//! So as to minimize changes when the `vc_introspect` structure is modified.
//!
//! The only special feature is the path of vc_introspect itself,
//! See [`vc_introspect`] function doc.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the correct access path to the `vc_introspect` crate.
///
/// 1. For crates that depend on `vc_introspect`, `::vc_introspect` is returned.
/// 2. For crates that depend on `vc_meta`, `::vc_meta::introspect` is returned.
/// 3. For crates that depend on `vc`, `::vc::introspect` is returned.
/// 4. For other situations, `::vc_introspect` is returned, this is also
///    what the crate itself sees through `extern crate self`.
///
/// The manifest lookup is not cheap, call it once per macro invocation and
/// pass the path around.
pub(crate) fn vc_introspect() -> syn::Path {
    vc_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("vc_introspect"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn macro_exports_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn probe_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::__macro_exports::probe
    }
}

#[inline(always)]
pub(crate) fn record_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::record::Record
    }
}

#[inline(always)]
pub(crate) fn field_at_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::record::FieldAt
    }
}

#[inline(always)]
pub(crate) fn field_info_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::record::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn descriptor_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::record::Descriptor
    }
}

#[inline(always)]
pub(crate) fn descriptor_mut_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::record::DescriptorMut
    }
}

#[inline(always)]
pub(crate) fn capability_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::dispatch::Capability
    }
}

#[inline(always)]
pub(crate) fn dispatch_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::dispatch::Dispatch
    }
}

#[inline(always)]
pub(crate) fn dispatch_mut_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::dispatch::DispatchMut
    }
}

#[inline(always)]
pub(crate) fn visitor_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::visit::Visitor
    }
}

#[inline(always)]
pub(crate) fn visitor_mut_(vc_introspect_path: &syn::Path) -> TokenStream {
    quote! {
        #vc_introspect_path::visit::VisitorMut
    }
}
