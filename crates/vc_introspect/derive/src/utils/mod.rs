// -----------------------------------------------------------------------------
// Modules

mod type_display;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use type_display::type_display;

use proc_macro2::TokenStream;

#[inline(always)]
pub(crate) fn empty() -> TokenStream {
    TokenStream::new()
}
