// -----------------------------------------------------------------------------
// Modules

mod struct_def;
mod trait_field_at;
mod trait_record;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDef;

use struct_def::impl_struct_def;
use trait_field_at::impl_trait_field_at;
use trait_record::impl_trait_record;

/// Generate the registration of `def`.
///
/// `emit_struct` is set by the declaring macros, which also have to emit the
/// struct itself. A derive only adds the impls.
pub(crate) fn impl_record(def: &RecordDef, emit_struct: bool) -> TokenStream {
    let vc_introspect_path = crate::path::vc_introspect();

    let struct_tokens = if emit_struct {
        impl_struct_def(def)
    } else {
        crate::utils::empty()
    };

    let record_tokens = impl_trait_record(def, &vc_introspect_path);

    let field_tokens = def
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| impl_trait_field_at(def, field, index, &vc_introspect_path));

    quote! {
        #struct_tokens

        const _: () = {
            #record_tokens

            #(#field_tokens)*
        };
    }
}

/// Type-level natural `n`: `S<S<...Z>>`.
fn nat_tokens(vc_introspect_path: &syn::Path, n: usize) -> TokenStream {
    let macro_exports_ = crate::path::macro_exports_(vc_introspect_path);

    (0..n).fold(quote!(#macro_exports_::Z), |inner, _| {
        quote!(#macro_exports_::S<#inner>)
    })
}
