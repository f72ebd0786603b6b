use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::RecordDef;

/// Re-emit the declared struct, `record(...)` attributes removed.
pub(crate) fn impl_struct_def(def: &RecordDef) -> TokenStream {
    let RecordDef {
        attrs, vis, ident, ..
    } = def;

    let fields = def.fields.iter().map(|field| {
        let attrs = &field.attrs;
        let vis = &field.vis;
        let ident = &field.ident;
        let ty = &field.ty;
        quote! {
            #(#attrs)*
            #vis #ident: #ty
        }
    });

    quote! {
        #(#attrs)*
        #vis struct #ident {
            #(#fields,)*
        }
    }
}
