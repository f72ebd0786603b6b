use proc_macro2::TokenStream;
use quote::quote;

use super::nat_tokens;
use crate::derive_data::RecordDef;

/// Generate `Record` trait implementation tokens.
///
/// The field loops are emitted flat: one `IndexFn::call` per field, in
/// declaration order, each resolving to the matching `FieldAt` impl.
pub(crate) fn impl_trait_record(def: &RecordDef, vc_introspect_path: &syn::Path) -> TokenStream {
    let record_ = crate::path::record_(vc_introspect_path);
    let field_info_ = crate::path::field_info_(vc_introspect_path);
    let visitor_ = crate::path::visitor_(vc_introspect_path);
    let visitor_mut_ = crate::path::visitor_mut_(vc_introspect_path);

    let ident = &def.ident;
    let struct_name = &def.name;
    let count = nat_tokens(vc_introspect_path, def.fields.len());

    let field_infos = def.fields.iter().enumerate().map(|(index, field)| {
        let type_name = &field.type_name;
        let name = &field.name;
        quote! {
            #field_info_::new(#index, #type_name, #name)
        }
    });

    let visit_body = visit_sequence(def, vc_introspect_path, &quote!(VisitFields));
    let visit_mut_body = visit_sequence(def, vc_introspect_path, &quote!(VisitFieldsMut));

    quote! {
        impl #record_ for #ident {
            type FieldCount = #count;

            const STRUCT_NAME: &'static str = #struct_name;

            const FIELDS: &'static [#field_info_] = &[ #(#field_infos),* ];

            #[inline(always)]
            fn for_each_field<V, A>(&self, visitor: &mut V, args: A) -> i32
            where
                V: #visitor_<A>,
                A: ::core::clone::Clone,
            {
                #visit_body
            }

            #[inline(always)]
            fn for_each_field_mut<V, A>(&mut self, visitor: &mut V, args: A) -> i32
            where
                V: #visitor_mut_<A>,
                A: ::core::clone::Clone,
            {
                #visit_mut_body
            }
        }
    }
}

/// `call::<I0>(..) + call::<I1>(..) + ...` over a fresh `adapter`.
///
/// `+` evaluates left to right, so fields are visited in declaration order.
/// The last call takes `args` by value.
fn visit_sequence(
    def: &RecordDef,
    vc_introspect_path: &syn::Path,
    adapter: &TokenStream,
) -> TokenStream {
    let macro_exports_ = crate::path::macro_exports_(vc_introspect_path);

    let len = def.fields.len();
    if len == 0 {
        return quote! {
            let _ = (visitor, args);
            0
        };
    }

    let calls = (0..len).map(|index| {
        let index_ty = nat_tokens(vc_introspect_path, index);
        let args = if index + 1 == len {
            quote!(args)
        } else {
            quote!(::core::clone::Clone::clone(&args))
        };
        quote! {
            #macro_exports_::IndexFn::<#index_ty, A>::call(&mut fields, #args)
        }
    });

    quote! {
        let mut fields = #macro_exports_::#adapter::new(self, visitor);
        #(#calls)+*
    }
}
