use proc_macro2::TokenStream;
use quote::quote;

use super::nat_tokens;
use crate::derive_data::{FieldDef, RecordDef};

/// Generate the `FieldAt<index>` trait implementation tokens of one field.
///
/// Capability selection goes through the autoref probe on the concrete
/// field type, written out here so that method resolution sees it:
///
/// ```ignore
/// (&&&&Probe::<FieldType>::new()).select().dispatch(field, handler, args)
/// ```
pub(crate) fn impl_trait_field_at(
    def: &RecordDef,
    field: &FieldDef,
    index: usize,
    vc_introspect_path: &syn::Path,
) -> TokenStream {
    let field_at_ = crate::path::field_at_(vc_introspect_path);
    let capability_ = crate::path::capability_(vc_introspect_path);
    let descriptor_ = crate::path::descriptor_(vc_introspect_path);
    let descriptor_mut_ = crate::path::descriptor_mut_(vc_introspect_path);
    let dispatch_ = crate::path::dispatch_(vc_introspect_path);
    let dispatch_mut_ = crate::path::dispatch_mut_(vc_introspect_path);
    let probe_ = crate::path::probe_(vc_introspect_path);

    let ident = &def.ident;
    let index_ty = nat_tokens(vc_introspect_path, index);

    let FieldDef {
        ident: field_ident,
        ty,
        type_name,
        name,
        ..
    } = field;

    let use_probe = quote! {
        #[allow(unused_imports)]
        use #probe_::{ViaFallback as _, ViaPrimitive as _, ViaReflectable as _, ViaUnknown as _};
    };

    quote! {
        impl #field_at_<#index_ty> for #ident {
            type Type = #ty;

            const TYPE_NAME: &'static str = #type_name;

            const NAME: &'static str = #name;

            #[inline(always)]
            fn field(&self) -> &Self::Type {
                &self.#field_ident
            }

            #[inline(always)]
            fn field_mut(&mut self) -> &mut Self::Type {
                &mut self.#field_ident
            }

            #[inline(always)]
            fn capability() -> #capability_ {
                #use_probe
                (&&&&#probe_::Probe::<#ty>::new()).select().capability()
            }

            #[inline(always)]
            fn dispatch<D, H, A>(field: D, handler: &mut H, args: A) -> i32
            where
                D: #descriptor_<Value = Self::Type>,
                H: #dispatch_<A>,
            {
                #use_probe
                (&&&&#probe_::Probe::<#ty>::new()).select().dispatch(field, handler, args)
            }

            #[inline(always)]
            fn dispatch_mut<D, H, A>(field: D, handler: &mut H, args: A) -> i32
            where
                D: #descriptor_mut_<Value = Self::Type>,
                H: #dispatch_mut_<A>,
            {
                #use_probe
                (&&&&#probe_::Probe::<#ty>::new()).select().dispatch_mut(field, handler, args)
            }
        }
    }
}
