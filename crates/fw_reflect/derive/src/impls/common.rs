use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate the `TypePath` impl.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let exports_ = crate::path::macro_exports_(meta.fw_reflect_path());
    let ident = meta.ident();
    let type_path = meta.type_path_expression();
    let type_name = meta.type_name();

    quote! {
        impl #exports_::TypePath for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}

/// Generate the `Typed` impl around a `TypeInfo` expression.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, info_tokens: TokenStream) -> TokenStream {
    let exports_ = crate::path::macro_exports_(meta.fw_reflect_path());
    let ident = meta.ident();

    quote! {
        impl #exports_::Typed for #ident {
            fn type_info() -> &'static #exports_::TypeInfo {
                static CELL: #exports_::NonGenericTypeInfoCell = #exports_::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| #info_tokens)
            }
        }
    }
}

/// Generate the `Reflect` impl for the given `ReflectKind` variant name.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, kind: &str) -> TokenStream {
    let fw_reflect_path = meta.fw_reflect_path();
    let exports_ = crate::path::macro_exports_(fw_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(fw_reflect_path);
    let reflect_ = crate::path::reflect_(fw_reflect_path);
    let ident = meta.ident();
    let kind = Ident::new(kind, Span::call_site());

    quote! {
        impl #reflect_ for #ident {
            fn set(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> #macro_utils_::Result<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #macro_utils_::Result::Ok(())
            }

            #[inline]
            fn reset(&mut self) {
                *self = <Self as #macro_utils_::Default>::default();
            }

            #[inline]
            fn reflect_kind(&self) -> #exports_::ReflectKind {
                #exports_::ReflectKind::#kind
            }

            #[inline]
            fn reflect_ref(&self) -> #exports_::ReflectRef<'_> {
                #exports_::ReflectRef::#kind(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #exports_::ReflectMut<'_> {
                #exports_::ReflectMut::#kind(self)
            }
        }
    }
}
