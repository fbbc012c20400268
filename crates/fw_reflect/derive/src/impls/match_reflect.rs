use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::ReflectDerive;

/// Entry point of `#[derive(Reflect)]`.
pub(crate) fn match_reflect_impls(ast: DeriveInput) -> TokenStream {
    let reflect_derive = match ReflectDerive::from_input(&ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let reflect_impls: proc_macro2::TokenStream = match reflect_derive {
        ReflectDerive::Struct(info) => crate::impls::impl_struct(&info),
        ReflectDerive::UnitEnum(info) => crate::impls::impl_unit_enum(&info),
        ReflectDerive::Opaque(meta) => crate::impls::impl_opaque(&meta),
    };

    TokenStream::from(quote! {
        const _: () = {
            #reflect_impls
        };
    })
}
