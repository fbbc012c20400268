use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectMeta;

/// Implement reflect for a type marked `#[reflect(opaque)]`.
pub(crate) fn impl_opaque(meta: &ReflectMeta) -> TokenStream {
    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, opaque_info_tokens(meta));
    let reflect_trait_tokens = impl_trait_reflect(meta, "Opaque");
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #auto_register_tokens
    }
}

fn opaque_info_tokens(meta: &ReflectMeta) -> TokenStream {
    let fw_reflect_path = meta.fw_reflect_path();
    let exports_ = crate::path::macro_exports_(fw_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(fw_reflect_path);
    let reflect_ = crate::path::reflect_(fw_reflect_path);
    let type_name = meta.type_name();

    let with_from_text = meta.attrs().from_str.map(|_| {
        quote! {
            .with_from_text(
                |text: &str| -> #macro_utils_::Result<
                    #macro_utils_::Box<dyn #reflect_>,
                    #exports_::ConversionError,
                > {
                    match <Self as #macro_utils_::FromStr>::from_str(text) {
                        #macro_utils_::Result::Ok(value) => #macro_utils_::Result::Ok(
                            #macro_utils_::Box::new(value) as #macro_utils_::Box<dyn #reflect_>
                        ),
                        #macro_utils_::Result::Err(err) => #macro_utils_::Result::Err(
                            #exports_::ConversionError::new(text, #type_name)
                                .with_reason(#macro_utils_::ToString::to_string(&err))
                        ),
                    }
                }
            )
        }
    });

    quote! {
        #exports_::TypeInfo::Opaque(
            #exports_::OpaqueInfo::new::<Self>() #with_from_text
        )
    }
}
