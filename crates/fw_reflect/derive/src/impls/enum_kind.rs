use proc_macro2::TokenStream;
use quote::quote;

use super::{get_auto_register_impl, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectEnum;

/// Implement reflect for an enum of unit variants.
///
/// The enum is a leaf value; its text form is one of the variant names.
pub(crate) fn impl_unit_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, opaque_info_tokens(info));
    let reflect_trait_tokens = impl_trait_reflect(meta, "Opaque");
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #reflect_trait_tokens

        #auto_register_tokens
    }
}

/// ```ignore
/// _path_::TypeInfo::Opaque(
///     _path_::OpaqueInfo::new::<Self>().with_from_text(|text: &str| -> _ {
///         match text {
///             "Node" => Ok(Box::new(Role::Node)),
///             _ => Err(ConversionError::new(text, "Role").with_reason("expected one of: Node")),
///         }
///     })
/// )
/// ```
fn opaque_info_tokens(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();
    let fw_reflect_path = meta.fw_reflect_path();
    let exports_ = crate::path::macro_exports_(fw_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(fw_reflect_path);
    let reflect_ = crate::path::reflect_(fw_reflect_path);
    let ident = meta.ident();
    let type_name = meta.type_name();

    let names: Vec<&str> = info.variants.iter().map(|v| v.name.as_str()).collect();
    let variants = info.variants.iter().map(|v| v.ident());
    let expected = format!("expected one of: {}", names.join(", "));

    quote! {
        #exports_::TypeInfo::Opaque(
            #exports_::OpaqueInfo::new::<Self>().with_from_text(
                |text: &str| -> #macro_utils_::Result<
                    #macro_utils_::Box<dyn #reflect_>,
                    #exports_::ConversionError,
                > {
                    match text {
                        #(#names => #macro_utils_::Result::Ok(
                            #macro_utils_::Box::new(#ident::#variants) as #macro_utils_::Box<dyn #reflect_>
                        ),)*
                        _ => #macro_utils_::Result::Err(
                            #exports_::ConversionError::new(text, #type_name).with_reason(#expected)
                        ),
                    }
                }
            )
        )
    }
}
