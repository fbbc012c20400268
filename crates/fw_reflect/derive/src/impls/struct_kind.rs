use proc_macro2::{Literal, TokenStream};
use quote::quote;

use super::{get_auto_register_impl, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
use crate::derive_data::ReflectStruct;

/// Implement full reflect for a struct with named fields.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    let type_path_trait_tokens = impl_trait_type_path(meta);
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());
    let struct_trait_tokens = impl_trait_struct(info);
    let reflect_trait_tokens = impl_trait_reflect(meta, "Struct");
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #auto_register_tokens
    }
}

/// Generate the `Struct` impl.
fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let fw_reflect_path = meta.fw_reflect_path();
    let exports_ = crate::path::macro_exports_(fw_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(fw_reflect_path);
    let reflect_ = crate::path::reflect_(fw_reflect_path);
    let ident = meta.ident();

    let field_names: Vec<&str> = info.active_fields().map(|f| f.name.as_str()).collect();
    let members: Vec<_> = info.active_fields().map(|f| f.ident()).collect();
    let indices: Vec<Literal> = (0..members.len()).map(Literal::usize_unsuffixed).collect();

    quote! {
        impl #exports_::Struct for #ident {
            fn field(&self, name: &str) -> #macro_utils_::Option<&dyn #reflect_> {
                match name {
                    #(#field_names => #macro_utils_::Option::Some(#reflect_::as_reflect(&self.#members)),)*
                    _ => #macro_utils_::Option::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #macro_utils_::Option<&mut dyn #reflect_> {
                match index {
                    #(#indices => #macro_utils_::Option::Some(#reflect_::as_reflect_mut(&mut self.#members)),)*
                    _ => #macro_utils_::Option::None,
                }
            }

            fn struct_info(&self) -> &'static #exports_::StructInfo {
                let #exports_::TypeInfo::Struct(info) = <Self as #exports_::Typed>::type_info() else {
                    ::core::unreachable!()
                };
                info
            }
        }
    }
}
