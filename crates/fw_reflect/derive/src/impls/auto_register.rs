use crate::derive_data::ReflectMeta;

/// Submit the type's `FromText` parser when `#[reflect(auto_register)]`
/// is present.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    let Some(span) = meta.attrs().auto_register else {
        return crate::utils::empty();
    };

    let auto_register_ = crate::path::auto_register_(meta.fw_reflect_path());
    let ident = meta.ident();

    quote_spanned! { span =>
        #auto_register_::inventory::submit!{
            #auto_register_::__AutoRegisterFunc(
                <#ident as #auto_register_::__RegisterParser>::__register
            )
        }
    }
}

#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
