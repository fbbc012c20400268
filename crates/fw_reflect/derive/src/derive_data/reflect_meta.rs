use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Ident, ext::IdentExt};

use super::TypeAttributes;

/// Data shared by every kind of derived type.
pub(crate) struct ReflectMeta<'a> {
    fw_reflect_path: syn::Path,
    attrs: TypeAttributes,
    ident: &'a Ident,
}

impl core::fmt::Debug for ReflectMeta<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ReflectMeta")
            .field("fw_reflect_path", &self.fw_reflect_path.to_token_stream())
            .field("ident", self.ident)
            .field("attrs", &self.attrs)
            .finish()
    }
}

impl<'a> ReflectMeta<'a> {
    #[inline]
    pub fn new(attrs: TypeAttributes, ident: &'a Ident) -> Self {
        Self {
            fw_reflect_path: crate::path::fw_reflect(),
            attrs,
            ident,
        }
    }

    #[inline]
    pub fn fw_reflect_path(&self) -> &syn::Path {
        &self.fw_reflect_path
    }

    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        self.ident
    }

    /// The short type name, used in messages.
    pub fn type_name(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// An expression evaluating to the full type path.
    ///
    /// ```ignore
    /// ::core::concat!(::core::module_path!(), "::", "Foo")
    /// ```
    pub fn type_path_expression(&self) -> TokenStream {
        let name = self.type_name();
        quote! {
            ::core::concat!(::core::module_path!(), "::", #name)
        }
    }
}
