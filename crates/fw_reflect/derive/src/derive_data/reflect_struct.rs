use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Field, Ident, ext::IdentExt};

use super::{FieldAttributes, ReflectMeta, RenameRule};

/// A struct with named fields.
pub(crate) struct ReflectStruct<'a> {
    pub meta: ReflectMeta<'a>,
    pub fields: Vec<StructField<'a>>,
}

/// A field of a [`ReflectStruct`].
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
    /// The external name.
    pub name: String,
}

impl<'a> StructField<'a> {
    pub fn new(data: &'a Field, attrs: FieldAttributes, rule: Option<RenameRule>) -> Self {
        let name = match (&attrs.rename, &attrs.serde_rename) {
            (Some(rename), _) | (None, Some(rename)) => rename.clone(),
            (None, None) => {
                let ident = Self::ident_of(data).unraw().to_string();
                rule.unwrap_or(RenameRule::CamelCase).apply(&ident)
            }
        };
        Self { data, attrs, name }
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        Self::ident_of(self.data)
    }

    fn ident_of(data: &'a Field) -> &'a Ident {
        data.ident
            .as_ref()
            .expect("Struct should not have unnamed fields.")
    }

    /// Generate the `NamedField` construction.
    ///
    /// ```ignore
    /// _path_::NamedField::new::<Option<i32>>("maxPods", "max_pods")
    ///     .with_immutable(true)
    /// ```
    pub fn to_info_tokens(&self, fw_reflect_path: &syn::Path) -> TokenStream {
        let exports_ = crate::path::macro_exports_(fw_reflect_path);
        let ty = self.data.ty.to_token_stream();
        let name = &self.name;
        let ident = self.ident().unraw().to_string();

        let with_immutable = self
            .attrs
            .immutable
            .map(|_| quote!(.with_immutable(true)));

        quote! {
            #exports_::NamedField::new::<#ty>(#name, #ident) #with_immutable
        }
    }
}

impl<'a> ReflectStruct<'a> {
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Fields exposed to reflection, in declaration order.
    pub fn active_fields(&self) -> impl Iterator<Item = &StructField<'a>> {
        self.fields.iter().filter(|field| field.attrs.skip.is_none())
    }

    /// Generate the `TypeInfo` construction.
    pub fn to_info_tokens(&self) -> TokenStream {
        let fw_reflect_path = self.meta.fw_reflect_path();
        let exports_ = crate::path::macro_exports_(fw_reflect_path);
        let fields = self
            .active_fields()
            .map(|field| field.to_info_tokens(fw_reflect_path));

        quote! {
            #exports_::TypeInfo::Struct(
                #exports_::StructInfo::new::<Self>(&[ #(#fields),* ])
            )
        }
    }
}
