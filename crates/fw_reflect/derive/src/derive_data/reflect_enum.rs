use syn::{Ident, Variant, ext::IdentExt};

use super::{ReflectMeta, RenameRule, VariantAttributes};

/// An enum whose variants are all units, reflected as a leaf value.
pub(crate) struct ReflectEnum<'a> {
    pub meta: ReflectMeta<'a>,
    pub variants: Vec<EnumVariant<'a>>,
}

/// A unit variant of a [`ReflectEnum`].
pub(crate) struct EnumVariant<'a> {
    pub data: &'a Variant,
    /// The text that parses to this variant.
    pub name: String,
}

impl<'a> EnumVariant<'a> {
    pub fn new(data: &'a Variant, attrs: VariantAttributes, rule: Option<RenameRule>) -> Self {
        let name = match (attrs.rename, attrs.serde_rename) {
            (Some(rename), _) | (None, Some(rename)) => rename,
            (None, None) => {
                let ident = data.ident.unraw().to_string();
                match rule {
                    Some(rule) => rule.apply(&ident),
                    None => ident,
                }
            }
        };
        Self { data, name }
    }

    #[inline]
    pub fn ident(&self) -> &'a Ident {
        &self.data.ident
    }
}

impl<'a> ReflectEnum<'a> {
    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }
}
