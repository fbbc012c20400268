//! `#[reflect(..)]` attributes, plus the `#[serde(..)]` renames that feed
//! external names.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use proc_macro2::Span;
use syn::{Attribute, LitStr, meta::ParseNestedMeta};

use crate::{REFLECT_ATTRIBUTE_NAME, SERDE_ATTRIBUTE_NAME};

// -----------------------------------------------------------------------------
// RenameRule

/// Case conversion applied to identifiers without an explicit rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    CamelCase,
    SnakeCase,
    KebabCase,
    PascalCase,
    ScreamingSnakeCase,
    ScreamingKebabCase,
    LowerCase,
    UpperCase,
}

impl RenameRule {
    const ALL: [(&'static str, RenameRule); 8] = [
        ("camelCase", RenameRule::CamelCase),
        ("snake_case", RenameRule::SnakeCase),
        ("kebab-case", RenameRule::KebabCase),
        ("PascalCase", RenameRule::PascalCase),
        ("SCREAMING_SNAKE_CASE", RenameRule::ScreamingSnakeCase),
        ("SCREAMING-KEBAB-CASE", RenameRule::ScreamingKebabCase),
        ("lowercase", RenameRule::LowerCase),
        ("UPPERCASE", RenameRule::UpperCase),
    ];

    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        let value = lit.value();
        Self::ALL
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rule)| *rule)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|(name, _)| *name).collect();
                syn::Error::new(
                    lit.span(),
                    format!("unknown rename rule, expected one of: {}", names.join(", ")),
                )
            })
    }

    pub fn apply(self, ident: &str) -> String {
        match self {
            RenameRule::CamelCase => ident.to_lower_camel_case(),
            RenameRule::SnakeCase => ident.to_snake_case(),
            RenameRule::KebabCase => ident.to_kebab_case(),
            RenameRule::PascalCase => ident.to_upper_camel_case(),
            RenameRule::ScreamingSnakeCase => ident.to_shouty_snake_case(),
            RenameRule::ScreamingKebabCase => ident.to_shouty_kebab_case(),
            RenameRule::LowerCase => ident.to_ascii_lowercase(),
            RenameRule::UpperCase => ident.to_ascii_uppercase(),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeAttributes

/// Attributes applied to the type.
#[derive(Debug, Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(rename_all = "...")]`
    pub rename_all: Option<RenameRule>,
    /// `#[serde(rename_all = "...")]`, used when `rename_all` is absent.
    pub serde_rename_all: Option<RenameRule>,
    /// `#[reflect(opaque)]`
    pub opaque: Option<Span>,
    /// `#[reflect(from_str)]`
    pub from_str: Option<Span>,
    /// `#[reflect(auto_register)]`
    pub auto_register: Option<Span>,
}

impl TypeAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| result.parse_meta(meta))?;
            } else if attr.path().is_ident(SERDE_ATTRIBUTE_NAME) {
                // Only `rename_all` is read; other serde options are skipped.
                let _ = attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename_all") && meta.input.peek(syn::Token![=]) {
                        let lit: LitStr = meta.value()?.parse()?;
                        result.serde_rename_all = RenameRule::from_lit(&lit).ok();
                        Ok(())
                    } else {
                        skip_meta(&meta)
                    }
                });
            }
        }

        Ok(result)
    }

    fn parse_meta(&mut self, meta: ParseNestedMeta<'_>) -> syn::Result<()> {
        let span = meta.path.require_ident()?.span();
        if meta.path.is_ident("rename_all") {
            let lit: LitStr = meta.value()?.parse()?;
            set_once(&meta, &mut self.rename_all, RenameRule::from_lit(&lit)?)
        } else if meta.path.is_ident("opaque") {
            set_once(&meta, &mut self.opaque, span)
        } else if meta.path.is_ident("from_str") {
            set_once(&meta, &mut self.from_str, span)
        } else if meta.path.is_ident("auto_register") {
            set_once(&meta, &mut self.auto_register, span)
        } else {
            Err(meta.error(
                "unsupported type attribute, expected `rename_all`, `opaque`, `from_str` or `auto_register`",
            ))
        }
    }

    /// The rename rule in effect for members of this type.
    pub fn rename_rule(&self) -> Option<RenameRule> {
        self.rename_all.or(self.serde_rename_all)
    }
}

// -----------------------------------------------------------------------------
// FieldAttributes

/// Attributes applied to a struct field.
#[derive(Debug, Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(rename = "...")]`
    pub rename: Option<String>,
    /// `#[serde(rename = "...")]`
    pub serde_rename: Option<String>,
    /// `#[reflect(immutable)]`
    pub immutable: Option<Span>,
    /// `#[reflect(skip)]`
    pub skip: Option<Span>,
}

impl FieldAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    let span = meta.path.require_ident()?.span();
                    if meta.path.is_ident("rename") {
                        let lit: LitStr = meta.value()?.parse()?;
                        set_once(&meta, &mut result.rename, lit.value())
                    } else if meta.path.is_ident("immutable") {
                        set_once(&meta, &mut result.immutable, span)
                    } else if meta.path.is_ident("skip") {
                        set_once(&meta, &mut result.skip, span)
                    } else {
                        Err(meta.error(
                            "unsupported field attribute, expected `rename`, `immutable` or `skip`",
                        ))
                    }
                })?;
            } else if attr.path().is_ident(SERDE_ATTRIBUTE_NAME) {
                result.serde_rename = parse_serde_rename(attr).or(result.serde_rename);
            }
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// VariantAttributes

/// Attributes applied to an enum variant.
#[derive(Debug, Default)]
pub(crate) struct VariantAttributes {
    /// `#[reflect(rename = "...")]`
    pub rename: Option<String>,
    /// `#[serde(rename = "...")]`
    pub serde_rename: Option<String>,
}

impl VariantAttributes {
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        let lit: LitStr = meta.value()?.parse()?;
                        set_once(&meta, &mut result.rename, lit.value())
                    } else {
                        Err(meta.error("unsupported variant attribute, expected `rename`"))
                    }
                })?;
            } else if attr.path().is_ident(SERDE_ATTRIBUTE_NAME) {
                result.serde_rename = parse_serde_rename(attr).or(result.serde_rename);
            }
        }

        Ok(result)
    }
}

// -----------------------------------------------------------------------------
// Helpers

fn set_once<T>(meta: &ParseNestedMeta<'_>, slot: &mut Option<T>, value: T) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error("duplicate attribute"));
    }
    *slot = Some(value);
    Ok(())
}

/// The `rename = "..."` of a `#[serde(..)]` attribute, if any.
fn parse_serde_rename(attr: &Attribute) -> Option<String> {
    let mut rename = None;
    let _ = attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("rename") && meta.input.peek(syn::Token![=]) {
            let lit: LitStr = meta.value()?.parse()?;
            rename = Some(lit.value());
            Ok(())
        } else {
            skip_meta(&meta)
        }
    });
    rename
}

/// Consume the value of a nested meta item we do not interpret.
fn skip_meta(meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_meta(&nested))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{FieldAttributes, RenameRule, TypeAttributes};
    use syn::parse_quote;

    #[test]
    fn rename_rules() {
        assert_eq!(RenameRule::CamelCase.apply("max_pods"), "maxPods");
        assert_eq!(RenameRule::CamelCase.apply("kube_api_server"), "kubeApiServer");
        assert_eq!(RenameRule::KebabCase.apply("max_pods"), "max-pods");
        assert_eq!(RenameRule::PascalCase.apply("max_pods"), "MaxPods");
        assert_eq!(RenameRule::ScreamingSnakeCase.apply("ControlPlane"), "CONTROL_PLANE");
        assert_eq!(RenameRule::LowerCase.apply("ControlPlane"), "controlplane");
    }

    #[test]
    fn serde_options_are_skipped() {
        let attrs: Vec<syn::Attribute> = vec![
            parse_quote!(#[serde(default, skip_serializing_if = "Option::is_none", rename = "maxPods")]),
            parse_quote!(#[reflect(immutable)]),
        ];
        let parsed = FieldAttributes::parse_attrs(&attrs).unwrap();
        assert_eq!(parsed.serde_rename.as_deref(), Some("maxPods"));
        assert!(parsed.immutable.is_some());
        assert!(parsed.rename.is_none());
    }

    #[test]
    fn reflect_rename_all_wins_over_serde() {
        let attrs: Vec<syn::Attribute> = vec![
            parse_quote!(#[serde(rename_all = "camelCase", deny_unknown_fields)]),
            parse_quote!(#[reflect(rename_all = "kebab-case", opaque)]),
        ];
        let parsed = TypeAttributes::parse_attrs(&attrs).unwrap();
        assert_eq!(parsed.rename_rule(), Some(RenameRule::KebabCase));
        assert!(parsed.opaque.is_some());
    }

    #[test]
    fn unknown_reflect_attributes_are_errors() {
        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[reflect(flatten)])];
        assert!(FieldAttributes::parse_attrs(&attrs).is_err());

        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[reflect(rename_all = "Title Case")])];
        assert!(TypeAttributes::parse_attrs(&attrs).is_err());

        let attrs: Vec<syn::Attribute> = vec![parse_quote!(#[reflect(skip, skip)])];
        assert!(FieldAttributes::parse_attrs(&attrs).is_err());
    }
}
