use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields};

use super::{EnumVariant, FieldAttributes, ReflectEnum, ReflectMeta, ReflectStruct};
use super::{StructField, TypeAttributes, VariantAttributes};

/// The derive input, classified by the kind of impl to generate.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    UnitEnum(ReflectEnum<'a>),
    Opaque(ReflectMeta<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new(
                input.generics.span(),
                "`Reflect` cannot be derived for generic types",
            ));
        }

        if let Some(span) = attrs.from_str
            && attrs.opaque.is_none()
            && !matches!(input.data, Data::Enum(_))
        {
            return Err(syn::Error::new(
                span,
                "`from_str` requires `#[reflect(opaque)]` on structs",
            ));
        }

        let rule = attrs.rename_rule();
        let is_opaque = attrs.opaque.is_some();
        let meta = ReflectMeta::new(attrs, &input.ident);

        if is_opaque {
            return Ok(Self::Opaque(meta));
        }

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => {
                    let fields = named
                        .named
                        .iter()
                        .map(|field| {
                            let attrs = FieldAttributes::parse_attrs(&field.attrs)?;
                            Ok(StructField::new(field, attrs, rule))
                        })
                        .collect::<syn::Result<Vec<_>>>()?;
                    check_unique_names(fields.iter().filter(|f| f.attrs.skip.is_none()).map(
                        |f| (f.name.as_str(), f.data.span()),
                    ))?;
                    Ok(Self::Struct(ReflectStruct { meta, fields }))
                }
                Fields::Unnamed(_) | Fields::Unit => Err(syn::Error::new(
                    input.ident.span(),
                    "`Reflect` needs named fields here; use `#[reflect(opaque)]` for leaf values",
                )),
            },
            Data::Enum(data) => {
                if meta.attrs().from_str.is_some() {
                    return Ok(Self::Opaque(meta));
                }
                let variants = data
                    .variants
                    .iter()
                    .map(|variant| {
                        if !matches!(variant.fields, Fields::Unit) {
                            return Err(syn::Error::new(
                                variant.span(),
                                "only unit variants are supported; use `#[reflect(opaque)]` for data-carrying enums",
                            ));
                        }
                        let attrs = VariantAttributes::parse_attrs(&variant.attrs)?;
                        Ok(EnumVariant::new(variant, attrs, rule))
                    })
                    .collect::<syn::Result<Vec<_>>>()?;
                check_unique_names(variants.iter().map(|v| (v.name.as_str(), v.data.span())))?;
                Ok(Self::UnitEnum(ReflectEnum { meta, variants }))
            }
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}

fn check_unique_names<'n>(
    names: impl Iterator<Item = (&'n str, proc_macro2::Span)>,
) -> syn::Result<()> {
    let mut seen = std::collections::BTreeSet::new();
    for (name, span) in names {
        if !seen.insert(name) {
            return Err(syn::Error::new(
                span,
                format!("external name `{name}` is used twice"),
            ));
        }
    }
    Ok(())
}
