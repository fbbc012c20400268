//! Parsing of the derive input into the data the generators need.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_derive;
mod reflect_enum;
mod reflect_meta;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, RenameRule, TypeAttributes, VariantAttributes};
pub(crate) use reflect_derive::ReflectDerive;
pub(crate) use reflect_enum::{EnumVariant, ReflectEnum};
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::{ReflectStruct, StructField};
