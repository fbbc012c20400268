//! Code generation.

// -----------------------------------------------------------------------------
// Modules

mod auto_register;
mod common;
mod enum_kind;
mod match_reflect;
mod opaque_kind;
mod struct_kind;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use auto_register::get_auto_register_impl;
pub(crate) use common::{impl_trait_reflect, impl_trait_type_path, impl_trait_typed};
pub(crate) use enum_kind::impl_unit_enum;
pub(crate) use match_reflect::match_reflect_impls;
pub(crate) use opaque_kind::impl_opaque;
pub(crate) use struct_kind::impl_struct;
