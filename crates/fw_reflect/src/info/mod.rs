//! Static descriptions of reflected types.
//!
//! ## Menu
//!
//! - [`TypePath`], [`Type`]: names and identity of a type.
//! - [`Typed`]: static accessor to a type's [`TypeInfo`].
//! - [`TypeInfo`]: one of [`StructInfo`], [`OptionalInfo`], [`ListInfo`],
//!   [`MapInfo`] or [`OpaqueInfo`].
//! - [`NamedField`]: a struct member, with its external name and mutability.
//! - [`ReflectKind`]: the shape of a reflected value.

// -----------------------------------------------------------------------------
// Modules

mod field_info;
mod kind;
mod list_info;
mod map_info;
mod opaque_info;
mod optional_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Exports

pub use field_info::NamedField;
pub use kind::{ReflectKind, ReflectKindError};
pub use list_info::ListInfo;
pub use map_info::MapInfo;
pub use opaque_info::OpaqueInfo;
pub use optional_info::OptionalInfo;
pub use struct_info::StructInfo;
pub use type_info::{DefaultFn, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
