//! Kind-specific views of reflected values.
//!
//! ## Menu
//!
//! - [`ReflectRef`], [`ReflectMut`]: a value split by [`ReflectKind`].
//! - [`Struct`]: named fields.
//! - [`Optional`]: a value that may be absent.
//! - [`List`]: a growable sequence.
//! - [`Map`]: values keyed by an opaque key.
//!
//! [`ReflectKind`]: crate::info::ReflectKind

// -----------------------------------------------------------------------------
// Modules

mod kind;
mod list_ops;
mod map_ops;
mod optional_ops;
mod struct_ops;

// -----------------------------------------------------------------------------
// Exports

pub use kind::{ReflectMut, ReflectRef};
pub use list_ops::List;
pub use map_ops::Map;
pub use optional_ops::Optional;
pub use struct_ops::Struct;
