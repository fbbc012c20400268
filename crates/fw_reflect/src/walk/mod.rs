//! Recursive traversal of reflected values and their type info.
//!
//! ## Menu
//!
//! - [`walk`]: visit every struct field of a live value with its dotted path.
//! - [`Visitor`], [`VisitedNode`], [`Walk`]: the visitor protocol.
//! - [`resolve`]: look a [`FieldPath`](crate::FieldPath) up in a schema.
//! - [`schema_paths`]: list every addressable path of a schema.

// -----------------------------------------------------------------------------
// Modules

mod resolve;
mod schema;
mod visitor;
mod walker;

// -----------------------------------------------------------------------------
// Exports

pub use resolve::{Resolution, resolve};
pub use schema::schema_paths;
pub use visitor::{VisitedNode, Visitor, Walk};
pub use walker::walk;
