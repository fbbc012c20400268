//! Dotted field paths such as `spec.kubelet.maxPods`.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod field_path;

// -----------------------------------------------------------------------------
// Exports

pub use error::PathParseError;
pub use field_path::FieldPath;
