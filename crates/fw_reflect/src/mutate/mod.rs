//! Setting and unsetting a single field addressed by a dotted path.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod mutator;
mod plan;

// -----------------------------------------------------------------------------
// Exports

pub use error::{Action, FieldError};
pub use mutator::{FieldMutator, set_string, unset};
