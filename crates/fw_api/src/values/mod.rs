//! Leaf value types with a text form.

// -----------------------------------------------------------------------------
// Modules

mod duration;
mod env_var;
mod int_or_string;

// -----------------------------------------------------------------------------
// Exports

pub use duration::{Duration, ParseDurationError};
pub use env_var::EnvVar;
pub use int_or_string::IntOrString;
