#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Generated code names items through `::fw_reflect`, which must also resolve
// inside this crate and its doc tests.
extern crate self as fw_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;

pub mod coerce;
pub mod impls;
pub mod info;
pub mod mutate;
pub mod ops;
pub mod path;
pub mod registry;
pub mod walk;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use fw_reflect_derive as derive;
pub use mutate::{FieldError, FieldMutator, set_string, unset};
pub use path::FieldPath;
pub use reflection::Reflect;
