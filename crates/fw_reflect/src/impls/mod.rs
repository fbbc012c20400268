//! Built-in reflection impls and the static storage used by `Typed` impls.
//!
//! ## Menu
//!
//! - [`NonGenericTypeInfoCell`], [`GenericTypeInfoCell`], [`GenericTypePathCell`]
//! - Opaque: `bool`, `char`, integers, floats, `String`.
//! - Optional: `Option<T>`.
//! - List: `Vec<T>`.
//! - Map: `BTreeMap<K, V>`, `HashMap<K, V, S>`.

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod map;
mod option;
mod primitives;
mod vec;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeCell, GenericTypeInfoCell, GenericTypePathCell};
pub use cell::{NonGenericTypeCell, NonGenericTypeInfoCell};
