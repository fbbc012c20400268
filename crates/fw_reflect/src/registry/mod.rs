//! Text parsers keyed by type.
//!
//! ## Menu
//!
//! - [`FromText`]: build a value from its textual form.
//! - [`TextParser`], [`ParseFn`]: a type-erased [`FromText`].
//! - [`ParserRegistry`]: `TypeId` to [`TextParser`] lookup used by
//!   [`coerce_text`](crate::coerce::coerce_text).
//! - [`ConversionError`]: the text does not denote a value of the type.

// -----------------------------------------------------------------------------
// Modules

mod builtin;
mod error;
mod from_text;
mod parser_registry;

// -----------------------------------------------------------------------------
// Exports

pub use error::ConversionError;
pub use from_text::{FromText, ParseFn, TextParser};
pub use parser_registry::ParserRegistry;
