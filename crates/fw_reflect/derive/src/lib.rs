//! Derive macro of `fw_reflect`.
//!
//! See [`Reflect`](derive_full_reflect).
#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static SERDE_ATTRIBUTE_NAME: &str = "serde";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// # Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed` and `Reflect`, plus
/// `Struct` for structs with named fields.
///
/// The type must implement `Default`: that is the value `unset` restores.
/// Generic types are not supported.
///
/// ## Shapes
///
/// - `struct T { .. }`: a struct whose fields are addressable by path.
///   Every field type must implement `Reflect`.
/// - `enum T { A, B }`: a leaf value parsed from its variant names.
/// - `#[reflect(opaque)]` on any type: a leaf value. Its text form comes
///   from a registered `FromText` parser, or from `FromStr` with
///   `#[reflect(from_str)]`.
///
/// ## External names
///
/// Field names in paths default to the lower camel case of the
/// identifier, `max_pods` -> `maxPods`. In order of precedence:
///
/// ```rust, ignore
/// #[derive(Reflect, Default, Serialize)]
/// #[serde(rename_all = "camelCase")]     // 3. used when no reflect rename_all
/// #[reflect(rename_all = "snake_case")]  // 2.
/// struct Spec {
///     #[reflect(rename = "kubeAPIServer")] // 1.
///     kube_api_server: Option<KubeApiServer>,
///     #[serde(rename = "ssh_key")]        // 1., after reflect rename
///     ssh_key_name: String,
/// }
/// ```
///
/// Supported rules: `camelCase`, `snake_case`, `kebab-case`, `PascalCase`,
/// `SCREAMING_SNAKE_CASE`, `SCREAMING-KEBAB-CASE`, `lowercase`,
/// `UPPERCASE`. Enum variants keep their identifier unless renamed.
///
/// ## Field attributes
///
/// - `#[reflect(rename = "name")]`: external name.
/// - `#[reflect(immutable)]`: the field, and everything below it, cannot be
///   set or unset through a path.
/// - `#[reflect(skip)]`: not reflected at all.
///
/// ## Registration
///
/// `#[reflect(auto_register)]` submits the type's `FromText` parser to the
/// registries built with `ParserRegistry::auto_register`. Requires the
/// `auto_register` feature; without it the attribute has no effect.
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// #[reflect(opaque, auto_register)]
/// pub struct Duration(core::time::Duration);
///
/// impl FromText for Duration { /* .. */ }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_full_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}
