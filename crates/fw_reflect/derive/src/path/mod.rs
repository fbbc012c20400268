//! Paths of `fw_reflect` items used by generated code.
//!
//! Keeping them here limits the changes needed when `fw_reflect` moves
//! things around.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `fw_reflect` crate, as seen by the crate being
/// compiled.
///
/// 1. Crates depending on `fw_reflect` get `::fw_reflect`.
/// 2. Crates depending on `fieldwalk` get `::fieldwalk::reflect`.
/// 3. Otherwise `::fw_reflect`, which may not resolve.
///
/// Reads the caller's Cargo.toml; call once per derive.
pub(crate) fn fw_reflect() -> syn::Path {
    fw_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fw_reflect"))
}

// -----------------------------------------------------------------------------
// Internal API

#[inline(always)]
pub(crate) fn macro_exports_(fw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_reflect_path::__macro_exports
    }
}

#[inline(always)]
pub(crate) fn macro_utils_(fw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_reflect_path::__macro_exports::macro_utils
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(fw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_reflect_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn reflect_(fw_reflect_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_reflect_path::Reflect
    }
}
