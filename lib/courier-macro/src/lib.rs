//! Procedural macros for the courier declarative HTTP client.
//!
//! `#[derive(Params)]` turns a struct into a field-descriptor table: each
//! field becomes one row carrying its tag metadata and value, consumed at
//! runtime by courier's encoder subsystem.
//!
//! # Example
//!
//! ```ignore
//! use courier::Params;
//!
//! #[derive(Params)]
//! struct Search {
//!     #[param(rename = "q")]
//!     query: String,
//!     #[param(omitempty)]
//!     page: u32,
//!     #[param(skip)]
//!     session: String,
//! }
//! ```

use proc_macro::TokenStream;

mod params_derive;

/// Derives the `Params` field-descriptor table for a struct.
///
/// Field attributes under `#[param(...)]`:
/// - `rename = "name"` - wire-name override
/// - `omitempty` - skip the field when its value is the type's zero value
/// - `squash` - flatten a nested struct's fields into the parent output
/// - `recursive` - encode a nested struct as a nested value
/// - `skip` - exclude the field from encoding entirely
///
/// Struct attribute: `#[param(rename_all = "...")]` applies a case
/// convention to every field without an explicit rename.
#[proc_macro_derive(Params, attributes(param))]
pub fn derive_params(input: TokenStream) -> TokenStream {
    params_derive::expand_params_derive(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
