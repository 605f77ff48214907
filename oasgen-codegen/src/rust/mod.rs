//! Rust code generation modules.

pub mod structs;

pub use structs::StructGenerator;

use crate::CodegenError;
use proc_macro2::TokenStream;

/// Parses generated tokens as a Rust file and pretty-prints them.
pub(crate) fn format_rust(tokens: TokenStream) -> Result<String, CodegenError> {
    let file = syn::parse2::<syn::File>(tokens)
        .map_err(|e| CodegenError::render(format!("generated invalid Rust code: {e}")))?;
    Ok(prettyplease::unparse(&file))
}
