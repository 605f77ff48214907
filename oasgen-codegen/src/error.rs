//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Document parsing error.
    #[error("document parse error: {0}")]
    Parse(#[from] oasgen_schema::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema nesting deeper than the configured limit.
    #[error("schema nesting exceeds depth limit {limit} at '{path}'")]
    DepthExceeded {
        /// Path of the node that crossed the limit.
        path: String,
        /// Configured limit.
        limit: usize,
    },

    /// Rendered declarations are not valid Rust.
    #[error("render error: {message}")]
    Render {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a render error with the given message.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render {
            message: message.into(),
        }
    }
}
