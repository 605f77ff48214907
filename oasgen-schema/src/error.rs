//! Error types for document parsing.

use thiserror::Error;

/// Error type for document parsing operations.
#[derive(Debug, Error)]
pub enum ParseError {
    /// YAML (or JSON) decoding error.
    #[error("YAML decoding error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The `openapi` version field is absent or empty.
    #[error("document has no 'openapi' version field")]
    MissingVersion,

    /// Invalid document structure.
    #[error("invalid document structure: {message}")]
    InvalidStructure {
        /// Error message.
        message: String,
    },
}

impl ParseError {
    /// Creates an invalid structure error.
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
        }
    }
}
