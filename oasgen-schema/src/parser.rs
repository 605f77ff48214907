//! OpenAPI document parser.
//!
//! Documents are decoded with `serde_yaml`; JSON documents are valid YAML and
//! go through the same path.

use crate::document::Document;
use crate::error::ParseError;
use serde_yaml::Value;
use std::path::Path;

/// Parses an OpenAPI document from a YAML or JSON string.
///
/// # Arguments
/// * `yaml` - Document content
///
/// # Returns
/// Decoded document or parse error.
///
/// # Errors
/// Returns `ParseError` if the content is not valid YAML, the root is not a
/// mapping, or the `openapi` version field is missing.
pub fn parse_document(yaml: &str) -> Result<Document, ParseError> {
    let root: Value = serde_yaml::from_str(yaml)?;
    match root {
        Value::Mapping(_) => {}
        Value::Null => return Err(ParseError::invalid_structure("document is empty")),
        _ => {
            return Err(ParseError::invalid_structure(
                "document root must be a mapping",
            ));
        }
    }

    let document: Document = serde_yaml::from_value(root)?;
    if document.version.trim().is_empty() {
        return Err(ParseError::MissingVersion);
    }

    tracing::debug!(
        "Parsed OpenAPI {} document with {} component schemas",
        document.version,
        document.schemas().len()
    );

    Ok(document)
}

/// Parses an OpenAPI document from a file.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_document_file(path: &Path) -> Result<Document, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_document(&content)
}
