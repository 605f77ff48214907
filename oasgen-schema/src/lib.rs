//! # oasgen Schema
//!
//! OpenAPI component schema model and parser.
//!
//! This crate provides:
//! - The in-memory document model (`Document`, `SchemaDefinition`, ...)
//! - YAML/JSON document parsing
//! - Informational validation of constructs the generator ignores

pub mod document;
pub mod error;
pub mod parser;
pub mod validation;

pub use document::{
    AdditionalProperties, Components, Document, ExclusiveBound, SchemaCollection,
    SchemaDefinition, SchemaKind,
};
pub use error::ParseError;
pub use parser::{parse_document, parse_document_file};
pub use validation::{IssueKind, SchemaIssue, validate_document};
