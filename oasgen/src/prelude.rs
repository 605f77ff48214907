//! Prelude module for convenient imports.
//!
//! ```ignore
//! use oasgen::prelude::*;
//! ```

// Schema types
pub use oasgen_schema::{
    Document, ParseError, SchemaCollection, SchemaDefinition, SchemaIssue, SchemaKind,
    parse_document, parse_document_file, validate_document,
};

// Codegen types
pub use oasgen_codegen::{
    CodegenError, DeclarationAccumulator, FieldSpec, GeneratedCode, Generator, GeneratorConfig,
    KeyOrder, Scalar, SkippedField, Synthesis, Synthesizer, TypeDeclaration, TypeRef,
};
