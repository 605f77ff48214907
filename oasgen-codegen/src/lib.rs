//! # oasgen Codegen
//!
//! Rust struct generation from OpenAPI component schemas.
//!
//! This crate provides:
//! - Field type inference from schema kinds
//! - Recursive synthesis of nested objects into sibling structs
//! - Collision-free, deterministic type naming
//! - Rendering to formatted Rust with serde field renames

pub mod config;
pub mod declaration;
pub mod error;
pub mod generator;
pub mod inference;
pub mod naming;
pub mod rust;
pub mod synth;

pub use config::{GeneratorConfig, KeyOrder};
pub use declaration::{FieldSpec, Scalar, TypeDeclaration, TypeRef};
pub use error::CodegenError;
pub use generator::{GeneratedCode, Generator};
pub use synth::{DeclarationAccumulator, SkipReason, SkippedField, Synthesis, Synthesizer};

/// Generates Rust code from an OpenAPI document string.
///
/// # Arguments
/// * `yaml` - OpenAPI document content (YAML or JSON)
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_yaml(yaml: &str) -> Result<String, CodegenError> {
    let document = oasgen_schema::parse_document(yaml)?;
    let generator = Generator::default();
    Ok(generator.generate(&document)?.source)
}

/// Generates Rust code from an OpenAPI document file.
///
/// # Arguments
/// * `path` - Path to the OpenAPI document
///
/// # Returns
/// Generated Rust code as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let yaml = std::fs::read_to_string(path)?;
    generate_from_yaml(&yaml)
}
