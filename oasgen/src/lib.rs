//! # oasgen
//!
//! Generate Rust structs from the component schemas of an OpenAPI document.
//!
//! ## Quick Start
//!
//! ```ignore
//! use oasgen::prelude::*;
//!
//! let document = parse_document(&std::fs::read_to_string("api.yaml")?)?;
//! let generated = Generator::new(GeneratorConfig::default()).generate(&document)?;
//! println!("{}", generated.source);
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Document model, parsing and validation
//! - [`codegen`] - Type inference, struct synthesis and rendering
//! - [`cli`] - Command-line front end

pub mod cli;
pub mod prelude;

/// Document model, parsing and validation.
pub mod schema {
    pub use oasgen_schema::*;
}

/// Struct synthesis and rendering.
pub mod codegen {
    pub use oasgen_codegen::*;
}

pub use oasgen_codegen::{Generator, GeneratorConfig, generate_from_file, generate_from_yaml};
pub use oasgen_schema::{Document, parse_document, parse_document_file};
