//! Code generator entry point.

use crate::config::GeneratorConfig;
use crate::error::CodegenError;
use crate::rust::StructGenerator;
use crate::synth::{Synthesis, Synthesizer};
use oasgen_schema::{Document, SchemaCollection};

/// Rendered source together with the synthesis it was rendered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedCode {
    /// Formatted Rust source.
    pub source: String,
    /// Declarations and skipped fields.
    pub synthesis: Synthesis,
}

/// Generates Rust structs from OpenAPI component schemas.
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Creates a generator with the given configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Synthesizes declarations for a schema collection without rendering.
    ///
    /// # Errors
    /// Returns `CodegenError::DepthExceeded` if nesting exceeds the limit.
    pub fn synthesize(&self, schemas: &SchemaCollection) -> Result<Synthesis, CodegenError> {
        Synthesizer::new(&self.config).synthesize(schemas)
    }

    /// Synthesizes and renders the component schemas of a document.
    ///
    /// # Errors
    /// Returns `CodegenError` if synthesis or rendering fails.
    pub fn generate(&self, document: &Document) -> Result<GeneratedCode, CodegenError> {
        let synthesis = self.synthesize(document.schemas())?;
        let source = StructGenerator::new(&self.config).generate(&synthesis.declarations)?;

        tracing::info!(
            "Generated {} structs from {} schemas ({} skipped)",
            synthesis.declarations.len(),
            document.schemas().len(),
            synthesis.skipped.len()
        );

        Ok(GeneratedCode { source, synthesis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeyOrder;
    use oasgen_schema::parse_document;

    const DOC: &str = r#"
openapi: 3.0.0
components:
  schemas:
    Pet:
      type: object
      properties:
        name:
          type: string
        owner:
          type: object
          properties:
            id:
              type: integer
        weight:
          type: number
"#;

    #[test]
    fn test_generator_default() {
        let generator = Generator::default();
        assert_eq!(generator.config().key_order, KeyOrder::Sorted);
    }

    #[test]
    fn test_generate_document() {
        let doc = parse_document(DOC).expect("Failed to parse");
        let generated = Generator::default()
            .generate(&doc)
            .expect("Failed to generate");

        assert_eq!(generated.synthesis.names(), vec!["Owner", "Pet"]);
        assert_eq!(generated.synthesis.skipped.len(), 1);
        assert_eq!(generated.synthesis.skipped[0].path, "Pet.weight");

        let owner_at = generated
            .source
            .find("pub struct Owner")
            .expect("Owner rendered");
        let pet_at = generated.source.find("pub struct Pet").expect("Pet rendered");
        assert!(owner_at < pet_at);
        assert!(generated.source.contains("pub owner: Owner,"));
        assert!(!generated.source.contains("weight"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let doc = parse_document(DOC).expect("Failed to parse");
        let generator = Generator::default();

        let first = generator.generate(&doc).expect("Failed to generate");
        let second = generator.generate(&doc).expect("Failed to generate");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generate_empty_document() {
        let doc = parse_document("openapi: 3.0.0\n").expect("Failed to parse");
        let generated = Generator::default()
            .generate(&doc)
            .expect("Failed to generate");

        assert!(generated.synthesis.declarations.is_empty());
        assert_eq!(
            generated.source,
            "// THIS CODE WAS AUTO GENERATED; DO NOT EDIT.\n"
        );
    }
}
