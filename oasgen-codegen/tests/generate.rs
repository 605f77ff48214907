use oasgen_codegen::{
    CodegenError, Generator, GeneratorConfig, KeyOrder, Scalar, TypeRef, generate_from_file,
    generate_from_yaml,
};
use oasgen_schema::parse_document;
use std::io::Write;

const PETSTORE: &str = r##"
openapi: 3.0.3
info:
  title: Petstore
  version: 1.0.0
components:
  schemas:
    Pet:
      type: object
      description: A pet for sale.
      required: [name]
      properties:
        name:
          type: string
          description: Display name.
        tags:
          type: array
          items:
            type: string
        scores:
          type: array
          items:
            type: integer
        owner:
          type: object
          properties:
            id:
              type: integer
            verified:
              type: boolean
        vaccinations:
          type: array
          items:
            type: object
            properties:
              vaccine:
                type: string
              date:
                type: string
                format: date
        price:
          type: number
        category:
          $ref: "#/components/schemas/Category"
        type:
          type: string
    Category:
      type: object
      properties:
        id:
          type: integer
        name:
          type: string
    Status:
      type: string
      enum: [available, pending, sold]
"##;

#[test]
fn test_petstore_declarations() {
    let doc = parse_document(PETSTORE).expect("Failed to parse");
    let generated = Generator::default()
        .generate(&doc)
        .expect("Failed to generate");
    let synthesis = &generated.synthesis;

    assert_eq!(
        synthesis.names(),
        vec!["Category", "Owner", "Vaccinations", "Pet"]
    );

    let pet = synthesis.declaration("Pet").expect("Pet declared");
    assert_eq!(pet.description.as_deref(), Some("A pet for sale."));
    assert_eq!(
        pet.field("owner").expect("owner").type_ref,
        TypeRef::Named("Owner".to_string())
    );
    assert_eq!(
        pet.field("vaccinations").expect("vaccinations").type_ref,
        TypeRef::sequence(TypeRef::Named("Vaccinations".to_string()))
    );
    assert_eq!(
        pet.field("scores").expect("scores").type_ref,
        TypeRef::sequence(TypeRef::Scalar(Scalar::Integer))
    );
    assert!(pet.field("price").is_none());
    assert!(pet.field("category").is_none());

    let skipped: Vec<String> = synthesis.skipped.iter().map(ToString::to_string).collect();
    assert_eq!(
        skipped,
        vec![
            "Pet.category: unsupported kind 'unset'".to_string(),
            "Pet.price: unsupported kind 'number'".to_string(),
            "Status: top-level schema of kind 'string'".to_string(),
        ]
    );
}

#[test]
fn test_petstore_source() {
    let source = generate_from_yaml(PETSTORE).expect("Failed to generate");

    assert!(source.starts_with("// THIS CODE WAS AUTO GENERATED; DO NOT EDIT."));
    assert!(source.contains("pub struct Pet {"));
    assert!(source.contains("/// Display name."));
    assert!(source.contains("pub vaccinations: Vec<Vaccinations>,"));
    assert!(source.contains("pub r#type: String,"));
    assert_eq!(source.matches("pub struct ").count(), 4);

    // rendered output parses back as Rust
    syn::parse_file(&source).expect("generated source is valid Rust");
}

#[test]
fn test_document_order_config() {
    let doc = parse_document(PETSTORE).expect("Failed to parse");
    let config = GeneratorConfig::default().with_key_order(KeyOrder::Document);
    let generated = Generator::new(config)
        .generate(&doc)
        .expect("Failed to generate");

    assert_eq!(
        generated.synthesis.names(),
        vec!["Owner", "Vaccinations", "Pet", "Category"]
    );
}

#[test]
fn test_generate_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(PETSTORE.as_bytes())
        .expect("Failed to write temp file");

    let from_file = generate_from_file(file.path()).expect("Failed to generate");
    let from_str = generate_from_yaml(PETSTORE).expect("Failed to generate");
    assert_eq!(from_file, from_str);
}

#[test]
fn test_generate_from_invalid_document() {
    let result = generate_from_yaml("info: {}\n");
    assert!(matches!(result, Err(CodegenError::Parse(_))));
}
