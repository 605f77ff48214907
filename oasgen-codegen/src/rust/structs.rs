//! Struct code generation.

use super::format_rust;
use crate::CodegenError;
use crate::config::GeneratorConfig;
use crate::declaration::{FieldSpec, Scalar, TypeDeclaration, TypeRef};
use crate::naming::{is_keyword, is_non_raw_keyword};
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

/// Generator for struct definitions.
pub struct StructGenerator<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new struct generator.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates formatted source for all declarations, header included.
    ///
    /// # Errors
    /// Returns `CodegenError::Render` if a derive path or identifier is not
    /// valid Rust.
    pub fn generate(&self, declarations: &[TypeDeclaration]) -> Result<String, CodegenError> {
        let derives = self.derive_attr()?;
        let structs = declarations
            .iter()
            .map(|decl| self.generate_struct(decl, &derives))
            .collect::<Result<Vec<_>, _>>()?;

        let body = format_rust(quote! { #(#structs)* })?;

        let mut output = String::new();
        for line in self.config.header.lines() {
            output.push_str("// ");
            output.push_str(line);
            output.push('\n');
        }
        if !body.is_empty() {
            if !output.is_empty() {
                output.push('\n');
            }
            output.push_str(&body);
        }
        Ok(output)
    }

    /// Builds the `#[derive(...)]` attribute shared by every struct.
    fn derive_attr(&self) -> Result<TokenStream, CodegenError> {
        if self.config.derives.is_empty() {
            return Ok(TokenStream::new());
        }

        let paths = self
            .config
            .derives
            .iter()
            .map(|d| {
                syn::parse_str::<syn::Path>(d)
                    .map_err(|e| CodegenError::render(format!("invalid derive '{d}': {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quote! { #[derive(#(#paths),*)] })
    }

    /// Generates one struct.
    fn generate_struct(
        &self,
        decl: &TypeDeclaration,
        derives: &TokenStream,
    ) -> Result<TokenStream, CodegenError> {
        let name = type_ident(&decl.name)?;
        let docs = doc_attrs(decl.description.as_deref());
        let fields = decl
            .fields
            .iter()
            .map(|field| self.generate_field(field))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(quote! {
            #(#docs)*
            #derives
            pub struct #name {
                #(#fields)*
            }
        })
    }

    /// Generates one struct field, with a serde rename when serde is derived.
    fn generate_field(&self, field: &FieldSpec) -> Result<TokenStream, CodegenError> {
        let name = field_ident(&field.name)?;
        let ty = type_tokens(&field.type_ref)?;
        let docs = doc_attrs(field.description.as_deref());
        let rename = self.config.uses_serde().then(|| {
            let key = &field.serialization_key;
            quote! { #[serde(rename = #key)] }
        });

        Ok(quote! {
            #(#docs)*
            #rename
            pub #name: #ty,
        })
    }
}

/// Converts a type reference to Rust type tokens.
pub fn type_tokens(type_ref: &TypeRef) -> Result<TokenStream, CodegenError> {
    Ok(match type_ref {
        TypeRef::Scalar(Scalar::String) => quote! { String },
        TypeRef::Scalar(Scalar::Integer) => quote! { i64 },
        TypeRef::Scalar(Scalar::Boolean) => quote! { bool },
        TypeRef::Named(name) => {
            let ident = type_ident(name)?;
            quote! { #ident }
        }
        TypeRef::Sequence(inner) => {
            let inner = type_tokens(inner)?;
            quote! { Vec<#inner> }
        }
    })
}

fn type_ident(name: &str) -> Result<Ident, CodegenError> {
    syn::parse_str::<Ident>(name)
        .map_err(|_| CodegenError::render(format!("invalid type name '{name}'")))
}

/// Keywords become raw identifiers (`r#type`).
fn field_ident(name: &str) -> Result<Ident, CodegenError> {
    if is_keyword(name) && !is_non_raw_keyword(name) {
        return Ok(Ident::new_raw(name, Span::call_site()));
    }
    syn::parse_str::<Ident>(name)
        .map_err(|_| CodegenError::render(format!("invalid field name '{name}'")))
}

fn doc_attrs(description: Option<&str>) -> Vec<TokenStream> {
    description
        .into_iter()
        .flat_map(str::lines)
        .map(|line| {
            let text = format!(" {}", line.trim_end());
            quote! { #[doc = #text] }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, type_ref: TypeRef, key: &str) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            type_ref,
            serialization_key: key.to_string(),
            description: None,
        }
    }

    fn pet() -> TypeDeclaration {
        TypeDeclaration {
            name: "Pet".to_string(),
            fields: vec![
                field("name", TypeRef::Scalar(Scalar::String), "name"),
                field(
                    "tags",
                    TypeRef::sequence(TypeRef::Scalar(Scalar::String)),
                    "tags",
                ),
                field("owner", TypeRef::Named("Owner".to_string()), "owner"),
                field("is_good", TypeRef::Scalar(Scalar::Boolean), "isGood"),
                field("age", TypeRef::Scalar(Scalar::Integer), "age"),
            ],
            description: Some("A pet.".to_string()),
        }
    }

    #[test]
    fn test_generate_struct() {
        let config = GeneratorConfig::default();
        let output = StructGenerator::new(&config)
            .generate(&[pet()])
            .expect("Failed to render");

        assert!(output.starts_with("// THIS CODE WAS AUTO GENERATED; DO NOT EDIT.\n"));
        assert!(output.contains("/// A pet."));
        assert!(output.contains(
            "#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]"
        ));
        assert!(output.contains("pub struct Pet {"));
        assert!(output.contains("pub name: String,"));
        assert!(output.contains("pub tags: Vec<String>,"));
        assert!(output.contains("pub owner: Owner,"));
        assert!(output.contains("pub is_good: bool,"));
        assert!(output.contains("pub age: i64,"));
        assert!(output.contains("#[serde(rename = \"isGood\")]"));
    }

    #[test]
    fn test_generate_without_serde() {
        let config = GeneratorConfig::default().with_derives(["Debug"]);
        let output = StructGenerator::new(&config)
            .generate(&[pet()])
            .expect("Failed to render");

        assert!(output.contains("#[derive(Debug)]"));
        assert!(!output.contains("serde"));
    }

    #[test]
    fn test_generate_without_derives() {
        let config = GeneratorConfig::default().with_derives(Vec::<String>::new());
        let output = StructGenerator::new(&config)
            .generate(&[pet()])
            .expect("Failed to render");

        assert!(!output.contains("derive"));
        assert!(output.contains("pub struct Pet {"));
    }

    #[test]
    fn test_keyword_field_is_raw() {
        let decl = TypeDeclaration {
            name: "Token".to_string(),
            fields: vec![field("type", TypeRef::Scalar(Scalar::String), "type")],
            description: None,
        };
        let config = GeneratorConfig::default();
        let output = StructGenerator::new(&config)
            .generate(&[decl])
            .expect("Failed to render");

        assert!(output.contains("pub r#type: String,"));
        assert!(output.contains("#[serde(rename = \"type\")]"));
    }

    #[test]
    fn test_empty_struct() {
        let decl = TypeDeclaration {
            name: "Empty".to_string(),
            fields: Vec::new(),
            description: None,
        };
        let config = GeneratorConfig::default();
        let output = StructGenerator::new(&config)
            .generate(&[decl])
            .expect("Failed to render");

        assert!(output.contains("pub struct Empty {}"));
    }

    #[test]
    fn test_no_declarations() {
        let config = GeneratorConfig::default().with_header("generated");
        let output = StructGenerator::new(&config)
            .generate(&[])
            .expect("Failed to render");

        assert_eq!(output, "// generated\n");
    }

    #[test]
    fn test_invalid_derive() {
        let config = GeneratorConfig::default().with_derives(["not a path"]);
        let result = StructGenerator::new(&config).generate(&[pet()]);

        assert!(matches!(result, Err(CodegenError::Render { .. })));
    }

    #[test]
    fn test_invalid_type_name() {
        let decl = TypeDeclaration {
            name: "two words".to_string(),
            fields: Vec::new(),
            description: None,
        };
        let config = GeneratorConfig::default();
        let result = StructGenerator::new(&config).generate(&[decl]);

        assert!(matches!(result, Err(CodegenError::Render { .. })));
    }

    #[test]
    fn test_type_tokens() {
        let ty = type_tokens(&TypeRef::sequence(TypeRef::Named("Tag".to_string())))
            .expect("valid type");
        assert_eq!(ty.to_string(), "Vec < Tag >");
    }
}
