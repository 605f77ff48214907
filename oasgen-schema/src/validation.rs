//! Document validation utilities.
//!
//! Generation never fails on the constructs reported here; they are surfaced
//! so callers can see which parts of a document the generator ignores.

use crate::document::{AdditionalProperties, Document, SchemaDefinition};
use std::fmt;

/// Kind of a validation issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueKind {
    /// A composition keyword (`$ref`, `allOf`, ...) that is not resolved.
    UnsupportedKeyword(&'static str),
    /// An `array` schema without `items`.
    MissingItems,
    /// `properties` on a schema that is not an `object`.
    IgnoredProperties,
    /// `items` on a schema that is not an `array`.
    IgnoredItems,
}

/// Informational issue found while validating a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaIssue {
    /// Dotted path of the offending node (`Pet.owner.items`).
    pub path: String,
    /// What was found.
    pub kind: IssueKind,
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            IssueKind::UnsupportedKeyword(keyword) => {
                write!(f, "{}: '{}' is not resolved and is ignored", self.path, keyword)
            }
            IssueKind::MissingItems => write!(f, "{}: array schema has no 'items'", self.path),
            IssueKind::IgnoredProperties => write!(
                f,
                "{}: 'properties' is ignored on a non-object schema",
                self.path
            ),
            IssueKind::IgnoredItems => {
                write!(f, "{}: 'items' is ignored on a non-array schema", self.path)
            }
        }
    }
}

/// Validates a document and returns every issue found.
///
/// # Arguments
/// * `document` - The document to validate
///
/// # Returns
/// Issues in document order; empty if nothing is ignored.
#[must_use]
pub fn validate_document(document: &Document) -> Vec<SchemaIssue> {
    let mut issues = Vec::new();
    for (name, schema) in document.schemas() {
        validate_schema(name, schema, &mut issues);
    }
    issues
}

/// Validates one schema node and its children.
fn validate_schema(path: &str, schema: &SchemaDefinition, issues: &mut Vec<SchemaIssue>) {
    for keyword in schema.composition_keywords() {
        issues.push(SchemaIssue {
            path: path.to_string(),
            kind: IssueKind::UnsupportedKeyword(keyword),
        });
    }

    if schema.is_array() && schema.items.is_none() {
        issues.push(SchemaIssue {
            path: path.to_string(),
            kind: IssueKind::MissingItems,
        });
    }

    if !schema.is_object() && !schema.properties.is_empty() {
        issues.push(SchemaIssue {
            path: path.to_string(),
            kind: IssueKind::IgnoredProperties,
        });
    }

    if !schema.is_array() && schema.items.is_some() {
        issues.push(SchemaIssue {
            path: path.to_string(),
            kind: IssueKind::IgnoredItems,
        });
    }

    for (field, child) in &schema.properties {
        validate_schema(&format!("{path}.{field}"), child, issues);
    }
    if let Some(items) = &schema.items {
        validate_schema(&format!("{path}.items"), items, issues);
    }
    if let Some(AdditionalProperties::Schema(extra)) = &schema.additional_properties {
        validate_schema(&format!("{path}.additionalProperties"), extra, issues);
    }

    let branches = [
        ("allOf", &schema.all_of),
        ("oneOf", &schema.one_of),
        ("anyOf", &schema.any_of),
    ];
    for (keyword, children) in branches {
        for (index, child) in children.iter().enumerate() {
            validate_schema(&format!("{path}.{keyword}[{index}]"), child, issues);
        }
    }
    if let Some(not) = &schema.not {
        validate_schema(&format!("{path}.not"), not, issues);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_document;

    #[test]
    fn test_validate_clean_document() {
        let yaml = r#"
openapi: 3.0.0
components:
  schemas:
    Pet:
      type: object
      properties:
        name:
          type: string
        tags:
          type: array
          items:
            type: string
"#;
        let doc = parse_document(yaml).expect("Failed to parse");
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn test_validate_reports_composition() {
        let yaml = r##"
openapi: 3.0.0
components:
  schemas:
    Pet:
      type: object
      properties:
        owner:
          $ref: "#/components/schemas/Owner"
    Animal:
      oneOf:
        - type: string
        - type: integer
"##;
        let doc = parse_document(yaml).expect("Failed to parse");
        let issues = validate_document(&doc);

        assert_eq!(
            issues,
            vec![
                SchemaIssue {
                    path: "Pet.owner".to_string(),
                    kind: IssueKind::UnsupportedKeyword("$ref"),
                },
                SchemaIssue {
                    path: "Animal".to_string(),
                    kind: IssueKind::UnsupportedKeyword("oneOf"),
                },
            ]
        );
    }

    #[test]
    fn test_validate_walks_composed_schemas() {
        let yaml = r##"
openapi: 3.0.0
components:
  schemas:
    Pet:
      allOf:
        - $ref: "#/components/schemas/Base"
        - type: object
          properties:
            tags:
              type: array
    Labels:
      type: object
      additionalProperties:
        $ref: "#/components/schemas/Label"
    Id:
      type: string
      not:
        type: array
"##;
        let doc = parse_document(yaml).expect("Failed to parse");
        let issues = validate_document(&doc);

        assert_eq!(
            issues,
            vec![
                SchemaIssue {
                    path: "Pet".to_string(),
                    kind: IssueKind::UnsupportedKeyword("allOf"),
                },
                SchemaIssue {
                    path: "Pet.allOf[0]".to_string(),
                    kind: IssueKind::UnsupportedKeyword("$ref"),
                },
                SchemaIssue {
                    path: "Pet.allOf[1].tags".to_string(),
                    kind: IssueKind::MissingItems,
                },
                SchemaIssue {
                    path: "Labels.additionalProperties".to_string(),
                    kind: IssueKind::UnsupportedKeyword("$ref"),
                },
                SchemaIssue {
                    path: "Id".to_string(),
                    kind: IssueKind::UnsupportedKeyword("not"),
                },
                SchemaIssue {
                    path: "Id.not".to_string(),
                    kind: IssueKind::MissingItems,
                },
            ]
        );
    }

    #[test]
    fn test_validate_reports_structure() {
        let yaml = r#"
openapi: 3.0.0
components:
  schemas:
    List:
      type: array
    Name:
      type: string
      properties:
        first:
          type: string
      items:
        type: string
"#;
        let doc = parse_document(yaml).expect("Failed to parse");
        let kinds: Vec<IssueKind> = validate_document(&doc)
            .into_iter()
            .map(|issue| issue.kind)
            .collect();

        assert_eq!(
            kinds,
            vec![
                IssueKind::MissingItems,
                IssueKind::IgnoredProperties,
                IssueKind::IgnoredItems,
            ]
        );
    }

    #[test]
    fn test_issue_display() {
        let issue = SchemaIssue {
            path: "Pet.tags".to_string(),
            kind: IssueKind::MissingItems,
        };
        assert_eq!(issue.to_string(), "Pet.tags: array schema has no 'items'");
    }
}
