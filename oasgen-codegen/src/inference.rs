//! Field type inference.

use crate::declaration::Scalar;
use oasgen_schema::{SchemaDefinition, SchemaKind};

/// Outcome of inferring the type of a field from its schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Inference<'a> {
    /// Scalar field.
    Scalar(Scalar),
    /// Sequence of scalars.
    ScalarSequence(Scalar),
    /// Object field; the schema is synthesized into its own type.
    Composite(&'a SchemaDefinition),
    /// Array of objects; the element schema is synthesized into its own type.
    CompositeSequence(&'a SchemaDefinition),
    /// Field is omitted.
    Unsupported(Unsupported),
}

/// Why a field schema has no type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    /// The field's own kind.
    Kind(String),
    /// The element kind of an array.
    ItemKind(String),
    /// An array without `items`.
    MissingItems,
}

/// Infers the type of a field from its schema.
///
/// Only `string`, `integer`, `boolean`, `object` and arrays of `string`,
/// `integer` or `object` produce a type.
#[must_use]
pub fn infer(schema: &SchemaDefinition) -> Inference<'_> {
    match &schema.kind {
        Some(SchemaKind::String) => Inference::Scalar(Scalar::String),
        Some(SchemaKind::Integer) => Inference::Scalar(Scalar::Integer),
        Some(SchemaKind::Boolean) => Inference::Scalar(Scalar::Boolean),
        Some(SchemaKind::Object) => Inference::Composite(schema),
        Some(SchemaKind::Array) => match schema.items.as_deref() {
            None => Inference::Unsupported(Unsupported::MissingItems),
            Some(items) => match &items.kind {
                Some(SchemaKind::String) => Inference::ScalarSequence(Scalar::String),
                Some(SchemaKind::Integer) => Inference::ScalarSequence(Scalar::Integer),
                Some(SchemaKind::Object) => Inference::CompositeSequence(items),
                _ => Inference::Unsupported(Unsupported::ItemKind(items.kind_name().to_string())),
            },
        },
        _ => Inference::Unsupported(Unsupported::Kind(schema.kind_name().to_string())),
    }
}
