//! Synthesized type declarations.
//!
//! These are the output of the synthesizer and the input of the renderer.
//! They carry no target syntax; the renderer decides how a `TypeRef` is
//! spelled.

use std::fmt;

/// Scalar target types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scalar {
    /// Text.
    String,
    /// Signed integer.
    Integer,
    /// Boolean.
    Boolean,
}

/// Reference to the type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeRef {
    /// Scalar type.
    Scalar(Scalar),
    /// Synthesized composite type, by name.
    Named(String),
    /// Sequence of the inner type.
    Sequence(Box<TypeRef>),
}

impl TypeRef {
    /// Creates a sequence of `inner`.
    #[must_use]
    pub fn sequence(inner: TypeRef) -> Self {
        Self::Sequence(Box::new(inner))
    }

    /// Returns the composite name this reference points at, if any.
    #[must_use]
    pub fn composite_name(&self) -> Option<&str> {
        match self {
            Self::Scalar(_) => None,
            Self::Named(name) => Some(name),
            Self::Sequence(inner) => inner.composite_name(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(Scalar::String) => f.write_str("string"),
            Self::Scalar(Scalar::Integer) => f.write_str("integer"),
            Self::Scalar(Scalar::Boolean) => f.write_str("boolean"),
            Self::Named(name) => f.write_str(name),
            Self::Sequence(inner) => write!(f, "[{inner}]"),
        }
    }
}

/// One field of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field identifier.
    pub name: String,
    /// Field type.
    pub type_ref: TypeRef,
    /// Original property name, used as the wire name.
    pub serialization_key: String,
    /// Description carried over from the schema.
    pub description: Option<String>,
}

/// One synthesized struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDeclaration {
    /// Type identifier.
    pub name: String,
    /// Fields in iteration order.
    pub fields: Vec<FieldSpec>,
    /// Description carried over from the schema.
    pub description: Option<String>,
}

impl TypeDeclaration {
    /// Returns the field with the given identifier.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
