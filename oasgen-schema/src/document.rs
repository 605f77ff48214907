//! OpenAPI document model.
//!
//! This module contains the data structures a decoded OpenAPI document is
//! materialized into. Only `type`, `properties` and `items` drive code
//! generation; every other keyword is held so that nothing decoded from the
//! document is lost.

use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_yaml::Value;
use std::fmt;

/// Named schema definitions, in document order.
pub type SchemaCollection = IndexMap<String, SchemaDefinition>;

/// Decoded OpenAPI document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    /// OpenAPI version string (the `openapi` field).
    #[serde(rename = "openapi", default, deserialize_with = "version_string")]
    pub version: String,
    /// Reusable components.
    #[serde(default, deserialize_with = "null_as_default")]
    pub components: Components,
}

impl Document {
    /// Returns the named component schemas.
    ///
    /// A document without `components` or `components.schemas` yields an
    /// empty collection.
    #[must_use]
    pub fn schemas(&self) -> &SchemaCollection {
        &self.components.schemas
    }
}

/// Components object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Components {
    /// Named schema definitions.
    #[serde(default, deserialize_with = "scalar_keyed")]
    pub schemas: SchemaCollection,
}

/// One node of the schema tree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SchemaDefinition {
    /// Declared kind (the `type` keyword).
    #[serde(rename = "type")]
    pub kind: Option<SchemaKind>,
    pub title: Option<String>,
    pub multiple_of: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_maximum: Option<ExclusiveBound>,
    pub minimum: Option<f64>,
    pub exclusive_minimum: Option<ExclusiveBound>,
    pub max_length: Option<u64>,
    pub min_length: Option<u64>,
    pub pattern: Option<String>,
    pub max_items: Option<u64>,
    pub min_items: Option<u64>,
    pub max_properties: Option<u64>,
    pub min_properties: Option<u64>,
    #[serde(deserialize_with = "scalar_strings")]
    pub required: Vec<String>,
    /// Enumerated members (the `enum` keyword).
    #[serde(rename = "enum", deserialize_with = "null_as_default")]
    pub enum_values: Vec<Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub all_of: Vec<SchemaDefinition>,
    #[serde(deserialize_with = "null_as_default")]
    pub one_of: Vec<SchemaDefinition>,
    #[serde(deserialize_with = "null_as_default")]
    pub any_of: Vec<SchemaDefinition>,
    pub not: Option<Box<SchemaDefinition>>,
    /// Element schema, interpreted only when `kind` is `array`.
    pub items: Option<Box<SchemaDefinition>>,
    /// Field schemas, interpreted only when `kind` is `object`.
    #[serde(deserialize_with = "scalar_keyed")]
    pub properties: IndexMap<String, SchemaDefinition>,
    pub additional_properties: Option<AdditionalProperties>,
    pub description: Option<String>,
    pub format: Option<String>,
    pub default: Option<Value>,
    /// Reference target (the `$ref` keyword). Never resolved.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,
    /// Every key not modeled above, `x-*` extensions included.
    #[serde(flatten, deserialize_with = "scalar_keyed")]
    pub extensions: IndexMap<String, Value>,
}

impl SchemaDefinition {
    /// Creates a schema of the given kind with no other keywords.
    #[must_use]
    pub fn of_kind(kind: SchemaKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// Creates an `object` schema with the given properties.
    #[must_use]
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaDefinition)>,
        K: Into<String>,
    {
        Self {
            kind: Some(SchemaKind::Object),
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.into(), schema))
                .collect(),
            ..Self::default()
        }
    }

    /// Creates an `array` schema with the given element schema.
    #[must_use]
    pub fn array(items: SchemaDefinition) -> Self {
        Self {
            kind: Some(SchemaKind::Array),
            items: Some(Box::new(items)),
            ..Self::default()
        }
    }

    /// Returns true if the declared kind is `object`.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self.kind, Some(SchemaKind::Object))
    }

    /// Returns true if the declared kind is `array`.
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self.kind, Some(SchemaKind::Array))
    }

    /// Returns the declared kind as written, or `"unset"`.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        self.kind.as_ref().map_or("unset", SchemaKind::as_str)
    }

    /// Returns the `x-*` vendor extensions.
    pub fn vendor_extensions(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.extensions
            .iter()
            .filter(|(key, _)| key.starts_with("x-"))
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the composition keywords present on this node.
    #[must_use]
    pub fn composition_keywords(&self) -> Vec<&'static str> {
        let mut keywords = Vec::new();
        if self.reference.is_some() {
            keywords.push("$ref");
        }
        if !self.all_of.is_empty() {
            keywords.push("allOf");
        }
        if !self.one_of.is_empty() {
            keywords.push("oneOf");
        }
        if !self.any_of.is_empty() {
            keywords.push("anyOf");
        }
        if self.not.is_some() {
            keywords.push("not");
        }
        keywords
    }
}

/// `additionalProperties` keyword: either a flag or a schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` / `false`.
    Allowed(bool),
    /// Schema every additional property must match.
    Schema(Box<SchemaDefinition>),
}

/// `exclusiveMaximum` / `exclusiveMinimum`: a flag modifying `maximum` or
/// `minimum` (3.0), or the exclusive bound itself (3.1).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExclusiveBound {
    /// 3.0 form.
    Flag(bool),
    /// 3.1 form.
    Bound(f64),
}

/// Declared kind of a schema node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "KindRepr")]
pub enum SchemaKind {
    /// `object`.
    Object,
    /// `array`.
    Array,
    /// `string`.
    String,
    /// `integer`.
    Integer,
    /// `number`.
    Number,
    /// `boolean`.
    Boolean,
    /// `null`.
    Null,
    /// Any other value, kept verbatim.
    Other(String),
}

impl SchemaKind {
    /// Parses a kind from its OpenAPI spelling.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s {
            "object" => Self::Object,
            "array" => Self::Array,
            "string" => Self::String,
            "integer" => Self::Integer,
            "number" => Self::Number,
            "boolean" => Self::Boolean,
            "null" => Self::Null,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the OpenAPI spelling of the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Null => "null",
            Self::Other(other) => other,
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wire form of `type`: a single name, or the 3.1 list form.
#[derive(Deserialize)]
#[serde(untagged)]
enum KindRepr {
    One(String),
    Many(Vec<String>),
}

impl From<KindRepr> for SchemaKind {
    fn from(repr: KindRepr) -> Self {
        match repr {
            KindRepr::One(name) => Self::parse(&name),
            KindRepr::Many(names) => {
                // `[T, "null"]` is a nullable T
                let non_null: Vec<&String> = names.iter().filter(|n| *n != "null").collect();
                match non_null.as_slice() {
                    [single] => Self::parse(single),
                    [] => Self::Null,
                    _ => Self::Other(names.join(",")),
                }
            }
        }
    }
}

/// Accepts `openapi: 3.1` (a YAML float) as well as the usual string form.
fn version_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

/// Map keys written as plain scalars (`200:`, `true:`) decode as numbers or
/// booleans; names are kept as their string form.
fn scalar_keyed<'de, D, T>(deserializer: D) -> Result<IndexMap<String, T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<IndexMap<Value, T>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| {
            scalar_string(key)
                .map(|key| (key, value))
                .map_err(D::Error::custom)
        })
        .collect()
}

fn scalar_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Value>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|value| scalar_string(value).map_err(D::Error::custom))
        .collect()
}

fn scalar_string(value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        other => Err(format!("expected a scalar name, found {other:?}")),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
