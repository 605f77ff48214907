//! Recursive struct synthesis.
//!
//! Every `object` schema in a collection becomes one `TypeDeclaration`.
//! Object-typed properties (and arrays of objects) are synthesized into their
//! own declarations, appended to the accumulator before their parent, so the
//! output is a flat list of sibling structs.

use crate::config::{GeneratorConfig, KeyOrder};
use crate::declaration::{FieldSpec, TypeDeclaration, TypeRef};
use crate::error::CodegenError;
use crate::inference::{Inference, Unsupported, infer};
use crate::naming::{to_field_name, to_type_name};
use oasgen_schema::{SchemaCollection, SchemaDefinition};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

/// Type names the renderer relies on; never handed out to schemas.
const RESERVED_NAMES: &[&str] = &["Box", "Option", "Self", "String", "Vec"];

/// Structural fingerprint of a schema, built from `type`, `properties` and
/// `items` only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Object with its property shapes (order-insensitive).
    Object(BTreeMap<String, Shape>),
    /// Array with its element shape.
    Array(Option<Box<Shape>>),
    /// Any other kind.
    Leaf(String),
}

impl Shape {
    /// Computes the shape of a schema.
    #[must_use]
    pub fn of(schema: &SchemaDefinition) -> Self {
        if schema.is_object() {
            Self::Object(
                schema
                    .properties
                    .iter()
                    .map(|(name, child)| (name.clone(), Self::of(child)))
                    .collect(),
            )
        } else if schema.is_array() {
            Self::Array(schema.items.as_deref().map(|items| Box::new(Self::of(items))))
        } else {
            Self::Leaf(schema.kind_name().to_string())
        }
    }
}

/// Result of claiming a type name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Claim {
    /// The name is new; the caller must emit the declaration.
    Fresh(String),
    /// A structurally identical type already owns the name.
    Existing(String),
}

#[derive(Debug, Clone)]
enum NameEntry {
    Reserved,
    Shape(Shape),
}

/// Registry of synthesized type names and the shapes they were built from.
#[derive(Debug, Clone)]
pub struct NameRegistry {
    entries: HashMap<String, NameEntry>,
}

impl NameRegistry {
    /// Creates a registry with the reserved names taken.
    #[must_use]
    pub fn new() -> Self {
        let entries = RESERVED_NAMES
            .iter()
            .map(|name| ((*name).to_string(), NameEntry::Reserved))
            .collect();
        Self { entries }
    }

    /// Returns true if the name is taken.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Claims a name for a type of the given shape.
    ///
    /// Tries `base`, then `qualifier + base`, then the last candidate with a
    /// numeric suffix starting at 2. A candidate owned by an identical shape
    /// is returned as [`Claim::Existing`].
    pub fn claim(&mut self, base: &str, qualifier: Option<&str>, shape: &Shape) -> Claim {
        let mut candidates = vec![base.to_string()];
        if let Some(qualifier) = qualifier {
            candidates.push(format!("{qualifier}{base}"));
        }

        for candidate in &candidates {
            if let Some(claim) = self.try_claim(candidate, shape) {
                return claim;
            }
        }

        let stem = candidates.last().map_or(base, String::as_str).to_string();
        let mut suffix = 2usize;
        loop {
            let candidate = format!("{stem}{suffix}");
            if let Some(claim) = self.try_claim(&candidate, shape) {
                return claim;
            }
            suffix += 1;
        }
    }

    fn try_claim(&mut self, candidate: &str, shape: &Shape) -> Option<Claim> {
        match self.entries.get(candidate) {
            None => {
                self.entries
                    .insert(candidate.to_string(), NameEntry::Shape(shape.clone()));
                Some(Claim::Fresh(candidate.to_string()))
            }
            Some(NameEntry::Shape(existing)) if existing == shape => {
                Some(Claim::Existing(candidate.to_string()))
            }
            Some(_) => None,
        }
    }
}

impl Default for NameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Why a field or schema produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Field kind has no target type.
    UnsupportedKind(String),
    /// Array element kind has no target type.
    UnsupportedItemKind(String),
    /// Array field without `items`.
    MissingItems,
    /// Top-level schema is not an `object`.
    NotAnObject(String),
    /// Top-level schema maps to an existing type of identical shape.
    DuplicateOf(String),
}

impl From<Unsupported> for SkipReason {
    fn from(unsupported: Unsupported) -> Self {
        match unsupported {
            Unsupported::Kind(kind) => Self::UnsupportedKind(kind),
            Unsupported::ItemKind(kind) => Self::UnsupportedItemKind(kind),
            Unsupported::MissingItems => Self::MissingItems,
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedKind(kind) => write!(f, "unsupported kind '{kind}'"),
            Self::UnsupportedItemKind(kind) => write!(f, "unsupported array item kind '{kind}'"),
            Self::MissingItems => f.write_str("array has no items"),
            Self::NotAnObject(kind) => write!(f, "top-level schema of kind '{kind}'"),
            Self::DuplicateOf(name) => write!(f, "identical to {name}"),
        }
    }
}

/// A field or schema that produced no output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    /// Dotted path (`Pet.tags`).
    pub path: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

impl fmt::Display for SkippedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.reason)
    }
}

/// Append-only sequence of declarations built by one synthesis run.
#[derive(Debug, Default)]
pub struct DeclarationAccumulator {
    declarations: Vec<TypeDeclaration>,
    registry: NameRegistry,
    skipped: Vec<SkippedField>,
}

impl DeclarationAccumulator {
    /// Creates an empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the declarations appended so far.
    #[must_use]
    pub fn declarations(&self) -> &[TypeDeclaration] {
        &self.declarations
    }

    /// Returns the fields and schemas skipped so far.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedField] {
        &self.skipped
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if no declaration was appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Consumes the accumulator.
    #[must_use]
    pub fn into_synthesis(self) -> Synthesis {
        Synthesis {
            declarations: self.declarations,
            skipped: self.skipped,
        }
    }

    fn push(&mut self, declaration: TypeDeclaration) {
        self.declarations.push(declaration);
    }

    fn skip(&mut self, path: String, reason: SkipReason) {
        tracing::debug!("Skipping {}: {}", path, reason);
        self.skipped.push(SkippedField { path, reason });
    }
}

/// Output of a synthesis run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Synthesis {
    /// Declarations. A nested type synthesized for a field precedes its
    /// parent; a field reusing a top-level type may precede that type.
    pub declarations: Vec<TypeDeclaration>,
    /// Fields and schemas that produced no output.
    pub skipped: Vec<SkippedField>,
}

impl Synthesis {
    /// Gets a declaration by name.
    #[must_use]
    pub fn declaration(&self, name: &str) -> Option<&TypeDeclaration> {
        self.declarations.iter().find(|d| d.name == name)
    }

    /// Returns the declaration names in output order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.declarations.iter().map(|d| d.name.as_str()).collect()
    }
}

/// Recursive struct synthesizer.
pub struct Synthesizer<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> Synthesizer<'a> {
    /// Creates a synthesizer.
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Synthesizes declarations for every schema in the collection.
    ///
    /// # Errors
    /// Returns `CodegenError::DepthExceeded` if nesting exceeds the configured
    /// limit.
    pub fn synthesize(&self, collection: &SchemaCollection) -> Result<Synthesis, CodegenError> {
        let mut accumulator = DeclarationAccumulator::new();
        self.synthesize_into(collection, &mut accumulator)?;
        Ok(accumulator.into_synthesis())
    }

    /// Synthesizes declarations into an existing accumulator.
    ///
    /// Names already claimed in the accumulator stay taken, so structurally
    /// identical schemas across calls are emitted once.
    ///
    /// # Errors
    /// Returns `CodegenError::DepthExceeded` if nesting exceeds the configured
    /// limit.
    pub fn synthesize_into(
        &self,
        collection: &SchemaCollection,
        accumulator: &mut DeclarationAccumulator,
    ) -> Result<(), CodegenError> {
        let entries = self.ordered(collection);

        // Top-level names win over nested ones, so claim them all first.
        let claims: Vec<Option<Claim>> = entries
            .iter()
            .map(|(name, schema)| {
                schema.is_object().then(|| {
                    accumulator
                        .registry
                        .claim(&to_type_name(name), None, &Shape::of(schema))
                })
            })
            .collect();

        for ((name, schema), claim) in entries.into_iter().zip(claims) {
            match claim {
                None => accumulator.skip(
                    name.clone(),
                    SkipReason::NotAnObject(schema.kind_name().to_string()),
                ),
                Some(Claim::Fresh(type_name)) => {
                    self.emit(accumulator, &type_name, name, schema, 0)?;
                }
                Some(Claim::Existing(type_name)) => {
                    accumulator.skip(name.clone(), SkipReason::DuplicateOf(type_name));
                }
            }
        }

        Ok(())
    }

    /// Builds the declaration for an object schema and appends it.
    fn emit(
        &self,
        accumulator: &mut DeclarationAccumulator,
        type_name: &str,
        path: &str,
        schema: &SchemaDefinition,
        depth: usize,
    ) -> Result<(), CodegenError> {
        if depth > self.config.max_depth {
            return Err(CodegenError::DepthExceeded {
                path: path.to_string(),
                limit: self.config.max_depth,
            });
        }

        let mut fields = Vec::with_capacity(schema.properties.len());
        let mut used = HashSet::new();

        for (property, child) in self.ordered(&schema.properties) {
            let field_path = format!("{path}.{property}");
            let type_ref = match infer(child) {
                Inference::Scalar(scalar) => TypeRef::Scalar(scalar),
                Inference::ScalarSequence(scalar) => TypeRef::sequence(TypeRef::Scalar(scalar)),
                Inference::Composite(nested) => TypeRef::Named(self.nested(
                    accumulator,
                    type_name,
                    property,
                    &field_path,
                    nested,
                    depth,
                )?),
                Inference::CompositeSequence(nested) => {
                    TypeRef::sequence(TypeRef::Named(self.nested(
                        accumulator,
                        type_name,
                        property,
                        &format!("{field_path}.items"),
                        nested,
                        depth,
                    )?))
                }
                Inference::Unsupported(reason) => {
                    accumulator.skip(field_path, reason.into());
                    continue;
                }
            };

            fields.push(FieldSpec {
                name: unique_field_name(&mut used, property),
                type_ref,
                serialization_key: property.clone(),
                description: child.description.clone(),
            });
        }

        tracing::debug!("Synthesized {} with {} fields", type_name, fields.len());
        accumulator.push(TypeDeclaration {
            name: type_name.to_string(),
            fields,
            description: schema.description.clone().or_else(|| schema.title.clone()),
        });

        Ok(())
    }

    /// Resolves the type name of a nested object, synthesizing it if new.
    fn nested(
        &self,
        accumulator: &mut DeclarationAccumulator,
        parent: &str,
        property: &str,
        path: &str,
        schema: &SchemaDefinition,
        depth: usize,
    ) -> Result<String, CodegenError> {
        let claim = accumulator
            .registry
            .claim(&to_type_name(property), Some(parent), &Shape::of(schema));

        match claim {
            Claim::Fresh(name) => {
                self.emit(accumulator, &name, path, schema, depth + 1)?;
                Ok(name)
            }
            Claim::Existing(name) => Ok(name),
        }
    }

    fn ordered<'s>(
        &self,
        map: &'s SchemaCollection,
    ) -> Vec<(&'s String, &'s SchemaDefinition)> {
        let mut entries: Vec<_> = map.iter().collect();
        if self.config.key_order == KeyOrder::Sorted {
            entries.sort_by(|a, b| a.0.cmp(b.0));
        }
        entries
    }
}

/// Converts a property name to a field name not yet used in the struct.
fn unique_field_name(used: &mut HashSet<String>, property: &str) -> String {
    let base = to_field_name(property);
    let mut name = base.clone();
    let mut suffix = 2usize;
    while !used.insert(name.clone()) {
        name = format!("{base}_{suffix}");
        suffix += 1;
    }
    name
}
