//! Generator configuration.

/// Default generation-warning header.
pub const DEFAULT_HEADER: &str = "THIS CODE WAS AUTO GENERATED; DO NOT EDIT.";

/// Default nesting limit for the synthesizer.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Order in which schema names and properties are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrder {
    /// Lexicographic order of the keys.
    #[default]
    Sorted,
    /// Order in which keys appear in the document.
    Document,
}

impl KeyOrder {
    /// Parses a key order from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sorted" | "lexicographic" => Some(Self::Sorted),
            "document" | "source" => Some(Self::Document),
            _ => None,
        }
    }
}

/// Configuration for struct synthesis and rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Iteration order for schema names and properties.
    pub key_order: KeyOrder,
    /// Maximum schema nesting depth.
    pub max_depth: usize,
    /// Comment line emitted at the top of the rendered source.
    pub header: String,
    /// Derive paths attached to every generated struct.
    pub derives: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            key_order: KeyOrder::default(),
            max_depth: DEFAULT_MAX_DEPTH,
            header: DEFAULT_HEADER.to_string(),
            derives: vec![
                "Debug".to_string(),
                "Clone".to_string(),
                "PartialEq".to_string(),
                "serde::Serialize".to_string(),
                "serde::Deserialize".to_string(),
            ],
        }
    }
}

impl GeneratorConfig {
    /// Sets the key order.
    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the header comment.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Replaces the derive list.
    #[must_use]
    pub fn with_derives<I, S>(mut self, derives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.derives = derives.into_iter().map(Into::into).collect();
        self
    }

    /// Returns true if any derive is a serde derive.
    #[must_use]
    pub fn uses_serde(&self) -> bool {
        self.derives
            .iter()
            .any(|d| d.ends_with("Serialize") || d.ends_with("Deserialize"))
    }
}
