//! Command-line front end.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use oasgen_codegen::config::DEFAULT_MAX_DEPTH;
use oasgen_codegen::{Generator, GeneratorConfig, KeyOrder};
use oasgen_schema::{parse_document_file, validate_document};
use std::path::PathBuf;

/// Generate Rust structs from the component schemas of an OpenAPI document.
#[derive(Parser, Debug)]
#[command(name = "oasgen", version, about)]
pub struct Cli {
    /// OpenAPI document (YAML or JSON)
    pub input: PathBuf,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Order in which schemas and properties are emitted
    #[arg(long, value_enum, default_value_t = Order::Sorted)]
    pub order: Order,

    /// Maximum schema nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Header comment for the generated file
    #[arg(long)]
    pub header: Option<String>,

    /// Skip reporting of ignored schema constructs
    #[arg(long)]
    pub no_validate: bool,
}

/// Emission order.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Lexicographic.
    Sorted,
    /// As written in the document.
    Document,
}

impl From<Order> for KeyOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Sorted => Self::Sorted,
            Order::Document => Self::Document,
        }
    }
}

impl Cli {
    /// Builds the generator configuration from the flags.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default()
            .with_key_order(self.order.into())
            .with_max_depth(self.max_depth);
        if let Some(header) = &self.header {
            config = config.with_header(header.clone());
        }
        config
    }

    /// Loads the input document and renders it.
    ///
    /// # Errors
    /// Returns an error if the document cannot be read, parsed or rendered.
    pub fn render(&self) -> anyhow::Result<String> {
        let document = parse_document_file(&self.input)
            .with_context(|| format!("failed to load {}", self.input.display()))?;

        if !self.no_validate {
            for issue in validate_document(&document) {
                tracing::warn!("{}", issue);
            }
        }

        let generated = Generator::new(self.config())
            .generate(&document)
            .context("failed to generate structs")?;

        for skipped in &generated.synthesis.skipped {
            tracing::info!("Skipped {}", skipped);
        }

        Ok(generated.source)
    }

    /// Renders the input and writes it to the output file or stdout.
    ///
    /// # Errors
    /// Returns an error if rendering or writing fails.
    pub fn run(&self) -> anyhow::Result<()> {
        let source = self.render()?;
        match &self.output {
            Some(path) => {
                std::fs::write(path, &source)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!("Wrote {}", path.display());
            }
            None => print!("{source}"),
        }
        Ok(())
    }
}
