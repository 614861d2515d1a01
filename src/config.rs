//! Worker configuration from command line and environment.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;

use crate::ingest::{ColumnarCsvSource, PairedCsvSource, SourceAdapter};

/// Batch worker that builds the bilingual prompt-tag catalog.
///
/// Sources are ingested in a fixed canonical order — every columnar source
/// in the order given, then every paired source — so repeated runs over the
/// same inputs produce identical output.
#[derive(Debug, Clone, Parser)]
#[command(name = "tag-catalog-worker")]
#[command(about = "Normalize, deduplicate, classify and weight bilingual prompt tags")]
pub struct Config {
    /// Columnar-layout CSV source (single-script cells, one category per
    /// column header). Repeatable.
    #[arg(long = "columnar-source", value_name = "NAME=PATH")]
    pub columnar_sources: Vec<SourceSpec>,

    /// Paired-layout CSV source (columns in english/chinese pairs).
    /// Repeatable.
    #[arg(long = "paired-source", value_name = "NAME=PATH")]
    pub paired_sources: Vec<SourceSpec>,

    /// Directory the JSON projections are written to.
    #[arg(long, env = "TAG_OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

impl Config {
    /// Source adapters in canonical ingestion order.
    #[must_use]
    pub fn sources(&self) -> Vec<Box<dyn SourceAdapter>> {
        let mut adapters: Vec<Box<dyn SourceAdapter>> = Vec::new();
        for spec in &self.columnar_sources {
            adapters.push(Box::new(ColumnarCsvSource::new(&spec.name, &spec.path)));
        }
        for spec in &self.paired_sources {
            adapters.push(Box::new(PairedCsvSource::new(&spec.name, &spec.path)));
        }
        adapters
    }
}

/// A named source sheet, written on the command line as `NAME=PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Error)]
pub enum SourceSpecError {
    #[error("expected NAME=PATH, got {0:?}")]
    Malformed(String),
    #[error("source name must not be empty in {0:?}")]
    EmptyName(String),
    #[error("source path must not be empty in {0:?}")]
    EmptyPath(String),
}

impl FromStr for SourceSpec {
    type Err = SourceSpecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, path) = value
            .split_once('=')
            .ok_or_else(|| SourceSpecError::Malformed(value.to_string()))?;
        if name.trim().is_empty() {
            return Err(SourceSpecError::EmptyName(value.to_string()));
        }
        if path.trim().is_empty() {
            return Err(SourceSpecError::EmptyPath(value.to_string()));
        }
        Ok(Self {
            name: name.trim().to_string(),
            path: PathBuf::from(path.trim()),
        })
    }
}
