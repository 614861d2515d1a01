//! Source adapters producing the raw record stream.
//!
//! The core pipeline never touches files; adapters read one tabular source
//! each and emit [`RawTagRecord`]s in a deterministic order. A source that
//! cannot be read contributes zero records — the caller logs and moves on.

pub mod csv_source;

pub use csv_source::{ColumnarCsvSource, PairedCsvSource};

/// One cell-level observation of a tag in a source sheet.
///
/// Never mutated after creation; consumed exactly once by the dedup stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTagRecord {
    pub text_en: String,
    pub text_cn: String,
    pub description: String,
    /// Name of the contributing source, used for provenance.
    pub source: String,
    /// Category label the source itself carried (column header).
    pub original_category: String,
}

/// A tabular source of tag records.
pub trait SourceAdapter {
    /// Provenance name of the source.
    fn name(&self) -> &str;

    /// Read the source and return its records in sheet order.
    fn collect(&self) -> anyhow::Result<Vec<RawTagRecord>>;
}
