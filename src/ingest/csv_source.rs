//! CSV adapters for the two sheet layouts the catalog ingests.
//!
//! Both adapters emit cells column-major (whole column before the next one),
//! so the pipeline's first-seen order follows the sheet's column order. Rows
//! are buffered to make that possible; source sheets are small.

use std::path::{Path, PathBuf};

use anyhow::Context;
use csv::StringRecord;
use tracing::debug;

use crate::pipeline::normalize::{is_valid_tag, normalize};

use super::{RawTagRecord, SourceAdapter};

/// Category label used when a source column carries no header.
const UNCATEGORIZED: &str = "Uncategorized";

/// Headers that mark filler columns: placeholders and the unnamed columns
/// spreadsheet exports generate.
fn is_filler_header(header: &str) -> bool {
    header.is_empty() || header == "-" || header.starts_with("Unnamed")
}

/// Script detection for single-script cells: any ASCII letter means the
/// cell is the English side, otherwise the Chinese side.
fn contains_latin(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_alphabetic())
}

fn read_sheet(path: &Path) -> anyhow::Result<(StringRecord, Vec<StringRecord>)> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("failed to open source sheet {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers of {}", path.display()))?
        .clone();
    let rows = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("failed to read rows of {}", path.display()))?;
    Ok((headers, rows))
}

/// A sheet where every non-filler column is a source-side category and each
/// cell holds a single-script tag, routed to the English or Chinese side by
/// script detection.
#[derive(Debug, Clone)]
pub struct ColumnarCsvSource {
    name: String,
    path: PathBuf,
}

impl ColumnarCsvSource {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl SourceAdapter for ColumnarCsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&self) -> anyhow::Result<Vec<RawTagRecord>> {
        let (headers, rows) = read_sheet(&self.path)?;
        let mut records = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            if is_filler_header(header) {
                continue;
            }
            for row in &rows {
                let cell = normalize(row.get(index).unwrap_or(""));
                if !is_valid_tag(&cell) {
                    continue;
                }
                let (text_en, text_cn) = if contains_latin(&cell) {
                    (cell, String::new())
                } else {
                    (String::new(), cell)
                };
                records.push(RawTagRecord {
                    text_en,
                    text_cn,
                    description: String::new(),
                    source: self.name.clone(),
                    original_category: header.to_string(),
                });
            }
        }

        debug!(source = self.name.as_str(), records = records.len(), "columnar sheet read");
        Ok(records)
    }
}

/// A sheet whose columns come in (english, chinese) pairs; the English
/// column's header is the pair's source-side category.
#[derive(Debug, Clone)]
pub struct PairedCsvSource {
    name: String,
    path: PathBuf,
}

impl PairedCsvSource {
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl SourceAdapter for PairedCsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn collect(&self) -> anyhow::Result<Vec<RawTagRecord>> {
        let (headers, rows) = read_sheet(&self.path)?;
        let mut records = Vec::new();

        for en_index in (0..headers.len()).step_by(2) {
            let cn_index = en_index + 1;
            if cn_index >= headers.len() {
                break;
            }
            let header = headers.get(en_index).unwrap_or("");
            if header == "-" || header.starts_with("Unnamed") {
                continue;
            }
            let original_category = if header.is_empty() { UNCATEGORIZED } else { header };

            for row in &rows {
                let text_en = normalize(row.get(en_index).unwrap_or(""));
                let text_cn = normalize(row.get(cn_index).unwrap_or(""));
                if !is_valid_tag(&text_en) && !is_valid_tag(&text_cn) {
                    continue;
                }
                records.push(RawTagRecord {
                    text_en,
                    text_cn,
                    description: String::new(),
                    source: self.name.clone(),
                    original_category: original_category.to_string(),
                });
            }
        }

        debug!(source = self.name.as_str(), records = records.len(), "paired sheet read");
        Ok(records)
    }
}
