//! Merge stage: collapses raw records that denote the same tag.
//!
//! Identity is the normalized bilingual text pair, nothing else — records
//! from different sources with identical text are the same tag by design.
//! The fold preserves first-seen order, which later stages rely on as the
//! sorting tie-break.

use indexmap::IndexMap;
use indexmap::map::Entry;
use tracing::debug;

use crate::ingest::RawTagRecord;

use super::normalize::normalize;

/// Separator used when joining provenance strings.
const SOURCE_SEPARATOR: &str = ", ";

/// Identity of a tag across sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagIdentity {
    pub text_en: String,
    pub text_cn: String,
}

impl TagIdentity {
    /// Identity of a record after normalization.
    #[must_use]
    pub fn of(record: &RawTagRecord) -> Self {
        Self {
            text_en: normalize(&record.text_en),
            text_cn: normalize(&record.text_cn),
        }
    }

    fn is_empty(&self) -> bool {
        self.text_en.is_empty() && self.text_cn.is_empty()
    }
}

/// One unique tag, accumulated over every record that shares its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedTag {
    pub text_en: String,
    pub text_cn: String,
    pub description: String,
    /// Placeholder 1.0 until the weight stage runs.
    pub weight: f64,
    /// Comma-joined union of contributing sources, first-appearance order.
    pub source: String,
    /// Number of records merged into this tag, always >= 1.
    pub occurrence_count: u32,
}

impl MergedTag {
    fn from_record(identity: &TagIdentity, record: RawTagRecord) -> Self {
        Self {
            text_en: identity.text_en.clone(),
            text_cn: identity.text_cn.clone(),
            description: record.description,
            weight: 1.0,
            source: record.source,
            occurrence_count: 1,
        }
    }

    /// Fold one more record with the same identity into this tag.
    fn absorb(&mut self, record: RawTagRecord) {
        self.occurrence_count += 1;

        // First non-empty description wins, never overwritten.
        if self.description.is_empty() && !record.description.is_empty() {
            self.description = record.description;
        }

        if !self.knows_source(&record.source) {
            self.source.push_str(SOURCE_SEPARATOR);
            self.source.push_str(&record.source);
        }
    }

    fn knows_source(&self, source: &str) -> bool {
        self.source.split(SOURCE_SEPARATOR).any(|seen| seen == source)
    }
}

/// Collapse an ordered record stream into unique tags, first-seen order.
///
/// Records whose identity normalizes to the empty pair carry no text at all
/// and are dropped here as a last line of defense; adapters normally filter
/// them before they become records.
#[must_use]
pub fn merge_records(records: Vec<RawTagRecord>) -> Vec<MergedTag> {
    let total = records.len();
    let mut merged: IndexMap<TagIdentity, MergedTag> = IndexMap::new();

    for record in records {
        let identity = TagIdentity::of(&record);
        if identity.is_empty() {
            continue;
        }
        match merged.entry(identity) {
            Entry::Occupied(mut slot) => slot.get_mut().absorb(record),
            Entry::Vacant(slot) => {
                let tag = MergedTag::from_record(slot.key(), record);
                slot.insert(tag);
            }
        }
    }

    debug!(records = total, unique = merged.len(), "records merged");
    merged.into_values().collect()
}
