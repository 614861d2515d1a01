//! The sequential batch pipeline.
//!
//! Raw records flow forward through normalize -> dedup -> weight ->
//! classify -> organize, with no I/O, shared state, or back-references. A
//! single [`run`] call is deterministic in its input order.

pub mod dedup;
pub mod normalize;
pub mod organize;
pub mod weight;

use tracing::info;

use crate::classification::{Classifier, Taxonomy};
use crate::ingest::RawTagRecord;

use self::dedup::MergedTag;
use self::organize::CategoryTree;

/// Everything a pipeline invocation produces: the deduplicated tag set (for
/// flat projections) and the organized tree.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineRun {
    pub merged: Vec<MergedTag>,
    pub tree: CategoryTree,
}

/// Run the full pipeline over an ordered record stream.
#[must_use]
pub fn run(records: Vec<RawTagRecord>, classifier: &Classifier, taxonomy: &Taxonomy) -> PipelineRun {
    let record_count = records.len();

    let mut merged = dedup::merge_records(records);
    weight::assign_weights(&mut merged);
    let tree = organize::organize(&merged, classifier, taxonomy);

    info!(
        records = record_count,
        unique_tags = merged.len(),
        bucketed = tree.total_tags(),
        "pipeline completed"
    );

    PipelineRun { merged, tree }
}
