//! Popularity weight derived from merge occurrence counts.

use super::dedup::MergedTag;

/// Weight of a tag seen exactly once.
pub const BASE_WEIGHT: f64 = 1.0;
/// Increment per additional occurrence.
pub const WEIGHT_STEP: f64 = 0.1;
/// Saturation ceiling, reached at eleven occurrences.
pub const MAX_WEIGHT: f64 = 2.0;

/// Weight as a pure function of how many records merged into a tag.
///
/// Monotonically non-decreasing, `BASE_WEIGHT` at one occurrence, capped at
/// [`MAX_WEIGHT`]. Counts below one are treated as one.
#[must_use]
pub fn compute_weight(occurrence_count: u32) -> f64 {
    let count = occurrence_count.max(1);
    (BASE_WEIGHT + f64::from(count - 1) * WEIGHT_STEP).min(MAX_WEIGHT)
}

/// Replace every placeholder weight with the computed one.
pub fn assign_weights(tags: &mut [MergedTag]) {
    for tag in tags {
        tag.weight = compute_weight(tag.occurrence_count);
    }
}
