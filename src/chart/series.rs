use serde::Serialize;

use crate::chart::BucketedPoint;
use crate::error::MetricsError;
use crate::registry::ChainId;

/// A bucketed series annotated with the chain it came from, ready for
/// cross-chain merging.
#[derive(Debug, Clone, Serialize)]
pub struct TaggedSeries {
    pub chain: ChainId,
    pub points: Vec<BucketedPoint>,
}

/// Attach a chain identity to an already-bucketed series.
///
/// Pure relabeling; values are untouched. The input must be strictly
/// ascending by bucket start — anything else means the caller skipped
/// [`bucket`](crate::chart::bucket) and is a bug, not a data condition to
/// recover from.
pub fn tag(points: Vec<BucketedPoint>, chain: ChainId) -> Result<TaggedSeries, MetricsError> {
    if let Some(index) = first_order_violation(&points) {
        return Err(MetricsError::UnsortedSeries { chain, index });
    }

    Ok(TaggedSeries { chain, points })
}

/// Index of the first point whose bucket start does not strictly increase,
/// or `None` if the series is well-formed.
fn first_order_violation(points: &[BucketedPoint]) -> Option<usize> {
    points
        .windows(2)
        .position(|pair| pair[0].bucket_start >= pair[1].bucket_start)
        .map(|i| i + 1)
}
