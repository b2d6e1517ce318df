use std::collections::BTreeMap;

use serde::Serialize;

use crate::chart::TaggedSeries;
use crate::registry::ChainId;

/// One chart x-position carrying a value for every chain that has data
/// exactly there.
///
/// A chain with no bucket at this time contributes no key: the rendering
/// layer draws a gap instead of a zero or an interpolated value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedPoint {
    pub time: i64,
    pub values: BTreeMap<ChainId, f64>,
}

/// Merge tagged series from any number of chains into a single sequence
/// keyed by chart timestamp.
///
/// The output covers the union of all bucket starts across all inputs,
/// ascending, each appearing exactly once. Works identically for one
/// series and many; the single-chain case is just the one-element set.
/// Sort-merge via the BTreeMap keeps this O(N log N) in total points.
pub fn aggregate(series: &[TaggedSeries]) -> Vec<AggregatedPoint> {
    let mut merged: BTreeMap<i64, BTreeMap<ChainId, f64>> = BTreeMap::new();

    for tagged in series {
        for point in &tagged.points {
            merged
                .entry(point.bucket_start)
                .or_default()
                .insert(tagged.chain.clone(), point.value);
        }
    }

    merged
        .into_iter()
        .map(|(time, values)| AggregatedPoint { time, values })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{tag, BucketedPoint};

    fn tagged(chain: &str, points: &[(i64, f64)]) -> TaggedSeries {
        let points = points
            .iter()
            .map(|&(bucket_start, value)| BucketedPoint { bucket_start, value })
            .collect();
        tag(points, ChainId::new(chain)).unwrap()
    }

    #[test]
    fn merges_two_chains_by_timestamp() {
        let a = tagged("chain-a", &[(0, 10.0)]);
        let b = tagged("chain-b", &[(0, 20.0), (86_400, 25.0)]);

        let merged = aggregate(&[a, b]);

        assert_eq!(merged.len(), 2);

        assert_eq!(merged[0].time, 0);
        assert_eq!(merged[0].values.len(), 2);
        assert_eq!(merged[0].values[&ChainId::new("chain-a")], 10.0);
        assert_eq!(merged[0].values[&ChainId::new("chain-b")], 20.0);

        // chain-a has no data at 86400: no key, no zero-fill
        assert_eq!(merged[1].time, 86_400);
        assert_eq!(merged[1].values.len(), 1);
        assert_eq!(merged[1].values[&ChainId::new("chain-b")], 25.0);
    }

    #[test]
    fn single_series_aggregation_is_pointwise_relabeling() {
        // Regression guard: a merge that only handles one hard-coded chain
        // label is not an aggregator.
        let points = [(0, 1.5), (86_400, 2.5), (172_800, 3.5)];
        let merged = aggregate(&[tagged("fantom", &points)]);

        assert_eq!(merged.len(), points.len());
        for (aggregated, &(time, value)) in merged.iter().zip(points.iter()) {
            assert_eq!(aggregated.time, time);
            assert_eq!(
                aggregated.values,
                BTreeMap::from([(ChainId::new("fantom"), value)])
            );
        }
    }

    #[test]
    fn output_covers_the_union_of_times_exactly_once_ascending() {
        let a = tagged("chain-a", &[(86_400, 1.0), (259_200, 3.0)]);
        let b = tagged("chain-b", &[(0, 2.0), (86_400, 4.0)]);
        let c = tagged("chain-c", &[(172_800, 5.0)]);

        let merged = aggregate(&[a, b, c]);
        let times: Vec<i64> = merged.iter().map(|p| p.time).collect();

        assert_eq!(times, vec![0, 86_400, 172_800, 259_200]);
    }

    #[test]
    fn empty_input_set_yields_empty_output() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[tagged("fantom", &[])]).is_empty());
    }
}
