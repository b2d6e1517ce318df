//! Cross-chain chart data pipeline.
//!
//! Raw per-network series flow through this module in a fixed order:
//!
//! 1. [`bucket`] folds irregular block-timestamped points into UTC
//!    day/week windows
//! 2. [`tag`] annotates a bucketed series with its chain identity
//! 3. [`aggregate`] merges tagged series from any number of chains into
//!    one timestamp-keyed sequence for stacked charts
//! 4. [`snapshot`] derives the latest-value/percent-change figures for
//!    summary cards
//!
//! Everything here is synchronous and pure: each call takes an immutable
//! snapshot of its inputs and returns a fresh value, so stale results can
//! be discarded and recomputed from scratch on every fetch cycle.

mod aggregate;
mod bucket;
mod series;
mod snapshot;

pub use aggregate::{aggregate, AggregatedPoint};
pub use bucket::{
    bucket, BucketWindow, BucketedPoint, CombineMode, RawPoint, DAY_SECONDS, WEEK_SECONDS,
};
pub use series::{tag, TaggedSeries};
pub use snapshot::{snapshot, MetricSnapshot};
