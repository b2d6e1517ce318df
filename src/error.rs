//! Typed errors for the aggregation core.
//!
//! Missing data and malformed records are deliberately NOT represented
//! here: a metric with no history degrades to a zero-valued snapshot and a
//! record that fails to parse is dropped, so dashboards render partial data
//! instead of blanking out. The variants below are caller bugs and
//! configuration errors that must surface instead.

use thiserror::Error;

use crate::registry::ChainId;

#[derive(Error, Debug)]
pub enum MetricsError {
    /// A component that requires a bucketed series was handed unsorted data.
    /// This means a caller skipped the bucketing step.
    #[error("series for chain {chain} is not sorted ascending by bucket start (index {index})")]
    UnsortedSeries { chain: ChainId, index: usize },

    /// Lookup for a network that was never configured.
    #[error("no registry entry for network {0}")]
    UnknownNetwork(ChainId),
}
