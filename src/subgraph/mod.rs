//! Subgraph query layer.
//!
//! Each supported network exposes a GraphQL indexing endpoint; this module
//! owns the transport and the typed result shapes. Fetch policy is always
//! re-request: responses are never cached, so dashboards stay live at the
//! cost of redundant round trips, mitigated by coalescing identical
//! in-flight requests into a single HTTP call.

mod client;
pub mod queries;
mod types;

pub use client::SubgraphClient;
pub use types::{
    LatestPriceRecord, LatestPrices, ProtocolDayData, ProtocolSnapshots, TokenDayData,
    TokenSnapshots,
};
