//! Overview assembly.
//!
//! Pulls each enabled network's day-granular series through the chart
//! pipeline and packages everything one dashboard view renders: merged
//! charts, summary-card snapshots, and the active network's price map.
//! All results are derived values — recomputed on every fetch cycle and
//! cheap to discard when the active network changes mid-flight.

mod loader;
mod protocol;
mod token;

pub use loader::OverviewLoader;
pub use protocol::{build_protocol_overview, ChainProtocolSeries, ProtocolOverview};
pub use token::{build_token_overview, TokenOverview, TokenSeries};
