//! Static network registry.
//!
//! The set of supported networks (endpoint, branding, genesis timestamp,
//! tracked asset addresses) is process-wide configuration: built once at
//! startup from `config.yaml` and passed explicitly to whoever needs it.
//! Nothing in here is mutable after construction.

mod assets;
mod network;

pub use assets::{TrackedAsset, TrackedAssets};
pub use network::{ChainId, NetworkInfo, NetworkRegistry};
