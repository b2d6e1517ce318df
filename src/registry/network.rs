use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::MetricsError;
use crate::registry::TrackedAssets;

/// Opaque identifier of a supported network (e.g. `"fantom"`, `"optimism"`).
///
/// Interned so that tagging thousands of chart points with their chain is a
/// pointer copy, not a string clone. Doubles as the per-chain key in
/// aggregated chart points, so it is ordered and hashable.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(Arc<str>);

impl ChainId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChainId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Static description of one supported network.
#[derive(Debug, Clone)]
pub struct NetworkInfo {
    pub id: ChainId,
    /// Display name used for chart legends and logs
    pub name: String,
    /// Subgraph endpoint URI for this network
    pub endpoint: String,
    /// Unix timestamp of the earliest indexed data on this network
    pub start_timestamp: i64,
    /// Brand color handed through to the rendering layer
    pub brand_color: String,
    /// Logical assets whose prices the dashboard tracks on this network
    pub assets: TrackedAssets,
}

/// Immutable lookup table `ChainId -> NetworkInfo`.
///
/// Preserves construction order so charts and legends list chains the same
/// way every run. Lookups for networks that were never configured are
/// caller bugs and fail loudly.
#[derive(Debug, Clone)]
pub struct NetworkRegistry {
    ordered: Vec<ChainId>,
    by_id: FxHashMap<ChainId, NetworkInfo>,
}

impl NetworkRegistry {
    pub fn new(networks: Vec<NetworkInfo>) -> Self {
        let ordered = networks.iter().map(|n| n.id.clone()).collect();
        let by_id = networks.into_iter().map(|n| (n.id.clone(), n)).collect();
        Self { ordered, by_id }
    }

    pub fn get(&self, chain: &ChainId) -> Result<&NetworkInfo, MetricsError> {
        self.by_id
            .get(chain)
            .ok_or_else(|| MetricsError::UnknownNetwork(chain.clone()))
    }

    /// Iterate networks in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkInfo> {
        self.ordered.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TrackedAsset;

    fn network(id: &str, name: &str) -> NetworkInfo {
        NetworkInfo {
            id: ChainId::new(id),
            name: name.to_string(),
            endpoint: format!("https://graph.example.com/{id}"),
            start_timestamp: 0,
            brand_color: "#1e90ff".to_string(),
            assets: TrackedAssets {
                wrapped_native: TrackedAsset {
                    name: "wnative".to_string(),
                    address: "0x00".to_string(),
                },
                governance: TrackedAsset {
                    name: "gov".to_string(),
                    address: "0x01".to_string(),
                },
                majors: vec![],
            },
        }
    }

    #[test]
    fn lookup_of_unconfigured_chain_fails() {
        let registry = NetworkRegistry::new(vec![network("fantom", "Fantom")]);
        let err = registry.get(&ChainId::new("optimism")).unwrap_err();
        assert!(matches!(err, MetricsError::UnknownNetwork(_)));
    }

    #[test]
    fn iteration_preserves_configuration_order() {
        let registry = NetworkRegistry::new(vec![
            network("fantom", "Fantom"),
            network("optimism", "Optimism"),
            network("base", "Base"),
        ]);
        let names: Vec<&str> = registry.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["Fantom", "Optimism", "Base"]);
    }
}
