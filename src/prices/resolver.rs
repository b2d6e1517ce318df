use std::collections::BTreeMap;
use std::sync::Arc;

use log::warn;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::error::MetricsError;
use crate::registry::{ChainId, NetworkRegistry};
use crate::subgraph::LatestPriceRecord;
use crate::utils::parse_price_usd;

/// Logical asset name -> USD price for the active network.
///
/// Always partial: an asset with no matching record, or a record whose
/// price fails to parse, is simply absent. The map never fails as a whole
/// because one asset is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceMap(BTreeMap<String, f64>);

impl PriceMap {
    pub fn get(&self, asset: &str) -> Option<f64> {
        self.0.get(asset).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, price)| (name.as_str(), *price))
    }
}

/// Maps raw latest-price records back to the named logical assets of the
/// active network.
///
/// The per-network asset-address tables live in the registry; this
/// resolver selects the one belonging to the active network, so a query is
/// never issued with another network's address list.
pub struct PriceFeedResolver {
    registry: Arc<NetworkRegistry>,
}

impl PriceFeedResolver {
    pub fn new(registry: Arc<NetworkRegistry>) -> Self {
        Self { registry }
    }

    /// The address set to query latest prices with for `chain`.
    pub fn query_addresses(&self, chain: &ChainId) -> Result<Vec<String>, MetricsError> {
        Ok(self.registry.get(chain)?.assets.query_addresses())
    }

    /// Build the price map for `chain` from raw subgraph records.
    pub fn resolve(
        &self,
        chain: &ChainId,
        records: &[LatestPriceRecord],
    ) -> Result<PriceMap, MetricsError> {
        let network = self.registry.get(chain)?;

        let by_address: FxHashMap<String, &str> = records
            .iter()
            .map(|r| (r.asset.to_lowercase(), r.price_usd.as_str()))
            .collect();

        let mut prices = BTreeMap::new();
        for asset in network.assets.iter() {
            let Some(raw) = by_address.get(&asset.address.to_lowercase()) else {
                continue;
            };

            match parse_price_usd(raw) {
                Some(price) => {
                    prices.insert(asset.name.clone(), price);
                },
                None => {
                    warn!(
                        "Dropping malformed price for {} on {}: {:?}",
                        asset.name, network.name, raw
                    );
                },
            }
        }

        Ok(PriceMap(prices))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{NetworkInfo, TrackedAsset, TrackedAssets};

    const WFTM: &str = "0xc579D1f3CF86749E05CD06f7ADe17856c2CE3126";
    const BEETS: &str = "0x5a60cE3D928c38Ee36B5104e98a42cf7B277f9C4";
    const WETH: &str = "0x4200000000000000000000000000000000000006";

    fn registry() -> Arc<NetworkRegistry> {
        Arc::new(NetworkRegistry::new(vec![NetworkInfo {
            id: ChainId::new("fantom"),
            name: "Fantom".to_string(),
            endpoint: "https://graph.example.com/fantom".to_string(),
            start_timestamp: 0,
            brand_color: "#1969ff".to_string(),
            assets: TrackedAssets {
                wrapped_native: TrackedAsset {
                    name: "wftm".to_string(),
                    address: WFTM.to_string(),
                },
                governance: TrackedAsset {
                    name: "beets".to_string(),
                    address: BEETS.to_string(),
                },
                majors: vec![TrackedAsset {
                    name: "weth".to_string(),
                    address: WETH.to_string(),
                }],
            },
        }]))
    }

    fn record(asset: &str, price_usd: &str) -> LatestPriceRecord {
        LatestPriceRecord {
            asset: asset.to_string(),
            price_usd: price_usd.to_string(),
        }
    }

    #[test]
    fn resolves_all_matching_records() {
        let resolver = PriceFeedResolver::new(registry());
        let records = [
            record(&WFTM.to_lowercase(), "0.45"),
            record(&BEETS.to_lowercase(), "0.012"),
            record(&WETH.to_lowercase(), "3100.5"),
        ];

        let prices = resolver.resolve(&ChainId::new("fantom"), &records).unwrap();
        assert_eq!(prices.len(), 3);
        assert_eq!(prices.get("wftm"), Some(0.45));
        assert_eq!(prices.get("beets"), Some(0.012));
        assert_eq!(prices.get("weth"), Some(3100.5));
    }

    #[test]
    fn missing_record_leaves_that_asset_absent() {
        let resolver = PriceFeedResolver::new(registry());
        let records = [record(&WFTM.to_lowercase(), "0.45")];

        let prices = resolver.resolve(&ChainId::new("fantom"), &records).unwrap();
        assert_eq!(prices.get("wftm"), Some(0.45));
        assert_eq!(prices.get("beets"), None);
        assert_eq!(prices.get("weth"), None);
    }

    #[test]
    fn malformed_price_does_not_affect_other_records() {
        let resolver = PriceFeedResolver::new(registry());
        let records = [
            record(&WFTM.to_lowercase(), "garbage"),
            record(&BEETS.to_lowercase(), "0.012"),
        ];

        let prices = resolver.resolve(&ChainId::new("fantom"), &records).unwrap();
        assert_eq!(prices.get("wftm"), None);
        assert_eq!(prices.get("beets"), Some(0.012));
    }

    #[test]
    fn record_addresses_match_case_insensitively() {
        let resolver = PriceFeedResolver::new(registry());
        // Subgraph returns checksummed casing, table stores whatever the
        // config had
        let records = [record(WFTM, "0.45")];

        let prices = resolver.resolve(&ChainId::new("fantom"), &records).unwrap();
        assert_eq!(prices.get("wftm"), Some(0.45));
    }

    #[test]
    fn query_addresses_come_from_the_active_network_only() {
        let resolver = PriceFeedResolver::new(registry());
        let addresses = resolver.query_addresses(&ChainId::new("fantom")).unwrap();

        assert_eq!(addresses.len(), 3);
        assert!(resolver.query_addresses(&ChainId::new("optimism")).is_err());
    }
}
