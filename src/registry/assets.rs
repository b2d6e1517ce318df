use serde::Deserialize;

/// A logical asset the dashboard tracks on one network: the name the UI
/// shows and the on-chain address the subgraph indexes it under.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackedAsset {
    pub name: String,
    pub address: String,
}

/// Per-network table of price-feed assets.
///
/// Every network tracks its wrapped native token and the protocol
/// governance token; bridged majors (WETH, BAL, OP, ...) vary per network.
/// Address comparisons are case-insensitive since subgraphs are not
/// consistent about checksummed casing.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackedAssets {
    pub wrapped_native: TrackedAsset,
    pub governance: TrackedAsset,
    #[serde(default)]
    pub majors: Vec<TrackedAsset>,
}

impl TrackedAssets {
    /// All tracked assets, wrapped native first.
    pub fn iter(&self) -> impl Iterator<Item = &TrackedAsset> {
        std::iter::once(&self.wrapped_native)
            .chain(std::iter::once(&self.governance))
            .chain(self.majors.iter())
    }

    /// The address set to query latest prices with, lowercased.
    ///
    /// This is always the set for exactly one network; querying with another
    /// network's addresses returns nothing and masks configuration errors.
    pub fn query_addresses(&self) -> Vec<String> {
        self.iter().map(|a| a.address.to_lowercase()).collect()
    }
}
