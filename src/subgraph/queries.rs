//! GraphQL documents.
//!
//! Documents are kept as plain strings next to their result shapes in
//! [`types`](super::types); variables are built by callers with
//! `serde_json::json!`.

/// Day-granular protocol metrics since a network's genesis timestamp.
pub const PROTOCOL_SNAPSHOTS: &str = r#"
query ProtocolSnapshots($startTimestamp: Int!, $first: Int!) {
  protocolSnapshots(
    first: $first
    orderBy: timestamp
    orderDirection: asc
    where: { timestamp_gte: $startTimestamp }
  ) {
    timestamp
    totalLiquidity
    totalSwapVolume
    totalSwapFee
    totalSwapCount
  }
}
"#;

/// Latest USD prices for an explicit asset-address set.
pub const LATEST_PRICES: &str = r#"
query LatestPrices($assets: [String!]!) {
  latestPrices(where: { asset_in: $assets }) {
    asset
    priceUSD
  }
}
"#;

/// Day-granular metrics for one token.
pub const TOKEN_SNAPSHOTS: &str = r#"
query TokenSnapshots($token: String!, $startTimestamp: Int!, $first: Int!) {
  tokenSnapshots(
    first: $first
    orderBy: timestamp
    orderDirection: asc
    where: { token: $token, timestamp_gte: $startTimestamp }
  ) {
    timestamp
    priceUSD
    totalLiquidity
    swapVolume
  }
}
"#;
