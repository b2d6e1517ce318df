//! Typed result shapes for subgraph queries.
//!
//! Numeric fields arrive as decimal-encoded strings and stay strings here;
//! parsing to `f64` happens in one place (`utils`) so precision handling
//! is not scattered across callers.

use serde::Deserialize;

/// One day-granular protocol snapshot row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolDayData {
    pub timestamp: i64,
    pub total_liquidity: String,
    pub total_swap_volume: String,
    pub total_swap_fee: String,
    pub total_swap_count: String,
}

/// Result shape of [`queries::PROTOCOL_SNAPSHOTS`](super::queries::PROTOCOL_SNAPSHOTS).
#[derive(Debug, Deserialize)]
pub struct ProtocolSnapshots {
    #[serde(rename = "protocolSnapshots")]
    pub snapshots: Vec<ProtocolDayData>,
}

/// One latest-price row. `asset` is the on-chain address.
#[derive(Debug, Clone, Deserialize)]
pub struct LatestPriceRecord {
    pub asset: String,
    #[serde(rename = "priceUSD")]
    pub price_usd: String,
}

/// Result shape of [`queries::LATEST_PRICES`](super::queries::LATEST_PRICES).
#[derive(Debug, Deserialize)]
pub struct LatestPrices {
    #[serde(rename = "latestPrices")]
    pub prices: Vec<LatestPriceRecord>,
}

/// One day-granular token snapshot row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDayData {
    pub timestamp: i64,
    #[serde(rename = "priceUSD")]
    pub price_usd: String,
    pub total_liquidity: String,
    pub swap_volume: String,
}

/// Result shape of [`queries::TOKEN_SNAPSHOTS`](super::queries::TOKEN_SNAPSHOTS).
#[derive(Debug, Deserialize)]
pub struct TokenSnapshots {
    #[serde(rename = "tokenSnapshots")]
    pub snapshots: Vec<TokenDayData>,
}
