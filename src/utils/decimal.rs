//! Decimal-string parsing.
//!
//! Subgraphs ship numeric fields (`priceUSD`, `totalSwapVolume`, ...) as
//! decimal-encoded strings to avoid float truncation on the wire. The
//! string-in/float-out conversion lives here and nowhere else, backed by
//! BigDecimal so large liquidity figures survive the trip.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

// ============================================
// Sanity Bounds
// ============================================

/// Maximum reasonable USD price for a single asset.
/// Anything above this is a decimal/conversion error, not a price.
pub const MAX_USD_PRICE: f64 = 1e6;

/// Maximum reasonable USD figure for a protocol-level metric
/// (TVL, daily volume, daily fees). $1 trillion covers every DeFi
/// protocol with a wide margin.
pub const MAX_USD_METRIC: f64 = 1e12;

// ============================================
// Parsers
// ============================================

/// Parse a decimal-encoded metric value (TVL, volume, fees, swap count).
///
/// Returns `None` for unparseable, non-finite, or negative values; the
/// caller drops the record and keeps going.
pub fn parse_metric_value(raw: &str) -> Option<f64> {
    let value = BigDecimal::from_str(raw.trim()).ok()?;
    let value = value.to_f64()?;

    if value.is_finite() && (0.0..=MAX_USD_METRIC).contains(&value) {
        Some(value)
    } else {
        None
    }
}

/// Parse a decimal-encoded USD price.
///
/// Same as [`parse_metric_value`] but with the tighter per-asset ceiling:
/// a price that fails to parse is treated as "price absent", never as a
/// fatal error.
pub fn parse_price_usd(raw: &str) -> Option<f64> {
    let price = parse_metric_value(raw)?;

    if price <= MAX_USD_PRICE {
        Some(price)
    } else {
        None
    }
}
