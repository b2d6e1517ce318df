//! Utility functions for the spectra dashboard core.
//!
//! - [`decimal`] - Decimal-string parsing and sanity bounds

mod decimal;

pub use decimal::{parse_metric_value, parse_price_usd, MAX_USD_METRIC, MAX_USD_PRICE};
