use log::warn;
use serde::Serialize;

use crate::chart::{
    aggregate, bucket, snapshot, tag, AggregatedPoint, BucketWindow, CombineMode, MetricSnapshot,
    RawPoint,
};
use crate::error::MetricsError;
use crate::registry::ChainId;
use crate::subgraph::TokenDayData;
use crate::utils::{parse_metric_value, parse_price_usd};

/// One token's raw day series on the active network.
#[derive(Debug, Clone)]
pub struct TokenSeries {
    pub chain: ChainId,
    pub price: Vec<RawPoint>,
    pub volume: Vec<RawPoint>,
    pub tvl: Vec<RawPoint>,
}

impl TokenSeries {
    /// Parse token snapshot rows, dropping malformed values per metric.
    pub fn from_rows(chain: ChainId, rows: &[TokenDayData]) -> Self {
        let mut price = Vec::with_capacity(rows.len());
        let mut volume = Vec::with_capacity(rows.len());
        let mut tvl = Vec::with_capacity(rows.len());

        for row in rows {
            match parse_price_usd(&row.price_usd) {
                Some(value) => price.push(RawPoint { time: row.timestamp, value }),
                None => warn!(
                    "Dropping malformed priceUSD on {} at t={}: {:?}",
                    chain, row.timestamp, row.price_usd
                ),
            }
            match parse_metric_value(&row.swap_volume) {
                Some(value) => volume.push(RawPoint { time: row.timestamp, value }),
                None => warn!(
                    "Dropping malformed swapVolume on {} at t={}: {:?}",
                    chain, row.timestamp, row.swap_volume
                ),
            }
            match parse_metric_value(&row.total_liquidity) {
                Some(value) => tvl.push(RawPoint { time: row.timestamp, value }),
                None => warn!(
                    "Dropping malformed totalLiquidity on {} at t={}: {:?}",
                    chain, row.timestamp, row.total_liquidity
                ),
            }
        }

        Self { chain, price, volume, tvl }
    }

    pub fn empty(chain: ChainId) -> Self {
        Self {
            chain,
            price: Vec::new(),
            volume: Vec::new(),
            tvl: Vec::new(),
        }
    }
}

/// Everything the token page renders for one token.
#[derive(Debug, Clone, Serialize)]
pub struct TokenOverview {
    pub price_daily: Vec<AggregatedPoint>,
    pub volume_daily: Vec<AggregatedPoint>,
    pub tvl_daily: Vec<AggregatedPoint>,
    pub price: MetricSnapshot,
    pub volume: MetricSnapshot,
    pub tvl: MetricSnapshot,
}

/// Build the token page data from one network's series.
///
/// Token views are single-network, so the merge runs on a one-element set;
/// the same pipeline handles it identically to the multi-chain case.
pub fn build_token_overview(series: &TokenSeries, now: i64) -> Result<TokenOverview, MetricsError> {
    let price_buckets = bucket(&series.price, BucketWindow::Day, CombineMode::Last);
    let volume_buckets = bucket(&series.volume, BucketWindow::Day, CombineMode::Sum);
    let tvl_buckets = bucket(&series.tvl, BucketWindow::Day, CombineMode::Last);

    let price = snapshot(&price_buckets, BucketWindow::Day, now);
    let volume = snapshot(&volume_buckets, BucketWindow::Week, now);
    let tvl = snapshot(&tvl_buckets, BucketWindow::Day, now);

    let chain = &series.chain;
    Ok(TokenOverview {
        price_daily: aggregate(&[tag(price_buckets, chain.clone())?]),
        volume_daily: aggregate(&[tag(volume_buckets, chain.clone())?]),
        tvl_daily: aggregate(&[tag(tvl_buckets, chain.clone())?]),
        price,
        volume,
        tvl,
    })
}
