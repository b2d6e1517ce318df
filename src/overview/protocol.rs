use log::warn;
use serde::Serialize;

use crate::chart::{
    aggregate, bucket, snapshot, AggregatedPoint, BucketWindow, CombineMode, MetricSnapshot,
    RawPoint, TaggedSeries,
};
use crate::error::MetricsError;
use crate::prices::PriceMap;
use crate::registry::ChainId;
use crate::subgraph::ProtocolDayData;
use crate::utils::parse_metric_value;

/// One network's raw protocol metric series, parsed out of subgraph rows.
#[derive(Debug, Clone)]
pub struct ChainProtocolSeries {
    pub chain: ChainId,
    pub tvl: Vec<RawPoint>,
    pub volume: Vec<RawPoint>,
    pub fees: Vec<RawPoint>,
    pub swaps: Vec<RawPoint>,
}

impl ChainProtocolSeries {
    /// Parse subgraph rows into per-metric series.
    ///
    /// Each metric is extracted independently: a row whose volume field is
    /// malformed still contributes its TVL point. Dropped values are
    /// logged, never propagated.
    pub fn from_rows(chain: ChainId, rows: &[ProtocolDayData]) -> Self {
        Self {
            tvl: metric_points(&chain, rows, "totalLiquidity", |r| &r.total_liquidity),
            volume: metric_points(&chain, rows, "totalSwapVolume", |r| &r.total_swap_volume),
            fees: metric_points(&chain, rows, "totalSwapFee", |r| &r.total_swap_fee),
            swaps: metric_points(&chain, rows, "totalSwapCount", |r| &r.total_swap_count),
            chain,
        }
    }

    /// A chain that returned no usable data; renders as gaps, not zeros.
    pub fn empty(chain: ChainId) -> Self {
        Self {
            chain,
            tvl: Vec::new(),
            volume: Vec::new(),
            fees: Vec::new(),
            swaps: Vec::new(),
        }
    }
}

fn metric_points(
    chain: &ChainId,
    rows: &[ProtocolDayData],
    field: &str,
    extract: impl Fn(&ProtocolDayData) -> &str,
) -> Vec<RawPoint> {
    rows.iter()
        .filter_map(|row| match parse_metric_value(extract(row)) {
            Some(value) => Some(RawPoint { time: row.timestamp, value }),
            None => {
                warn!(
                    "Dropping malformed {} record on {} at t={}: {:?}",
                    field,
                    chain,
                    row.timestamp,
                    extract(row)
                );
                None
            },
        })
        .collect()
}

/// Everything the protocol overview page renders.
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolOverview {
    pub tvl_daily: Vec<AggregatedPoint>,
    pub volume_daily: Vec<AggregatedPoint>,
    pub volume_weekly: Vec<AggregatedPoint>,
    pub swaps_weekly: Vec<AggregatedPoint>,
    pub fees_weekly: Vec<AggregatedPoint>,
    pub tvl: MetricSnapshot,
    pub volume: MetricSnapshot,
    pub swaps: MetricSnapshot,
    pub fees: MetricSnapshot,
    pub prices: PriceMap,
}

/// Run every chain's series through the chart pipeline and derive the
/// active network's summary snapshots.
///
/// Charts merge all chains; snapshots are taken from the active network's
/// own daily series (TVL against the day window, flow metrics against the
/// week window). A chain with no data simply contributes nothing.
pub fn build_protocol_overview(
    series: &[ChainProtocolSeries],
    active: &ChainId,
    prices: PriceMap,
    now: i64,
) -> Result<ProtocolOverview, MetricsError> {
    let tvl_daily = merged(series, |s| &s.tvl, BucketWindow::Day, CombineMode::Last)?;
    let volume_daily = merged(series, |s| &s.volume, BucketWindow::Day, CombineMode::Sum)?;
    let volume_weekly = merged(series, |s| &s.volume, BucketWindow::Week, CombineMode::Sum)?;
    let swaps_weekly = merged(series, |s| &s.swaps, BucketWindow::Week, CombineMode::Sum)?;
    let fees_weekly = merged(series, |s| &s.fees, BucketWindow::Week, CombineMode::Sum)?;

    let active_series = series.iter().find(|s| &s.chain == active);

    let daily = |points: fn(&ChainProtocolSeries) -> &Vec<RawPoint>, mode: CombineMode| {
        active_series
            .map(|s| bucket(points(s), BucketWindow::Day, mode))
            .unwrap_or_default()
    };

    let tvl = snapshot(&daily(|s| &s.tvl, CombineMode::Last), BucketWindow::Day, now);
    let volume = snapshot(&daily(|s| &s.volume, CombineMode::Sum), BucketWindow::Week, now);
    let swaps = snapshot(&daily(|s| &s.swaps, CombineMode::Sum), BucketWindow::Week, now);
    let fees = snapshot(&daily(|s| &s.fees, CombineMode::Sum), BucketWindow::Week, now);

    Ok(ProtocolOverview {
        tvl_daily,
        volume_daily,
        volume_weekly,
        swaps_weekly,
        fees_weekly,
        tvl,
        volume,
        swaps,
        fees,
        prices,
    })
}

/// Bucket one metric per chain, tag it, and merge across chains.
fn merged(
    series: &[ChainProtocolSeries],
    points: impl Fn(&ChainProtocolSeries) -> &Vec<RawPoint>,
    window: BucketWindow,
    mode: CombineMode,
) -> Result<Vec<AggregatedPoint>, MetricsError> {
    let tagged = series
        .iter()
        .map(|s| crate::chart::tag(bucket(points(s), window, mode), s.chain.clone()))
        .collect::<Result<Vec<TaggedSeries>, _>>()?;

    Ok(aggregate(&tagged))
}
