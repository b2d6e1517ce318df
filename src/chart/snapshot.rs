use serde::Serialize;

use crate::chart::{BucketWindow, BucketedPoint};

/// Latest value and percent change for a summary card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSnapshot {
    pub current: f64,
    pub change_percent: f64,
    pub window_label: &'static str,
}

/// Compute the latest value of a series and its percent change versus the
/// start of the reference window.
///
/// The window start is the value of the point at or immediately before
/// `now - window`; with no such point (insufficient history) it is 0, and
/// the change is reported as 0 rather than dividing by zero. Empty and
/// single-point series produce zero-valued snapshots, never an error.
pub fn snapshot(series: &[BucketedPoint], window: BucketWindow, now: i64) -> MetricSnapshot {
    let window_label = window.label();

    let Some(last) = series.last() else {
        return MetricSnapshot { current: 0.0, change_percent: 0.0, window_label };
    };

    let current = last.value;
    let cutoff = now - window.seconds();

    // Points are ascending by bucket start, so the window start is the last
    // point not after the cutoff.
    let at_or_before = series.partition_point(|p| p.bucket_start <= cutoff);
    let window_start = at_or_before
        .checked_sub(1)
        .map(|i| series[i].value)
        .unwrap_or(0.0);

    let change_percent = if window_start == 0.0 {
        0.0
    } else {
        (current - window_start) / window_start * 100.0
    };

    MetricSnapshot { current, change_percent, window_label }
}
