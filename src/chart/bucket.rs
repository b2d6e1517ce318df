use serde::{Deserialize, Serialize};

// ============================================
// Window Constants
// ============================================

/// Seconds in one UTC day.
pub const DAY_SECONDS: i64 = 86_400;

/// Seconds in one week.
pub const WEEK_SECONDS: i64 = 7 * DAY_SECONDS;

// ============================================
// Point Types
// ============================================

/// A raw observation as returned by the query layer.
///
/// `time` is a block or day timestamp in unix seconds; spacing is
/// irregular and ordering is not guaranteed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    pub time: i64,
    pub value: f64,
}

/// A point aligned to a UTC calendar boundary.
///
/// Within one series, `bucket_start` values are strictly increasing and
/// unique.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketedPoint {
    pub bucket_start: i64,
    pub value: f64,
}

// ============================================
// Bucketing Configuration
// ============================================

/// Width of the calendar window points are folded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketWindow {
    Day,
    Week,
}

impl BucketWindow {
    pub fn seconds(self) -> i64 {
        match self {
            BucketWindow::Day => DAY_SECONDS,
            BucketWindow::Week => WEEK_SECONDS,
        }
    }

    /// Label shown next to percent changes in summary cards.
    pub fn label(self) -> &'static str {
        match self {
            BucketWindow::Day => "24h",
            BucketWindow::Week => "7d",
        }
    }
}

/// How values landing in the same bucket are combined.
///
/// Snapshot metrics (TVL, price) keep the last observation of the window;
/// flow metrics (volume, swaps, fees) accumulate across it. Which mode a
/// metric uses is the caller's call, never hard-coded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineMode {
    /// The value of the point with the greatest original time wins.
    Last,
    /// Values are summed.
    Sum,
}

// ============================================
// Bucketing
// ============================================

/// Fold a raw series into fixed calendar buckets, one point per bucket.
///
/// The input need not be sorted; points are stably sorted by time first,
/// so same-timestamp ties keep their input order and `Last` picks the
/// later of them. Bucket boundaries come from floor-division against the
/// window width, anchored to UTC. An empty series produces an empty
/// result, not an error.
pub fn bucket(series: &[RawPoint], window: BucketWindow, mode: CombineMode) -> Vec<BucketedPoint> {
    if series.is_empty() {
        return Vec::new();
    }

    let mut sorted = series.to_vec();
    sorted.sort_by_key(|p| p.time);

    let width = window.seconds();
    let mut out: Vec<BucketedPoint> = Vec::new();

    for point in sorted {
        let bucket_start = point.time - point.time.rem_euclid(width);

        match out.last_mut() {
            Some(last) if last.bucket_start == bucket_start => match mode {
                CombineMode::Last => last.value = point.value,
                CombineMode::Sum => last.value += point.value,
            },
            _ => out.push(BucketedPoint {
                bucket_start,
                value: point.value,
            }),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(time: i64, value: f64) -> RawPoint {
        RawPoint { time, value }
    }

    #[test]
    fn two_points_one_day_apart_land_in_two_buckets() {
        let series = [raw(100, 5.0), raw(90_000, 7.0)];
        let buckets = bucket(&series, BucketWindow::Day, CombineMode::Sum);

        assert_eq!(
            buckets,
            vec![
                BucketedPoint { bucket_start: 0, value: 5.0 },
                BucketedPoint { bucket_start: 86_400, value: 7.0 },
            ]
        );
    }

    #[test]
    fn sum_mode_accumulates_within_a_bucket() {
        let series = [raw(100, 5.0), raw(200, 2.0), raw(86_500, 1.0)];
        let buckets = bucket(&series, BucketWindow::Day, CombineMode::Sum);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].value, 7.0);
        assert_eq!(buckets[1].value, 1.0);
    }

    #[test]
    fn last_mode_keeps_the_latest_observation() {
        let series = [raw(200, 2.0), raw(100, 5.0), raw(300, 9.0)];
        let buckets = bucket(&series, BucketWindow::Day, CombineMode::Last);

        assert_eq!(buckets, vec![BucketedPoint { bucket_start: 0, value: 9.0 }]);
    }

    #[test]
    fn unsorted_input_equals_sorted_input() {
        let sorted = [raw(100, 1.0), raw(90_000, 2.0), raw(200_000, 3.0)];
        let shuffled = [raw(200_000, 3.0), raw(100, 1.0), raw(90_000, 2.0)];

        assert_eq!(
            bucket(&sorted, BucketWindow::Day, CombineMode::Sum),
            bucket(&shuffled, BucketWindow::Day, CombineMode::Sum)
        );
    }

    #[test]
    fn bucket_starts_are_strictly_increasing() {
        let series = [
            raw(5, 1.0),
            raw(86_401, 2.0),
            raw(86_402, 3.0),
            raw(700_000, 4.0),
            raw(10, 5.0),
        ];
        let buckets = bucket(&series, BucketWindow::Day, CombineMode::Sum);

        for pair in buckets.windows(2) {
            assert!(pair[0].bucket_start < pair[1].bucket_start);
        }
    }

    #[test]
    fn weekly_buckets_fold_a_whole_week_together() {
        // Three daily points inside one week plus one in the next
        let series = [
            raw(0, 10.0),
            raw(DAY_SECONDS, 20.0),
            raw(2 * DAY_SECONDS, 30.0),
            raw(WEEK_SECONDS + 1, 40.0),
        ];
        let buckets = bucket(&series, BucketWindow::Week, CombineMode::Sum);

        assert_eq!(
            buckets,
            vec![
                BucketedPoint { bucket_start: 0, value: 60.0 },
                BucketedPoint { bucket_start: WEEK_SECONDS, value: 40.0 },
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(bucket(&[], BucketWindow::Day, CombineMode::Sum).is_empty());
    }

    #[test]
    fn single_point_yields_single_bucket() {
        let buckets = bucket(&[raw(90_000, 7.0)], BucketWindow::Day, CombineMode::Last);
        assert_eq!(buckets, vec![BucketedPoint { bucket_start: 86_400, value: 7.0 }]);
    }
}
