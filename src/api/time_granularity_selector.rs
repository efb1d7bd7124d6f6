use chrono::{DateTime, Datelike, Utc, Weekday};
use tracing::warn;

use crate::core::{SelectedTick, TickCandidate};

const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_WEEK: f64 = 7.0 * SECONDS_PER_DAY;
// 1970-01-04, the first Sunday after the epoch.
const REFERENCE_SUNDAY_SECONDS: f64 = 3.0 * SECONDS_PER_DAY;

const DAY_GRANULARITY_SPAN_DAYS: f64 = 10.0;
const WEEK_GRANULARITY_SPAN_DAYS: f64 = 120.0;
const WEEK_STRIDE_ONE_SPAN_DAYS: f64 = 10.0;
const WEEK_STRIDE_TWO_SPAN_DAYS: f64 = 60.0;
const MONTH_STRIDE_ONE_SPAN_DAYS: f64 = 260.0;
const MONTH_STRIDE_TWO_SPAN_DAYS: f64 = 400.0;

/// Calendar unit used to sample a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeGranularity {
    Day,
    Week { stride: u8 },
    Month { stride: u8 },
}

/// Maps the first-to-last span (in days) to a granularity.
///
/// Every threshold is a strict `<` comparison.
#[must_use]
pub fn resolve_time_granularity(span_days: f64) -> TimeGranularity {
    if span_days < DAY_GRANULARITY_SPAN_DAYS {
        return TimeGranularity::Day;
    }
    if span_days < WEEK_GRANULARITY_SPAN_DAYS {
        // Unreachable stride: spans under 10 days already resolved to `Day`.
        let stride = if span_days < WEEK_STRIDE_ONE_SPAN_DAYS {
            1
        } else if span_days < WEEK_STRIDE_TWO_SPAN_DAYS {
            2
        } else {
            3
        };
        return TimeGranularity::Week { stride };
    }

    let stride = if span_days < MONTH_STRIDE_ONE_SPAN_DAYS {
        1
    } else if span_days < MONTH_STRIDE_TWO_SPAN_DAYS {
        2
    } else {
        3
    };
    TimeGranularity::Month { stride }
}

/// Samples unix-second candidates by day, week or month and labels them.
///
/// Candidates must be ordered by ascending time. Values chrono cannot
/// represent are dropped before the span is measured.
#[must_use]
pub fn select_time_ticks(candidates: &[TickCandidate]) -> Vec<SelectedTick> {
    let dated: Vec<(usize, TickCandidate, DateTime<Utc>)> = candidates
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(index, candidate)| match utc_datetime(candidate.value) {
            Some(date) => Some((index, candidate, date)),
            None => {
                warn!(
                    index,
                    value = candidate.value,
                    "dropping time tick with unrepresentable timestamp"
                );
                None
            }
        })
        .collect();

    let granularity = match (dated.first(), dated.last()) {
        (Some((_, _, first)), Some((_, _, last))) if dated.len() >= 2 => {
            resolve_time_granularity(span_days(*first, *last))
        }
        _ => TimeGranularity::Day,
    };

    dated
        .into_iter()
        .filter(|(_, candidate, date)| is_shown(granularity, candidate.value, *date))
        .map(|(index, candidate, date)| SelectedTick {
            index,
            candidate,
            tick_coord: None,
            time_label: Some(format_time_tick(date, granularity)),
        })
        .collect()
}

fn is_shown(granularity: TimeGranularity, value: f64, date: DateTime<Utc>) -> bool {
    match granularity {
        TimeGranularity::Day => true,
        TimeGranularity::Week { stride } => {
            date.weekday() == Weekday::Sun && is_week_shown(value, stride)
        }
        TimeGranularity::Month { stride } => date.day() == 1 && is_month_shown(date, stride),
    }
}

fn is_week_shown(value: f64, stride: u8) -> bool {
    if stride == 1 {
        return true;
    }
    let weeks_since_reference = ((value - REFERENCE_SUNDAY_SECONDS) / SECONDS_PER_WEEK).floor();
    match stride {
        2 => weeks_since_reference % 2.0 == 0.0,
        _ => weeks_since_reference % 3.0 == 0.0,
    }
}

fn is_month_shown(date: DateTime<Utc>, stride: u8) -> bool {
    if stride == 1 {
        return true;
    }
    let month = date.month();
    match stride {
        2 => month % 2 == 1,
        _ => month % 3 == 1,
    }
}

/// `"Mar 5"` for day and week sampling, `"Mar '24"` for month sampling.
#[must_use]
pub fn format_time_tick(date: DateTime<Utc>, granularity: TimeGranularity) -> String {
    match granularity {
        TimeGranularity::Month { .. } => {
            format!("{} '{:02}", date.format("%b"), date.year().rem_euclid(100))
        }
        TimeGranularity::Day | TimeGranularity::Week { .. } => {
            format!("{} {}", date.format("%b"), date.day())
        }
    }
}

fn utc_datetime(value: f64) -> Option<DateTime<Utc>> {
    if !value.is_finite() {
        return None;
    }
    let millis = (value * 1_000.0).trunc();
    if millis > (i64::MAX as f64) || millis < (i64::MIN as f64) {
        return None;
    }
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
}

fn span_days(first: DateTime<Utc>, last: DateTime<Utc>) -> f64 {
    let millis = last.timestamp_millis() - first.timestamp_millis();
    millis as f64 / 1_000.0 / SECONDS_PER_DAY
}
