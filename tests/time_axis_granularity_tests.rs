use cartesian_axis::api::{
    AxisConfig, TickInterval, TimeGranularity, get_visible_ticks, resolve_time_granularity,
    select_time_ticks,
};
use cartesian_axis::core::{AxisOrientation, AxisRect, TickCandidate};

const DAY: f64 = 86_400.0;
// 2023-01-01T00:00:00Z
const JAN_1_2023: f64 = 1_672_531_200.0;
// 2024-01-01T00:00:00Z
const JAN_1_2024: f64 = 1_704_067_200.0;
// 2024-03-01T00:00:00Z
const MAR_1_2024: f64 = 1_709_251_200.0;
// 2024-03-05T00:00:00Z
const MAR_5_2024: f64 = 1_709_596_800.0;

fn daily_candidates(start: f64, span_days: usize) -> Vec<TickCandidate> {
    (0..=span_days)
        .map(|day| TickCandidate::new(start + day as f64 * DAY, day as f64 * 3.0))
        .collect()
}

fn labels(candidates: &[TickCandidate]) -> Vec<String> {
    let config = AxisConfig::new(AxisOrientation::Bottom, AxisRect::new(0.0, 0.0, 1200.0, 30.0))
        .with_interval(TickInterval::Time);
    get_visible_ticks(candidates, &config, None, None)
        .into_iter()
        .map(|tick| tick.label)
        .collect()
}

#[test]
fn two_ticks_five_days_apart_use_day_labels() {
    let candidates = [
        TickCandidate::new(MAR_5_2024, 0.0),
        TickCandidate::new(MAR_5_2024 + 5.0 * DAY, 100.0),
    ];
    assert_eq!(labels(&candidates), vec!["Mar 5", "Mar 10"]);
}

#[test]
fn single_tick_uses_day_label() {
    let candidates = [TickCandidate::new(MAR_5_2024, 0.0)];
    assert_eq!(labels(&candidates), vec!["Mar 5"]);
}

#[test]
fn every_tick_is_shown_below_ten_days() {
    let candidates = daily_candidates(MAR_5_2024, 5);
    assert_eq!(
        labels(&candidates),
        vec!["Mar 5", "Mar 6", "Mar 7", "Mar 8", "Mar 9", "Mar 10"]
    );
}

#[test]
fn fifteen_day_span_samples_every_other_sunday() {
    // Sundays in range: Mar 3 (week 2826) and Mar 10 (week 2827).
    let candidates = daily_candidates(MAR_1_2024, 15);
    assert_eq!(labels(&candidates), vec!["Mar 3"]);
}

#[test]
fn ten_day_span_switches_to_weekly_sampling() {
    // 2024-03-01 .. 2024-03-11 covers Sundays Mar 3 and Mar 10.
    let candidates = daily_candidates(MAR_1_2024, 10);
    assert_eq!(labels(&candidates), vec!["Mar 3"]);

    let just_under = [
        TickCandidate::new(MAR_1_2024, 0.0),
        TickCandidate::new(MAR_1_2024 + 10.0 * DAY - 1.0, 100.0),
    ];
    assert_eq!(labels(&just_under).len(), 2);
}

#[test]
fn fifty_nine_day_span_uses_week_stride_two() {
    let candidates = daily_candidates(JAN_1_2024, 59);
    assert_eq!(
        labels(&candidates),
        vec!["Jan 7", "Jan 21", "Feb 4", "Feb 18"]
    );
}

#[test]
fn sixty_day_span_uses_week_stride_three() {
    let candidates = daily_candidates(JAN_1_2024, 60);
    assert_eq!(labels(&candidates), vec!["Jan 21", "Feb 11"]);
}

#[test]
fn one_hundred_nineteen_day_span_is_still_weekly() {
    let candidates = daily_candidates(JAN_1_2024, 119);
    assert_eq!(
        labels(&candidates),
        vec!["Jan 21", "Feb 11", "Mar 3", "Mar 24", "Apr 14"]
    );
}

#[test]
fn one_hundred_twenty_day_span_switches_to_every_month() {
    let candidates = daily_candidates(JAN_1_2024, 120);
    assert_eq!(
        labels(&candidates),
        vec!["Jan '24", "Feb '24", "Mar '24", "Apr '24"]
    );
}

#[test]
fn two_hundred_fifty_nine_day_span_keeps_every_month() {
    let candidates = daily_candidates(JAN_1_2023, 259);
    assert_eq!(labels(&candidates).len(), 9);
}

#[test]
fn two_hundred_sixty_day_span_keeps_odd_months() {
    let candidates = daily_candidates(JAN_1_2023, 260);
    assert_eq!(
        labels(&candidates),
        vec!["Jan '23", "Mar '23", "May '23", "Jul '23", "Sep '23"]
    );
}

#[test]
fn three_hundred_day_span_uses_month_stride_two() {
    let candidates = daily_candidates(JAN_1_2024, 300);
    assert_eq!(
        labels(&candidates),
        vec!["Jan '24", "Mar '24", "May '24", "Jul '24", "Sep '24"]
    );
}

#[test]
fn three_hundred_ninety_nine_day_span_uses_month_stride_two() {
    let candidates = daily_candidates(JAN_1_2023, 399);
    assert_eq!(
        labels(&candidates),
        vec![
            "Jan '23", "Mar '23", "May '23", "Jul '23", "Sep '23", "Nov '23", "Jan '24"
        ]
    );
}

#[test]
fn four_hundred_day_span_keeps_quarter_starts() {
    let candidates = daily_candidates(JAN_1_2023, 400);
    assert_eq!(
        labels(&candidates),
        vec!["Jan '23", "Apr '23", "Jul '23", "Oct '23", "Jan '24"]
    );
}

#[test]
fn weekly_sampling_hides_non_sundays() {
    let selected = select_time_ticks(&daily_candidates(JAN_1_2024, 59));
    assert!(selected.iter().all(|tick| tick.tick_coord.is_none()));
    // Every kept index is a Sunday: Jan 7 is day 6 of the range.
    let indices: Vec<usize> = selected.iter().map(|tick| tick.index).collect();
    assert_eq!(indices, vec![6, 20, 34, 48]);
}

#[test]
fn unrepresentable_timestamps_are_dropped() {
    let candidates = [
        TickCandidate::new(f64::NAN, 0.0),
        TickCandidate::new(MAR_5_2024, 10.0),
    ];
    assert_eq!(labels(&candidates), vec!["Mar 5"]);
}

#[test]
fn granularity_resolution_pins_documented_boundaries() {
    assert_eq!(resolve_time_granularity(5.0), TimeGranularity::Day);
    assert_eq!(
        resolve_time_granularity(15.0),
        TimeGranularity::Week { stride: 2 }
    );
    assert_eq!(
        resolve_time_granularity(300.0),
        TimeGranularity::Month { stride: 2 }
    );
}
