use chrono::{DateTime, TimeDelta, Utc};
use gapmend_core::{
    GapmendError, Strictness, Timeframe, estimate_step_seconds, is_subdaily, resolve_interval,
    resolve_interval_with,
};
use proptest::prelude::*;

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn stamps(secs: &[i64]) -> Vec<DateTime<Utc>> {
    secs.iter().copied().map(t).collect()
}

#[test]
fn labels_resolve_to_their_spacing() {
    assert_eq!(resolve_interval("1m"), TimeDelta::minutes(1));
    assert_eq!(resolve_interval("90m"), TimeDelta::minutes(90));
    assert_eq!(resolve_interval("60m"), resolve_interval("1h"));
    assert_eq!(resolve_interval(""), TimeDelta::hours(1));
}

#[test]
fn permissive_resolution_flags_the_fallback() {
    let r = resolve_interval_with("1w", Strictness::Permissive).unwrap();
    assert!(r.fell_back);
    assert_eq!(r.timeframe, Timeframe::H1);
    assert_eq!(r.step, TimeDelta::hours(1));

    let r = resolve_interval_with("5m", Strictness::Permissive).unwrap();
    assert!(!r.fell_back);
    assert_eq!(r.step, TimeDelta::minutes(5));
}

#[test]
fn strict_resolution_rejects_unknown_labels() {
    let err = resolve_interval_with("1w", Strictness::Strict).unwrap_err();
    assert_eq!(err, GapmendError::unknown_timeframe("1w"));
    assert!(resolve_interval_with("30m", Strictness::Strict).is_ok());
}

#[test]
fn estimate_ignores_order_and_duplicates() {
    let ts = stamps(&[600, 0, 300, 300, 900]);
    assert_eq!(estimate_step_seconds(&ts), Some(300));
}

#[test]
fn sub_second_spacing_never_yields_a_zero_step() {
    let ms = |v: i64| DateTime::from_timestamp_millis(v).unwrap();
    assert_eq!(estimate_step_seconds(&[ms(0), ms(500), ms(1_000)]), None);
    assert_eq!(
        estimate_step_seconds(&[ms(0), ms(500), ms(1_500), ms(2_500)]),
        Some(1)
    );
}

#[test]
fn subdaily_needs_sixty_percent_intraday_deltas() {
    let h = 3_600;
    let d = 86_400;
    // 3 of 5 deltas intraday
    assert!(is_subdaily(&stamps(&[0, h, 2 * h, 3 * h, 3 * h + d, 3 * h + 2 * d])));
    // 3 of 6 deltas intraday
    assert!(!is_subdaily(&stamps(&[
        0,
        h,
        2 * h,
        3 * h,
        3 * h + d,
        3 * h + 2 * d,
        3 * h + 3 * d
    ])));
    // Two intraday deltas are never enough
    assert!(!is_subdaily(&stamps(&[0, h, 2 * h])));
}

#[test]
fn hourly_session_data_is_subdaily() {
    // Two trading days of 7 hourly bars, one overnight jump
    let mut secs: Vec<i64> = (0..7).map(|h| h * 3_600).collect();
    secs.extend((0..7).map(|h| 86_400 + h * 3_600));
    let ts = stamps(&secs);
    assert!(is_subdaily(&ts));
    assert_eq!(estimate_step_seconds(&ts), Some(3_600));
}

proptest! {
    #[test]
    fn constant_step_survives_sparse_gaps(
        step in prop::sample::select(vec![60i64, 300, 3_600]),
        n in 8usize..120,
        holes in prop::collection::btree_set(1usize..120, 0..3),
        rev in any::<bool>(),
    ) {
        // Drop up to two interior slots; the base step stays the mode
        let mut secs: Vec<i64> = (0..n)
            .filter(|i| !holes.contains(i) || *i + 1 == n)
            .map(|i| i64::try_from(i).unwrap() * step)
            .collect();
        if rev { secs.reverse(); }
        prop_assert_eq!(estimate_step_seconds(&stamps(&secs)), Some(step));
        prop_assert!(is_subdaily(&stamps(&secs)));
    }

    #[test]
    fn daily_steps_are_not_subdaily(n in 5usize..50, short_gaps in 0usize..=2) {
        let mut secs: Vec<i64> = vec![0];
        let mut cur = 0i64;
        let mut used = 0usize;
        for i in 0..(n - 1) {
            let d = if used < short_gaps && i % 7 == 0 { used += 1; 60 } else { 86_400 };
            cur += d;
            secs.push(cur);
        }
        let ts = stamps(&secs);
        prop_assert_eq!(estimate_step_seconds(&ts), Some(86_400));
        prop_assert!(!is_subdaily(&ts));
    }

    #[test]
    fn equal_frequencies_pick_the_smaller_step(
        a in prop::sample::select(vec![60i64, 120]),
        b in prop::sample::select(vec![300i64, 600]),
        k in 1usize..40,
    ) {
        let mut secs = vec![0i64];
        let mut cur = 0i64;
        for _ in 0..k { cur += a; secs.push(cur); }
        for _ in 0..k { cur += b; secs.push(cur); }
        secs.rotate_left(k / 2);
        prop_assert_eq!(estimate_step_seconds(&stamps(&secs)), Some(a));
    }

    #[test]
    fn fewer_than_two_distinct_stamps_give_nothing(len in 0usize..4, at in -1_000i64..1_000) {
        let ts = vec![t(at); len];
        prop_assert_eq!(estimate_step_seconds(&ts), None);
        prop_assert!(!is_subdaily(&ts));
    }

    #[test]
    fn estimate_is_never_zero(millis in prop::collection::vec(0i64..10_000, 0..40)) {
        let ts: Vec<_> = millis
            .iter()
            .map(|&m| DateTime::from_timestamp_millis(m).unwrap())
            .collect();
        if let Some(step) = estimate_step_seconds(&ts) {
            prop_assert!(step > 0);
        }
    }

    #[test]
    fn translation_invariance(
        step in prop::sample::select(vec![60i64, 600, 3_600, 86_400]),
        n in 3usize..100,
        offset in -1_000_000i64..1_000_000,
    ) {
        let secs: Vec<i64> = (0..n).map(|i| i64::try_from(i).unwrap() * step).collect();
        let shifted: Vec<i64> = secs.iter().map(|s| s + offset).collect();
        prop_assert_eq!(estimate_step_seconds(&stamps(&secs)), estimate_step_seconds(&stamps(&shifted)));
        prop_assert_eq!(is_subdaily(&stamps(&secs)), is_subdaily(&stamps(&shifted)));
    }
}
