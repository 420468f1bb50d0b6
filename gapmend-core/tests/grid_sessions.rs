use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::America::New_York;
use gapmend_core::{
    Bar, MarketKind, Series, SeriesMeta, build_grid, continuous_grid, session_bounds,
    session_grid,
};
use rust_decimal::Decimal;

fn t(sec: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(sec, 0).unwrap()
}

fn bars(ts: &[i64]) -> Vec<Bar> {
    ts.iter().map(|&s| Bar::new(t(s), Decimal::ONE)).collect()
}

#[test]
fn continuous_grid_includes_aligned_end() {
    let grid = continuous_grid(t(0), t(3 * 3_600), TimeDelta::hours(1));
    assert_eq!(grid.len(), 4);
    assert_eq!(grid.last().copied(), Some(t(3 * 3_600)));
}

#[test]
fn continuous_grid_degenerate_inputs() {
    assert!(continuous_grid(t(10), t(0), TimeDelta::hours(1)).is_empty());
    assert!(continuous_grid(t(0), t(10), TimeDelta::zero()).is_empty());
    assert!(continuous_grid(t(0), t(10), TimeDelta::seconds(-5)).is_empty());
    assert_eq!(continuous_grid(t(5), t(5), TimeDelta::hours(1)), vec![t(5)]);
}

#[test]
fn naive_sessions_split_on_utc_dates() {
    // 23:00 on day 0 and 01:00 on day 1
    let series = Series::naive(bars(&[23 * 3_600, 25 * 3_600])).unwrap();
    let sessions = session_bounds(&series);
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    assert_eq!(sessions[1].date, NaiveDate::from_ymd_opt(1970, 1, 2).unwrap());
    // Two one-slot sessions: midnight is not synthesized
    assert_eq!(session_grid(&series, TimeDelta::hours(1)).len(), 2);
}

#[test]
fn aware_sessions_group_by_local_date() {
    // Same instants, but both fall on Jan 1 in New York (18:00 and 20:00)
    let series = Series::new(
        bars(&[23 * 3_600, 25 * 3_600]),
        SeriesMeta::with_timezone(New_York),
    )
    .unwrap();
    let sessions = session_bounds(&series);
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
    let grid = session_grid(&series, TimeDelta::hours(1));
    assert_eq!(grid, vec![t(23 * 3_600), t(24 * 3_600), t(25 * 3_600)]);
}

#[test]
fn fixed_offset_sessions_group_by_shifted_date() {
    let series = Series::new(
        bars(&[23 * 3_600, 25 * 3_600]),
        SeriesMeta::with_offset(-5 * 3_600).unwrap(),
    )
    .unwrap();
    assert_eq!(session_bounds(&series).len(), 1);
}

#[test]
fn session_grid_skips_weekend() {
    let ny = |d: u32, h: u32| {
        New_York
            .with_ymd_and_hms(2024, 3, d, h, 30, 0)
            .unwrap()
            .with_timezone(&Utc)
    };
    // Friday 1st and Monday 4th of March 2024
    let series = Series::new(
        vec![
            Bar::new(ny(1, 9), Decimal::ONE),
            Bar::new(ny(1, 15), Decimal::ONE),
            Bar::new(ny(4, 9), Decimal::ONE),
            Bar::new(ny(4, 15), Decimal::ONE),
        ],
        SeriesMeta::with_timezone(New_York),
    )
    .unwrap();
    let session = build_grid(&series, TimeDelta::hours(1), MarketKind::Session).unwrap();
    assert_eq!(session.len(), 14);
    let continuous = build_grid(&series, TimeDelta::hours(1), MarketKind::Continuous).unwrap();
    assert_eq!(continuous.len(), 3 * 24 + 7);
}

#[test]
fn session_grid_across_dst_start_uses_absolute_spacing() {
    // 2024-03-10: New York springs forward at 02:00 local
    let start = New_York
        .with_ymd_and_hms(2024, 3, 10, 0, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    let end = New_York
        .with_ymd_and_hms(2024, 3, 10, 5, 0, 0)
        .unwrap()
        .with_timezone(&Utc);
    let series = Series::new(
        vec![Bar::new(start, Decimal::ONE), Bar::new(end, Decimal::TWO)],
        SeriesMeta::with_timezone(New_York),
    )
    .unwrap();
    // Five wall-clock hours are only four elapsed hours on this day
    let grid = session_grid(&series, TimeDelta::hours(1));
    assert_eq!(grid.len(), 5);
    assert_eq!(grid.first().copied(), Some(start));
    assert_eq!(grid.last().copied(), Some(end));
}

#[test]
fn empty_series_has_empty_grid() {
    let series = Series::empty(SeriesMeta::naive());
    assert!(build_grid(&series, TimeDelta::hours(1), MarketKind::Continuous)
        .unwrap()
        .is_empty());
    assert!(session_bounds(&series).is_empty());
}
