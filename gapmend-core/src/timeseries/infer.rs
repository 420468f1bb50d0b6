use chrono::{DateTime, TimeDelta, Utc};

/// Adjacent deltas of the sorted timestamps, in whole seconds.
/// Repeated timestamps and sub-second deltas contribute nothing.
fn positive_deltas(timestamps: &[DateTime<Utc>]) -> Vec<i64> {
    let mut ts = timestamps.to_vec();
    ts.sort_unstable();
    ts.windows(2)
        .map(|w| (w[1] - w[0]).num_seconds())
        .filter(|&secs| secs > 0)
        .collect()
}

/// Estimate the sampling interval (in seconds) of a series of timestamps.
///
/// Prefer the mode (most frequent positive delta); if there is no unique mode,
/// return the lower median. Gaps make some deltas a multiple of the true
/// step, so the mode is a better estimate than the mean.
///
/// ```
/// use gapmend_core::estimate_step_seconds;
/// use chrono::{DateTime, Utc};
///
/// fn t(sec: i64) -> DateTime<Utc> { DateTime::from_timestamp(sec, 0).unwrap() }
///
/// // Adjacent deltas: 60,60,60,120,180  => unique mode is 60
/// let ts = vec![t(0), t(60), t(120), t(180), t(300), t(480)];
/// assert_eq!(estimate_step_seconds(&ts), Some(60));
///
/// // Adjacent deltas: 60,60,120,120  => lower median is 60
/// let ts = vec![t(0), t(60), t(120), t(240), t(360)];
/// assert_eq!(estimate_step_seconds(&ts), Some(60));
/// ```
///
/// The input order does not matter; duplicates are ignored. Returns `None` if
/// no two timestamps are at least a second apart, so the result is never zero.
#[must_use]
pub fn estimate_step_seconds(timestamps: &[DateTime<Utc>]) -> Option<i64> {
    let mut deltas = positive_deltas(timestamps);
    deltas.sort_unstable();

    // Runs of equal deltas as (delta, count)
    let runs: Vec<(i64, usize)> = deltas
        .chunk_by(|a, b| a == b)
        .map(|run| (run[0], run.len()))
        .collect();
    let top = runs.iter().map(|&(_, n)| n).max()?;
    let mut modes = runs.iter().filter(|&&(_, n)| n == top);
    if let (Some(&(mode, _)), None) = (modes.next(), modes.next()) {
        return Some(mode);
    }

    // Lower median
    deltas.get((deltas.len() - 1) / 2).copied()
}

/// Heuristic: determine if a series of timestamps is sub-daily.
///
/// Returns `true` only if at least 3 adjacent deltas are shorter than a day
/// and those make up at least 60% of all deltas.
#[must_use]
pub fn is_subdaily(timestamps: &[DateTime<Utc>]) -> bool {
    let deltas = positive_deltas(timestamps);
    let day = TimeDelta::days(1).num_seconds();
    let intraday = deltas.iter().filter(|&&d| d < day).count();
    intraday >= 3 && intraday * 5 >= deltas.len() * 3
}
