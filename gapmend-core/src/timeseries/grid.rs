use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::series::Series;
use crate::{GapmendError, MarketKind};

/// Observed bounds of one trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionBounds {
    /// Calendar date in the series' timestamp basis.
    pub date: NaiveDate,
    /// Earliest observation of the day.
    pub first: DateTime<Utc>,
    /// Latest observation of the day.
    pub last: DateTime<Utc>,
}

/// Every slot `first + k * step` with `k >= 0` that does not pass `last`.
///
/// Returns an empty grid if `step` is not positive or `last < first`.
///
/// ```
/// use gapmend_core::continuous_grid;
/// use chrono::{DateTime, TimeDelta};
///
/// let t = |s: i64| DateTime::from_timestamp(s, 0).unwrap();
/// let grid = continuous_grid(t(0), t(10_000), TimeDelta::hours(1));
/// // 0, 3600, 7200; the next slot (10800) is past `last`
/// assert_eq!(grid, vec![t(0), t(3_600), t(7_200)]);
/// ```
#[must_use]
pub fn continuous_grid(
    first: DateTime<Utc>,
    last: DateTime<Utc>,
    step: TimeDelta,
) -> Vec<DateTime<Utc>> {
    if step <= TimeDelta::zero() || last < first {
        return Vec::new();
    }
    let slots = (last - first).num_milliseconds() / step.num_milliseconds().max(1);
    let mut out = Vec::with_capacity(usize::try_from(slots).unwrap_or(0).saturating_add(1));
    let mut cur = first;
    while cur <= last {
        out.push(cur);
        match cur.checked_add_signed(step) {
            Some(next) => cur = next,
            None => break,
        }
    }
    out
}

/// Partition observations by calendar day and report each day's bounds.
///
/// Days are keyed by the date of each timestamp in the series' basis (see
/// `SeriesMeta::local_date`) and returned in the order they are first
/// encountered. No exchange calendar is consulted: a day's session is simply
/// its first to last observation.
#[must_use]
pub fn session_bounds(series: &Series) -> Vec<SessionBounds> {
    let meta = series.meta();
    let mut out: Vec<SessionBounds> = Vec::new();
    let mut index: HashMap<NaiveDate, usize> = HashMap::new();
    for ts in series.timestamps() {
        let date = meta.local_date(ts);
        if let Some(&i) = index.get(&date) {
            let b = &mut out[i];
            b.first = b.first.min(ts);
            b.last = b.last.max(ts);
        } else {
            index.insert(date, out.len());
            out.push(SessionBounds {
                date,
                first: ts,
                last: ts,
            });
        }
    }
    out
}

/// Union of per-day grids, deduplicated and sorted.
///
/// Overnight and weekend stretches produce no slots because no sub-grid
/// crosses a day boundary.
#[must_use]
pub fn session_grid(series: &Series, step: TimeDelta) -> Vec<DateTime<Utc>> {
    let sessions = session_bounds(series);
    #[cfg(feature = "tracing")]
    tracing::debug!(sessions = sessions.len(), "partitioned series into sessions");
    let slots: BTreeSet<DateTime<Utc>> = sessions
        .iter()
        .flat_map(|s| continuous_grid(s.first, s.last, step))
        .collect();
    slots.into_iter().collect()
}

/// Build the expected grid for `series` at `step` under `market`.
///
/// An empty series yields an empty grid.
///
/// # Errors
/// Returns `Err(GapmendError::InvalidArg)` if `step` is not positive.
pub fn build_grid(
    series: &Series,
    step: TimeDelta,
    market: MarketKind,
) -> Result<Vec<DateTime<Utc>>, GapmendError> {
    if step <= TimeDelta::zero() {
        return Err(GapmendError::InvalidArg(format!(
            "grid step must be positive, got {}s",
            step.num_seconds()
        )));
    }
    let Some((first, last)) = series.span() else {
        return Ok(Vec::new());
    };
    Ok(match market {
        MarketKind::Continuous => continuous_grid(first, last, step),
        MarketKind::Session => session_grid(series, step),
    })
}
