use chrono::{DateTime, Utc};

use crate::GapmendError;
use crate::series::{Bar, Series};
use crate::timeseries::util::rfc3339;

/// One grid slot after realignment.
///
/// `bar` is `None` for slots with no observation. An absent bar is undefined,
/// never a zero price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedRow<'a> {
    /// Grid timestamp.
    pub ts: DateTime<Utc>,
    /// Observation at this slot, if any.
    pub bar: Option<&'a Bar>,
}

impl AlignedRow<'_> {
    /// True when the slot had no observation.
    #[must_use]
    pub const fn is_missing(&self) -> bool {
        self.bar.is_none()
    }
}

/// Reindex `series` onto `grid`.
///
/// Observed bars are carried over untouched; every other slot becomes a
/// missing row. `grid` must be strictly increasing.
///
/// # Errors
/// Returns `Err(GapmendError::OffGrid)` for the first observation whose
/// timestamp is not a grid slot. Such an observation would otherwise be
/// dropped from the result.
pub fn realign<'a>(
    series: &'a Series,
    grid: &[DateTime<Utc>],
) -> Result<Vec<AlignedRow<'a>>, GapmendError> {
    let bars = series.bars();
    let mut out: Vec<AlignedRow<'a>> = Vec::with_capacity(grid.len());
    let mut next = 0usize;
    for &ts in grid {
        if let Some(b) = bars.get(next)
            && b.ts < ts
        {
            return Err(GapmendError::OffGrid { ts: rfc3339(b.ts) });
        }
        let bar = match bars.get(next) {
            Some(b) if b.ts == ts => {
                next += 1;
                Some(b)
            }
            _ => None,
        };
        out.push(AlignedRow { ts, bar });
    }
    if let Some(b) = bars.get(next) {
        return Err(GapmendError::OffGrid { ts: rfc3339(b.ts) });
    }
    Ok(out)
}
