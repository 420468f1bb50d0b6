use chrono::TimeDelta;

use crate::{GapmendError, Strictness, Timeframe};

/// A timeframe label resolved to grid spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    /// Timeframe actually used.
    pub timeframe: Timeframe,
    /// Grid spacing.
    pub step: TimeDelta,
    /// True when the label was not recognized and the default was used.
    pub fell_back: bool,
}

/// Grid spacing for a timeframe.
#[must_use]
pub fn step_for(timeframe: Timeframe) -> TimeDelta {
    TimeDelta::minutes(timeframe.minutes())
}

/// Map a timeframe label to grid spacing.
///
/// Unrecognized labels fall back to one hour. Callers that must reject bad
/// labels should use [`resolve_interval_with`] and `Strictness::Strict`.
///
/// ```
/// use gapmend_core::resolve_interval;
/// use chrono::TimeDelta;
///
/// assert_eq!(resolve_interval("15m"), TimeDelta::minutes(15));
/// assert_eq!(resolve_interval("4h"), TimeDelta::hours(4));
/// assert_eq!(resolve_interval("weekly"), TimeDelta::hours(1));
/// ```
#[must_use]
pub fn resolve_interval(label: &str) -> TimeDelta {
    label
        .parse::<Timeframe>()
        .map_or_else(|_| step_for(Timeframe::default()), step_for)
}

/// Map a timeframe label to grid spacing under an explicit fallback policy.
///
/// # Errors
/// Returns `Err(GapmendError::UnknownTimeframe)` for an unrecognized label
/// when `strictness` is `Strict`.
pub fn resolve_interval_with(label: &str, strictness: Strictness) -> Result<Resolved, GapmendError> {
    match label.parse::<Timeframe>() {
        Ok(timeframe) => Ok(Resolved {
            timeframe,
            step: step_for(timeframe),
            fell_back: false,
        }),
        Err(e) => match strictness {
            Strictness::Strict => Err(e),
            Strictness::Permissive => {
                let timeframe = Timeframe::default();
                #[cfg(feature = "tracing")]
                tracing::debug!(label, fallback = %timeframe, "unknown timeframe label; using fallback");
                Ok(Resolved {
                    timeframe,
                    step: step_for(timeframe),
                    fell_back: true,
                })
            }
        },
    }
}
