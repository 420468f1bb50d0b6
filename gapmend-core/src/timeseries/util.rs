//! Shared helpers for series invariants.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::GapmendError;
use crate::series::Bar;

pub(crate) fn rfc3339(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Ensure bar timestamps are strictly increasing.
///
/// # Errors
/// - Returns `Err(GapmendError::DuplicateTimestamp)` if two adjacent bars share a timestamp.
/// - Returns `Err(GapmendError::NonMonotonic)` if a bar is earlier than its predecessor.
pub fn ensure_strictly_increasing(bars: &[Bar]) -> Result<(), GapmendError> {
    for (i, w) in bars.windows(2).enumerate() {
        let position = i + 1;
        match w[1].ts.cmp(&w[0].ts) {
            core::cmp::Ordering::Greater => {}
            core::cmp::Ordering::Equal => {
                return Err(GapmendError::DuplicateTimestamp {
                    position,
                    ts: rfc3339(w[1].ts),
                });
            }
            core::cmp::Ordering::Less => {
                return Err(GapmendError::NonMonotonic {
                    position,
                    ts: rfc3339(w[1].ts),
                });
            }
        }
    }
    Ok(())
}
