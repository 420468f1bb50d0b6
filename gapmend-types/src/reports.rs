//! Report envelopes handed to presentation layers.

use serde::{Deserialize, Serialize};

use crate::{GapmendError, MarketKind, Timeframe};

/// Qualitative grade of a repair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Nothing was synthesized.
    Pristine,
    /// Some rows were synthesized, within the configured threshold.
    Repaired,
    /// More of the series was synthesized than the threshold allows; the
    /// repaired shape may not reflect the market.
    Suspect,
}

impl Verdict {
    /// Grade a gap percentage against a suspect threshold.
    ///
    /// A percentage equal to the threshold is still `Repaired`.
    #[must_use]
    pub fn grade(gap_percentage: f64, suspect_threshold_pct: f64) -> Self {
        if gap_percentage > suspect_threshold_pct {
            Self::Suspect
        } else if gap_percentage > 0.0 {
            Self::Repaired
        } else {
            Self::Pristine
        }
    }
}

/// Flat summary of a repair, suitable for tables and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairSummary {
    /// Symbol the series belongs to, when known.
    pub symbol: Option<String>,
    /// Timeframe used for grid spacing, when the spacing maps to a label.
    pub timeframe: Option<Timeframe>,
    /// Grid spacing in seconds.
    pub step_seconds: i64,
    /// Grid layout used.
    pub market: MarketKind,
    /// Rows in the input series.
    pub original_rows: usize,
    /// Rows in the repaired series.
    pub repaired_rows: usize,
    /// Number of synthesized rows.
    pub gap_count: usize,
    /// Share of the repaired series that was synthesized, in percent.
    pub gap_percentage: f64,
    /// Grade of the repair.
    pub verdict: Verdict,
    /// Non-fatal issues encountered while repairing.
    pub warnings: Vec<GapmendError>,
}
