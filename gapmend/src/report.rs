use chrono::TimeDelta;
use gapmend_core::{
    Frame, GapmendError, MarketKind, RepairSummary, Repaired, RepairedBar, Timeframe, Verdict,
};

/// Outcome of one repair request.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairReport {
    /// Repaired rows, metrics, and provenance mask.
    pub repaired: Repaired,
    /// Symbol the series belongs to, when the caller supplied one.
    pub symbol: Option<String>,
    /// Timeframe the grid spacing corresponds to. `None` for a spacing that
    /// has no label, e.g. an inferred 7-minute step.
    pub timeframe: Option<Timeframe>,
    /// Grid spacing.
    pub step: TimeDelta,
    /// Grid layout used.
    pub market: MarketKind,
    /// Name of the reference field the prices came from.
    pub reference_field: String,
    /// Grade of the repair against the configured threshold.
    pub verdict: Verdict,
    /// Non-fatal issues, e.g. a timeframe fallback.
    pub warnings: Vec<GapmendError>,
}

impl RepairReport {
    /// Number of synthesized rows.
    #[must_use]
    pub const fn gap_count(&self) -> usize {
        self.repaired.gap_count()
    }

    /// Share of synthesized rows, in percent.
    #[must_use]
    pub const fn gap_percentage(&self) -> f64 {
        self.repaired.gap_percentage()
    }

    /// True when any warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// The first `n` synthesized rows.
    #[must_use]
    pub fn seams(&self, n: usize) -> Vec<&RepairedBar> {
        self.repaired.synthesized().take(n).collect()
    }

    /// Flat summary for tables and JSON.
    #[must_use]
    pub fn summary(&self) -> RepairSummary {
        RepairSummary {
            symbol: self.symbol.clone(),
            timeframe: self.timeframe,
            step_seconds: self.step.num_seconds(),
            market: self.market,
            original_rows: self.repaired.original_rows,
            repaired_rows: self.repaired.len(),
            gap_count: self.gap_count(),
            gap_percentage: self.gap_percentage(),
            verdict: self.verdict,
            warnings: self.warnings.clone(),
        }
    }

    /// Repaired rows as columns, reference field first.
    #[must_use]
    pub fn to_frame(&self) -> Frame {
        Frame::from_repaired(&self.repaired, &self.reference_field)
    }
}
