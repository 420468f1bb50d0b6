//! Configuration types shared by the engine and the facade.

use serde::{Deserialize, Serialize};

/// How the expected grid is laid out for an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MarketKind {
    /// Trades around the clock (e.g. crypto): one grid from the first to the
    /// last observation, no closures.
    Continuous,
    /// Trades in daily sessions: one sub-grid per calendar day bounded by that
    /// day's first and last observation.
    #[default]
    Session,
}

impl MarketKind {
    /// Stable identifier for logs and summaries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Continuous => "continuous",
            Self::Session => "session",
        }
    }
}

/// Handling of malformed-but-recoverable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Strictness {
    /// Recover locally: unknown timeframe labels fall back to one hour and a
    /// missing reference column falls back to the first column. Each fallback
    /// is recorded as a warning on the report.
    #[default]
    Permissive,
    /// Reject unknown timeframe labels and missing reference columns.
    Strict,
}

/// Global configuration for the `Gapmend` repairer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepairConfig {
    /// Fallback policy for unknown labels and missing reference columns.
    pub strictness: Strictness,
    /// Column used as the reference price when repairing column-shaped input.
    pub reference_field: String,
    /// Gap percentage above which a repair is graded `Suspect`.
    pub suspect_threshold_pct: f64,
    /// Symbol suffixes classified as continuous markets by the default classifier.
    pub continuous_suffixes: Vec<String>,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            strictness: Strictness::default(),
            reference_field: "Close".to_string(),
            suspect_threshold_pct: 10.0,
            continuous_suffixes: vec!["-USD".to_string()],
        }
    }
}
