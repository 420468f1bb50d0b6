use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::GapmendError;

/// Intraday timeframe labels accepted for grid spacing.
///
/// `60m` and `1h` describe the same spacing but are kept distinct so the
/// caller's label survives a round trip through reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Timeframe {
    /// One minute.
    #[serde(rename = "1m")]
    M1,
    /// Two minutes.
    #[serde(rename = "2m")]
    M2,
    /// Five minutes.
    #[serde(rename = "5m")]
    M5,
    /// Fifteen minutes.
    #[serde(rename = "15m")]
    M15,
    /// Thirty minutes.
    #[serde(rename = "30m")]
    M30,
    /// Sixty minutes.
    #[serde(rename = "60m")]
    M60,
    /// Ninety minutes.
    #[serde(rename = "90m")]
    M90,
    /// One hour. Also the fallback for unrecognized labels.
    #[default]
    #[serde(rename = "1h")]
    H1,
    /// Four hours.
    #[serde(rename = "4h")]
    H4,
}

impl Timeframe {
    /// Every supported timeframe, finest first.
    pub const ALL: [Self; 9] = [
        Self::M1,
        Self::M2,
        Self::M5,
        Self::M15,
        Self::M30,
        Self::M60,
        Self::M90,
        Self::H1,
        Self::H4,
    ];

    /// Canonical label, e.g. `"15m"` or `"4h"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::M1 => "1m",
            Self::M2 => "2m",
            Self::M5 => "5m",
            Self::M15 => "15m",
            Self::M30 => "30m",
            Self::M60 => "60m",
            Self::M90 => "90m",
            Self::H1 => "1h",
            Self::H4 => "4h",
        }
    }

    /// Length of one bar in minutes.
    #[must_use]
    pub const fn minutes(self) -> i64 {
        match self {
            Self::M1 => 1,
            Self::M2 => 2,
            Self::M5 => 5,
            Self::M15 => 15,
            Self::M30 => 30,
            Self::M60 | Self::H1 => 60,
            Self::M90 => 90,
            Self::H4 => 240,
        }
    }

    /// Length of one bar in seconds.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        self.minutes() * 60
    }

    /// Timeframe whose spacing equals `seconds`, preferring the hour labels.
    #[must_use]
    pub fn from_seconds(seconds: i64) -> Option<Self> {
        match seconds {
            3_600 => Some(Self::H1),
            s => Self::ALL.into_iter().find(|tf| tf.seconds() == s),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Timeframe {
    type Err = GapmendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tf| tf.as_str() == s.trim())
            .ok_or_else(|| GapmendError::unknown_timeframe(s))
    }
}
