use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::GapmendError;
use crate::timeseries::util::ensure_strictly_increasing;

/// Timestamp basis of a series.
///
/// Bars always store UTC instants. The meta decides which calendar day an
/// instant belongs to: the named timezone when set, otherwise the fixed
/// offset, otherwise the UTC date (naive series, wall-clock stored as UTC).
/// Because awareness is a property of the whole series, a series cannot mix
/// aware and naive timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeriesMeta {
    /// Exchange or asset timezone.
    pub timezone: Option<chrono_tz::Tz>,
    /// Fixed UTC offset, used when no timezone is known. Must lie strictly
    /// within one day of UTC.
    pub utc_offset_seconds: Option<i32>,
}

impl SeriesMeta {
    /// Naive basis: timestamps are wall-clock values stored as UTC.
    #[must_use]
    pub const fn naive() -> Self {
        Self {
            timezone: None,
            utc_offset_seconds: None,
        }
    }

    /// Timezone-aware basis.
    #[must_use]
    pub const fn with_timezone(tz: chrono_tz::Tz) -> Self {
        Self {
            timezone: Some(tz),
            utc_offset_seconds: None,
        }
    }

    /// Fixed-offset basis.
    ///
    /// # Errors
    /// Returns `Err(GapmendError::InvalidArg)` if `seconds` is not strictly
    /// between -86,400 and 86,400.
    pub fn with_offset(seconds: i32) -> Result<Self, GapmendError> {
        let meta = Self {
            timezone: None,
            utc_offset_seconds: Some(seconds),
        };
        meta.validate()?;
        Ok(meta)
    }

    /// Check that the fixed offset, if any, is representable.
    ///
    /// # Errors
    /// Returns `Err(GapmendError::InvalidArg)` for an out-of-range offset.
    pub fn validate(&self) -> Result<(), GapmendError> {
        if let Some(seconds) = self.utc_offset_seconds
            && FixedOffset::east_opt(seconds).is_none()
        {
            return Err(GapmendError::InvalidArg(format!(
                "UTC offset of {seconds}s is not within one day"
            )));
        }
        Ok(())
    }

    /// True when the series carries a timezone or offset.
    #[must_use]
    pub const fn is_aware(&self) -> bool {
        self.timezone.is_some() || self.utc_offset_seconds.is_some()
    }

    /// Calendar date of `ts` in this basis.
    #[must_use]
    pub fn local_date(&self, ts: DateTime<Utc>) -> NaiveDate {
        if let Some(tz) = self.timezone {
            return ts.with_timezone(&tz).date_naive();
        }
        if let Some(fixed) = self.utc_offset_seconds.and_then(FixedOffset::east_opt) {
            return ts.with_timezone(&fixed).date_naive();
        }
        ts.date_naive()
    }
}

/// One observation: a timestamp, the reference price, and any auxiliary fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar timestamp.
    pub ts: DateTime<Utc>,
    /// Reference value (typically the close).
    pub price: Decimal,
    /// Fields carried along unchanged (open, high, low, volume, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aux: BTreeMap<String, Decimal>,
}

impl Bar {
    /// Bar with a reference value and no auxiliary fields.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, price: Decimal) -> Self {
        Self {
            ts,
            price,
            aux: BTreeMap::new(),
        }
    }

    /// Bar from a naive wall-clock timestamp.
    #[must_use]
    pub fn naive(ts: NaiveDateTime, price: Decimal) -> Self {
        Self::new(ts.and_utc(), price)
    }

    /// Attach an auxiliary field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: Decimal) -> Self {
        self.aux.insert(name.into(), value);
        self
    }

    /// Auxiliary field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<Decimal> {
        self.aux.get(name).copied()
    }
}

/// Ordered bars of one asset at one sampling interval.
///
/// Construction validates that timestamps are strictly increasing, so every
/// `Series` is sorted and duplicate-free. Deserialization goes through the
/// same checks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct Series {
    bars: Vec<Bar>,
    meta: SeriesMeta,
}

#[derive(Deserialize)]
struct RawSeries {
    bars: Vec<Bar>,
    #[serde(default)]
    meta: SeriesMeta,
}

impl TryFrom<RawSeries> for Series {
    type Error = GapmendError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Self::new(raw.bars, raw.meta)
    }
}

impl Series {
    /// Build a series, rejecting duplicate or out-of-order timestamps.
    ///
    /// # Errors
    /// - Returns `InvalidArg` if `meta` carries an out-of-range offset.
    /// - Returns `DuplicateTimestamp` or `NonMonotonic` at the first offending bar.
    pub fn new(bars: Vec<Bar>, meta: SeriesMeta) -> Result<Self, GapmendError> {
        meta.validate()?;
        ensure_strictly_increasing(&bars)?;
        Ok(Self { bars, meta })
    }

    /// Build a naive series.
    ///
    /// # Errors
    /// Same as [`Series::new`].
    pub fn naive(bars: Vec<Bar>) -> Result<Self, GapmendError> {
        Self::new(bars, SeriesMeta::naive())
    }

    /// Series with no bars.
    #[must_use]
    pub const fn empty(meta: SeriesMeta) -> Self {
        Self {
            bars: Vec::new(),
            meta,
        }
    }

    /// Bars in timestamp order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Timestamp basis.
    #[must_use]
    pub const fn meta(&self) -> &SeriesMeta {
        &self.meta
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when the series holds no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Timestamps in order.
    pub fn timestamps(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.bars.iter().map(|b| b.ts)
    }

    /// First and last timestamp, if any.
    #[must_use]
    pub fn span(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        Some((self.bars.first()?.ts, self.bars.last()?.ts))
    }

    /// Consume the series and return its bars.
    #[must_use]
    pub fn into_bars(self) -> Vec<Bar> {
        self.bars
    }
}
