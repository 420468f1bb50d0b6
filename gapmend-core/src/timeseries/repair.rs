use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::series::{Bar, Series, SeriesMeta};
use crate::timeseries::align::realign;
use crate::timeseries::fill::forward_fill;
use crate::timeseries::grid::build_grid;
use crate::timeseries::mask::repair_mask;
use crate::timeseries::metrics::GapMetrics;
use crate::timeseries::util::rfc3339;
use crate::{GapmendError, MarketKind};

/// One row of a repaired series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairedBar {
    /// Grid timestamp.
    pub ts: DateTime<Utc>,
    /// Observed or forward-filled reference value. `None` only for slots
    /// before the first observation.
    pub price: Option<Decimal>,
    /// Auxiliary fields of the observation; empty for synthesized rows.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aux: BTreeMap<String, Decimal>,
}

impl From<&Bar> for RepairedBar {
    fn from(b: &Bar) -> Self {
        Self {
            ts: b.ts,
            price: Some(b.price),
            aux: b.aux.clone(),
        }
    }
}

/// Result of a gap repair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repaired {
    /// Rows on the expected grid.
    pub bars: Vec<RepairedBar>,
    /// Timestamp basis, inherited from the input.
    pub meta: SeriesMeta,
    /// Synthesized row count and share.
    pub metrics: GapMetrics,
    /// `true` at synthesized rows, index-aligned with `bars`.
    pub mask: Vec<bool>,
    /// Rows in the input series.
    pub original_rows: usize,
}

impl Repaired {
    /// The input, unchanged, with zero metrics and an all-false mask.
    fn unchanged(series: &Series) -> Self {
        Self {
            bars: series.bars().iter().map(RepairedBar::from).collect(),
            meta: *series.meta(),
            metrics: GapMetrics::zero(),
            mask: vec![false; series.len()],
            original_rows: series.len(),
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// True when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Number of synthesized rows.
    #[must_use]
    pub const fn gap_count(&self) -> usize {
        self.metrics.gap_count
    }

    /// Share of synthesized rows, in percent.
    #[must_use]
    pub const fn gap_percentage(&self) -> f64 {
        self.metrics.gap_percentage
    }

    /// Row timestamps in order.
    pub fn timestamps(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.bars.iter().map(|b| b.ts)
    }

    /// Synthesized rows in order.
    pub fn synthesized(&self) -> impl Iterator<Item = &RepairedBar> + '_ {
        self.bars
            .iter()
            .zip(&self.mask)
            .filter_map(|(b, &m)| m.then_some(b))
    }

    /// Observed rows in order.
    pub fn observed(&self) -> impl Iterator<Item = &RepairedBar> + '_ {
        self.bars
            .iter()
            .zip(&self.mask)
            .filter_map(|(b, &m)| (!m).then_some(b))
    }

    /// Convert back into a `Series`, e.g. to chain further processing.
    ///
    /// Synthesized rows become bars with the filled price and no auxiliary
    /// fields.
    ///
    /// # Errors
    /// Returns `Err(GapmendError::Data)` if a row still has no price.
    pub fn to_series(&self) -> Result<Series, GapmendError> {
        let bars = self
            .bars
            .iter()
            .map(|b| {
                let price = b.price.ok_or_else(|| {
                    GapmendError::Data(format!("no price to carry into {}", rfc3339(b.ts)))
                })?;
                Ok(Bar {
                    ts: b.ts,
                    price,
                    aux: b.aux.clone(),
                })
            })
            .collect::<Result<Vec<_>, GapmendError>>()?;
        Series::new(bars, self.meta)
    }
}

/// Repair gaps in `series` on a grid of spacing `step`.
///
/// Stages: build the expected grid for `market`, realign the observations
/// onto it, count the synthesized rows, forward-fill the reference value,
/// and mark the synthesized rows in the mask. The input is not modified.
///
/// An empty series is returned unchanged with zero metrics.
///
/// ```
/// use gapmend_core::{Bar, MarketKind, Series, repair_gaps};
/// use chrono::{DateTime, TimeDelta};
/// use rust_decimal::Decimal;
///
/// let t = |h: i64| DateTime::from_timestamp(h * 3_600, 0).unwrap();
/// let series = Series::naive(vec![
///     Bar::new(t(0), Decimal::from(10)),
///     Bar::new(t(1), Decimal::from(11)),
///     Bar::new(t(3), Decimal::from(13)),
/// ]).unwrap();
///
/// let out = repair_gaps(&series, TimeDelta::hours(1), MarketKind::Continuous).unwrap();
/// assert_eq!(out.gap_count(), 1);
/// assert_eq!(out.mask, vec![false, false, true, false]);
/// assert_eq!(out.bars[2].price, Some(Decimal::from(11)));
/// ```
///
/// # Errors
/// - Returns `Err(GapmendError::InvalidArg)` if `step` is not positive.
/// - Returns `Err(GapmendError::OffGrid)` if an observation is not a grid slot.
pub fn repair_gaps(
    series: &Series,
    step: TimeDelta,
    market: MarketKind,
) -> Result<Repaired, GapmendError> {
    if series.is_empty() {
        return Ok(Repaired::unchanged(series));
    }
    let grid = build_grid(series, step, market)?;
    if grid.is_empty() {
        return Ok(Repaired::unchanged(series));
    }

    let aligned = realign(series, &grid)?;
    let metrics = GapMetrics::from_counts(series.len(), aligned.len())?;

    let mut prices: Vec<Option<Decimal>> =
        aligned.iter().map(|r| r.bar.map(|b| b.price)).collect();
    let _filled = forward_fill(&mut prices);

    let mask = repair_mask(series, &grid);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        market = market.as_str(),
        step_seconds = step.num_seconds(),
        original = series.len(),
        repaired = aligned.len(),
        gaps = metrics.gap_count,
        filled = _filled,
        "repaired series"
    );

    let bars = aligned
        .iter()
        .zip(prices)
        .map(|(row, price)| RepairedBar {
            ts: row.ts,
            price,
            aux: row.bar.map(|b| b.aux.clone()).unwrap_or_default(),
        })
        .collect();

    Ok(Repaired {
        bars,
        meta: *series.meta(),
        metrics,
        mask,
        original_rows: series.len(),
    })
}
