use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::series::{Bar, Series, SeriesMeta};
use crate::timeseries::repair::Repaired;
use crate::timeseries::util::rfc3339;
use crate::{GapmendError, Strictness};

/// A named column of optional values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name, e.g. `"Close"`.
    pub name: String,
    /// One value per index row; `None` is undefined.
    pub values: Vec<Option<Decimal>>,
}

impl Column {
    /// Build a column.
    pub fn new(name: impl Into<String>, values: Vec<Option<Decimal>>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// The column chosen as reference value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceColumn {
    /// Position among the frame's columns.
    pub position: usize,
    /// Column name.
    pub name: String,
    /// True when the requested column was absent and the first column was used.
    pub fell_back: bool,
}

/// Column-shaped bars, as delivered by sources whose fields vary with the
/// data (some feeds omit volume, some have only a close).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    /// Row timestamps.
    pub index: Vec<DateTime<Utc>>,
    /// Columns in source order.
    pub columns: Vec<Column>,
    /// Timestamp basis.
    pub meta: SeriesMeta,
}

impl Frame {
    /// Empty-column frame over `index`.
    #[must_use]
    pub const fn new(index: Vec<DateTime<Utc>>, meta: SeriesMeta) -> Self {
        Self {
            index,
            columns: Vec::new(),
            meta,
        }
    }

    /// Append a column.
    #[must_use]
    pub fn with_column(mut self, name: impl Into<String>, values: Vec<Option<Decimal>>) -> Self {
        self.columns.push(Column::new(name, values));
        self
    }

    /// Column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Pick the reference column.
    ///
    /// Uses the column named `preferred` when present. Otherwise a
    /// `Permissive` lookup takes the first column and marks the choice as a
    /// fallback; a `Strict` lookup fails.
    ///
    /// # Errors
    /// Returns `Err(GapmendError::MissingField)` if `preferred` is absent and
    /// either `strictness` is `Strict` or the frame has no columns at all.
    pub fn reference_column(
        &self,
        preferred: &str,
        strictness: Strictness,
    ) -> Result<ReferenceColumn, GapmendError> {
        if let Some(position) = self.columns.iter().position(|c| c.name == preferred) {
            return Ok(ReferenceColumn {
                position,
                name: preferred.to_string(),
                fell_back: false,
            });
        }
        match (strictness, self.columns.first()) {
            (Strictness::Permissive, Some(first)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    requested = preferred,
                    using = %first.name,
                    "reference column missing; falling back to first column"
                );
                Ok(ReferenceColumn {
                    position: 0,
                    name: first.name.clone(),
                    fell_back: true,
                })
            }
            _ => Err(GapmendError::missing_field(preferred)),
        }
    }

    /// Convert into a `Series` using `reference` as the price.
    ///
    /// Defined values of the other columns become auxiliary fields.
    ///
    /// # Errors
    /// - Returns `Err(GapmendError::InvalidArg)` if a column length differs from the index
    ///   or `reference` does not point at a column.
    /// - Returns `Err(GapmendError::Data)` if a row has no reference value.
    /// - Returns the ordering errors of [`Series::new`].
    pub fn to_series(&self, reference: &ReferenceColumn) -> Result<Series, GapmendError> {
        for c in &self.columns {
            if c.values.len() != self.index.len() {
                return Err(GapmendError::InvalidArg(format!(
                    "column {} has {} values for {} rows",
                    c.name,
                    c.values.len(),
                    self.index.len()
                )));
            }
        }
        let Some(ref_col) = self.columns.get(reference.position) else {
            return Err(GapmendError::InvalidArg(format!(
                "reference column {} is out of range",
                reference.position
            )));
        };

        let mut bars: Vec<Bar> = Vec::with_capacity(self.index.len());
        for (row, &ts) in self.index.iter().enumerate() {
            let price = ref_col.values[row].ok_or_else(|| {
                GapmendError::Data(format!(
                    "row {row} ({}) has no {} value",
                    rfc3339(ts),
                    ref_col.name
                ))
            })?;
            let mut bar = Bar::new(ts, price);
            for (i, c) in self.columns.iter().enumerate() {
                if i == reference.position {
                    continue;
                }
                if let Some(v) = c.values[row] {
                    bar.aux.insert(c.name.clone(), v);
                }
            }
            bars.push(bar);
        }
        Series::new(bars, self.meta)
    }

    /// Render a repaired series back into columns.
    ///
    /// The first column is the reference value under `reference_name`,
    /// followed by every auxiliary field seen in sorted name order.
    /// Synthesized rows leave auxiliary columns undefined.
    #[must_use]
    pub fn from_repaired(repaired: &Repaired, reference_name: &str) -> Self {
        let names: BTreeSet<&String> = repaired.bars.iter().flat_map(|b| b.aux.keys()).collect();
        let mut frame = Self::new(repaired.timestamps().collect(), repaired.meta).with_column(
            reference_name,
            repaired.bars.iter().map(|b| b.price).collect(),
        );
        for name in names {
            let values = repaired
                .bars
                .iter()
                .map(|b| b.aux.get(name).copied())
                .collect();
            frame = frame.with_column(name.clone(), values);
        }
        frame
    }
}
