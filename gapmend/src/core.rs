use std::sync::Arc;

use chrono::TimeDelta;
use gapmend_core::{
    Frame, GapmendError, MarketKind, RepairConfig, Series, Strictness, Timeframe, Verdict,
    estimate_step_seconds, is_subdaily, repair_gaps, resolve_interval_with, step_for,
};

use crate::classifier::{MarketClassifier, SuffixClassifier};
use crate::report::RepairReport;

/// Fewer rows than this carry too few deltas to judge the cadence.
const CADENCE_MIN_ROWS: usize = 4;

/// Gap repairer configured once and shared across requests.
pub struct Gapmend {
    pub(crate) cfg: RepairConfig,
    pub(crate) classifier: Arc<dyn MarketClassifier + Send + Sync>,
}

impl std::fmt::Debug for Gapmend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gapmend")
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a `Gapmend` repairer with custom configuration.
pub struct GapmendBuilder {
    cfg: RepairConfig,
    classifier: Option<Arc<dyn MarketClassifier + Send + Sync>>,
}

impl Default for GapmendBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GapmendBuilder {
    /// Create a new builder with default configuration.
    ///
    /// Defaults: permissive fallbacks, `"Close"` as reference field, a 10%
    /// suspect threshold, and symbols ending in `-USD` treated as continuous.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cfg: RepairConfig::default(),
            classifier: None,
        }
    }

    /// Start from an existing configuration, e.g. one loaded with serde.
    #[must_use]
    pub fn config(mut self, cfg: RepairConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Select how unknown labels and missing reference columns are handled.
    ///
    /// Behavior and trade-offs:
    /// - `Permissive` repairs on the 1h grid or the first column and records
    ///   a warning in the report. Convenient for exploratory runs, but a typo
    ///   in a label silently produces an hourly grid.
    /// - `Strict` fails with `UnknownTimeframe` or `MissingField` instead.
    #[must_use]
    pub const fn strictness(mut self, strictness: Strictness) -> Self {
        self.cfg.strictness = strictness;
        self
    }

    /// Name of the column used as the reference value in `repair_frame`.
    #[must_use]
    pub fn reference_field(mut self, name: impl Into<String>) -> Self {
        self.cfg.reference_field = name.into();
        self
    }

    /// Gap percentage above which a repair is graded `Suspect`.
    #[must_use]
    pub const fn suspect_threshold(mut self, pct: f64) -> Self {
        self.cfg.suspect_threshold_pct = pct;
        self
    }

    /// Suffixes that mark a symbol as continuously traded.
    ///
    /// Ignored when a custom classifier is installed via [`Self::classifier`].
    #[must_use]
    pub fn continuous_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cfg.continuous_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Install a custom market classifier.
    #[must_use]
    pub fn classifier(mut self, classifier: Arc<dyn MarketClassifier + Send + Sync>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Build the `Gapmend` repairer.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the suspect threshold is not within `[0, 100]`
    /// or the reference field name is empty.
    pub fn build(self) -> Result<Gapmend, GapmendError> {
        let pct = self.cfg.suspect_threshold_pct;
        if !(0.0..=100.0).contains(&pct) {
            return Err(GapmendError::InvalidArg(format!(
                "suspect threshold must be within [0, 100], got {pct}"
            )));
        }
        if self.cfg.reference_field.trim().is_empty() {
            return Err(GapmendError::InvalidArg(
                "reference field name must not be empty".to_string(),
            ));
        }
        let classifier: Arc<dyn MarketClassifier + Send + Sync> = match self.classifier {
            Some(c) => c,
            None => Arc::new(SuffixClassifier::new(self.cfg.continuous_suffixes.clone())),
        };
        Ok(Gapmend {
            cfg: self.cfg,
            classifier,
        })
    }
}

impl Gapmend {
    /// Start building a new `Gapmend` instance.
    ///
    /// ```
    /// use gapmend::{Gapmend, Strictness};
    ///
    /// let gm = Gapmend::builder()
    ///     .strictness(Strictness::Strict)
    ///     .suspect_threshold(5.0)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(gm.config().suspect_threshold_pct, 5.0);
    /// ```
    #[must_use]
    pub fn builder() -> GapmendBuilder {
        GapmendBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &RepairConfig {
        &self.cfg
    }

    /// Market layout the installed classifier assigns to `symbol`.
    #[must_use]
    pub fn classify(&self, symbol: &str) -> MarketKind {
        self.classifier.classify(symbol)
    }

    /// Repair `series` on the grid named by `label`.
    ///
    /// # Errors
    /// - Returns `UnknownTimeframe` for an unrecognized label under `Strict`.
    /// - Returns the errors of [`gapmend_core::repair_gaps`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gapmend",
            skip(self, series, market),
            fields(rows = series.len(), market = market.as_str()),
        )
    )]
    pub fn repair(
        &self,
        series: &Series,
        label: &str,
        market: MarketKind,
    ) -> Result<RepairReport, GapmendError> {
        self.repair_labelled(None, series, label, market)
    }

    /// Repair the series of `symbol`, classifying its market first.
    ///
    /// # Errors
    /// Same as [`Self::repair`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gapmend",
            skip(self, series),
            fields(rows = series.len()),
        )
    )]
    pub fn repair_symbol(
        &self,
        symbol: &str,
        series: &Series,
        label: &str,
    ) -> Result<RepairReport, GapmendError> {
        let market = self.classify(symbol);
        self.repair_labelled(Some(symbol), series, label, market)
    }

    /// Repair on an explicit grid spacing.
    ///
    /// # Errors
    /// - Returns `InvalidArg` if `step` is not positive.
    /// - Returns the errors of [`gapmend_core::repair_gaps`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gapmend",
            skip(self, series, step, market),
            fields(rows = series.len(), step_seconds = step.num_seconds(), market = market.as_str()),
        )
    )]
    pub fn repair_with_step(
        &self,
        series: &Series,
        step: TimeDelta,
        market: MarketKind,
    ) -> Result<RepairReport, GapmendError> {
        let timeframe = Timeframe::from_seconds(step.num_seconds());
        self.finish(None, series, timeframe, step, market, Vec::new())
    }

    /// Repair on the spacing inferred from the series' own timestamps.
    ///
    /// The inferred spacing is the most common delta between observations.
    /// A series with no two timestamps a whole second apart has nothing to
    /// infer from and is repaired on the default 1h grid. That leaves a
    /// single-row series unchanged; sub-second bars do not land on that grid
    /// and are reported as `OffGrid`.
    ///
    /// # Errors
    /// Same as [`Self::repair_with_step`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gapmend",
            skip(self, series, market),
            fields(rows = series.len(), market = market.as_str()),
        )
    )]
    pub fn repair_inferred(
        &self,
        series: &Series,
        market: MarketKind,
    ) -> Result<RepairReport, GapmendError> {
        let ts: Vec<_> = series.timestamps().collect();
        let (timeframe, step) = match estimate_step_seconds(&ts) {
            Some(secs) => (Timeframe::from_seconds(secs), TimeDelta::seconds(secs)),
            None => (Some(Timeframe::default()), step_for(Timeframe::default())),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "gapmend", step_seconds = step.num_seconds(), "inferred grid spacing");
        self.finish(None, series, timeframe, step, market, Vec::new())
    }

    /// Repair column-shaped input.
    ///
    /// The reference column is the configured `reference_field`. Under
    /// `Permissive` a frame without it is repaired on its first column and
    /// the report carries a `MissingField` warning.
    ///
    /// # Errors
    /// - Returns `MissingField` if the reference column is absent under
    ///   `Strict`, or the frame has no columns.
    /// - Returns `Data` if a row has no reference value.
    /// - Returns the errors of [`Self::repair`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "gapmend",
            skip(self, frame, market),
            fields(rows = frame.index.len(), columns = frame.columns.len(), market = market.as_str()),
        )
    )]
    pub fn repair_frame(
        &self,
        frame: &Frame,
        label: &str,
        market: MarketKind,
    ) -> Result<RepairReport, GapmendError> {
        let reference = frame.reference_column(&self.cfg.reference_field, self.cfg.strictness)?;
        let series = frame.to_series(&reference)?;
        let mut report = self.repair_labelled(None, &series, label, market)?;
        if reference.fell_back {
            report
                .warnings
                .insert(0, GapmendError::missing_field(&self.cfg.reference_field));
        }
        report.reference_field = reference.name;
        Ok(report)
    }

    fn repair_labelled(
        &self,
        symbol: Option<&str>,
        series: &Series,
        label: &str,
        market: MarketKind,
    ) -> Result<RepairReport, GapmendError> {
        let resolved = resolve_interval_with(label, self.cfg.strictness)?;
        let mut warnings = Vec::new();
        if resolved.fell_back {
            warnings.push(GapmendError::unknown_timeframe(label));
        }
        self.finish(
            symbol,
            series,
            Some(resolved.timeframe),
            resolved.step,
            market,
            warnings,
        )
    }

    fn finish(
        &self,
        symbol: Option<&str>,
        series: &Series,
        timeframe: Option<Timeframe>,
        step: TimeDelta,
        market: MarketKind,
        mut warnings: Vec<GapmendError>,
    ) -> Result<RepairReport, GapmendError> {
        if series.len() >= CADENCE_MIN_ROWS {
            let ts: Vec<_> = series.timestamps().collect();
            if !is_subdaily(&ts) {
                #[cfg(feature = "tracing")]
                tracing::warn!(target: "gapmend", rows = series.len(), "series does not look intraday");
                warnings.push(GapmendError::Data(
                    "series does not look intraday; most observations are a day or more apart"
                        .to_string(),
                ));
            }
        }

        let repaired = repair_gaps(series, step, market)?;
        let verdict = Verdict::grade(repaired.gap_percentage(), self.cfg.suspect_threshold_pct);

        #[cfg(feature = "tracing")]
        tracing::info!(
            target: "gapmend",
            symbol = symbol.unwrap_or(""),
            gaps = repaired.gap_count(),
            gap_pct = repaired.gap_percentage(),
            ?verdict,
            "repair finished"
        );

        Ok(RepairReport {
            repaired,
            symbol: symbol.map(str::to_string),
            timeframe,
            step,
            market,
            reference_field: self.cfg.reference_field.clone(),
            verdict,
            warnings,
        })
    }
}
