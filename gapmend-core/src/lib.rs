//! gapmend-core
//!
//! Data model and algorithm stages for repairing gaps in intraday bar series.
//!
//! - `series`: `Bar`, `Series`, and the timestamp basis (`SeriesMeta`).
//! - `frame`: column-shaped input and reference-column selection.
//! - `timeseries`: interval resolution, expected-grid construction,
//!   realignment, metrics, forward-fill, provenance mask, and the
//!   `repair_gaps` pipeline that ties them together.
//!
//! Every stage is a pure function over borrowed input. Nothing here performs
//! I/O or keeps state between calls.
#![warn(missing_docs)]

/// Column-shaped input as delivered by dynamic data sources.
pub mod frame;
/// Bars, series, and timestamp basis.
pub mod series;
/// Gap-repair stages and the pipeline that composes them.
pub mod timeseries;
pub mod types;

pub use frame::{Column, Frame, ReferenceColumn};
pub use series::{Bar, Series, SeriesMeta};
pub use timeseries::align::{AlignedRow, realign};
pub use timeseries::fill::forward_fill;
pub use timeseries::grid::{
    SessionBounds, build_grid, continuous_grid, session_bounds, session_grid,
};
pub use timeseries::infer::{estimate_step_seconds, is_subdaily};
pub use timeseries::interval::{Resolved, resolve_interval, resolve_interval_with, step_for};
pub use timeseries::mask::repair_mask;
pub use timeseries::metrics::GapMetrics;
pub use timeseries::repair::{Repaired, RepairedBar, repair_gaps};
pub use types::*;
