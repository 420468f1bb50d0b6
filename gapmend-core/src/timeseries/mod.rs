//! Gap-repair stages shared by the facade and tests.
//!
//! Modules include:
//! - `interval`: map timeframe labels to grid spacing
//! - `grid`: build the expected timestamp grid (continuous or per session)
//! - `align`: reindex observations onto the grid
//! - `metrics`: gap count and percentage
//! - `fill`: forward-fill of the reference value
//! - `mask`: provenance mask of synthesized rows
//! - `infer`: infer spacing and detect intraday cadence
//! - `repair`: the full pipeline
/// Realignment of observations onto an expected grid.
pub mod align;
/// Last-known-value propagation.
pub mod fill;
/// Expected-grid construction.
pub mod grid;
/// Interval inference and sub-daily detection helpers.
pub mod infer;
/// Timeframe label resolution.
pub mod interval;
/// Provenance mask construction.
pub mod mask;
/// Gap count and percentage.
pub mod metrics;
/// End-to-end repair pipeline.
pub mod repair;
/// Series invariant checks.
pub mod util;
