//! Gapmend repairs gaps in intraday price-bar series.
//!
//! Overview
//! - Builds the grid of timestamps a series should have for its timeframe,
//!   either around the clock (`Continuous`) or within each trading day's
//!   first and last observation (`Session`).
//! - Inserts the missing slots, forward-fills the reference value into them,
//!   and marks every inserted row in a provenance mask.
//! - Grades the result: a series that is more than a configurable share
//!   synthesized is flagged `Suspect`.
//!
//! Key behaviors and trade-offs
//! - Session grids never synthesize overnight or weekend rows, so the
//!   trading-hours shape is kept; holidays are simply days without
//!   observations.
//! - Only the reference value is filled. Auxiliary fields such as volume
//!   stay undefined on synthesized rows rather than inventing activity.
//! - Unknown timeframe labels fall back to 1h unless `Strictness::Strict` is
//!   selected; every fallback is recorded in the report's warnings.
//!
//! Examples
//! ```
//! use chrono::DateTime;
//! use gapmend::{Bar, Gapmend, Series, Verdict};
//! use rust_decimal::Decimal;
//!
//! let t = |h: i64| DateTime::from_timestamp(h * 3_600, 0).unwrap();
//! let series = Series::naive(vec![
//!     Bar::new(t(0), Decimal::from(100)),
//!     Bar::new(t(1), Decimal::from(101)),
//!     Bar::new(t(3), Decimal::from(103)),
//!     Bar::new(t(4), Decimal::from(104)),
//! ]).unwrap();
//!
//! let gm = Gapmend::builder().build().unwrap();
//! let report = gm.repair_symbol("BTC-USD", &series, "1h").unwrap();
//! assert_eq!(report.gap_count(), 1);
//! assert_eq!(report.verdict, Verdict::Suspect); // 20% synthesized
//! assert_eq!(report.seams(10)[0].price, Some(Decimal::from(101)));
//! ```
//!
//! See `demos/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod classifier;
pub(crate) mod core;
mod report;

pub use classifier::{MarketClassifier, SuffixClassifier};
pub use core::{Gapmend, GapmendBuilder};
pub use report::RepairReport;

// Re-export core types for convenience
pub use gapmend_core::{
    Bar, Column, Decimal, Frame, GapMetrics, GapmendError, MarketKind, RepairConfig,
    RepairSummary, Repaired, RepairedBar, Series, SeriesMeta, Strictness, Timeframe, Verdict,
};
