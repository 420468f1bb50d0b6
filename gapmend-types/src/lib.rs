//! Error, timeframe, and configuration primitives shared across the gapmend crates.
#![warn(missing_docs)]

mod config;
mod error;
mod reports;
mod timeframe;

pub use config::{MarketKind, RepairConfig, Strictness};
pub use error::GapmendError;
pub use reports::{RepairSummary, Verdict};
pub use timeframe::Timeframe;
