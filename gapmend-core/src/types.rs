//! Re-export of foundational types from `gapmend-types`.
// Consolidated re-exports so downstream crates can depend on `gapmend-core` only

pub use gapmend_types::{
    GapmendError, MarketKind, RepairConfig, RepairSummary, Strictness, Timeframe, Verdict,
};

pub use rust_decimal::Decimal;
