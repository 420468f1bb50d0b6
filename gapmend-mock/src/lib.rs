//! Deterministic fixture feed for tests and demos.
//!
//! Series are generated from a fixed layout per symbol, so the same request
//! always yields the same bars, including the same missing ones.

use gapmend_core::{GapmendError, Series, Timeframe};

mod fixtures;

/// Symbols the feed knows about.
pub const SYMBOLS: &[&str] = &["BTC-USD", "SHIB-USD", "GME", "NG=F", "EURUSD=X"];

/// Fixture feed standing in for a real market data source.
///
/// - `BTC-USD`, `SHIB-USD`: around the clock for two days from 2024-03-01
///   UTC, with a few scattered drops and one outage.
/// - `GME`, `NG=F`, `EURUSD=X`: four New York trading days starting
///   2024-03-01, each within its own trading hours, with missing bars.
///
/// The symbol `FAIL` always returns a `Data` error.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockFeed;

impl MockFeed {
    /// Create the feed.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Bars for `symbol` at `timeframe`.
    ///
    /// # Errors
    /// - Returns `NotFound` for a symbol not in [`SYMBOLS`].
    /// - Returns `Data` for the symbol `FAIL`.
    pub fn series(&self, symbol: &str, timeframe: Timeframe) -> Result<Series, GapmendError> {
        if symbol == "FAIL" {
            return Err(GapmendError::Data(format!(
                "forced failure fetching {symbol} {timeframe}"
            )));
        }
        fixtures::history::by_symbol(symbol, timeframe)
    }
}
