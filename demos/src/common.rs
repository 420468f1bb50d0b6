use gapmend::{RepairReport, Timeframe, Verdict};
use gapmend_mock::MockFeed;

/// Symbol used when none is given on the command line.
pub const DEFAULT_SYMBOL: &str = "SHIB-USD";

/// Return the data feed for demos.
#[must_use]
pub const fn get_feed() -> MockFeed {
    MockFeed::new()
}

/// Read `[symbol] [timeframe]` from the command line.
///
/// # Errors
/// Returns `UnknownTimeframe` if the timeframe argument is not a known label.
pub fn symbol_and_timeframe() -> Result<(String, Timeframe), gapmend::GapmendError> {
    let mut args = std::env::args().skip(1);
    let symbol = args.next().unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
    let timeframe = match args.next() {
        Some(label) => label.parse()?,
        None => Timeframe::H4,
    };
    Ok((symbol, timeframe))
}

/// One-line reading of a verdict.
#[must_use]
pub fn verdict_message(report: &RepairReport, threshold_pct: f64) -> String {
    match report.verdict {
        Verdict::Suspect => format!(
            "WARNING: more than {threshold_pct:.0}% of the series was synthesized; its shape may not reflect the market."
        ),
        Verdict::Repaired => "Repair succeeded; the series shape is preserved.".to_string(),
        Verdict::Pristine => "Data is complete; no repair was needed.".to_string(),
    }
}

/// Print the first `n` synthesized rows as a table.
pub fn print_seams(report: &RepairReport, n: usize) {
    let seams = report.seams(n);
    if seams.is_empty() {
        return;
    }
    println!("\n## First {} seams:", seams.len());
    println!("{:<22} | {:<14}", "Timestamp (UTC)", report.reference_field);
    println!("{:-<23}|{:-<16}", "", "");
    for bar in seams {
        let price = bar.price.map_or_else(|| "-".to_string(), |p| p.to_string());
        println!("{:<22} | {:<14}", bar.ts.format("%Y-%m-%d %H:%M"), price);
    }
}
