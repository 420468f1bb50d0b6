use gapmend::{Gapmend, MarketKind, Timeframe};
use gapmend_demos::common::get_feed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let gm = Gapmend::builder().build()?;
    let feed = get_feed();

    // The same session-bounded series, repaired with both grid layouts.
    // A continuous grid fills every night and weekend; a session grid
    // only fills inside each trading day.
    println!(
        "{:<10} | {:<10} | {:>8} | {:>8} | {:>9} | {:<9}",
        "Symbol", "Market", "Rows", "Gaps", "Gap %", "Verdict"
    );
    println!("{:-<11}|{:-<12}|{:-<10}|{:-<10}|{:-<11}|{:-<10}", "", "", "", "", "", "");

    for symbol in ["GME", "NG=F", "EURUSD=X"] {
        let series = feed.series(symbol, Timeframe::H1)?;
        for market in [MarketKind::Session, MarketKind::Continuous] {
            let report = gm.repair(&series, "1h", market)?;
            println!(
                "{:<10} | {:<10} | {:>8} | {:>8} | {:>8.2}% | {:<9}",
                symbol,
                market.as_str(),
                report.repaired.len(),
                report.gap_count(),
                report.gap_percentage(),
                format!("{:?}", report.verdict)
            );
        }
    }

    Ok(())
}
