use gapmend::{Gapmend, Timeframe};
use gapmend_demos::common::get_feed;
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize a human-friendly tracing subscriber with env-based filtering.
    // Suggested: RUST_LOG=info,gapmend=debug,gapmend_core=trace
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    tracing::info!(demo = "00_tracing", "starting");
    let feed = get_feed();
    let gm = Gapmend::builder().build()?;

    // Labelled repair
    let gme = feed.series("GME", Timeframe::M15)?;
    let _ = gm.repair_symbol("GME", &gme, "15m")?;

    // Unknown label: falls back to 1h and logs the fallback
    let btc = feed.series("BTC-USD", Timeframe::H1)?;
    let _ = gm.repair_symbol("BTC-USD", &btc, "3h")?;

    // Spacing inferred from the data
    let _ = gm.repair_inferred(&btc, gm.classify("BTC-USD"))?;

    Ok(())
}
