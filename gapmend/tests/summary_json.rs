use gapmend::{Gapmend, MarketKind, Timeframe};
use gapmend_mock::MockFeed;

#[test]
fn summary_reflects_the_report() {
    let gm = Gapmend::builder().build().unwrap();
    let series = MockFeed::new().series("GME", Timeframe::M30).unwrap();
    let report = gm.repair_symbol("GME", &series, "30m").unwrap();
    let summary = report.summary();

    assert_eq!(summary.symbol.as_deref(), Some("GME"));
    assert_eq!(summary.timeframe, Some(Timeframe::M30));
    assert_eq!(summary.step_seconds, 1_800);
    assert_eq!(summary.market, MarketKind::Session);
    assert_eq!(summary.original_rows, series.len());
    assert_eq!(summary.repaired_rows, summary.original_rows + summary.gap_count);
    assert_eq!(summary.verdict, report.verdict);
}

#[test]
fn summary_serializes_with_labels() {
    let gm = Gapmend::builder().build().unwrap();
    let series = MockFeed::new().series("BTC-USD", Timeframe::H1).unwrap();
    let summary = gm.repair_symbol("BTC-USD", &series, "1h").unwrap().summary();

    let v = serde_json::to_value(&summary).unwrap();
    assert_eq!(v["symbol"], "BTC-USD");
    assert_eq!(v["timeframe"], "1h");
    assert_eq!(v["market"], "Continuous");
    assert!(v["gap_count"].as_u64().unwrap() >= 6);

    let back: gapmend::RepairSummary = serde_json::from_value(v).unwrap();
    assert_eq!(back.verdict, summary.verdict);
    assert_eq!(back.repaired_rows, summary.repaired_rows);
}

#[test]
fn fixture_symbols_repair_without_errors() {
    let gm = Gapmend::builder().build().unwrap();
    let feed = MockFeed::new();
    for &sym in gapmend_mock::SYMBOLS {
        for tf in [Timeframe::M5, Timeframe::M90, Timeframe::H4] {
            let series = feed.series(sym, tf).unwrap();
            let report = gm.repair_symbol(sym, &series, tf.as_str()).unwrap();
            assert_eq!(
                report.repaired.len(),
                series.len() + report.gap_count(),
                "{sym} {tf}"
            );
        }
    }
}
