use std::collections::BTreeSet;

use chrono::DateTime;
use gapmend::{Bar, Gapmend, MarketKind, Series, Timeframe, Verdict};
use proptest::prelude::*;
use rust_decimal::Decimal;

const BASE: i64 = 1_709_251_200; // 2024-03-01T00:00:00Z

fn series(slots: &BTreeSet<i64>, step: i64) -> Series {
    Series::naive(
        slots
            .iter()
            .map(|&k| {
                Bar::new(
                    DateTime::from_timestamp(BASE + k * step, 0).unwrap(),
                    Decimal::new(k + 100, 1),
                )
            })
            .collect(),
    )
    .unwrap()
}

proptest! {
    #[test]
    fn summary_agrees_with_report(
        tf in prop::sample::select(Timeframe::ALL.to_vec()),
        slots in prop::collection::btree_set(0i64..300, 1..80),
        market in prop::sample::select(vec![MarketKind::Continuous, MarketKind::Session]),
        threshold in 0.0f64..=100.0,
    ) {
        let gm = Gapmend::builder().suspect_threshold(threshold).build().unwrap();
        let s = series(&slots, tf.seconds());
        let report = gm.repair(&s, tf.as_str(), market).unwrap();
        let summary = report.summary();

        prop_assert_eq!(summary.original_rows, s.len());
        prop_assert_eq!(summary.repaired_rows, summary.original_rows + summary.gap_count);
        prop_assert_eq!(summary.repaired_rows, report.repaired.len());
        prop_assert_eq!(summary.step_seconds, tf.seconds());
        prop_assert_eq!(summary.verdict, Verdict::grade(summary.gap_percentage, threshold));
        prop_assert_eq!(report.seams(usize::MAX).len(), summary.gap_count);
        prop_assert!(summary.gap_percentage >= 0.0 && summary.gap_percentage <= 100.0);
    }

    #[test]
    fn symbol_repair_follows_the_classifier(
        slots in prop::collection::btree_set(0i64..200, 1..60),
        crypto in any::<bool>(),
    ) {
        let gm = Gapmend::builder().build().unwrap();
        let symbol = if crypto { "ETH-USD" } else { "IBM" };
        let s = series(&slots, 3_600);
        let by_symbol = gm.repair_symbol(symbol, &s, "1h").unwrap();
        let explicit = gm.repair(&s, "1h", gm.classify(symbol)).unwrap();
        prop_assert_eq!(by_symbol.market, gm.classify(symbol));
        prop_assert_eq!(&by_symbol.repaired, &explicit.repaired);
        let by_symbol_summary = by_symbol.summary();
        prop_assert_eq!(by_symbol_summary.symbol.as_deref(), Some(symbol));
    }
}
