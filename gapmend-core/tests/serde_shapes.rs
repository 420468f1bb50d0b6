use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::America::New_York;
use gapmend_core::{Bar, MarketKind, Repaired, Series, SeriesMeta, repair_gaps};
use rust_decimal::Decimal;
use serde_json::json;

fn t(h: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(h * 3_600, 0).unwrap()
}

fn gappy() -> Series {
    Series::new(
        vec![
            Bar::new(t(0), Decimal::new(150, 2)).with_field("Volume", Decimal::from(10)),
            Bar::new(t(2), Decimal::new(175, 2)),
        ],
        SeriesMeta::with_timezone(New_York),
    )
    .unwrap()
}

#[test]
fn series_roundtrips_through_json() {
    let series = gappy();
    let json = serde_json::to_string(&series).unwrap();
    let back: Series = serde_json::from_str(&json).unwrap();
    assert_eq!(back, series);
}

#[test]
fn series_json_names_its_timezone() {
    let v = serde_json::to_value(gappy()).unwrap();
    assert_eq!(v["meta"]["timezone"], "America/New_York");
    assert_eq!(v["bars"][0]["aux"]["Volume"], "10");
    // Bars without auxiliary fields omit the map
    assert!(v["bars"][1].get("aux").is_none());
}

#[test]
fn unsorted_json_is_rejected() {
    let v = json!({
        "bars": [
            { "ts": "1970-01-01T02:00:00Z", "price": "1" },
            { "ts": "1970-01-01T01:00:00Z", "price": "1" }
        ]
    });
    let err = serde_json::from_value::<Series>(v).unwrap_err();
    assert!(err.to_string().contains("not increasing"), "{err}");
}

#[test]
fn bad_offset_in_json_is_rejected() {
    let v = json!({
        "bars": [],
        "meta": { "timezone": null, "utc_offset_seconds": 100_000 }
    });
    assert!(serde_json::from_value::<Series>(v).is_err());
}

#[test]
fn repaired_output_serializes_mask_and_metrics() {
    let out = repair_gaps(&gappy(), TimeDelta::hours(1), MarketKind::Continuous).unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["mask"], json!([false, true, false]));
    assert_eq!(v["metrics"]["gap_count"], 1);
    assert_eq!(v["bars"][1]["price"], "1.50");
    assert_eq!(v["original_rows"], 2);

    let back: Repaired = serde_json::from_value(v).unwrap();
    assert_eq!(back.bars, out.bars);
    assert_eq!(back.mask, out.mask);
}
