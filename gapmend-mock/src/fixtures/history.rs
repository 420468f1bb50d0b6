use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::America::New_York;
use gapmend_core::{Bar, GapmendError, Series, SeriesMeta, Timeframe, step_for};
use rust_decimal::Decimal;

/// Trading hours of a session-bounded fixture, New York local time.
struct Hours {
    open: (u32, u32),
    close: (u32, u32),
}

enum Layout {
    /// Around the clock for `days` days from `start` (UTC midnight).
    Continuous { start: (i32, u32, u32), days: i64 },
    /// The listed New York trading dates.
    Session {
        dates: &'static [(i32, u32, u32)],
        hours: Hours,
    },
}

struct Fixture {
    layout: Layout,
    /// Price of the first slot, in `scale` decimal places.
    base: i64,
    scale: u32,
    /// Percentage of slots dropped at random.
    drop_pct: u64,
    /// Contiguous outage as (first slot, length), in slot indices.
    outage: Option<(usize, usize)>,
    seed: u64,
}

const SESSION_DATES: &[(i32, u32, u32)] = &[(2024, 3, 1), (2024, 3, 4), (2024, 3, 5), (2024, 3, 6)];

fn fixture(symbol: &str) -> Option<Fixture> {
    let f = match symbol {
        "BTC-USD" => Fixture {
            layout: Layout::Continuous {
                start: (2024, 3, 1),
                days: 2,
            },
            base: 6_250_000,
            scale: 2,
            drop_pct: 3,
            outage: Some((20, 6)),
            seed: 0xB7C0,
        },
        "SHIB-USD" => Fixture {
            layout: Layout::Continuous {
                start: (2024, 3, 1),
                days: 2,
            },
            base: 1_250,
            scale: 8,
            drop_pct: 12,
            outage: Some((5, 3)),
            seed: 0x5418,
        },
        "GME" => Fixture {
            layout: Layout::Session {
                dates: SESSION_DATES,
                hours: Hours {
                    open: (9, 30),
                    close: (16, 0),
                },
            },
            base: 1_450,
            scale: 2,
            drop_pct: 8,
            outage: Some((3, 1)),
            seed: 0x06E0,
        },
        "NG=F" => Fixture {
            layout: Layout::Session {
                dates: SESSION_DATES,
                hours: Hours {
                    open: (9, 0),
                    close: (14, 30),
                },
            },
            base: 1_850,
            scale: 3,
            drop_pct: 15,
            outage: Some((2, 1)),
            seed: 0x46F0,
        },
        "EURUSD=X" => Fixture {
            layout: Layout::Session {
                dates: SESSION_DATES,
                hours: Hours {
                    open: (3, 0),
                    close: (17, 0),
                },
            },
            base: 10_850,
            scale: 4,
            drop_pct: 5,
            outage: Some((2, 2)),
            seed: 0xE0D0,
        },
        _ => return None,
    };
    Some(f)
}

/// Deterministic pseudo-random value in `0..100` for a slot.
fn roll(seed: u64, slot: usize) -> u64 {
    let x = (slot as u64)
        .wrapping_add(seed)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15);
    (x >> 33) % 100
}

/// Small deterministic walk around `base`.
fn price(f: &Fixture, slot: usize) -> Decimal {
    let wiggle = i64::try_from(roll(f.seed ^ 0xFFFF, slot)).unwrap_or(0) - 50;
    let drift = i64::try_from(slot % 97).unwrap_or(0);
    let step = (f.base / 2_000).max(1);
    Decimal::new(f.base + (drift + wiggle) * step, f.scale)
}

fn ny(date: (i32, u32, u32), hm: (u32, u32)) -> Option<DateTime<Utc>> {
    let d = NaiveDate::from_ymd_opt(date.0, date.1, date.2)?;
    let t = NaiveTime::from_hms_opt(hm.0, hm.1, 0)?;
    New_York
        .from_local_datetime(&d.and_time(t))
        .single()
        .map(|dt| dt.with_timezone(&Utc))
}

fn slots(layout: &Layout, step: TimeDelta) -> Vec<DateTime<Utc>> {
    let mut out = Vec::new();
    match layout {
        Layout::Continuous { start, days } => {
            let Some(first) = NaiveDate::from_ymd_opt(start.0, start.1, start.2)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
            else {
                return out;
            };
            let end = first + TimeDelta::days(*days);
            let mut ts = first;
            while ts < end {
                out.push(ts);
                ts += step;
            }
        }
        Layout::Session { dates, hours } => {
            for &date in *dates {
                let (Some(open), Some(close)) = (ny(date, hours.open), ny(date, hours.close))
                else {
                    continue;
                };
                let mut ts = open;
                while ts < close {
                    out.push(ts);
                    ts += step;
                }
            }
        }
    }
    out
}

pub fn by_symbol(symbol: &str, timeframe: Timeframe) -> Result<Series, GapmendError> {
    let f = fixture(symbol).ok_or_else(|| GapmendError::not_found(format!("series for {symbol}")))?;
    let meta = match f.layout {
        Layout::Continuous { .. } => SeriesMeta::naive(),
        Layout::Session { .. } => SeriesMeta::with_timezone(New_York),
    };
    let in_outage = |i: usize| f.outage.is_some_and(|(s, len)| (s..s + len).contains(&i));

    let bars = slots(&f.layout, step_for(timeframe))
        .into_iter()
        .enumerate()
        // Never drop the first slot so every fixture starts on its grid origin
        .filter(|&(i, _)| i == 0 || (!in_outage(i) && roll(f.seed, i) >= f.drop_pct))
        .map(|(i, ts)| {
            let close = price(&f, i);
            let volume = 1_000 + i64::try_from(roll(f.seed.rotate_left(7), i)).unwrap_or(0) * 37;
            Bar::new(ts, close)
                .with_field("Open", price(&f, i.saturating_sub(1)))
                .with_field("Volume", Decimal::from(volume))
        })
        .collect();
    Series::new(bars, meta)
}
