//! Property tests for indicator and rounding invariants.
//!
//! Uses proptest to verify:
//! 1. RSI bounds — RSI stays within [0, 100] for any close series
//! 2. SMA correctness — rolling-sum SMA matches the naive trailing mean
//! 3. Rounding — round3 is idempotent and lands on a 3-decimal grid
//! 4. Warm-up isolation — masking and values are per-ticker, never global

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use tickertape_core::domain::Bar;
use tickertape_core::indicators::engine::WARMUP_ROWS;
use tickertape_core::indicators::{atr, compute_rows, rsi, sma, true_range};
use tickertape_core::pipeline::round3;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_close() -> impl Strategy<Value = f64> {
    (1.0..1000.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_closes(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(arb_close(), 2..max_len)
}

fn bars_from_closes(ticker: &str, closes: &[f64]) -> Vec<Bar> {
    let base = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                ticker: ticker.to_string(),
                date: base + Duration::days(i as i64),
                open,
                high: open.max(close) + 0.5,
                low: open.min(close) - 0.5,
                close,
                volume: 1_000,
            }
        })
        .collect()
}

// ── 1. RSI Bounds ────────────────────────────────────────────────────

proptest! {
    /// RSI never leaves [0, 100], whatever the close series does.
    #[test]
    fn rsi_stays_within_bounds(closes in arb_closes(120)) {
        let values = rsi(&closes, 14);
        prop_assert_eq!(values.len(), closes.len());
        // Index 0 has no delta; everything after must be a bounded value.
        for (i, v) in values.iter().enumerate().skip(1) {
            prop_assert!(
                (0.0..=100.0).contains(v),
                "RSI out of bounds at {i}: {v}"
            );
        }
    }

    /// A strictly rising series pins RSI at 100; strictly falling pins it at 0.
    #[test]
    fn rsi_extremes_for_monotone_series(
        start in 10.0..500.0_f64,
        step in 0.1..5.0_f64,
        len in 5..60usize,
    ) {
        let rising: Vec<f64> = (0..len).map(|i| start + i as f64 * step).collect();
        let falling: Vec<f64> = (0..len).map(|i| start * 2.0 - i as f64 * step).collect();

        let up = rsi(&rising, 14);
        let down = rsi(&falling, 14);
        for i in 1..len {
            prop_assert!((up[i] - 100.0).abs() < 1e-9, "rising RSI != 100 at {i}: {}", up[i]);
            prop_assert!(down[i].abs() < 1e-9, "falling RSI != 0 at {i}: {}", down[i]);
        }
    }
}

// ── 2. SMA vs Naive Mean ─────────────────────────────────────────────

proptest! {
    /// The rolling-sum SMA must equal a freshly computed window mean.
    #[test]
    fn sma_matches_naive_mean(
        closes in arb_closes(80),
        period in 1..25usize,
    ) {
        let values = sma(&closes, period);
        prop_assert_eq!(values.len(), closes.len());

        for i in 0..closes.len() {
            if i + 1 < period {
                prop_assert!(values[i].is_nan(), "expected NaN before window fills at {i}");
            } else {
                let window = &closes[i + 1 - period..=i];
                let naive = window.iter().sum::<f64>() / period as f64;
                prop_assert!(
                    (values[i] - naive).abs() < 1e-9,
                    "SMA mismatch at {i}: got {}, naive {naive}", values[i]
                );
            }
        }
    }
}

// ── 3. True Range and ATR ────────────────────────────────────────────

proptest! {
    /// True range and ATR are never negative: TR is a max over absolute
    /// spreads, and the EMA of a nonnegative series stays nonnegative.
    #[test]
    fn atr_is_nonnegative(closes in arb_closes(100)) {
        let bars = bars_from_closes("AAA", &closes);
        for tr in true_range(&bars) {
            prop_assert!(tr >= 0.0, "negative true range: {tr}");
        }
        for v in atr(&bars, 14) {
            prop_assert!(v >= 0.0, "negative ATR: {v}");
        }
    }
}

// ── 4. Rounding ──────────────────────────────────────────────────────

proptest! {
    /// Rounding an already-rounded value changes nothing.
    #[test]
    fn round3_is_idempotent(v in -1e9..1e9_f64) {
        let once = round3(v);
        prop_assert_eq!(once, round3(once));
    }

    /// round3 lands on the 3-decimal grid and moves the value by at most
    /// half a grid step.
    #[test]
    fn round3_stays_on_grid(v in -1e6..1e6_f64) {
        let rounded = round3(v);
        let scaled = rounded * 1000.0;
        prop_assert!(
            (scaled - scaled.round()).abs() < 1e-6,
            "not on 3-decimal grid: {rounded}"
        );
        prop_assert!(
            (rounded - v).abs() <= 0.0005 + 1e-9,
            "moved too far: {v} -> {rounded}"
        );
    }
}

// ── 5. Warm-up Isolation ─────────────────────────────────────────────

proptest! {
    /// In a two-ticker table, each ticker's mask and values match what
    /// that ticker produces when computed alone.
    #[test]
    fn warmup_and_values_are_per_ticker(
        first in arb_closes(60),
        second in arb_closes(60),
    ) {
        let a = bars_from_closes("AAA", &first);
        let b = bars_from_closes("BBB", &second);

        let solo_b = compute_rows(&b);

        let mut combined = a.clone();
        combined.extend(b.clone());
        let rows = compute_rows(&combined);
        prop_assert_eq!(rows.len(), a.len() + b.len());

        let b_rows = &rows[a.len()..];
        for (i, (combined_row, solo_row)) in b_rows.iter().zip(&solo_b).enumerate() {
            if i < WARMUP_ROWS {
                prop_assert!(combined_row.atr_14.is_none(), "BBB row {i} not masked");
                prop_assert!(combined_row.rsi_14.is_none(), "BBB row {i} not masked");
            }
            prop_assert_eq!(combined_row.atr_14, solo_row.atr_14);
            prop_assert_eq!(combined_row.rsi_14, solo_row.rsi_14);
            prop_assert_eq!(combined_row.ma_20, solo_row.ma_20);
            prop_assert_eq!(combined_row.ma_200, solo_row.ma_200);
        }
    }
}
