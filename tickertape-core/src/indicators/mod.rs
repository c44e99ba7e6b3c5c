//! Indicator implementations and the per-ticker engine.
//!
//! All smoothed indicators use the span convention: alpha = 2 / (span + 1),
//! recurrence seeded by the first value of the input series. Raw indicator
//! functions return `Vec<f64>` with NaN where the value is undefined; the
//! engine converts NaN to `None` and applies the warm-up policy when it
//! assembles `IndicatorRow`s.

pub mod atr;
pub mod ema;
pub mod engine;
pub mod rsi;
pub mod sma;

pub use atr::{atr, true_range};
pub use ema::ema_span;
pub use engine::compute_rows;
pub use rsi::rsi;
pub use sma::sma;

/// Create synthetic bars from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_bars(ticker: &str, closes: &[f64]) -> Vec<crate::domain::Bar> {
    use crate::domain::Bar;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Bar {
                ticker: ticker.to_string(),
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000,
            }
        })
        .collect()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
