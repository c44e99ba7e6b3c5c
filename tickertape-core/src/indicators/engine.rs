//! Per-ticker indicator engine.
//!
//! Groups the reshaped bar table into contiguous per-ticker slices and
//! computes ATR-14, RSI-14, MA20 and MA200 for each ticker independently.
//! Derived values never cross ticker boundaries, and the warm-up cutoff is
//! keyed by the row's index within its own ticker, never by position in
//! the concatenated table.
//!
//! Per-ticker computation is side-effect-free, so tickers run in parallel
//! via rayon; output order matches input order exactly.

use rayon::prelude::*;

use super::{atr, rsi, sma};
use crate::domain::{Bar, IndicatorRow};

pub const ATR_SPAN: usize = 14;
pub const RSI_SPAN: usize = 14;
pub const MA_SHORT: usize = 20;
pub const MA_LONG: usize = 200;

/// Rows 0..WARMUP_ROWS of each ticker carry no ATR/RSI value, regardless
/// of what the smoothing recurrence would produce.
pub const WARMUP_ROWS: usize = 14;

/// Compute indicator rows for a `(ticker, date)`-sorted bar table.
///
/// Output is row-aligned 1:1 with the input.
pub fn compute_rows(bars: &[Bar]) -> Vec<IndicatorRow> {
    let groups: Vec<Vec<IndicatorRow>> = ticker_slices(bars)
        .par_iter()
        .map(|slice| compute_ticker(slice))
        .collect();

    groups.into_iter().flatten().collect()
}

/// Split a sorted bar table into contiguous per-ticker slices.
fn ticker_slices(bars: &[Bar]) -> Vec<&[Bar]> {
    let mut slices = Vec::new();
    let mut start = 0;
    for i in 1..=bars.len() {
        if i == bars.len() || bars[i].ticker != bars[start].ticker {
            slices.push(&bars[start..i]);
            start = i;
        }
    }
    slices
}

fn compute_ticker(bars: &[Bar]) -> Vec<IndicatorRow> {
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let atr_vals = atr::atr(bars, ATR_SPAN);
    let rsi_vals = rsi::rsi(&closes, RSI_SPAN);
    let ma_short = sma::sma(&closes, MA_SHORT);
    let ma_long = sma::sma(&closes, MA_LONG);

    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let warmed = i >= WARMUP_ROWS;
            IndicatorRow {
                bar: bar.clone(),
                atr_14: if warmed { present(atr_vals[i]) } else { None },
                rsi_14: if warmed { present(rsi_vals[i]) } else { None },
                ma_20: present(ma_short[i]),
                ma_200: present(ma_long[i]),
            }
        })
        .collect()
}

fn present(v: f64) -> Option<f64> {
    if v.is_nan() {
        None
    } else {
        Some(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;

    fn ramp(start: f64, len: usize) -> Vec<f64> {
        (0..len).map(|i| start + i as f64 * 0.5).collect()
    }

    #[test]
    fn warmup_rows_have_no_atr_rsi() {
        let bars = make_bars("AAA", &ramp(100.0, 40));
        let rows = compute_rows(&bars);
        for (i, row) in rows.iter().enumerate() {
            if i < WARMUP_ROWS {
                assert!(row.atr_14.is_none(), "row {i} should have no ATR");
                assert!(row.rsi_14.is_none(), "row {i} should have no RSI");
            } else {
                assert!(row.atr_14.is_some(), "row {i} should have ATR");
                assert!(row.rsi_14.is_some(), "row {i} should have RSI");
            }
        }
    }

    #[test]
    fn warmup_is_per_ticker_not_global() {
        // Two tickers concatenated: the second ticker's first 14 rows must
        // be masked even though their global indices are far past 14.
        let mut bars = make_bars("AAA", &ramp(100.0, 30));
        bars.extend(make_bars("BBB", &ramp(50.0, 30)));

        let rows = compute_rows(&bars);
        assert_eq!(rows.len(), 60);

        for i in 30..(30 + WARMUP_ROWS) {
            assert_eq!(rows[i].bar.ticker, "BBB");
            assert!(rows[i].atr_14.is_none(), "global row {i} should be masked");
            assert!(rows[i].rsi_14.is_none(), "global row {i} should be masked");
        }
        assert!(rows[30 + WARMUP_ROWS].atr_14.is_some());
    }

    #[test]
    fn ma_windows_absent_until_filled() {
        let bars = make_bars("AAA", &ramp(100.0, 25));
        let rows = compute_rows(&bars);
        assert!(rows[MA_SHORT - 2].ma_20.is_none());
        assert!(rows[MA_SHORT - 1].ma_20.is_some());
        // Only 25 rows: MA200 never fills
        assert!(rows.iter().all(|r| r.ma_200.is_none()));
    }

    #[test]
    fn no_cross_ticker_leakage() {
        // A ticker computed alone must match the same ticker computed as
        // part of a concatenated table.
        let aaa = make_bars("AAA", &ramp(100.0, 50));
        let solo = compute_rows(&aaa);

        let mut combined_bars = make_bars("AA0", &ramp(500.0, 37));
        combined_bars.extend(aaa.clone());
        let combined = compute_rows(&combined_bars);
        let aaa_in_combined = &combined[37..];

        for (s, c) in solo.iter().zip(aaa_in_combined) {
            assert_eq!(s.bar.date, c.bar.date);
            assert_eq!(s.atr_14, c.atr_14);
            assert_eq!(s.rsi_14, c.rsi_14);
            assert_eq!(s.ma_20, c.ma_20);
        }
    }

    #[test]
    fn output_is_row_aligned() {
        let mut bars = make_bars("AAA", &ramp(100.0, 10));
        bars.extend(make_bars("BBB", &ramp(50.0, 5)));
        let rows = compute_rows(&bars);
        assert_eq!(rows.len(), bars.len());
        for (bar, row) in bars.iter().zip(&rows) {
            assert_eq!(bar.ticker, row.bar.ticker);
            assert_eq!(bar.date, row.bar.date);
        }
    }

    #[test]
    fn empty_input() {
        assert!(compute_rows(&[]).is_empty());
    }
}
