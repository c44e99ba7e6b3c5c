//! Finalizer — retention filter and fixed-precision rounding.
//!
//! Rows before the retention cutoff exist only to warm up the indicator
//! windows; they are dropped here, after the indicator engine has consumed
//! them. Every numeric field is then rounded to 3 decimal places using
//! half-away-from-zero rounding (`f64::round` semantics).

use chrono::NaiveDate;

use crate::domain::DatasetRow;

/// Round to 3 decimal places, half away from zero.
pub fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

fn round3_opt(v: Option<f64>) -> Option<f64> {
    v.map(round3)
}

/// Filter to `date >= cutoff` and round all numeric fields.
pub fn finalize(rows: Vec<DatasetRow>, cutoff: NaiveDate) -> Vec<DatasetRow> {
    rows.into_iter()
        .filter(|r| r.bar.date >= cutoff)
        .map(|mut r| {
            r.bar.open = round3(r.bar.open);
            r.bar.high = round3(r.bar.high);
            r.bar.low = round3(r.bar.low);
            r.bar.close = round3(r.bar.close);
            r.atr_14 = round3_opt(r.atr_14);
            r.rsi_14 = round3_opt(r.rsi_14);
            r.ma_20 = round3_opt(r.ma_20);
            r.ma_200 = round3_opt(r.ma_200);
            r.trailing_pe = round3_opt(r.trailing_pe);
            r.market_cap = round3_opt(r.market_cap);
            r
        })
        .collect()
}
