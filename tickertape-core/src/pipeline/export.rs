//! CSV export — the flat output file.
//!
//! UTF-8, header row, one row per retained bar. Missing values render as
//! empty fields; rows are never dropped for missingness. Column order is
//! fixed and part of the output contract.

use std::io::Write;
use std::path::Path;

use crate::domain::DatasetRow;

/// Output column order. Stable across runs; downstream consumers key on it.
pub const OUTPUT_HEADER: [&str; 13] = [
    "Date",
    "Ticker",
    "Open",
    "High",
    "Low",
    "Close",
    "Volume",
    "ATR_14",
    "RSI_14",
    "P/E",
    "Market_Cap",
    "MA20",
    "MA200",
];

fn opt_field(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.3}")).unwrap_or_default()
}

fn write_rows<W: Write>(rows: &[DatasetRow], wtr: &mut csv::Writer<W>) -> Result<(), csv::Error> {
    wtr.write_record(OUTPUT_HEADER)?;

    for r in rows {
        wtr.write_record([
            r.bar.date.to_string(),
            r.bar.ticker.clone(),
            format!("{:.3}", r.bar.open),
            format!("{:.3}", r.bar.high),
            format!("{:.3}", r.bar.low),
            format!("{:.3}", r.bar.close),
            r.bar.volume.to_string(),
            opt_field(r.atr_14),
            opt_field(r.rsi_14),
            opt_field(r.trailing_pe),
            opt_field(r.market_cap),
            opt_field(r.ma_20),
            opt_field(r.ma_200),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render the dataset as a CSV string.
pub fn export_csv_string(rows: &[DatasetRow]) -> Result<String, csv::Error> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    write_rows(rows, &mut wtr)?;
    let data = wtr
        .into_inner()
        .map_err(|e| csv::Error::from(std::io::Error::other(e.to_string())))?;
    String::from_utf8(data).map_err(|e| csv::Error::from(std::io::Error::other(e)))
}

/// Write the dataset to a file, opened once, written once, closed.
pub fn write_csv(rows: &[DatasetRow], path: &Path) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    write_rows(rows, &mut wtr)
}
