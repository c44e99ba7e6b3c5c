//! Reshaper — flatten per-ticker bar sequences into one table.
//!
//! The `(ticker, date)` sort is enforced explicitly before any windowed
//! computation runs; insertion order of the source map is never relied on.
//! No deduplication or gap-filling: missing trading days simply do not
//! appear as rows.

use std::collections::BTreeMap;

use crate::domain::Bar;

/// Concatenate per-ticker sequences and sort by `(ticker, date)`.
pub fn flatten_sorted(bars_by_ticker: BTreeMap<String, Vec<Bar>>) -> Vec<Bar> {
    let mut bars: Vec<Bar> = bars_by_ticker.into_values().flatten().collect();
    bars.sort_by(|a, b| a.ticker.cmp(&b.ticker).then(a.date.cmp(&b.date)));
    bars
}
