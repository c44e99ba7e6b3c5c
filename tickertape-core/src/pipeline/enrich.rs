//! Fundamentals enricher — one metadata lookup per ticker, snapshot
//! broadcast across all of the ticker's rows.
//!
//! The lookup is structurally infallible (see `FundamentalsProvider`):
//! a failed lookup for one ticker records missing values for that ticker
//! only and the run continues.

use std::collections::BTreeMap;

use crate::data::provider::FundamentalsProvider;
use crate::domain::{DatasetRow, FundamentalSnapshot, IndicatorRow};

/// Join each indicator row with its ticker's fundamental snapshot.
///
/// Exactly one lookup is issued per distinct ticker present in `rows`.
pub fn enrich(
    rows: Vec<IndicatorRow>,
    fundamentals: &dyn FundamentalsProvider,
) -> Vec<DatasetRow> {
    let mut snapshots: BTreeMap<String, FundamentalSnapshot> = BTreeMap::new();

    for row in &rows {
        snapshots
            .entry(row.bar.ticker.clone())
            .or_insert_with(|| fundamentals.fetch_fundamentals(&row.bar.ticker));
    }

    rows.into_iter()
        .map(|row| {
            let snapshot = snapshots[&row.bar.ticker];
            DatasetRow::join(row, snapshot)
        })
        .collect()
}
