//! Batch fetch — one historical-bars request per ticker with progress
//! reporting.
//!
//! Any provider error other than `SymbolNotFound` is fatal for the whole
//! batch: the error propagates and nothing is written downstream. A ticker
//! the provider does not know yields an empty bar sequence instead.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::provider::{DataError, DataProvider, FetchProgress};
use crate::domain::Bar;

/// Per-ticker bar sequences keyed by ticker, plus batch counters.
#[derive(Debug)]
pub struct FetchSummary {
    pub bars_by_ticker: BTreeMap<String, Vec<Bar>>,
    pub requested: usize,
    pub with_data: usize,
    pub empty: usize,
}

/// Fetch daily bars for every ticker in the universe.
///
/// Bars come back stamped with their ticker. Tickers with no data are
/// present in the result with an empty sequence so downstream stages see
/// the full universe.
pub fn fetch_universe(
    provider: &dyn DataProvider,
    tickers: &[String],
    start: NaiveDate,
    end: NaiveDate,
    progress: &dyn FetchProgress,
) -> Result<FetchSummary, DataError> {
    let total = tickers.len();
    let mut bars_by_ticker = BTreeMap::new();
    let mut with_data = 0;
    let mut empty = 0;

    for (i, ticker) in tickers.iter().enumerate() {
        progress.on_start(ticker, i, total);

        match provider.fetch(ticker, start, end) {
            Ok(result) => {
                let n = result.bars.len();
                progress.on_complete(ticker, i, total, &Ok(n));
                if n > 0 {
                    with_data += 1;
                } else {
                    empty += 1;
                }
                let bars = result
                    .bars
                    .into_iter()
                    .map(|raw| Bar {
                        ticker: ticker.clone(),
                        date: raw.date,
                        open: raw.open,
                        high: raw.high,
                        low: raw.low,
                        close: raw.close,
                        volume: raw.volume,
                    })
                    .collect();
                bars_by_ticker.insert(ticker.clone(), bars);
            }
            Err(err @ DataError::SymbolNotFound { .. }) => {
                progress.on_complete(ticker, i, total, &Err(err));
                empty += 1;
                bars_by_ticker.insert(ticker.clone(), Vec::new());
            }
            Err(err) => return Err(err),
        }
    }

    progress.on_batch_complete(with_data, empty, total);

    Ok(FetchSummary {
        bars_by_ticker,
        requested: total,
        with_data,
        empty,
    })
}
