//! Data provider traits and structured error types.
//!
//! `DataProvider` abstracts the historical-bars source and
//! `FundamentalsProvider` the per-ticker metadata lookup, so both can be
//! mocked in tests without touching the network.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::FundamentalSnapshot;

/// Raw daily OHLCV bar from a data provider, before it is stamped with
/// its ticker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawBar {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Structured error types for the historical-bars path.
///
/// Any of these aborts the run when raised during the batch fetch, except
/// `SymbolNotFound`, which the fetch loop downgrades to an empty bar
/// sequence for that ticker.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("rate limited by provider (retry after {retry_after_secs}s)")]
    RateLimited { retry_after_secs: u64 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("authentication required: {0}")]
    AuthenticationRequired(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("data error: {0}")]
    Other(String),
}

/// Result of a successful bar fetch for a single ticker.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub ticker: String,
    pub bars: Vec<RawBar>,
}

/// Historical daily bars for one ticker over a date range.
///
/// Implementations must return bars in chronological order.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily OHLCV bars for a ticker over an inclusive date range.
    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError>;
}

/// Per-ticker fundamental metadata lookup.
///
/// Structurally infallible: implementations downgrade any provider-level
/// failure to `FundamentalSnapshot::missing()` rather than returning an
/// error, so a broken lookup can never abort the run. A successful lookup
/// that lacks one field yields `None` for just that field.
pub trait FundamentalsProvider: Send + Sync {
    fn fetch_fundamentals(&self, ticker: &str) -> FundamentalSnapshot;
}

/// Progress callback for multi-ticker fetches.
pub trait FetchProgress: Send {
    /// Called when starting to fetch a ticker.
    fn on_start(&self, ticker: &str, index: usize, total: usize);

    /// Called when a ticker fetch completes. `Ok` carries the bar count.
    fn on_complete(&self, ticker: &str, index: usize, total: usize, result: &Result<usize, DataError>);

    /// Called when the entire batch is done.
    fn on_batch_complete(&self, succeeded: usize, empty: usize, total: usize);
}

/// Simple progress reporter that prints to stdout.
pub struct StdoutProgress;

impl FetchProgress for StdoutProgress {
    fn on_start(&self, ticker: &str, index: usize, total: usize) {
        println!("[{}/{}] Fetching {ticker}...", index + 1, total);
    }

    fn on_complete(
        &self,
        ticker: &str,
        _index: usize,
        _total: usize,
        result: &Result<usize, DataError>,
    ) {
        match result {
            Ok(n) => println!("  OK: {ticker} ({n} bars)"),
            Err(e) => println!("  SKIP: {ticker}: {e}"),
        }
    }

    fn on_batch_complete(&self, succeeded: usize, empty: usize, total: usize) {
        println!("\nFetch complete: {succeeded}/{total} tickers with data, {empty} empty");
    }
}

/// Progress reporter that stays quiet. Used by tests and library callers.
pub struct SilentProgress;

impl FetchProgress for SilentProgress {
    fn on_start(&self, _ticker: &str, _index: usize, _total: usize) {}
    fn on_complete(
        &self,
        _ticker: &str,
        _index: usize,
        _total: usize,
        _result: &Result<usize, DataError>,
    ) {
    }
    fn on_batch_complete(&self, _succeeded: usize, _empty: usize, _total: usize) {}
}
