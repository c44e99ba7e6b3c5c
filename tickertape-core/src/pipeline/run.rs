//! Pipeline orchestration.
//!
//! Each stage runs to completion before the next begins: fetch → reshape →
//! indicators → enrich → finalize → write. A fetch failure aborts the run
//! with nothing written; a fundamentals failure never does.

use thiserror::Error;

use crate::config::{ConfigError, RunConfig};
use crate::data::fetch::fetch_universe;
use crate::data::provider::{DataError, DataProvider, FetchProgress, FundamentalsProvider};
use crate::data::universe::Universe;
use crate::indicators::compute_rows;
use crate::pipeline::{enrich, finalize, flatten_sorted, write_csv};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("universe error: {0}")]
    Universe(String),

    #[error("fetch failed: {0}")]
    Fetch(#[from] DataError),

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
}

/// What a completed run produced.
#[derive(Debug)]
pub struct RunSummary {
    pub tickers_requested: usize,
    pub tickers_with_data: usize,
    pub rows_total: usize,
    pub rows_retained: usize,
    pub output_path: std::path::PathBuf,
}

/// Execute the full batch pipeline and write the output CSV.
///
/// An empty result set (no bars for any ticker) is not fatal: the run
/// completes and writes a header-only file.
pub fn run_pipeline(
    config: &RunConfig,
    bars: &dyn DataProvider,
    fundamentals: &dyn FundamentalsProvider,
    progress: &dyn FetchProgress,
) -> Result<RunSummary, PipelineError> {
    let dates = config.resolve_dates()?;
    let tickers = resolve_tickers(config)?;

    let fetched = fetch_universe(bars, &tickers, dates.start, dates.end, progress)?;
    let tickers_with_data = fetched.with_data;

    let flat = flatten_sorted(fetched.bars_by_ticker);
    let rows_total = flat.len();

    let indicator_rows = compute_rows(&flat);
    let enriched = enrich(indicator_rows, fundamentals);
    let dataset = finalize(enriched, dates.cutoff);
    let rows_retained = dataset.len();

    write_csv(&dataset, &config.output_path)?;

    Ok(RunSummary {
        tickers_requested: tickers.len(),
        tickers_with_data,
        rows_total,
        rows_retained,
        output_path: config.output_path.clone(),
    })
}

/// Ticker list precedence: explicit config list, then universe file, then
/// the built-in default universe.
fn resolve_tickers(config: &RunConfig) -> Result<Vec<String>, PipelineError> {
    if !config.tickers.is_empty() {
        return Ok(config.tickers.clone());
    }
    let universe = match &config.universe_file {
        Some(path) => Universe::from_file(path).map_err(PipelineError::Universe)?,
        None => Universe::default_us(),
    };
    Ok(universe.all_tickers())
}
