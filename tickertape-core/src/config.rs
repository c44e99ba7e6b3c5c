//! Serializable run configuration.
//!
//! Dates are carried as `YYYY-MM-DD` strings in the TOML layer and parsed
//! on resolution. The fetch start is deliberately earlier than the
//! retention cutoff — the lead time exists solely to warm up the MA200 and
//! ATR/RSI windows before the retained window begins.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Calendar days of history fetched ahead of the retention cutoff.
/// Roughly 300 trading days, enough for the MA200 window plus slack.
const WARMUP_LEAD_DAYS: i64 = 450;

/// Days of output retained by default.
const DEFAULT_RETENTION_DAYS: i64 = 365;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid date '{value}' for {field} (expected YYYY-MM-DD)")]
    BadDate { field: &'static str, value: String },

    #[error("date order: require start_date < retention_cutoff <= end_date, got {start} / {cutoff} / {end}")]
    DateOrder {
        start: NaiveDate,
        cutoff: NaiveDate,
        end: NaiveDate,
    },
}

/// Configuration for one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunConfig {
    /// Explicit ticker list. Empty means "use the universe".
    #[serde(default)]
    pub tickers: Vec<String>,

    /// Optional universe TOML file; `None` falls back to the built-in
    /// default US universe.
    #[serde(default)]
    pub universe_file: Option<PathBuf>,

    /// Fetch start date (inclusive), `YYYY-MM-DD`.
    pub start_date: String,

    /// Fetch end date (inclusive), `YYYY-MM-DD`.
    pub end_date: String,

    /// Retention cutoff: output keeps rows with `date >= cutoff`.
    pub retention_cutoff: String,

    /// Output CSV path.
    pub output_path: PathBuf,
}

/// Parsed and validated date triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub cutoff: NaiveDate,
}

impl RunConfig {
    /// Load a config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse a config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Default run: one year of retained output ending today, warm-up lead
    /// ahead of the cutoff, CSV written to `dataset.csv`.
    pub fn default_run() -> Self {
        let today = chrono::Local::now().date_naive();
        let cutoff = today - chrono::Duration::days(DEFAULT_RETENTION_DAYS);
        let start = cutoff - chrono::Duration::days(WARMUP_LEAD_DAYS);
        Self {
            tickers: Vec::new(),
            universe_file: None,
            start_date: start.format("%Y-%m-%d").to_string(),
            end_date: today.format("%Y-%m-%d").to_string(),
            retention_cutoff: cutoff.format("%Y-%m-%d").to_string(),
            output_path: PathBuf::from("dataset.csv"),
        }
    }

    /// Parse the date strings and validate their ordering.
    pub fn resolve_dates(&self) -> Result<DateRange, ConfigError> {
        let start = parse_date("start_date", &self.start_date)?;
        let end = parse_date("end_date", &self.end_date)?;
        let cutoff = parse_date("retention_cutoff", &self.retention_cutoff)?;

        if start >= cutoff || cutoff > end {
            return Err(ConfigError::DateOrder { start, cutoff, end });
        }

        Ok(DateRange { start, end, cutoff })
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, ConfigError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| ConfigError::BadDate {
        field,
        value: value.to_string(),
    })
}
