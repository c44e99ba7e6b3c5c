//! Derived row types produced by the indicator and enrichment stages.

use serde::{Deserialize, Serialize};

use super::bar::Bar;
use super::fundamentals::FundamentalSnapshot;

/// A bar augmented with derived indicator fields.
///
/// Each derived field is `None` when the ticker's own history is too short
/// for the window — the cutoffs are indexed per ticker, never by position
/// in the concatenated table. Derived fields depend only on the ticker's
/// own prior rows in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorRow {
    pub bar: Bar,
    pub atr_14: Option<f64>,
    pub rsi_14: Option<f64>,
    pub ma_20: Option<f64>,
    pub ma_200: Option<f64>,
}

/// An indicator row joined with its ticker's fundamental snapshot.
///
/// This is the output unit: filtered, rounded, and written to CSV by the
/// finalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetRow {
    pub bar: Bar,
    pub atr_14: Option<f64>,
    pub rsi_14: Option<f64>,
    pub ma_20: Option<f64>,
    pub ma_200: Option<f64>,
    pub trailing_pe: Option<f64>,
    pub market_cap: Option<f64>,
}

impl DatasetRow {
    /// Join an indicator row with its ticker's snapshot.
    pub fn join(row: IndicatorRow, snapshot: FundamentalSnapshot) -> Self {
        Self {
            bar: row.bar,
            atr_14: row.atr_14,
            rsi_14: row.rsi_14,
            ma_20: row.ma_20,
            ma_200: row.ma_200,
            trailing_pe: snapshot.trailing_pe,
            market_cap: snapshot.market_cap,
        }
    }
}
