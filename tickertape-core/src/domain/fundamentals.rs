//! Per-ticker fundamental snapshot.

use serde::{Deserialize, Serialize};

/// Trailing P/E and market cap for one ticker, fetched once per run.
///
/// This is a point-in-time snapshot, not a historical series: the same
/// pair is broadcast across every row belonging to the ticker. Either
/// field may be absent — a failed lookup records both as `None` and the
/// run continues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FundamentalSnapshot {
    pub trailing_pe: Option<f64>,
    pub market_cap: Option<f64>,
}

impl FundamentalSnapshot {
    /// Snapshot with both fields absent (failed or empty lookup).
    pub fn missing() -> Self {
        Self::default()
    }

    pub fn is_missing(&self) -> bool {
        self.trailing_pe.is_none() && self.market_cap.is_none()
    }
}
