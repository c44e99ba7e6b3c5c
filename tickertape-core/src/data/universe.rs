//! Ticker universe — sector-organized symbol lists.
//!
//! The universe is static configuration: a TOML file of GICS-style sectors
//! and their member tickers, with a built-in default of 100 US large caps.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The complete universe configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Universe {
    pub sectors: BTreeMap<String, Vec<String>>,
}

impl Universe {
    /// Load a universe from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read universe file: {e}"))?;
        Self::from_toml(&content)
    }

    /// Parse a universe from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("parse universe TOML: {e}"))
    }

    /// Serialize the universe to TOML.
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("serialize universe: {e}"))
    }

    /// All tickers across all sectors, in sector order.
    pub fn all_tickers(&self) -> Vec<String> {
        self.sectors.values().flatten().cloned().collect()
    }

    /// Tickers for a specific sector.
    pub fn sector_tickers(&self, sector: &str) -> Option<&[String]> {
        self.sectors.get(sector).map(|v| v.as_slice())
    }

    /// Sector names in order.
    pub fn sector_names(&self) -> Vec<&str> {
        self.sectors.keys().map(|s| s.as_str()).collect()
    }

    /// Total number of tickers.
    pub fn ticker_count(&self) -> usize {
        self.sectors.values().map(|v| v.len()).sum()
    }

    /// Default US large-cap universe: 100 tickers across ten sectors.
    pub fn default_us() -> Self {
        fn sector(tickers: &[&str]) -> Vec<String> {
            tickers.iter().map(|t| t.to_string()).collect()
        }

        let mut sectors = BTreeMap::new();

        sectors.insert(
            "Technology".into(),
            sector(&[
                "AAPL", "MSFT", "GOOGL", "NVDA", "META", "AVGO", "CRM", "ADBE", "ORCL", "CSCO",
                "ACN", "INTC",
            ]),
        );
        sectors.insert(
            "Healthcare".into(),
            sector(&[
                "JNJ", "UNH", "PFE", "ABBV", "MRK", "LLY", "TMO", "ABT", "DHR", "BMY", "AMGN",
                "GILD",
            ]),
        );
        sectors.insert(
            "Financials".into(),
            sector(&[
                "JPM", "BAC", "WFC", "GS", "MS", "BLK", "SCHW", "C", "AXP", "V", "MA", "PYPL",
            ]),
        );
        sectors.insert(
            "Energy".into(),
            sector(&[
                "XOM", "CVX", "COP", "SLB", "EOG", "MPC", "PSX", "VLO", "OXY", "KMI",
            ]),
        );
        sectors.insert(
            "ConsumerStaples".into(),
            sector(&[
                "WMT", "PG", "KO", "PEP", "COST", "MDLZ", "CL", "KMB", "GIS", "KHC",
            ]),
        );
        sectors.insert(
            "ConsumerDiscretionary".into(),
            sector(&[
                "AMZN", "HD", "MCD", "NKE", "SBUX", "TGT", "LOW", "TJX", "BKNG", "GM", "F", "CMG",
            ]),
        );
        sectors.insert(
            "Industrials".into(),
            sector(&[
                "BA", "CAT", "DE", "GE", "HON", "LMT", "MMM", "RTX", "UNP", "UPS", "FDX", "EMR",
            ]),
        );
        sectors.insert(
            "Utilities".into(),
            sector(&["NEE", "DUK", "SO", "D", "AEP", "EXC", "SRE", "XEL"]),
        );
        sectors.insert(
            "Materials".into(),
            sector(&["LIN", "APD", "SHW", "FCX", "NEM", "DOW"]),
        );
        sectors.insert(
            "Communication".into(),
            sector(&["DIS", "NFLX", "CMCSA", "T", "VZ", "TMUS"]),
        );

        Self { sectors }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_universe_has_100_tickers() {
        let u = Universe::default_us();
        assert_eq!(u.ticker_count(), 100);
        assert_eq!(u.all_tickers().len(), 100);
    }

    #[test]
    fn default_universe_has_sectors() {
        let u = Universe::default_us();
        assert!(u.sector_names().contains(&"Technology"));
        assert!(u.sector_names().contains(&"Utilities"));
    }

    #[test]
    fn default_universe_has_no_duplicates() {
        let u = Universe::default_us();
        let mut tickers = u.all_tickers();
        tickers.sort();
        tickers.dedup();
        assert_eq!(tickers.len(), 100);
    }

    #[test]
    fn toml_roundtrip() {
        let u = Universe::default_us();
        let toml_str = u.to_toml().unwrap();
        let parsed = Universe::from_toml(&toml_str).unwrap();
        assert_eq!(u.ticker_count(), parsed.ticker_count());
        assert_eq!(u.all_tickers(), parsed.all_tickers());
    }

    #[test]
    fn sector_lookup() {
        let u = Universe::default_us();
        let tech = u.sector_tickers("Technology").unwrap();
        assert!(tech.contains(&"AAPL".to_string()));
        assert!(u.sector_tickers("Crypto").is_none());
    }
}
