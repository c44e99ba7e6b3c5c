//! Yahoo Finance data provider.
//!
//! Two call shapes against Yahoo's unofficial APIs:
//! - v8 chart API for daily OHLCV bars over a date range;
//! - v10 quoteSummary API for trailing P/E and market cap.
//!
//! Yahoo Finance has no official API and is subject to unannounced format
//! changes; response parsing maps structural surprises to
//! `DataError::ResponseFormatChanged`.

use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

use super::provider::{DataError, DataProvider, FetchResult, FundamentalsProvider, RawBar};
use crate::domain::FundamentalSnapshot;

// ─── Chart API response (v8) ────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

// ─── quoteSummary API response (v10) ────────────────────────────────

#[derive(Debug, Deserialize)]
struct QuoteSummaryResponse {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryResult,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    result: Option<Vec<SummaryNode>>,
}

#[derive(Debug, Deserialize)]
struct SummaryNode {
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetail>,
}

/// Yahoo wraps every numeric field as `{raw, fmt}`; only `raw` matters here.
#[derive(Debug, Deserialize)]
struct SummaryDetail {
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<WrappedValue>,
    #[serde(rename = "marketCap")]
    market_cap: Option<WrappedValue>,
}

#[derive(Debug, Deserialize)]
struct WrappedValue {
    raw: Option<f64>,
}

// ─── Provider ───────────────────────────────────────────────────────

/// Yahoo Finance data provider for bars and fundamentals.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    pub fn new() -> Result<Self, DataError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .map_err(|e| DataError::Other(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Build the chart API URL for a ticker and date range.
    fn chart_url(ticker: &str, start: NaiveDate, end: NaiveDate) -> String {
        let start_ts = start
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_default();
        let end_ts = end
            .and_hms_opt(23, 59, 59)
            .map(|dt| dt.and_utc().timestamp())
            .unwrap_or_default();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{ticker}\
             ?period1={start_ts}&period2={end_ts}&interval=1d"
        )
    }

    /// Build the quoteSummary URL for a ticker.
    fn summary_url(ticker: &str) -> String {
        format!(
            "https://query2.finance.yahoo.com/v10/finance/quoteSummary/{ticker}\
             ?modules=summaryDetail"
        )
    }

    /// Parse the chart API response into RawBars.
    ///
    /// Rows where any OHLCV field is null are skipped (holidays and
    /// half-populated sessions) rather than carried as gaps.
    fn parse_chart(ticker: &str, resp: ChartResponse) -> Result<Vec<RawBar>, DataError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    DataError::SymbolNotFound {
                        symbol: ticker.to_string(),
                    }
                } else {
                    DataError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                DataError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("result array is empty".into()))?;

        let timestamps = data
            .timestamp
            .ok_or_else(|| DataError::ResponseFormatChanged("no timestamps".into()))?;

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| DataError::ResponseFormatChanged("no quote data".into()))?;

        let mut bars = Vec::with_capacity(timestamps.len());

        for (i, &ts) in timestamps.iter().enumerate() {
            let date = chrono::DateTime::from_timestamp(ts, 0)
                .map(|dt| dt.naive_utc().date())
                .ok_or_else(|| {
                    DataError::ResponseFormatChanged(format!("invalid timestamp: {ts}"))
                })?;

            let open = quote.open.get(i).copied().flatten();
            let high = quote.high.get(i).copied().flatten();
            let low = quote.low.get(i).copied().flatten();
            let close = quote.close.get(i).copied().flatten();
            let volume = quote.volume.get(i).copied().flatten();

            let (Some(open), Some(high), Some(low), Some(close), Some(volume)) =
                (open, high, low, close, volume)
            else {
                continue;
            };

            bars.push(RawBar {
                date,
                open,
                high,
                low,
                close,
                volume,
            });
        }

        Ok(bars)
    }

    /// Extract a fundamental snapshot from a quoteSummary response.
    ///
    /// A response without the `summaryDetail` node yields a missing
    /// snapshot; individually absent keys yield `None` for just that field.
    fn parse_summary(resp: QuoteSummaryResponse) -> FundamentalSnapshot {
        let detail = resp
            .quote_summary
            .result
            .and_then(|r| r.into_iter().next())
            .and_then(|node| node.summary_detail);

        match detail {
            Some(detail) => FundamentalSnapshot {
                trailing_pe: detail.trailing_pe.and_then(|v| v.raw),
                market_cap: detail.market_cap.and_then(|v| v.raw),
            },
            None => FundamentalSnapshot::missing(),
        }
    }

    /// Single-attempt HTTP request for bars. No retry policy: the batch
    /// fetch either completes or the run aborts.
    fn fetch_bars(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<RawBar>, DataError> {
        let url = Self::chart_url(ticker, start, end);

        let resp = self.client.get(&url).send().map_err(|e| {
            DataError::NetworkUnreachable(e.to_string())
        })?;

        let status = resp.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = resp
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(DataError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(DataError::AuthenticationRequired(format!(
                "Yahoo Finance rejected the request (HTTP {status})"
            )));
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(DataError::SymbolNotFound {
                symbol: ticker.to_string(),
            });
        }

        if !status.is_success() {
            return Err(DataError::Other(format!("HTTP {status} for {ticker}")));
        }

        let chart: ChartResponse = resp.json().map_err(|e| {
            DataError::ResponseFormatChanged(format!("failed to parse response for {ticker}: {e}"))
        })?;

        Self::parse_chart(ticker, chart)
    }

    /// Fallible inner half of the fundamentals lookup. The public trait
    /// method downgrades any error from here to a missing snapshot.
    fn fetch_summary(&self, ticker: &str) -> Result<FundamentalSnapshot, DataError> {
        let url = Self::summary_url(ticker);

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| DataError::NetworkUnreachable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::Other(format!("HTTP {status} for {ticker}")));
        }

        let summary: QuoteSummaryResponse = resp.json().map_err(|e| {
            DataError::ResponseFormatChanged(format!(
                "failed to parse quoteSummary for {ticker}: {e}"
            ))
        })?;

        Ok(Self::parse_summary(summary))
    }
}

impl DataProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo_finance"
    }

    fn fetch(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<FetchResult, DataError> {
        let bars = self.fetch_bars(ticker, start, end)?;
        Ok(FetchResult {
            ticker: ticker.to_string(),
            bars,
        })
    }
}

impl FundamentalsProvider for YahooProvider {
    fn fetch_fundamentals(&self, ticker: &str) -> FundamentalSnapshot {
        // Catch-and-nullify is the contract: a failed lookup records a
        // missing snapshot for this ticker only.
        self.fetch_summary(ticker)
            .unwrap_or_else(|_| FundamentalSnapshot::missing())
    }
}
