//! Data acquisition: provider traits, Yahoo Finance client, batch fetch,
//! ticker universe.

pub mod fetch;
pub mod provider;
pub mod universe;
pub mod yahoo;

pub use fetch::{fetch_universe, FetchSummary};
pub use provider::{
    DataError, DataProvider, FetchProgress, FetchResult, FundamentalsProvider, RawBar,
    SilentProgress, StdoutProgress,
};
pub use universe::Universe;
pub use yahoo::YahooProvider;
