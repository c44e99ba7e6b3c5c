//! tickertape core — daily equity indicator dataset builder.
//!
//! A linear, single-pass batch pipeline:
//! fetch → reshape → derive indicators → enrich → filter → round → persist.
//!
//! - Data acquisition (`data`): provider traits, the Yahoo Finance client,
//!   batch fetch with progress reporting, and the ticker universe.
//! - Indicators (`indicators`): ATR-14, RSI-14, MA20, MA200, computed per
//!   ticker with a per-ticker warm-up policy.
//! - Pipeline (`pipeline`): reshape, fundamentals enrichment, retention
//!   filter, 3-decimal rounding, CSV export, and orchestration.

pub mod config;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod pipeline;

pub use config::RunConfig;
pub use pipeline::run::{run_pipeline, PipelineError, RunSummary};
