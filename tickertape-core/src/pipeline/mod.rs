//! The batch pipeline: reshape → indicators → enrich → finalize → export.

pub mod enrich;
pub mod export;
pub mod finalize;
pub mod reshape;
pub mod run;

pub use enrich::enrich;
pub use export::{export_csv_string, write_csv, OUTPUT_HEADER};
pub use finalize::{finalize, round3};
pub use reshape::flatten_sorted;
pub use run::{run_pipeline, PipelineError, RunSummary};
