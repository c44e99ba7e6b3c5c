//! Domain types: bars, derived rows, fundamental snapshots.

pub mod bar;
pub mod fundamentals;
pub mod row;

pub use bar::Bar;
pub use fundamentals::FundamentalSnapshot;
pub use row::{DatasetRow, IndicatorRow};
