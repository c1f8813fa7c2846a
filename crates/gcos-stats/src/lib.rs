//! GCOS compliance statistics for colocated observation/model data.
//!
//! - [`compliance`]: fraction of valid pairs meeting each GCOS tier
//! - [`report`]: delimited and JSON report lines for evaluated series

pub mod compliance;
pub mod report;

pub use compliance::{evaluate, evaluate_series, ComplianceFractions, PairDeviation};
pub use report::{append_to_file, ReportLine, DEFAULT_DELIMITER};
