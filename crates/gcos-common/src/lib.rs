//! Common types shared across the GCOS compliance tools.

pub mod criteria;
pub mod error;
pub mod series;
pub mod tier;
pub mod time;

pub use criteria::{CriterionTable, TierCriterion, VariableCriteria};
pub use error::{GcosError, GcosResult};
pub use series::ColocatedSeries;
pub use tier::Tier;
pub use time::TimeRange;
