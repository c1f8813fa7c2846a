//! GCOS accuracy tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three GCOS accuracy requirement levels.
///
/// Ordered from the strictest (`Goal`) to the most permissive (`Threshold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Goal,
    Breakthrough,
    Threshold,
}

impl Tier {
    /// All tiers in canonical order, strictest first.
    pub const ALL: [Tier; 3] = [Tier::Goal, Tier::Breakthrough, Tier::Threshold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Goal => "goal",
            Tier::Breakthrough => "breakthrough",
            Tier::Threshold => "threshold",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
