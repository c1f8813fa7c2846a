//! GCOS criterion tables.
//!
//! A criterion table maps a variable name to the three accuracy tiers and
//! their thresholds. Tables are validated on construction and never mutated
//! afterwards, so a single table can be shared by reference across callers.
//!
//! Tables are loaded from YAML or JSON:
//!
//! ```yaml
//! od550aer:
//!   goal:         { relative_error: 0.04, absolute_error: 0.02 }
//!   breakthrough: { relative_error: 0.10, absolute_error: 0.03 }
//!   threshold:    { relative_error: 0.20, absolute_error: 0.06 }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::error::{GcosError, GcosResult};
use crate::tier::Tier;

/// Variables covered by the reference table.
pub const REFERENCE_VARIABLES: [&str; 2] = ["od550aer", "od550csaer"];

/// Accuracy requirement for a single tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierCriterion {
    /// Allowed error as a fraction of the reference value (0.1 = 10%).
    pub relative_error: f64,
    /// Allowed error in the units of the variable.
    pub absolute_error: f64,
}

impl TierCriterion {
    pub const fn new(relative_error: f64, absolute_error: f64) -> Self {
        Self {
            relative_error,
            absolute_error,
        }
    }

    fn is_valid(&self) -> bool {
        self.relative_error.is_finite()
            && self.relative_error >= 0.0
            && self.absolute_error.is_finite()
            && self.absolute_error >= 0.0
    }
}

/// The three tier criteria for one variable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariableCriteria {
    pub goal: TierCriterion,
    pub breakthrough: TierCriterion,
    pub threshold: TierCriterion,
}

impl VariableCriteria {
    /// GCOS aerosol optical depth requirements.
    pub const AOD: VariableCriteria = VariableCriteria {
        goal: TierCriterion::new(0.04, 0.02),
        breakthrough: TierCriterion::new(0.10, 0.03),
        threshold: TierCriterion::new(0.20, 0.06),
    };

    pub fn get(&self, tier: Tier) -> &TierCriterion {
        match tier {
            Tier::Goal => &self.goal,
            Tier::Breakthrough => &self.breakthrough,
            Tier::Threshold => &self.threshold,
        }
    }

    /// Tier criteria in canonical order, strictest first.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &TierCriterion)> + '_ {
        Tier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }

    /// True when each tier is at least as permissive as the one before it.
    pub fn is_monotonic(&self) -> bool {
        let ordered = |a: &TierCriterion, b: &TierCriterion| {
            a.relative_error <= b.relative_error && a.absolute_error <= b.absolute_error
        };
        ordered(&self.goal, &self.breakthrough) && ordered(&self.breakthrough, &self.threshold)
    }
}

/// Immutable mapping from variable name to its tier criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CriterionTable {
    entries: BTreeMap<String, VariableCriteria>,
}

impl CriterionTable {
    /// Build a table, validating every entry.
    pub fn new(entries: BTreeMap<String, VariableCriteria>) -> GcosResult<Self> {
        if entries.is_empty() {
            return Err(GcosError::configuration("criterion table has no variables"));
        }

        for (variable, criteria) in &entries {
            for (tier, criterion) in criteria.iter() {
                if !criterion.is_valid() {
                    return Err(GcosError::configuration(format!(
                        "criterion '{}' for variable '{}' must have finite, non-negative thresholds (relative_error={}, absolute_error={})",
                        tier, variable, criterion.relative_error, criterion.absolute_error
                    )));
                }
            }
            if !criteria.is_monotonic() {
                warn!(
                    variable = %variable,
                    "GCOS tiers are not ordered from strictest to most permissive"
                );
            }
        }

        debug!(variables = entries.len(), "Loaded GCOS criterion table");
        Ok(Self { entries })
    }

    /// The reference GCOS table for aerosol optical depth.
    pub fn reference() -> Self {
        let entries = REFERENCE_VARIABLES
            .iter()
            .map(|name| (name.to_string(), VariableCriteria::AOD))
            .collect();
        Self { entries }
    }

    /// Load a table from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> GcosResult<Self> {
        let entries: BTreeMap<String, VariableCriteria> = serde_yaml::from_str(yaml)?;
        Self::new(entries)
    }

    /// Load a table from a JSON string.
    pub fn from_json_str(json: &str) -> GcosResult<Self> {
        let entries: BTreeMap<String, VariableCriteria> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a table from file. `.json` files are read as JSON, anything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> GcosResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GcosError::Io(format!("{}: {}", path.display(), e)))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }

    /// Look up the criteria for a variable.
    pub fn get(&self, variable: &str) -> GcosResult<&VariableCriteria> {
        self.entries.get(variable).ok_or_else(|| {
            GcosError::configuration(format!(
                "no GCOS criteria defined for variable '{}'",
                variable
            ))
        })
    }

    pub fn contains(&self, variable: &str) -> bool {
        self.entries.contains_key(variable)
    }

    /// Variable names, sorted.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CriterionTable {
    fn default() -> Self {
        Self::reference()
    }
}
