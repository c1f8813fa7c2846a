//! Common test fixtures for GCOS compliance tests.

/// Criterion table documents.
pub mod criteria {
    /// Reference AOD table as YAML.
    pub const REFERENCE_YAML: &str = r#"
od550aer:
  goal:         { relative_error: 0.04, absolute_error: 0.02 }
  breakthrough: { relative_error: 0.10, absolute_error: 0.03 }
  threshold:    { relative_error: 0.20, absolute_error: 0.06 }
od550csaer:
  goal:         { relative_error: 0.04, absolute_error: 0.02 }
  breakthrough: { relative_error: 0.10, absolute_error: 0.03 }
  threshold:    { relative_error: 0.20, absolute_error: 0.06 }
"#;

    /// Single-variable table as JSON.
    pub const SINGLE_JSON: &str = r#"{
  "ang4487aer": {
    "goal":         { "relative_error": 0.05, "absolute_error": 0.05 },
    "breakthrough": { "relative_error": 0.15, "absolute_error": 0.10 },
    "threshold":    { "relative_error": 0.30, "absolute_error": 0.20 }
  }
}"#;

    /// Table with a negative threshold.
    pub const NEGATIVE_YAML: &str = r#"
od550aer:
  goal:         { relative_error: -0.04, absolute_error: 0.02 }
  breakthrough: { relative_error: 0.10, absolute_error: 0.03 }
  threshold:    { relative_error: 0.20, absolute_error: 0.06 }
"#;

    /// Table missing the threshold tier.
    pub const MISSING_TIER_YAML: &str = r#"
od550aer:
  goal:         { relative_error: 0.04, absolute_error: 0.02 }
  breakthrough: { relative_error: 0.10, absolute_error: 0.03 }
"#;

    /// Table whose tiers are out of order (goal looser than threshold).
    pub const UNORDERED_YAML: &str = r#"
od550aer:
  goal:         { relative_error: 0.30, absolute_error: 0.10 }
  breakthrough: { relative_error: 0.10, absolute_error: 0.03 }
  threshold:    { relative_error: 0.04, absolute_error: 0.02 }
"#;
}

/// Colocated series documents.
pub mod documents {
    /// Four pairs: one missing observation, one missing model value, one
    /// perfect match and one 20% deviation.
    pub const SMALL_AOD: &str = r#"{
  "var_name": ["od550aer", "od550aer"],
  "data_source": ["AeronetSunV3Lev2.daily", "ECMWF_CAMS_REAN"],
  "start": "2019-01-01",
  "stop": "2019-12-31",
  "observation": [null, 0.5, 0.25, 1.0],
  "model": [0.3, null, 0.25, 1.2]
}"#;

    /// Series without time bounds.
    pub const NO_TIME_RANGE: &str = r#"{
  "var_name": ["od550aer", "od550csaer"],
  "data_source": ["AeronetSunV3Lev2.daily", "EMEP"],
  "observation": [0.1, 0.2],
  "model": [0.1, 0.2]
}"#;

    /// Arrays of different lengths.
    pub const LENGTH_MISMATCH: &str = r#"{
  "var_name": ["od550aer", "od550aer"],
  "data_source": ["AeronetSunV3Lev2.daily", "ECMWF_CAMS_REAN"],
  "observation": [0.1, 0.2, 0.3],
  "model": [0.1, 0.2]
}"#;

    /// Variable with no entry in the reference table.
    pub const UNKNOWN_VARIABLE: &str = r#"{
  "var_name": ["concpm10", "concpm10"],
  "data_source": ["EEAAQeRep.v2", "EMEP"],
  "observation": [10.0, 12.0],
  "model": [11.0, 12.0]
}"#;
}
