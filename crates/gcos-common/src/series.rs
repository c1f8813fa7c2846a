//! Colocated observation/model series.
//!
//! A colocated series pairs an observation array with a model array that the
//! data-access layer has already aligned to the same grid cells and times.
//! On disk it is a JSON document; `null` marks a missing value:
//!
//! ```json
//! {
//!   "var_name": ["od550aer", "od550aer"],
//!   "data_source": ["AeronetSunV3Lev2.daily", "ECMWF_CAMS_REAN"],
//!   "start": "2019-01-01",
//!   "stop": "2019-12-31",
//!   "observation": [0.12, null, 0.30],
//!   "model": [0.10, 0.22, null]
//! }
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::error::{GcosError, GcosResult};
use crate::time::TimeRange;

/// On-disk layout of a colocated series.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ColocatedDocument {
    var_name: [String; 2],
    data_source: [String; 2],
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    stop: Option<String>,
    observation: Vec<Option<f64>>,
    model: Vec<Option<f64>>,
}

/// Observation and model values aligned index by index.
#[derive(Debug, Clone, PartialEq)]
pub struct ColocatedSeries {
    /// (observation variable, model variable)
    pub var_name: [String; 2],
    /// (observation network, model name)
    pub data_source: [String; 2],
    pub time_range: Option<TimeRange>,
    observation: Vec<f64>,
    model: Vec<f64>,
}

impl ColocatedSeries {
    /// Create a series. Both arrays must have the same length; NaN marks missing values.
    pub fn new(
        var_name: [String; 2],
        data_source: [String; 2],
        time_range: Option<TimeRange>,
        observation: Vec<f64>,
        model: Vec<f64>,
    ) -> GcosResult<Self> {
        if observation.len() != model.len() {
            return Err(GcosError::invalid_input(format!(
                "observation has {} values but model has {}",
                observation.len(),
                model.len()
            )));
        }

        Ok(Self {
            var_name,
            data_source,
            time_range,
            observation,
            model,
        })
    }

    /// Parse a colocated series document.
    pub fn from_json_str(json: &str) -> GcosResult<Self> {
        let doc: ColocatedDocument = serde_json::from_str(json)?;
        let time_range = TimeRange::from_bounds(doc.start.as_deref(), doc.stop.as_deref())?;

        let to_values = |values: Vec<Option<f64>>| -> Vec<f64> {
            values.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect()
        };

        Self::new(
            doc.var_name,
            doc.data_source,
            time_range,
            to_values(doc.observation),
            to_values(doc.model),
        )
    }

    /// Read a colocated series document from disk.
    pub fn from_file(path: impl AsRef<Path>) -> GcosResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| GcosError::Io(format!("{}: {}", path.display(), e)))?;
        let series = Self::from_json_str(&content)?;
        debug!(
            path = %path.display(),
            samples = series.len(),
            variable = %series.model_variable(),
            "Loaded colocated series"
        );
        Ok(series)
    }

    pub fn observation(&self) -> &[f64] {
        &self.observation
    }

    pub fn model(&self) -> &[f64] {
        &self.model
    }

    pub fn observation_variable(&self) -> &str {
        &self.var_name[0]
    }

    /// Variable name used to select GCOS criteria.
    pub fn model_variable(&self) -> &str {
        &self.var_name[1]
    }

    pub fn observation_source(&self) -> &str {
        &self.data_source[0]
    }

    pub fn model_name(&self) -> &str {
        &self.data_source[1]
    }

    pub fn len(&self) -> usize {
        self.observation.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observation.is_empty()
    }
}
