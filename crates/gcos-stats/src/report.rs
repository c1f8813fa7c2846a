//! Report lines for evaluated colocated series.
//!
//! A text report line carries the provenance of a series followed by the
//! tier percentages with one decimal place:
//!
//! ```text
//! model;observation;variable;start;stop;goal;breakthrough;threshold
//! ECMWF_CAMS_REAN;AeronetSunV3Lev2.daily;od550aer;2019-01-01;2019-12-31;50.0;50.0;100.0
//! ```

use gcos_common::{ColocatedSeries, GcosResult, Tier, TimeRange};
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::compliance::ComplianceFractions;

/// Field delimiter used when none is configured.
pub const DEFAULT_DELIMITER: &str = ";";

/// Compliance result together with the provenance of its series.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLine {
    pub model: String,
    pub observation: String,
    pub variable: String,
    pub time_range: Option<TimeRange>,
    pub fractions: ComplianceFractions,
}

/// JSON layout of a report line.
#[derive(Serialize)]
struct ReportRecord<'a> {
    model: &'a str,
    observation: &'a str,
    variable: &'a str,
    start: Option<String>,
    stop: Option<String>,
    #[serde(flatten)]
    fractions: &'a ComplianceFractions,
}

impl ReportLine {
    pub fn from_series(series: &ColocatedSeries, fractions: ComplianceFractions) -> Self {
        Self {
            model: series.model_name().to_string(),
            observation: series.observation_source().to_string(),
            variable: series.model_variable().to_string(),
            time_range: series.time_range,
            fractions,
        }
    }

    /// Column names matching [`ReportLine::to_delimited`].
    pub fn header(delimiter: &str) -> String {
        let mut columns = vec!["model", "observation", "variable", "start", "stop"];
        columns.extend(Tier::ALL.iter().map(Tier::as_str));
        columns.join(delimiter)
    }

    /// Provenance fields followed by tier percentages, one decimal place.
    pub fn to_delimited(&self, delimiter: &str) -> String {
        let (start, stop) = match &self.time_range {
            Some(range) => (range.start_date(), range.end_date()),
            None => (String::new(), String::new()),
        };

        let mut fields = vec![
            self.model.clone(),
            self.observation.clone(),
            self.variable.clone(),
            start,
            stop,
        ];
        fields.extend(
            self.fractions
                .percentages()
                .iter()
                .map(|pct| format!("{:.1}", pct)),
        );
        fields.join(delimiter)
    }

    /// Report line as a JSON object with raw fractions and pair counts.
    pub fn to_json(&self) -> GcosResult<String> {
        let record = ReportRecord {
            model: &self.model,
            observation: &self.observation,
            variable: &self.variable,
            start: self.time_range.map(|r| r.start_date()),
            stop: self.time_range.map(|r| r.end_date()),
            fractions: &self.fractions,
        };
        Ok(serde_json::to_string(&record)?)
    }
}

/// Append report lines to `path`, writing the header first if the file is new or empty.
pub fn append_to_file(path: impl AsRef<Path>, lines: &[ReportLine], delimiter: &str) -> GcosResult<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    if file.metadata()?.len() == 0 {
        writeln!(file, "{}", ReportLine::header(delimiter))?;
    }
    for line in lines {
        writeln!(file, "{}", line.to_delimited(delimiter))?;
    }

    info!(path = %path.display(), lines = lines.len(), "Appended GCOS report lines");
    Ok(())
}
