//! Report configuration.
//!
//! Defaults come from environment variables and are overridden by
//! command-line flags.

use clap::ValueEnum;
use gcos_stats::DEFAULT_DELIMITER;
use std::env;
use std::path::PathBuf;

/// Output format for report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Delimited text, percentages with one decimal place.
    Text,
    /// One JSON object per line with raw fractions.
    Json,
}

impl OutputFormat {
    /// Parse from string (case-insensitive), falling back to text.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Resolved settings for a report run.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    /// Criterion table file; the built-in reference table is used when unset.
    pub criteria_file: Option<PathBuf>,

    /// Field delimiter for text output.
    pub delimiter: String,

    pub format: OutputFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            criteria_file: None,
            delimiter: DEFAULT_DELIMITER.to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl ReportConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(val) = lookup("GCOS_CRITERIA_FILE") {
            if !val.trim().is_empty() {
                config.criteria_file = Some(PathBuf::from(val));
            }
        }

        if let Some(val) = lookup("GCOS_REPORT_DELIMITER") {
            if !val.is_empty() {
                config.delimiter = val;
            }
        }

        if let Some(val) = lookup("GCOS_REPORT_FORMAT") {
            config.format = OutputFormat::parse(&val);
        }

        config
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        criteria_file: Option<PathBuf>,
        delimiter: Option<String>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(path) = criteria_file {
            self.criteria_file = Some(path);
        }
        if let Some(delimiter) = delimiter {
            self.delimiter = delimiter;
        }
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}
