//! Error types for GCOS compliance evaluation.

use thiserror::Error;

/// Result type alias using GcosError.
pub type GcosResult<T> = Result<T, GcosError>;

/// Primary error type for compliance evaluation and its inputs.
#[derive(Debug, Error)]
pub enum GcosError {
    // === Configuration Errors ===
    /// Unknown variable, or a criterion table that fails validation.
    #[error("configuration error: {0}")]
    Configuration(String),

    // === Input Errors ===
    /// Series that cannot be paired, or malformed document contents.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid time specification: {0}")]
    InvalidTime(String),

    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl GcosError {
    /// Create a Configuration error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an InvalidTime error.
    pub fn invalid_time(msg: impl Into<String>) -> Self {
        Self::InvalidTime(msg.into())
    }

    /// True for errors caused by the criterion table rather than the data.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}

impl From<std::io::Error> for GcosError {
    fn from(err: std::io::Error) -> Self {
        GcosError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GcosError {
    fn from(err: serde_json::Error) -> Self {
        GcosError::Parse(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for GcosError {
    fn from(err: serde_yaml::Error) -> Self {
        GcosError::Parse(format!("YAML error: {}", err))
    }
}
