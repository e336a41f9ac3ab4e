//! Error types for input validation, scenario loading and report export

use thiserror::Error;

/// A projection input field that falls outside its allowed range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
}

impl ValidationError {
    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::OutOfRange { field, .. } => field,
            ValidationError::NotFinite { field, .. } => field,
        }
    }
}

/// Failures while writing or reading exported reports
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown metric in table: {0}")]
    UnknownMetric(String),

    #[error("invalid value {value:?} for metric {metric}")]
    InvalidValue { metric: String, value: String },
}

/// Failures while loading a batch of scenarios
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("scenario {name:?} (row {row}): {source}")]
    Invalid {
        name: String,
        row: usize,
        #[source]
        source: ValidationError,
    },
}
