//! Error types for the plotprep library.

use thiserror::Error;

/// Main error type for the library.
#[derive(Error, Debug)]
pub enum PlotDataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid count value '{value}' at row {row}, column '{column}'")]
    InvalidCount {
        value: String,
        row: usize,
        column: String,
    },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Invalid target count {target}: must be between 1 and {available} (available rows)")]
    InvalidTarget { target: usize, available: usize },

    #[error("Row count mismatch: {with} rows with, {without} rows without")]
    RowCountMismatch { with: usize, without: usize },

    #[error("Missing column '{0}'")]
    MissingColumn(String),

    #[error("Empty data: {0}")]
    EmptyData(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, PlotDataError>;
