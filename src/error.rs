//! Custom error types for the bank analyzer
//!
//! Session-level failures are modelled here with thiserror. Individual bad rows
//! are not errors: ingestion reports them as [`crate::ingest::RowRejection`]
//! values and keeps going.

use thiserror::Error;

use crate::models::Money;

/// The main error type for analyzer operations
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// The transaction source could not be read at all
    #[error("Transaction source '{source_name}' is unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A budget limit that is zero or negative
    #[error("Invalid budget for '{category}': limit must be greater than zero (got {limit})")]
    InvalidBudget { category: String, limit: Money },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl AnalyzerError {
    /// Create a "source unavailable" error
    pub fn source_unavailable(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a "source unavailable" error
    pub fn is_source_unavailable(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }

    /// Check if this is a rejected budget limit
    pub fn is_invalid_budget(&self) -> bool {
        matches!(self, Self::InvalidBudget { .. })
    }
}

impl From<std::io::Error> for AnalyzerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for analyzer operations
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
