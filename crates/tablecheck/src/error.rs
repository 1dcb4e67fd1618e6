//! Error types for the tablecheck library.

use std::path::PathBuf;
use thiserror::Error;

use crate::value::ValueKind;

/// Main error type for tablecheck operations.
///
/// [`TableCheckError::Validation`] is the only variant that signals a failed
/// assertion. Every other variant signals misuse or bad input and is never
/// swallowed by [`Validator::confirm`](crate::Validator::confirm).
#[derive(Debug, Error)]
pub enum TableCheckError {
    /// The asserted property does not hold for the table.
    #[error("{message}")]
    Validation { message: String },

    /// A requested row or column does not exist in the table.
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// A reducer met a value it cannot aggregate.
    #[error("Cannot aggregate {kind} value at position {position}")]
    TypeAggregation { kind: ValueKind, position: usize },

    /// A validator or table was built from inconsistent arguments.
    #[error("Construction error: {0}")]
    Construction(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty input or no columns to build a table from.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TableCheckError {
    /// Returns true if this error reports a failed assertion rather than misuse.
    pub fn is_validation(&self) -> bool {
        matches!(self, TableCheckError::Validation { .. })
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        TableCheckError::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for tablecheck operations.
pub type Result<T> = std::result::Result<T, TableCheckError>;
