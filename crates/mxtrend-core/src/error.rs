//! Error types shared by the mxtrend crates
//!
//! [`TrendError`] covers the two hard failures of the indicator pipeline
//! (a snapshot that cannot be loaded and an indicator without a guide entry)
//! plus the configuration and I/O failures of the surrounding tooling.
//!
//! An empty selection is never an error: filters narrow to an empty
//! [`Dataset`](crate::Dataset) and the panel composer reports a neutral
//! notice instead.

use thiserror::Error;

use crate::Category;

/// Unified error type for mxtrend operations.
#[derive(Error, Debug)]
pub enum TrendError {
    /// The snapshot source is unreadable or its schema is unusable.
    #[error("failed to load dataset '{source_id}': {reason}")]
    DataLoad { source_id: String, reason: String },

    /// A dataset indicator has no entry in the guide catalog.
    #[error("indicator '{series_name}' has no entry in the {catalog} guide catalog")]
    UnknownIndicator {
        series_name: String,
        catalog: Category,
    },

    /// Rows that do not share the dataset's year schema.
    #[error("Schema error: {0}")]
    Schema(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl TrendError {
    pub fn data_load(source_id: impl Into<String>, reason: impl Into<String>) -> Self {
        TrendError::DataLoad {
            source_id: source_id.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results using TrendError.
pub type TrendResult<T> = Result<T, TrendError>;
