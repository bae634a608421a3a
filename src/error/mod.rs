//! Error handling for the lab report store.

pub mod util;

use std::io;
use std::path::PathBuf;

use crate::algorithm::diagnostic::EvaluationError;

/// Specialized error type for lab report operations
#[derive(Debug, thiserror::Error)]
pub enum LabReportError {
    /// Error opening, reading or writing a file
    #[error("IO error: {context} ({})", path.display())]
    Io {
        context: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The persisted store exists but is not a well-formed store document
    #[error("Corrupt report store at {}: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Error serializing the store document
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Test name not present in the catalog
    #[error("Unknown test: {0}")]
    UnknownTest(String),

    /// Parameter supplied that the test kind does not declare
    #[error("Parameter '{parameter}' is not declared for test '{test}'")]
    UndeclaredParameter { test: String, parameter: String },

    /// Typed evaluation failure
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    /// Report selection outside the available reports
    #[error("Report index {index} out of range ({len} reports available)")]
    OutOfRange { index: usize, len: usize },

    /// Invalid caller input
    #[error("Validation error: {0}")]
    Validation(String),
}

impl LabReportError {
    /// Create an IO error carrying the path and what the file was needed for
    pub fn io(context: impl Into<String>, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            path: path.into(),
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type for lab report operations
pub type Result<T> = std::result::Result<T, LabReportError>;
