//! Batch document error types.

use std::path::PathBuf;

use crate::domain::TimeError;

/// Errors that can occur when loading a batch document or rendering results.
///
/// Any of these fails the whole invocation.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The input file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid JSON or has the wrong top-level shape
    #[error("malformed batch document: {0}")]
    Json(#[from] serde_json::Error),

    /// A request or route record is missing a field or has the wrong type
    #[error("{section}[{index}]: {source}")]
    InvalidRecord {
        section: &'static str,
        index: usize,
        source: serde_json::Error,
    },

    /// A route record carries a malformed time
    #[error("routes[{index}]: {source}")]
    InvalidTime { index: usize, source: TimeError },
}

impl DocumentError {
    /// Index of the offending record, if the error concerns one.
    pub fn record_index(&self) -> Option<usize> {
        match self {
            DocumentError::InvalidRecord { index, .. } | DocumentError::InvalidTime { index, .. } => {
                Some(*index)
            }
            DocumentError::Io { .. } | DocumentError::Json(_) => None,
        }
    }
}
