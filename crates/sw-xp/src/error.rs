//! Error types for XP tracking.

use std::path::PathBuf;

/// Errors that can occur while reading or writing tracker state.
///
/// Missing or unparseable stored values are not errors; they resolve to
/// defaults in [`crate::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum XpError {
    /// The backing file could not be read or written.
    #[error("cannot access '{path}': {source}")]
    Io {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The backing file exists but is not a JSON object of strings.
    #[error("corrupt store '{path}': {reason}")]
    Corrupt {
        /// Path of the corrupt file.
        path: PathBuf,
        /// What was wrong with it.
        reason: String,
    },

    /// Store contents could not be serialized.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Convenience result type for XP operations.
pub type XpResult<T> = Result<T, XpError>;
