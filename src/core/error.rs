//! Error types for the utility wrappers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the time, id, random and file utilities.
#[derive(Debug, Error)]
pub enum UtilError {
    /// Requested range is empty (`min` greater than `max`, or not comparable)
    /// or does not have a finite width.
    #[error("invalid range: [{min}, {max}] is empty or not finite")]
    InvalidRange {
        /// Lower bound as given by the caller.
        min: String,
        /// Upper bound as given by the caller.
        max: String,
    },
    /// The identifier cannot move forward without overflowing.
    #[error("identifier exhausted at {0}")]
    IdExhausted(String),
    /// Reading a file failed.
    #[error("failed to read `{}`: {source}", path.display())]
    File {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for the utility wrappers.
pub type UtilResult<T> = Result<T, UtilError>;

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
