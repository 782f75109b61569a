//! Error types for review-core.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias using ReviewError.
pub type Result<T> = std::result::Result<T, ReviewError>;

/// Errors raised by the scheduler, the date indices and the resolver.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("invalid date format: {value} (expected {expected})")]
    Format { value: String, expected: &'static str },

    #[error("study date cannot be in the future: study date {study}, current date {today}")]
    FutureDate { study: NaiveDate, today: NaiveDate },

    #[error("corrupt index file {}: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid interval offsets {0:?}: must be non-empty, strictly ascending and between 1 and {} days", crate::types::MAX_OFFSET_DAYS)]
    InvalidOffsets(Vec<i64>),
}

impl ReviewError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
