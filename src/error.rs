use std::path::PathBuf;

use thiserror::Error;

/// Convenience result type for ingestion operations.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Error type returned by an ingestion run.
///
/// Data-quality findings are never reported through this type; they only show up in
/// [`crate::types::IssueCounters`].
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The configured source file does not exist. Raised before any file is written.
    #[error("source file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Underlying I/O error (e.g. permission denied, disk full).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The source could not be read as CSV (e.g. invalid UTF-8).
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

impl IngestionError {
    /// True for the "source not found" precondition failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound { .. })
    }
}
