//! Landing-run entrypoints and implementations.
//!
//! Most callers should use [`run_ingestion`] (from [`run`]) which:
//!
//! - reads the configured source CSV and counts data-quality issues
//! - copies the source into the landing directory under a UTC timestamp
//! - prints and appends a summary, and optionally reports to an [`IngestionObserver`]
//!
//! The individual steps are also available under:
//! - [`csv`]
//! - [`quality`]
//! - [`landing`]

pub mod csv;
pub mod landing;
pub mod observability;
pub mod quality;
pub mod run;

pub use observability::{
    CompositeObserver, IngestionContext, IngestionObserver, IngestionSeverity, TracingObserver,
};
pub use quality::detect_issues;
pub use run::{run_ingestion, run_ingestion_with, IngestionOptions, IngestionRequest};
