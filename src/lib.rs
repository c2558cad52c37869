//! `customer-landing-ingest` copies the customer CSV into a timestamped landing directory (the
//! first, least-processed tier of a data pipeline) and records what it saw.
//!
//! The primary entrypoint is [`ingestion::run_ingestion`], driven by an explicit
//! [`config::IngestionConfig`].
//!
//! ## What a run does
//!
//! - reads `data/source/customers.csv` (header row, comma-delimited, any columns)
//! - counts advisory data-quality issues: repeated `customer_id`, empty `name`, `age` below 18
//!   or not an integer
//! - copies the file byte for byte to `data/landing/customers_<YYYYMMDD_HHMMSS>.csv` (UTC)
//! - prints a summary and appends it to `logs/ingestion.log`
//!
//! Quality findings never fail a run. The only designed failure is a missing source file, which
//! is reported before anything is copied or logged.
//!
//! ## Quick example
//!
//! ```no_run
//! use customer_landing_ingest::config::IngestionConfig;
//! use customer_landing_ingest::ingestion::run_ingestion;
//!
//! # fn main() -> Result<(), customer_landing_ingest::IngestionError> {
//! // `ENV` labels the run (defaults to "dev").
//! let config = IngestionConfig::from_env();
//! let run = run_ingestion(&config)?;
//! println!("rows={} duplicates={}", run.rows, run.issues.duplicate_ids);
//! # Ok(())
//! # }
//! ```
//!
//! ## Counting issues without a run
//!
//! ```rust
//! use customer_landing_ingest::ingestion::detect_issues;
//! use customer_landing_ingest::types::Row;
//!
//! let rows = vec![
//!     Row::from_pairs([("customer_id", "1"), ("name", "Ann"), ("age", "30")]),
//!     Row::from_pairs([("customer_id", "1"), ("name", ""), ("age", "15")]),
//!     Row::from_pairs([("customer_id", "2"), ("name", "Bo"), ("age", "abc")]),
//! ];
//!
//! let issues = detect_issues(&rows);
//! assert_eq!(issues.duplicate_ids, 1);
//! assert_eq!(issues.missing_name, 1);
//! assert_eq!(issues.underage, 2);
//! ```
//!
//! ## Modules
//!
//! - [`config`]: run configuration (`ENV` + fixed paths)
//! - [`ingestion`]: the run itself and its individual steps
//! - [`types`]: rows, counters and the run record
//! - [`error`]: error types used across the crate

pub mod config;
pub mod error;
pub mod ingestion;
pub mod types;

pub use error::{IngestionError, IngestionResult};
