//! Landing-run orchestration.
//!
//! Most callers should use [`run_ingestion`], which copies the configured source CSV into the
//! landing directory and records a summary of the run.
//!
//! - If [`IngestionOptions::now`] is `None`, the current UTC time stamps the run.
//! - If an [`super::observability::IngestionObserver`] is provided, success/failure/alerts are
//!   reported to it.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::IngestionConfig;
use crate::error::{IngestionError, IngestionResult};
use crate::types::IngestionRun;

use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity};
use super::{csv, landing, quality};

/// Options controlling a landing run.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct IngestionOptions {
    /// Instant used for the run timestamp. If `None`, uses `Utc::now()`.
    pub now: Option<DateTime<Utc>>,
    /// Print the summary to stdout.
    pub echo_summary: bool,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for IngestionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IngestionOptions")
            .field("now", &self.now)
            .field("echo_summary", &self.echo_summary)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for IngestionOptions {
    fn default() -> Self {
        Self {
            now: None,
            echo_summary: true,
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Run one ingestion with default options.
///
/// See [`run_ingestion_with`].
///
/// ```no_run
/// use customer_landing_ingest::config::IngestionConfig;
/// use customer_landing_ingest::ingestion::run_ingestion;
///
/// # fn main() -> Result<(), customer_landing_ingest::IngestionError> {
/// let run = run_ingestion(&IngestionConfig::from_env())?;
/// println!("landed {} rows at {}", run.rows, run.target.display());
/// # Ok(())
/// # }
/// ```
pub fn run_ingestion(config: &IngestionConfig) -> IngestionResult<IngestionRun> {
    run_ingestion_with(config, &IngestionOptions::default())
}

/// Run one ingestion.
///
/// Steps, in order:
///
/// 1. create the logs and landing directories
/// 2. fail with [`IngestionError::SourceNotFound`] if the source is missing
/// 3. read the source rows and count data-quality issues
/// 4. copy the source to `<landing_dir>/customers_<YYYYMMDD_HHMMSS>.csv`
/// 5. print the summary (when `options.echo_summary`) and append it to `<logs_dir>/ingestion.log`
///
/// Quality findings never fail the run. No step is retried, and nothing written before a failure
/// is rolled back.
///
/// When an observer is configured, this function reports:
///
/// - `on_success` on success, with the finished [`IngestionRun`]
/// - `on_failure` on failure, with a computed severity
/// - `on_alert` on failure when the computed severity is >= `options.alert_at_or_above`
///
/// ## Fixed clock and observer
///
/// ```no_run
/// use std::sync::Arc;
///
/// use chrono::{TimeZone, Utc};
/// use customer_landing_ingest::config::IngestionConfig;
/// use customer_landing_ingest::ingestion::{run_ingestion_with, IngestionOptions, TracingObserver};
///
/// # fn main() -> Result<(), customer_landing_ingest::IngestionError> {
/// let opts = IngestionOptions {
///     now: Some(Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap()),
///     observer: Some(Arc::new(TracingObserver::default())),
///     ..Default::default()
/// };
///
/// let run = run_ingestion_with(&IngestionConfig::new("prod"), &opts)?;
/// assert!(run.target.ends_with("customers_20240115_093000.csv"));
/// # Ok(())
/// # }
/// ```
pub fn run_ingestion_with(
    config: &IngestionConfig,
    options: &IngestionOptions,
) -> IngestionResult<IngestionRun> {
    let result = execute(config, options);

    if let Some(obs) = options.observer.as_ref() {
        let ctx = IngestionContext::from(config);
        match &result {
            Ok(run) => obs.on_success(&ctx, run),
            Err(e) => {
                let sev = IngestionSeverity::for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn execute(config: &IngestionConfig, options: &IngestionOptions) -> IngestionResult<IngestionRun> {
    fs::create_dir_all(&config.logs_dir)?;
    fs::create_dir_all(&config.landing_dir)?;

    if !config.source_file.exists() {
        return Err(IngestionError::SourceNotFound {
            path: config.source_file.clone(),
        });
    }

    let rows = csv::read_rows_from_path(&config.source_file)?;
    let issues = quality::detect_issues(&rows);
    debug!(rows = rows.len(), ?issues, "scanned source rows");

    let timestamp = landing::format_timestamp(options.now.unwrap_or_else(Utc::now));
    let target = landing::landing_path(&config.landing_dir, &timestamp);
    let bytes = landing::copy_with_times(&config.source_file, &target)?;
    info!(
        source = %config.source_file.display(),
        landing_file = %target.display(),
        bytes,
        "copied source to landing"
    );

    let run = IngestionRun {
        env: config.env.clone(),
        source: config.source_file.clone(),
        target,
        rows: rows.len(),
        issues,
        timestamp,
    };
    let summary = run.to_string();

    if options.echo_summary {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{summary}")?;
        out.flush()?;
    }
    append_to_log(&config.log_file(), &summary)?;

    Ok(run)
}

/// Append `text` to the log at `path`, creating the file if needed.
///
/// The whole entry goes out in a single `write_all`; there is no locking between processes.
pub fn append_to_log(path: &Path, text: &str) -> IngestionResult<()> {
    let mut f = OpenOptions::new().create(true).append(true).open(path)?;
    f.write_all(text.as_bytes())?;
    Ok(())
}

/// Convenience helper for callers that want an owned request object.
///
/// This can be useful if you want to enqueue landing runs in a job system.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// Resolved run configuration.
    pub config: IngestionConfig,
    /// Options controlling the run.
    pub options: IngestionOptions,
}

impl IngestionRequest {
    /// Execute the request by calling [`run_ingestion_with`].
    pub fn run(&self) -> IngestionResult<IngestionRun> {
        run_ingestion_with(&self.config, &self.options)
    }
}
