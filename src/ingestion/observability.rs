use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{error, info, warn};

use crate::config::IngestionConfig;
use crate::error::IngestionError;
use crate::types::IngestionRun;

/// Severity classification used for observer callbacks and alerting thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IngestionSeverity {
    /// Clean run.
    Info,
    /// Run succeeded with advisory data-quality findings.
    Warning,
    /// Error-level event (run failed).
    Error,
    /// Critical error (missing source, I/O or other infrastructure failures).
    Critical,
}

impl IngestionSeverity {
    /// Classify a successful run by its quality findings.
    pub fn for_run(run: &IngestionRun) -> Self {
        if run.issues.has_issues() {
            Self::Warning
        } else {
            Self::Info
        }
    }

    /// Classify a failed run.
    pub fn for_error(e: &IngestionError) -> Self {
        match e {
            IngestionError::SourceNotFound { .. } => Self::Critical,
            IngestionError::Io(_) => Self::Critical,
            IngestionError::Csv(err) => match err.kind() {
                ::csv::ErrorKind::Io(_) => Self::Critical,
                _ => Self::Error,
            },
        }
    }
}

/// Context about an ingestion attempt.
#[derive(Debug, Clone)]
pub struct IngestionContext {
    /// Environment label of the run.
    pub env: String,
    /// Source file the run reads.
    pub source: PathBuf,
    /// Landing directory the run writes into.
    pub landing_dir: PathBuf,
}

impl From<&IngestionConfig> for IngestionContext {
    fn from(config: &IngestionConfig) -> Self {
        Self {
            env: config.env.clone(),
            source: config.source_file.clone(),
            landing_dir: config.landing_dir.clone(),
        }
    }
}

/// Observer interface for ingestion outcomes.
///
/// Implementors can record metrics, logs, or trigger alerts.
pub trait IngestionObserver: Send + Sync {
    /// Called after the landing copy and the log append succeeded.
    fn on_success(&self, _ctx: &IngestionContext, _run: &IngestionRun) {}

    /// Called when the run fails.
    fn on_failure(
        &self,
        _ctx: &IngestionContext,
        _severity: IngestionSeverity,
        _error: &IngestionError,
    ) {
    }

    /// Called when a failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(
        &self,
        ctx: &IngestionContext,
        severity: IngestionSeverity,
        error: &IngestionError,
    ) {
        self.on_failure(ctx, severity, error)
    }
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn IngestionObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn IngestionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl IngestionObserver for CompositeObserver {
    fn on_success(&self, ctx: &IngestionContext, run: &IngestionRun) {
        for o in &self.observers {
            o.on_success(ctx, run);
        }
    }

    fn on_failure(
        &self,
        ctx: &IngestionContext,
        severity: IngestionSeverity,
        error: &IngestionError,
    ) {
        for o in &self.observers {
            o.on_failure(ctx, severity, error);
        }
    }

    fn on_alert(
        &self,
        ctx: &IngestionContext,
        severity: IngestionSeverity,
        error: &IngestionError,
    ) {
        for o in &self.observers {
            o.on_alert(ctx, severity, error);
        }
    }
}

/// Reports ingestion events as `tracing` events.
///
/// Runs with advisory findings ([`IngestionSeverity::Warning`]) are reported at `WARN`, clean runs
/// at `INFO`. A failure is logged once with its details; an alert only adds a short marker event.
#[derive(Debug, Default)]
pub struct TracingObserver;

impl IngestionObserver for TracingObserver {
    fn on_success(&self, ctx: &IngestionContext, run: &IngestionRun) {
        match IngestionSeverity::for_run(run) {
            IngestionSeverity::Info => info!(
                env = %ctx.env,
                landing_file = %run.target.display(),
                rows = run.rows,
                "ingestion completed"
            ),
            _ => warn!(
                env = %ctx.env,
                landing_file = %run.target.display(),
                rows = run.rows,
                duplicate_ids = run.issues.duplicate_ids,
                missing_name = run.issues.missing_name,
                underage = run.issues.underage,
                "ingestion completed with data-quality issues"
            ),
        }
    }

    fn on_failure(
        &self,
        ctx: &IngestionContext,
        severity: IngestionSeverity,
        error: &IngestionError,
    ) {
        error!(
            ?severity,
            env = %ctx.env,
            source = %ctx.source.display(),
            err = %error,
            "ingestion failed"
        );
    }

    fn on_alert(
        &self,
        _ctx: &IngestionContext,
        severity: IngestionSeverity,
        _error: &IngestionError,
    ) {
        error!(alert = true, ?severity, "alert threshold reached");
    }
}
