//! Run configuration.
//!
//! The environment label comes from the `ENV` variable; the paths are fixed and relative to the
//! working directory. A config is built once at process start and handed to
//! [`crate::ingestion::run_ingestion`].

use std::path::{Path, PathBuf};

/// Environment variable holding the environment label.
pub const ENV_VAR: &str = "ENV";
/// Label used when `ENV` is unset.
pub const DEFAULT_ENV: &str = "dev";

/// Default source file, relative to the working directory.
pub const SOURCE_FILE: &str = "data/source/customers.csv";
/// Default landing directory, relative to the working directory.
pub const LANDING_DIR: &str = "data/landing";
/// Default logs directory, relative to the working directory.
pub const LOGS_DIR: &str = "logs";
/// File name of the append-only run log inside [`IngestionConfig::logs_dir`].
pub const LOG_FILE_NAME: &str = "ingestion.log";

/// Resolved configuration for a single ingestion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionConfig {
    /// Free-form environment label. Only recorded in the summary.
    pub env: String,
    /// CSV file to ingest.
    pub source_file: PathBuf,
    /// Directory receiving timestamped copies of the source.
    pub landing_dir: PathBuf,
    /// Directory holding [`LOG_FILE_NAME`].
    pub logs_dir: PathBuf,
}

impl IngestionConfig {
    /// Create a config with the fixed relative layout and the given environment label.
    pub fn new(env: impl Into<String>) -> Self {
        Self {
            env: env.into(),
            source_file: PathBuf::from(SOURCE_FILE),
            landing_dir: PathBuf::from(LANDING_DIR),
            logs_dir: PathBuf::from(LOGS_DIR),
        }
    }

    /// Resolve the config from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve the config through `lookup` instead of the process environment.
    ///
    /// An unset variable falls back to [`DEFAULT_ENV`]; a set-but-empty one is kept as is.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let env = lookup(ENV_VAR).unwrap_or_else(|| DEFAULT_ENV.to_string());
        Self::new(env)
    }

    /// Re-anchor every path under `base`, keeping the relative layout.
    pub fn rooted_at(mut self, base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        self.source_file = base.join(&self.source_file);
        self.landing_dir = base.join(&self.landing_dir);
        self.logs_dir = base.join(&self.logs_dir);
        self
    }

    /// Path of the append-only run log.
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir.join(LOG_FILE_NAME)
    }
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENV)
    }
}
