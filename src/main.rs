//! Runs one landing ingestion from the working directory.
//!
//! `ENV` labels the run; `RUST_LOG` controls diagnostics on stderr. The summary goes to stdout.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use customer_landing_ingest::config::IngestionConfig;
use customer_landing_ingest::ingestion::{run_ingestion_with, IngestionOptions, TracingObserver};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = IngestionConfig::from_env();
    info!(env = %config.env, source = %config.source_file.display(), "starting landing ingestion");

    let opts = IngestionOptions {
        observer: Some(Arc::new(TracingObserver)),
        ..Default::default()
    };

    // Failures are logged by the observer.
    match run_ingestion_with(&config, &opts) {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
