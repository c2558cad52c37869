//! Landing-zone writes: timestamped file names and verbatim copies.

use std::fs::{self, File, FileTimes};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::IngestionResult;

/// `strftime` pattern for run timestamps, e.g. `20240115_093000`.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
/// Prefix of landing file names.
pub const LANDING_FILE_PREFIX: &str = "customers_";
/// Extension of landing file names.
pub const LANDING_FILE_EXTENSION: &str = "csv";

/// Format `now` as a run timestamp.
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.format(TIMESTAMP_FORMAT).to_string()
}

/// Destination path for a run with the given timestamp.
pub fn landing_path(landing_dir: impl AsRef<Path>, timestamp: &str) -> PathBuf {
    landing_dir
        .as_ref()
        .join(format!("{LANDING_FILE_PREFIX}{timestamp}.{LANDING_FILE_EXTENSION}"))
}

/// Copy `source` to `target` byte for byte, overwriting `target` if it exists.
///
/// Access and modification times are carried over when the platform allows it; failing to do so
/// does not fail the copy.
pub fn copy_with_times(source: &Path, target: &Path) -> IngestionResult<u64> {
    let bytes = fs::copy(source, target)?;

    if let Err(e) = preserve_times(source, target) {
        debug!(
            source = %source.display(),
            target = %target.display(),
            error = %e,
            "could not preserve file times on landing copy"
        );
    }

    Ok(bytes)
}

fn preserve_times(source: &Path, target: &Path) -> std::io::Result<()> {
    let meta = fs::metadata(source)?;
    let mut times = FileTimes::new().set_modified(meta.modified()?);
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    File::options().write(true).open(target)?.set_times(times)
}
