//! Core data model types for a landing run.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// A single CSV record keyed by the header row.
///
/// Column names are shared between all rows parsed from the same file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Create a row from shared headers and positional values.
    ///
    /// `values` may be shorter than `headers` (trailing columns are absent) or longer (extra
    /// values have no column name).
    pub fn new(headers: Arc<[String]>, values: Vec<String>) -> Self {
        Self { headers, values }
    }

    /// Build a standalone row from `(column, value)` pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (headers, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self::new(headers.into(), values)
    }

    /// Value of `column`, or `None` if the header has no such column or the record is too short.
    ///
    /// When a header name repeats, the last column with that name wins.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.headers
            .iter()
            .rposition(|h| h == column)
            .and_then(|idx| self.values.get(idx))
            .map(String::as_str)
    }

    /// Column names in header order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Raw positional values.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// Advisory data-quality counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueCounters {
    /// Rows whose trimmed `customer_id` was already seen earlier in the run.
    pub duplicate_ids: usize,
    /// Rows whose trimmed `name` is empty or absent.
    pub missing_name: usize,
    /// Rows whose `age` is below 18 or is not an integer.
    pub underage: usize,
}

impl IssueCounters {
    /// Sum of all counters.
    pub fn total(&self) -> usize {
        self.duplicate_ids + self.missing_name + self.underage
    }

    /// True when at least one counter is non-zero.
    pub fn has_issues(&self) -> bool {
        self.total() > 0
    }
}

/// Outcome of one successful ingestion run.
///
/// [`fmt::Display`] renders the summary text printed to stdout and appended to the run log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestionRun {
    /// Environment label from the config.
    pub env: String,
    /// Source file that was read.
    pub source: PathBuf,
    /// Landing file that was written.
    pub target: PathBuf,
    /// Number of data rows (header excluded).
    pub rows: usize,
    /// Quality counters for the rows.
    pub issues: IssueCounters,
    /// UTC timestamp (`YYYYMMDD_HHMMSS`) shared by the target name and the summary.
    pub timestamp: String,
}

impl fmt::Display for IngestionRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[OK] Ingestion completed | ENV={}", self.env)?;
        writeln!(f, "Source: {}", self.source.display())?;
        writeln!(f, "Target: {}", self.target.display())?;
        writeln!(f, "Rows ingested: {}", self.rows)?;
        writeln!(f, "Issues detected:")?;
        writeln!(f, "  - Duplicate customer_id: {}", self.issues.duplicate_ids)?;
        writeln!(f, "  - Missing name: {}", self.issues.missing_name)?;
        writeln!(f, "  - Underage customers: {}", self.issues.underage)?;
        writeln!(f, "Timestamp: {}", self.timestamp)?;
        writeln!(f, "------------------------------------")
    }
}
