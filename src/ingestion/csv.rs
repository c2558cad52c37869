//! CSV reading for the source file.

use std::path::Path;
use std::sync::Arc;

use crate::error::IngestionResult;
use crate::types::Row;

/// Read every data row of a CSV file.
///
/// Rules:
///
/// - The first record is the header and defines column names.
/// - Any header is accepted; no columns are required.
/// - Records may be shorter or longer than the header.
/// - Blank lines are skipped.
pub fn read_rows_from_path(path: impl AsRef<Path>) -> IngestionResult<Vec<Row>> {
    let mut rdr = reader_builder().from_path(path)?;
    read_rows_from_reader(&mut rdr)
}

/// Read every data row from an existing CSV reader.
pub fn read_rows_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> IngestionResult<Vec<Row>> {
    let headers: Arc<[String]> = rdr.headers()?.iter().map(str::to_owned).collect();

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let values = record.iter().map(str::to_owned).collect();
        rows.push(Row::new(Arc::clone(&headers), values));
    }

    Ok(rows)
}

/// Reader settings used for source files: comma-delimited, header row, ragged records allowed.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}
