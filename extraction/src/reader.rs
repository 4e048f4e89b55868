//! FILENAME: extraction/src/reader.rs
//! PURPOSE: Reads corpus rows from a delimiter-separated file.
//! CONTEXT: Input rows carry at least three fields: the infix input
//! expression, the reference result expression, and an opaque timing
//! value. The input has no header row.

use crate::{ExtractionError, RawRecord};
use csv::{ReaderBuilder, StringRecord};
use log::warn;
use std::fs::File;

/// Extracts one `RawRecord` from a raw CSV record. A row with fewer
/// than three fields is a `MissingField` error for that row.
fn parse_row(index: usize, record: &StringRecord) -> Result<RawRecord, ExtractionError> {
    match (record.get(0), record.get(1), record.get(2)) {
        (Some(expression), Some(halide_result), Some(halide_time)) => Ok(RawRecord {
            index,
            expression: expression.to_string(),
            halide_result: halide_result.to_string(),
            halide_time: halide_time.to_string(),
        }),
        _ => Err(ExtractionError::MissingField { row: index }),
    }
}

/// Reads corpus rows into a `RawRecord` vector.
///
/// Rows with fewer than three fields are logged and dropped here;
/// structural damage to a single row is recoverable and never fails
/// the batch.
pub fn read_rows(file_path: &str, delimiter: u8) -> Result<Vec<RawRecord>, ExtractionError> {
    let file = File::open(file_path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(file);

    let mut rows = Vec::new();
    for (index, result) in rdr.records().enumerate() {
        let record = result?;

        match parse_row(index, &record) {
            Ok(row) => rows.push(row),
            Err(error) => warn!("skipping row: {}", error),
        }
    }

    Ok(rows)
}
