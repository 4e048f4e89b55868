//! FILENAME: extraction/src/writer.rs
//! PURPOSE: Writes converted records into a CSV file.
//! CONTEXT: The output table carries the fixed header
//! `ID, Expression, HalideResult, HalideTime`. The header is written
//! unconditionally, so an empty batch still produces a well-formed
//! table.

use crate::{ExtractionError, PrefixRecord};
use csv::WriterBuilder;

/// The fixed output header row.
pub const OUTPUT_HEADER: [&str; 4] = ["ID", "Expression", "HalideResult", "HalideTime"];

/// Writes the records to `path`, header first.
pub fn write_rows(path: &str, records: &[PrefixRecord]) -> Result<(), ExtractionError> {
    // Automatic header emission is tied to the first serialize call;
    // writing the header explicitly keeps it present for empty batches.
    let mut wtr = WriterBuilder::new().has_headers(false).from_path(path)?;
    wtr.write_record(OUTPUT_HEADER)?;

    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
