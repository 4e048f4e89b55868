//! FILENAME: extraction/src/pipeline.rs
//! PURPOSE: Parallel row conversion with order-preserving collection.
//! CONTEXT: The converter core is stateless and pure, so rows are
//! converted concurrently with no cross-row dependency. Results are
//! collected positionally (the parallel map preserves input order),
//! then compacted sequentially: failed rows are dropped and surviving
//! rows receive 1-based sequential IDs.

use crate::config::FilterConfig;
use crate::{PrefixRecord, RawRecord};
use converter::ConversionError;
use log::{info, warn};
use rayon::prelude::*;

/// Result of an extraction run. The skipped count is an observable
/// outcome, not an error condition for the batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionOutcome {
    pub records: Vec<PrefixRecord>,
    pub skipped: usize,
}

/// Converts one row: pre-filter on the input expression, then both
/// expression columns through the core. The timing field passes through
/// untouched.
fn convert_row(
    row: &RawRecord,
    config: &FilterConfig,
) -> Result<(String, String), ConversionError> {
    config.check(&row.expression)?;

    let expression = converter::process(&row.expression)?;
    let halide_result = converter::process(&row.halide_result)?;
    Ok((expression, halide_result))
}

/// Runs the filter and converter over all rows in parallel and compacts
/// the survivors into sequentially numbered output records.
pub fn extract(rows: &[RawRecord], config: &FilterConfig) -> ExtractionOutcome {
    // Indexed parallel map; collect() keeps slots in input order, so
    // row identity survives the concurrency.
    let converted: Vec<Option<(String, String, String)>> = rows
        .par_iter()
        .map(|row| match convert_row(row, config) {
            Ok((expression, halide_result)) => {
                Some((expression, halide_result, row.halide_time.clone()))
            }
            Err(error) => {
                warn!("row {} skipped: {}", row.index, error);
                None
            }
        })
        .collect();

    // Sequential compact pass: drop failures, assign 1-based IDs.
    let mut records = Vec::new();
    for slot in converted.into_iter().flatten() {
        let (expression, halide_result, halide_time) = slot;
        records.push(PrefixRecord {
            id: records.len() + 1,
            expression,
            halide_result,
            halide_time,
        });
    }

    let skipped = rows.len() - records.len();
    info!(
        "extraction finished: {} rows converted, {} skipped",
        records.len(),
        skipped
    );

    ExtractionOutcome { records, skipped }
}
