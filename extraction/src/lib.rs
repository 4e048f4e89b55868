//! FILENAME: extraction/src/lib.rs
//! PURPOSE: Driver library for the expression corpus extraction tool.
//! CONTEXT: Reads a delimiter-separated corpus of paired infix
//! expressions, filters out rows the converter cannot model, converts
//! the surviving expression columns to prefix notation in parallel, and
//! writes the results as a CSV table.
//!
//! PIPELINE: CSV rows --> Pre-filter --> converter::process (x2, parallel)
//!           --> compacted PrefixRecords --> CSV output

pub mod config;
pub mod error;
pub mod pipeline;
pub mod reader;
pub mod writer;

pub use config::FilterConfig;
pub use error::ExtractionError;
pub use pipeline::{extract, ExtractionOutcome};
pub use reader::read_rows;
pub use writer::write_rows;

use serde::Serialize;

/// One ingested corpus row. The driver owns it; the converter core
/// never mutates it. The timing field is opaque and passed through
/// unmodified.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// Zero-based position of the row in the input file, used for
    /// logging skipped rows.
    pub index: usize,
    pub expression: String,
    pub halide_result: String,
    pub halide_time: String,
}

/// One converted output row. The serde renames pin the output header to
/// `ID, Expression, HalideResult, HalideTime`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefixRecord {
    #[serde(rename = "ID")]
    pub id: usize,
    #[serde(rename = "Expression")]
    pub expression: String,
    #[serde(rename = "HalideResult")]
    pub halide_result: String,
    #[serde(rename = "HalideTime")]
    pub halide_time: String,
}
