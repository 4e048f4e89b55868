//! FILENAME: extraction/src/main.rs
//! PURPOSE: Command-line entry point for the extraction tool.
//! CONTEXT: Wires the CLI arguments to the driver library: reads the
//! corpus, sizes the worker pool, runs the parallel conversion, and
//! writes the output table.
//!
//! Usage:
//!   extract corpus.csv
//!   extract corpus.csv -d ',' -o converted.csv -j 8
//!   extract corpus.csv --filter-config filter.json

use anyhow::{bail, Context};
use clap::Parser;
use extraction::{extract, read_rows, write_rows, FilterConfig};
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Converts an infix expression corpus to prefix notation")]
struct CliArgs {
    /// Path to the delimiter-separated input corpus
    input: String,

    /// Field delimiter of the input corpus (single byte)
    #[arg(short, long, default_value = ";")]
    delimiter: String,

    /// Path of the output CSV file
    #[arg(short, long, default_value = "expressions_egg.csv")]
    output: String,

    /// Worker pool size; 0 selects half the available cores
    #[arg(short, long, default_value_t = 0)]
    jobs: usize,

    /// Optional JSON file overriding the built-in row filter
    #[arg(long)]
    filter_config: Option<PathBuf>,
}

impl CliArgs {
    fn delimiter_byte(&self) -> anyhow::Result<u8> {
        let bytes = self.delimiter.as_bytes();
        if bytes.len() != 1 {
            bail!(
                "delimiter must be a single byte, got {:?} ({} bytes)",
                self.delimiter,
                bytes.len()
            );
        }
        Ok(bytes[0])
    }

    fn worker_count(&self) -> usize {
        if self.jobs > 0 {
            return self.jobs;
        }
        let cores = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(2);
        (cores / 2).max(1)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let delimiter = args.delimiter_byte()?;
    let config = match &args.filter_config {
        Some(path) => FilterConfig::from_json_file(path)
            .with_context(|| format!("loading filter config from {}", path.display()))?,
        None => FilterConfig::default(),
    };

    rayon::ThreadPoolBuilder::new()
        .num_threads(args.worker_count())
        .build_global()
        .context("building worker pool")?;

    let rows = read_rows(&args.input, delimiter)
        .with_context(|| format!("reading corpus from {}", args.input))?;
    info!("read {} rows from {}", rows.len(), args.input);

    let outcome = extract(&rows, &config);
    write_rows(&args.output, &outcome.records)
        .with_context(|| format!("writing output to {}", args.output))?;

    println!(
        "Converted {} expressions ({} skipped) -> {}",
        outcome.records.len(),
        outcome.skipped,
        args.output
    );
    Ok(())
}
