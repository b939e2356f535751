//! Receipt Processor CLI
//!
//! Submits each receipt JSON file to an in-memory processor and writes
//! the points awarded to each one as CSV.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- receipts/*.json > points.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use log::warn;
use receipt_processor::{ProcessorError, ReceiptProcessor, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let paths: Vec<String> = env::args().skip(1).collect();
    if paths.is_empty() {
        return Err(ProcessorError::MissingArgument);
    }

    let processor = ReceiptProcessor::new();
    let mut ids = Vec::with_capacity(paths.len());

    for path in &paths {
        let submitted = File::open(path)
            .map_err(ProcessorError::from)
            .and_then(|file| processor.submit_reader(BufReader::new(file)));

        match submitted {
            Ok(id) => ids.push(id),
            Err(e) => warn!("{}: skipping receipt: {}", path, e),
        }
    }

    let stdout = io::stdout();
    let handle = stdout.lock();
    processor.write_output(&ids, handle)?;

    Ok(())
}
