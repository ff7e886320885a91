//! Generate a wide, gzip-compressed synthetic CSV from a narrow source file.
//!
//! Usage:
//!   cargo run --bin create_csv -- narrow.csv covid_data_40_100000.csv 100000 40

use clap::Parser;
use std::path::PathBuf;

use loadbench::error::HarnessError;
use loadbench::generate;

#[derive(Parser, Debug)]
#[command(name = "create_csv", about = "Generate a wide gzip CSV by column expansion")]
struct Args {
    /// Narrow source CSV (header included)
    input: Option<PathBuf>,
    /// Gzip-compressed output path
    output: Option<PathBuf>,
    /// Number of source lines to emit (one extra line is kept, matching
    /// existing fixtures)
    line_count: Option<usize>,
    /// Target column count for every emitted line
    col_count: Option<usize>,
}

fn main() -> Result<(), HarnessError> {
    let args = Args::parse();

    let (input, output, line_count, col_count) =
        match (args.input, args.output, args.line_count, args.col_count) {
            (Some(input), Some(output), Some(lines), Some(cols)) => (input, output, lines, cols),
            _ => return Ok(()),
        };

    generate::generate_csv(&input, &output, line_count, col_count)
}
