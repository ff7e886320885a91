//! Measure DuckDB bulk-load and probe-select times for CSV/Parquet files.
//!
//! Usage:
//!   cargo run --release --bin load_times -- data/covid_data_40_100000.csv
//!   cargo run --release --bin load_times -- data/

use clap::Parser;
use std::path::PathBuf;

use loadbench::error::HarnessError;
use loadbench::{load, sql};

#[derive(Parser, Debug)]
#[command(name = "load_times", about = "Benchmark DuckDB load times for CSV/Parquet files")]
struct Args {
    /// Input file, or a directory of .csv/.parquet files
    input: Option<PathBuf>,
}

fn main() -> Result<(), HarnessError> {
    let args = Args::parse();

    let input = match args.input {
        Some(input) => input,
        None => {
            println!("Input file path not specified");
            return Ok(());
        }
    };

    load::run(&input, sql::DEFAULT_TABLE)
}
