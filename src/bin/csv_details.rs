//! Report the number of comma-separated fields in the first line of a file.
//!
//! Usage:
//!   cargo run --bin csv_details -- data/covid_data_5_100000.csv

use clap::Parser;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use loadbench::error::HarnessError;

#[derive(Parser, Debug)]
#[command(name = "csv_details", about = "Print the column count of a CSV file")]
struct Args {
    /// Input CSV file
    input: Option<PathBuf>,
}

fn main() -> Result<(), HarnessError> {
    let args = Args::parse();

    let input = match args.input {
        Some(input) => input,
        None => {
            println!("Usage");
            return Ok(());
        }
    };

    let mut reader = BufReader::new(File::open(&input)?);
    let mut first_line = String::new();
    reader.read_line(&mut first_line)?;
    let cols = first_line.trim_end_matches(['\r', '\n']).split(',').count();
    println!("Col count = {cols}");
    Ok(())
}
