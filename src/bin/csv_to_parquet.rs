//! Convert gzip CSV files to Parquet via DuckDB's native export.
//!
//! Usage:
//!   cargo run --bin csv_to_parquet -- data/covid_data_40_100000.csv out.parquet
//!   cargo run --bin csv_to_parquet -- data/

use clap::Parser;
use std::path::PathBuf;

use loadbench::convert;
use loadbench::error::HarnessError;
use loadbench::sql;

#[derive(Parser, Debug)]
#[command(name = "csv_to_parquet", about = "Convert CSV files to Parquet via DuckDB")]
struct Args {
    /// CSV file to convert, or a folder of CSV files
    input: Option<PathBuf>,
    /// Parquet output path (single-file mode only)
    output: Option<PathBuf>,
}

fn main() -> Result<(), HarnessError> {
    let args = Args::parse();

    match (args.input, args.output) {
        (Some(csv_file), Some(parquet_file)) => {
            convert::convert_file(&csv_file, &parquet_file, sql::DEFAULT_TABLE)
        }
        (Some(folder), None) => convert::convert_folder(&folder, sql::DEFAULT_TABLE),
        (None, _) => {
            println!("Usage: csv_to_parquet <csv> <parquet> | csv_to_parquet <folder>");
            Ok(())
        }
    }
}
