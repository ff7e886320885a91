//! Bulk-load benchmarking harness for DuckDB over synthetic CSV and Parquet files.
//!
//! The harness widens a narrow base schema (and matching narrow CSV rows) to an
//! arbitrary column count by repetition, loads the result into an in-memory
//! DuckDB instance, and reports load/select timings. Four binaries drive it:
//!
//!   cargo run --bin csv_details -- data/covid_data_5_100000.csv
//!   cargo run --bin create_csv -- narrow.csv covid_data_40_100000.csv 100000 40
//!   cargo run --bin load_times -- data/
//!   cargo run --bin csv_to_parquet -- data/

pub mod convert;
pub mod error;
pub mod expand;
pub mod generate;
pub mod load;
pub mod schema;
pub mod sql;
