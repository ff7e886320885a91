//! CSV to Parquet conversion through DuckDB's native Parquet export.

use std::path::{Path, PathBuf};

use duckdb::Connection;

use crate::error::HarnessError;
use crate::expand::{self, ColumnTarget};
use crate::load;
use crate::schema;
use crate::sql;

/// Converts every `*.csv` file in `folder` to a sibling `*.parquet` file.
pub fn convert_folder(folder: &Path, table: &str) -> Result<(), HarnessError> {
    if !folder.is_dir() {
        return Err(HarnessError::Argument(format!(
            "input is not a folder: {}",
            folder.display()
        )));
    }
    let mut csv_files: Vec<PathBuf> = std::fs::read_dir(folder)?
        .filter_map(|entry| {
            entry.ok().map(|e| e.path()).filter(|p| {
                p.is_file() && p.extension().is_some_and(|ext| ext == "csv")
            })
        })
        .collect();
    csv_files.sort();

    for csv_file in csv_files {
        let parquet_file = csv_file.with_extension("parquet");
        println!(
            "Converting {} to {}",
            csv_file.display(),
            parquet_file.display()
        );
        convert_file(&csv_file, &parquet_file, table)?;
    }
    Ok(())
}

/// Round-trips one gzip CSV through a fresh in-memory instance and exports
/// the table as Parquet, keeping the expanded column names in the file.
pub fn convert_file(csv_file: &Path, parquet_file: &Path, table: &str) -> Result<(), HarnessError> {
    let conn = Connection::open_in_memory()?;

    let base = schema::load_base_schema()?;
    let cols = expand::expand_columns(&base, ColumnTarget::from_file_name(csv_file));
    load::run_statement(&conn, &sql::create_named_table(table, &cols))?;

    let names: Vec<String> = cols.iter().map(|c| c.name.clone()).collect();
    load::run_statement(&conn, &sql::copy_from_csv(table, &names, csv_file))?;

    load::run_statement(&conn, &sql::export_parquet(table, parquet_file))?;
    Ok(())
}
