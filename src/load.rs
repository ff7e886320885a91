//! Load-time benchmark: bulk-load one file into a throwaway in-memory DuckDB
//! instance, then time a probe select.

use std::path::{Path, PathBuf};
use std::time::Instant;

use duckdb::Connection;

use crate::error::HarnessError;
use crate::expand::{self, ColumnTarget};
use crate::schema::{self, DbColumn};
use crate::sql;

/// Benchmarks a single file, or every `.csv`/`.parquet` file in a directory,
/// one file start-to-finish before the next. An engine failure on one file
/// aborts the remaining batch.
pub fn run(input: &Path, table: &str) -> Result<(), HarnessError> {
    if !input.exists() {
        return Err(HarnessError::Argument(format!(
            "input path does not exist: {}",
            input.display()
        )));
    }
    if input.is_file() {
        return measure_load(input, table);
    }
    for file in find_input_files(input)? {
        println!("Calculating load for: {}", file.display());
        measure_load(&file, table)?;
    }
    Ok(())
}

fn find_input_files(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.ends_with(".csv") || name.ends_with(".parquet") {
                    files.push(path);
                }
            }
        }
    }
    files.sort();
    Ok(files)
}

/// Loads one file into a fresh in-memory instance, reporting load duration,
/// row count, probe-select duration and the engine's reported memory usage.
pub fn measure_load(file: &Path, table: &str) -> Result<(), HarnessError> {
    let conn = Connection::open_in_memory()?;
    if file.extension().is_some_and(|ext| ext == "csv") {
        load_csv_file(&conn, file, table)?;
    } else {
        load_parquet_file(&conn, file, table)?;
    }
    print_db_size(&conn)?;
    Ok(())
}

fn load_csv_file(conn: &Connection, file: &Path, table: &str) -> Result<(), HarnessError> {
    let cols = create_csv_table(conn, table, ColumnTarget::from_file_name(file))?;
    let names: Vec<String> = cols.iter().map(DbColumn::csv_name).collect();
    let copy = sql::copy_from_csv(table, &names, file);

    let start = Instant::now();
    run_statement(conn, &copy)?;
    println!("Time to load (ms): {}", start.elapsed().as_millis());

    let start = Instant::now();
    probe_select(conn, table, cols.len() + 1)?;
    println!("Time to select (ms): {}", start.elapsed().as_millis());
    Ok(())
}

fn load_parquet_file(conn: &Connection, file: &Path, table: &str) -> Result<(), HarnessError> {
    let base = schema::load_base_schema()?;
    let cols = expand::expand_columns(&base, ColumnTarget::from_file_name(file));
    let ingest = sql::ingest_parquet(table, &cols, file);

    let start = Instant::now();
    {
        let db = conn.try_clone()?;
        db.execute_batch(&ingest)?;
        db.execute_batch(&sql::create_unique_index(table))?;
    }
    println!("Time to load (ms): {}", start.elapsed().as_millis());

    let start = Instant::now();
    probe_select(conn, table, cols.len() + 1)?;
    println!("Time to select (ms): {}", start.elapsed().as_millis());
    Ok(())
}

/// Creates the sequence-backed benchmark table and returns its columns.
pub fn create_csv_table(
    conn: &Connection,
    table: &str,
    target: ColumnTarget,
) -> Result<Vec<DbColumn>, HarnessError> {
    let base = schema::load_base_schema()?;
    let cols = expand::expand_columns(&base, target);
    let db = conn.try_clone()?;
    db.execute_batch(&sql::create_sequence(table))?;
    db.execute_batch(&sql::create_csv_table(table, &cols))?;
    Ok(cols)
}

/// Executes one statement on a duplicate of the connection, the same
/// open-use-close discipline the loader applies everywhere.
pub fn run_statement(conn: &Connection, statement: &str) -> Result<(), HarnessError> {
    let db = conn.try_clone()?;
    db.execute_batch(statement)?;
    Ok(())
}

/// Counts the rows, then materializes a five-row window around the midpoint
/// of the surrogate key range without printing it. `col_count` includes the
/// surrogate key column.
fn probe_select(conn: &Connection, table: &str, col_count: usize) -> Result<(), HarnessError> {
    let db = conn.try_clone()?;
    let row_count: i64 =
        db.query_row(&format!("select count(*) from {table}"), [], |row| row.get(0))?;
    println!("Row count = {row_count}");

    let mid = row_count / 2;
    let window = format!("select * from {table} where id > {mid} and id <= {}", mid + 5);
    let mut stmt = db.prepare(&window)?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        for i in 0..col_count {
            let _ = row.get_ref(i)?;
        }
    }
    Ok(())
}

fn print_db_size(conn: &Connection) -> Result<(), HarnessError> {
    let db = conn.try_clone()?;
    let mut stmt = db.prepare("SELECT memory_usage FROM pragma_database_size()")?;
    let mut rows = stmt.query([])?;
    match rows.next()? {
        Some(row) => {
            let usage: String = row.get(0)?;
            println!("Database size = {usage}");
        }
        None => println!("Unable to get database size"),
    }
    Ok(())
}
