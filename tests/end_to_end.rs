//! End-to-end runs against a real in-memory DuckDB instance: generate a
//! synthetic gzip CSV, bulk-load it, convert it to Parquet and ingest that
//! back.

use std::fs;
use std::path::{Path, PathBuf};

use duckdb::Connection;
use loadbench::error::HarnessError;
use loadbench::expand::{self, ColumnTarget};
use loadbench::schema::DbColumn;
use loadbench::{convert, generate, load, schema, sql};

const TABLE: &str = sql::DEFAULT_TABLE;

/// Narrow two-column source with a header and three data rows. Kept out of
/// the `.csv` namespace so directory scans never pick it up.
fn write_narrow_source(dir: &Path) -> PathBuf {
    let source = dir.join("narrow.txt");
    fs::write(&source, "uid,name\n1,abc\n2,def\n3,ghi\n").unwrap();
    source
}

/// Generates the five-column gzip fixture `covid_data_5_3.csv`.
fn generate_fixture(dir: &Path) -> PathBuf {
    let source = write_narrow_source(dir);
    let csv_file = dir.join("covid_data_5_3.csv");
    generate::generate_csv(&source, &csv_file, 3, 5).unwrap();
    csv_file
}

fn count_rows(conn: &Connection) -> i64 {
    conn.query_row(&format!("select count(*) from {TABLE}"), [], |row| row.get(0))
        .unwrap()
}

#[test]
fn generated_gzip_csv_bulk_loads_with_sequence_ids() {
    let dir = tempfile::tempdir().unwrap();
    let csv_file = generate_fixture(dir.path());

    let conn = Connection::open_in_memory().unwrap();
    let cols = load::create_csv_table(&conn, TABLE, ColumnTarget::from_file_name(&csv_file)).unwrap();
    assert_eq!(cols.len(), 5);

    let names: Vec<String> = cols.iter().map(DbColumn::csv_name).collect();
    load::run_statement(&conn, &sql::copy_from_csv(TABLE, &names, &csv_file)).unwrap();

    assert_eq!(count_rows(&conn), 3);
    let max_id: i64 = conn
        .query_row(&format!("select max(id) from {TABLE}"), [], |row| row.get(0))
        .unwrap();
    assert_eq!(max_id, 2, "surrogate key sequence starts at 0");

    let first: String = conn
        .query_row(&format!("select A1 from {TABLE} where id = 0"), [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(first, "abc");
}

#[test]
fn csv_converts_to_parquet_and_ingests_back() {
    let dir = tempfile::tempdir().unwrap();
    let csv_file = generate_fixture(dir.path());
    let parquet_file = dir.path().join("covid_data_5_3.parquet");

    convert::convert_file(&csv_file, &parquet_file, TABLE).unwrap();
    assert!(parquet_file.is_file());

    let conn = Connection::open_in_memory().unwrap();
    let base = schema::load_base_schema().unwrap();
    let cols = expand::expand_columns(&base, ColumnTarget::from_file_name(&parquet_file));
    conn.execute_batch(&sql::ingest_parquet(TABLE, &cols, &parquet_file))
        .unwrap();
    conn.execute_batch(&sql::create_unique_index(TABLE)).unwrap();

    assert_eq!(count_rows(&conn), 3);
    let uid: i32 = conn
        .query_row(&format!("select A0 from {TABLE} where id = 0"), [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(uid, 1);
}

#[test]
fn benchmark_walks_a_directory_of_csv_and_parquet_files() {
    let dir = tempfile::tempdir().unwrap();
    let csv_file = generate_fixture(dir.path());

    convert::convert_folder(dir.path(), TABLE).unwrap();
    assert!(dir.path().join("covid_data_5_3.parquet").is_file());

    load::run(dir.path(), TABLE).unwrap();
    load::run(&csv_file, TABLE).unwrap();
}

#[test]
fn missing_input_path_is_a_fatal_argument_error() {
    let err = load::run(Path::new("/no/such/path.csv"), TABLE).unwrap_err();
    assert!(matches!(err, HarnessError::Argument(_)));
}

#[test]
fn folder_conversion_rejects_plain_files() {
    let dir = tempfile::tempdir().unwrap();
    let csv_file = generate_fixture(dir.path());
    let err = convert::convert_folder(&csv_file, TABLE).unwrap_err();
    assert!(matches!(err, HarnessError::Argument(_)));
}

#[test]
fn engine_failures_surface_as_engine_errors() {
    let conn = Connection::open_in_memory().unwrap();
    let err = load::run_statement(&conn, "COPY nowhere FROM 'missing.csv'").unwrap_err();
    assert!(matches!(err, HarnessError::Engine(_)));
}
