//! Statement builders for the fixed DDL/ingest sequence. One typed function
//! per statement kind; the target table is always an explicit parameter.

use std::path::Path;

use crate::schema::DbColumn;

/// Conventional table name used by the binaries. Every builder still takes
/// the table explicitly so nothing depends on process-wide state.
pub const DEFAULT_TABLE: &str = "TtempTable";

pub fn create_sequence(table: &str) -> String {
    format!("CREATE SEQUENCE idvalues_{table} START 0 MINVALUE 0")
}

/// CSV-load table: positional `A{i}` columns plus a sequence-backed surrogate
/// key filled in during COPY.
pub fn create_csv_table(table: &str, cols: &[DbColumn]) -> String {
    let defs = join(cols, DbColumn::csv_defn);
    format!(
        "CREATE TABLE {table} (id INTEGER NOT NULL DEFAULT \
         (nextval('idvalues_{table}')), {defs}, PRIMARY KEY (id))"
    )
}

/// Plain table keeping the expanded column names, used on the Parquet export
/// path so the Parquet file carries the synthetic names.
pub fn create_named_table(table: &str, cols: &[DbColumn]) -> String {
    let defs = join(cols, DbColumn::named_defn);
    format!("CREATE TABLE {table} ({defs})")
}

pub fn copy_from_csv(table: &str, col_names: &[String], path: &Path) -> String {
    format!(
        "COPY {table}({}) FROM '{}' (DELIMITER ',', HEADER, COMPRESSION gzip)",
        col_names.join(", "),
        path.display()
    )
}

/// Parquet ingest: aliases every source field back to its positional name and
/// derives the surrogate key from the file row number.
pub fn ingest_parquet(table: &str, cols: &[DbColumn], path: &Path) -> String {
    let aliases = join(cols, DbColumn::ingest_alias);
    format!(
        "CREATE TABLE {table} AS SELECT file_row_number AS id, {aliases} \
         FROM read_parquet('{}', file_row_number=true)",
        path.display()
    )
}

pub fn create_unique_index(table: &str) -> String {
    format!("CREATE UNIQUE INDEX {table}_idx ON {table}(id)")
}

pub fn export_parquet(table: &str, path: &Path) -> String {
    format!(
        "COPY (SELECT * FROM {table}) TO '{}' (FORMAT 'parquet')",
        path.display()
    )
}

fn join(cols: &[DbColumn], render: impl Fn(&DbColumn) -> String) -> String {
    cols.iter().map(render).collect::<Vec<_>>().join(", ")
}
