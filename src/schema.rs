//! Base-schema template bundled with the crate.
//!
//! The template describes one logical covid-stats record; wide tables are
//! derived from it by repetition (see [`crate::expand`]).

use serde::Deserialize;

use crate::error::HarnessError;

const SCHEMA_JSON: &str = include_str!("schema.json");

/// One named, typed column. Doubles as a base-template entry (index =
/// position in the template) and an expanded column (index = position in the
/// expanded sequence). Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DbColumn {
    pub name: String,
    #[serde(rename = "type")]
    pub col_type: String,
    #[serde(skip)]
    pub index: usize,
}

impl DbColumn {
    /// Positional column name used for CSV-loaded tables: `A0`, `A1`, ...
    pub fn csv_name(&self) -> String {
        format!("A{}", self.index)
    }

    /// Column definition for CSV-loaded tables: `A0 INTEGER`.
    pub fn csv_defn(&self) -> String {
        format!("A{} {}", self.index, self.col_type)
    }

    /// Column definition keeping the expanded name: `uid_0 INTEGER`.
    pub fn named_defn(&self) -> String {
        format!("{} {}", self.name, self.col_type)
    }

    /// Parquet ingest alias mapping the named column back to its positional
    /// name: `uid_0 AS A0`.
    pub fn ingest_alias(&self) -> String {
        format!("{} AS A{}", self.name, self.index)
    }
}

/// Loads the bundled base schema, assigning each column its template position.
pub fn load_base_schema() -> Result<Vec<DbColumn>, HarnessError> {
    parse_schema(SCHEMA_JSON)
}

fn parse_schema(json: &str) -> Result<Vec<DbColumn>, HarnessError> {
    let mut cols: Vec<DbColumn> = serde_json::from_str(json)?;
    if cols.is_empty() {
        return Err(HarnessError::Config("schema resource lists no columns".into()));
    }
    for (i, col) in cols.iter_mut().enumerate() {
        if col.name.is_empty() || col.col_type.is_empty() {
            return Err(HarnessError::Config(format!(
                "schema entry {i} is missing a name or type"
            )));
        }
        col.index = i;
    }
    Ok(cols)
}
