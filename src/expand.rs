//! Column and row expansion: widening a narrow base schema or data row to a
//! target column count by full repetitions plus a partial final repetition.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::schema::DbColumn;

/// Bounded-split cap for source rows. Delimiters past the 20th field stay
/// literal inside the last field; existing fixtures depend on this cap.
pub const SPLIT_FIELD_CAP: usize = 20;

/// Target width for an expansion, parsed from the input file name.
///
/// `AsIs` means "use the base schema unchanged" and replaces the `-1`
/// sentinel the file-name convention would otherwise smuggle through
/// arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnTarget {
    /// No expansion; the base template is used verbatim.
    AsIs,
    /// Expand to exactly this many columns.
    Expand(usize),
}

impl ColumnTarget {
    /// Parses the `covid_data_<cols>_<rows>.<ext>` naming convention. Any
    /// file name outside the convention gets no expansion.
    pub fn from_file_name(path: &Path) -> ColumnTarget {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return ColumnTarget::AsIs,
        };
        match file_name_pattern().captures(name) {
            Some(caps) => caps[1]
                .parse::<usize>()
                .map_or(ColumnTarget::AsIs, ColumnTarget::Expand),
            None => ColumnTarget::AsIs,
        }
    }
}

fn file_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^covid_data_(\d+)_(\d+)\..+$").unwrap())
}

/// Widens `base` to the target column count.
///
/// With `S = base.len()`, `q = n / S` and `r = n % S`, the result is `q` full
/// repetitions of the template (repetition `i` suffixes every name with
/// `_{i}`) followed by the first `r` base columns suffixed `_{q}`. Indices are
/// reassigned to the position in the expanded sequence, so they are contiguous
/// and ascending from 0. `base` must be non-empty (the schema loader
/// guarantees this).
pub fn expand_columns(base: &[DbColumn], target: ColumnTarget) -> Vec<DbColumn> {
    let count = match target {
        ColumnTarget::AsIs => return base.to_vec(),
        ColumnTarget::Expand(count) => count,
    };
    let size = base.len();
    let q = count / size;
    let r = count % size;
    let mut out = Vec::with_capacity(count);
    for i in 0..q {
        for (j, col) in base.iter().enumerate() {
            out.push(DbColumn {
                name: format!("{}_{}", col.name, i),
                col_type: col.col_type.clone(),
                index: i * size + j,
            });
        }
    }
    for (i, col) in base.iter().take(r).enumerate() {
        out.push(DbColumn {
            name: format!("{}_{}", col.name, q),
            col_type: col.col_type.clone(),
            index: q * size + i,
        });
    }
    out
}

/// Splits a source line on commas into at most [`SPLIT_FIELD_CAP`] fields.
pub fn split_fields(line: &str) -> Vec<&str> {
    line.splitn(SPLIT_FIELD_CAP, ',').collect()
}

/// Widens a source row to exactly `target_count` comma-joined fields: full
/// copies of `fields` followed by its first `target_count % fields.len()`
/// entries.
pub fn expand_row(fields: &[&str], target_count: usize) -> String {
    let size = fields.len();
    let q = target_count / size;
    let r = target_count % size;
    let mut out = Vec::with_capacity(target_count);
    for _ in 0..q {
        out.extend_from_slice(fields);
    }
    out.extend_from_slice(&fields[..r]);
    out.join(",")
}
