use thiserror::Error;

/// Failure taxonomy for the harness.
///
/// Missing CLI arguments are deliberately not represented here: the binaries
/// report them on stdout and return cleanly instead of failing.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The bundled schema resource is missing a field, empty, or not valid JSON.
    #[error("invalid schema resource: {0}")]
    Config(String),

    /// An input path that must exist does not, or is the wrong kind of entry.
    #[error("{0}")]
    Argument(String),

    /// Any failure surfaced by the embedded engine. No retry; the current
    /// file's processing is aborted.
    #[error("database engine failure: {0}")]
    Engine(#[from] duckdb::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for HarnessError {
    fn from(err: serde_json::Error) -> Self {
        HarnessError::Config(err.to_string())
    }
}
