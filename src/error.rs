//! Error types for boolmin

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// boolmin errors
///
/// The minimizer itself never fails; these come from validating requests,
/// loading configuration, and the CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Minterms must be a non-empty list")]
    InvalidShape,

    #[error("Number of variables must be between 2 and 4, got {0}")]
    InvalidVariableCount(i64),

    #[error("Mode must be either SOP or POS, got '{0}'")]
    InvalidMode(String),

    #[error("Term {term} is out of range. Valid range: 0-{max}")]
    OutOfRange { term: i64, max: u32 },

    #[error("Duplicate term found: {0}")]
    DuplicateTerm(u32),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
