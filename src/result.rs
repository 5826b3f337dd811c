use thiserror::Error;

/// Main error type for the sqlalign library
#[derive(Error, Debug)]
pub enum AlignError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No column list found in statement: {0}")]
    MissingColumnList(String),
    #[error("No VALUES keyword follows the column list in statement: {0}")]
    MissingValuesKeyword(String),
    #[error("Value list does not start with a tuple: {0}")]
    MalformedTuples(String),
    #[error("Invalid selection {start}..{end} for a document of {len} bytes")]
    InvalidSelection {
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("Invalid option: expected {expected}, got {got}")]
    InvalidOption { expected: String, got: String },
}

/// Type alias for Results using AlignError
pub type Result<T> = std::result::Result<T, AlignError>;
