use std::path::PathBuf;

use thiserror::Error;

pub type UiResult<T> = Result<T, UiError>;
pub type TableResult<T> = Result<T, TableError>;

/// Lookup of a style name that the theme does not know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error("unknown style: {0}")]
    Unknown(String),
}

/// An alignment token other than `left`, `center` or `right`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid alignment: {0}")]
pub struct AlignmentError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("row index {index} out of range for table with {rows} rows")]
    RowOutOfRange { index: usize, rows: usize },
    #[error("column index {index} out of range for table with {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },
}

/// Errors raised by the console and the progress bar.
#[derive(Debug, Error)]
pub enum UiError {
    #[error(transparent)]
    Style(#[from] StyleError),
    #[error(transparent)]
    Alignment(#[from] AlignmentError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("input stream closed before a line was read")]
    InputClosed,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read theme file '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse theme file '{path}': {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to parse theme: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}
