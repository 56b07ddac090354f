// src/error.rs

use std::path::PathBuf;
use thiserror::Error;

/// Raised when stock input cannot be read as a table at all.
///
/// Individual malformed rows never produce this error; they are skipped
/// while parsing.
#[derive(Error, Debug)]
pub enum FormatError {
    #[error("CSV read failed: {0}")]
    Csv(String),

    #[error("stock file is not valid UTF-8: {source}")]
    Decode {
        #[source]
        source: std::str::Utf8Error,
    },
}

impl From<csv::Error> for FormatError {
    fn from(err: csv::Error) -> Self {
        FormatError::Csv(err.to_string())
    }
}

impl From<std::str::Utf8Error> for FormatError {
    fn from(source: std::str::Utf8Error) -> Self {
        FormatError::Decode { source }
    }
}

/// Errors from the file adapters around the engine.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("report export failed: {0}")]
    Export(String),
}

impl From<csv::Error> for LoadError {
    fn from(err: csv::Error) -> Self {
        LoadError::Export(err.to_string())
    }
}

pub type PlanResult<T> = Result<T, LoadError>;
