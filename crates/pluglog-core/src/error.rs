//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by logger construction and the fallible file accessors
///
/// Logging calls themselves never return these; their failures go to the
/// host's diagnostic sink.
#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Logger name {0:?} is empty after normalization")]
    InvalidName(String),

    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LoggerError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;
