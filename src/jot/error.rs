use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("Notes directory unavailable at {path}: {source}")]
    StorageUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot read note '{filename}': {source}")]
    Read {
        filename: String,
        source: std::io::Error,
    },

    #[error("Cannot write note '{filename}': {source}")]
    Write {
        filename: String,
        source: std::io::Error,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, JotError>;
