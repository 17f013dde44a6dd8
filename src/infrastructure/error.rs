use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ValidationError;

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file format: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported roster file version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Invalid student record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Could not replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;
