//! Errors that abort a run.
//!
//! Directory listing failures are not represented here; they are downgraded
//! to empty results via [`crate::library::ScanOutcome`].

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid timestamp format: {0:?}")]
    TimestampFormat(String),

    #[error("failed to serialize playlist")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
