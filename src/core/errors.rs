//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// File-level failures surfaced as per-file outcomes. Anything that
/// escapes the per-file loop is a top-level fault and propagates as
/// `anyhow::Error` instead.
#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FixError {
    pub fn read(path: &std::path::Path, source: std::io::Error) -> Self {
        FixError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn write(path: &std::path::Path, source: std::io::Error) -> Self {
        FixError::Write {
            path: path.to_path_buf(),
            source,
        }
    }
}
