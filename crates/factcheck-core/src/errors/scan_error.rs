//! Corpus scanning errors.

use std::path::PathBuf;

/// Errors that can occur while obtaining the document corpus.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Corpus root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Corpus root is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}
