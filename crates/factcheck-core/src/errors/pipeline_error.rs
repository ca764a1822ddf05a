//! Pipeline errors.

use super::{ConfigError, ScanError};

/// Errors that abort a consistency run.
///
/// Per-document anomalies (malformed numerals, oversized or binary files)
/// never surface here; only failure to obtain the corpus or a bad config does.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
