//! Fact extraction configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the fact extractor.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Context keys shorter than this are too generic to group on. Default: 15.
    pub min_context_key_len: Option<usize>,
}

impl ExtractionConfig {
    /// Returns the effective minimum context key length, defaulting to 15.
    pub fn effective_min_context_key_len(&self) -> usize {
        self.min_context_key_len.unwrap_or(15)
    }
}
