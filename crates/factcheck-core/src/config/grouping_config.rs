//! Conflict grouping configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the conflict grouper.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GroupingConfig {
    /// Word-overlap similarity at which two context keys are linked. Default: 0.5.
    pub similarity_threshold: Option<f64>,
}

impl GroupingConfig {
    /// Returns the effective similarity threshold, defaulting to 0.5.
    pub fn effective_similarity_threshold(&self) -> f64 {
        self.similarity_threshold.unwrap_or(0.5)
    }
}
