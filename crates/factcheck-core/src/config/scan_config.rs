//! Corpus scan configuration.

use serde::{Deserialize, Serialize};

/// Extensions treated as prose documents when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    "md", "markdown", "txt", "rst", "html", "htm", "adoc", "org", "tex", "csv", "json", "yaml",
    "yml", "toml",
];

/// Configuration for the corpus scanner.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum document size in bytes. Default: 1MB.
    pub max_file_size: Option<u64>,
    /// Number of reader threads (0 = auto). Default: 0.
    pub threads: Option<usize>,
    /// File extensions to include (without the dot).
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Additional gitignore-style patterns to ignore.
    #[serde(default)]
    pub extra_ignores: Vec<String>,
}

impl ScanConfig {
    /// Returns the effective max file size, defaulting to 1MB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(1_048_576)
    }

    /// Returns the effective thread count, defaulting to 0 (auto).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }

    /// Returns the configured extensions, or the prose defaults when empty.
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.extensions
                .iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect()
        }
    }
}
