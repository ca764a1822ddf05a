//! Top-level factcheck configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ExtractionConfig, GroupingConfig, ScanConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the corpus root.
pub const PROJECT_CONFIG_FILE: &str = "factcheck.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FACTCHECK_*`)
/// 2. Project config (`factcheck.toml` in the corpus root)
/// 3. User config (`~/.factcheck/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FactcheckConfig {
    pub scan: ScanConfig,
    pub extraction: ExtractionConfig,
    pub grouping: GroupingConfig,
}

impl FactcheckConfig {
    /// Load configuration with layered resolution for the corpus at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &FactcheckConfig) -> Result<(), ConfigError> {
        if let Some(threshold) = config.grouping.similarity_threshold {
            if !(0.0..=1.0).contains(&threshold) {
                return Err(ConfigError::ValidationFailed {
                    field: "grouping.similarity_threshold".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(max_file_size) = config.scan.max_file_size {
            if max_file_size == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.max_file_size".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Returns the user config path: `~/.factcheck/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".factcheck").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut FactcheckConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FactcheckConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it sets a value.
    fn merge(base: &mut FactcheckConfig, other: &FactcheckConfig) {
        if other.scan.max_file_size.is_some() {
            base.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            base.scan.threads = other.scan.threads;
        }
        if !other.scan.extensions.is_empty() {
            base.scan.extensions = other.scan.extensions.clone();
        }
        if !other.scan.extra_ignores.is_empty() {
            base.scan.extra_ignores = other.scan.extra_ignores.clone();
        }

        if other.extraction.min_context_key_len.is_some() {
            base.extraction.min_context_key_len = other.extraction.min_context_key_len;
        }

        if other.grouping.similarity_threshold.is_some() {
            base.grouping.similarity_threshold = other.grouping.similarity_threshold;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FACTCHECK_SCAN_MAX_FILE_SIZE`, `FACTCHECK_GROUPING_SIMILARITY_THRESHOLD`, etc.
    fn apply_env_overrides(config: &mut FactcheckConfig) {
        if let Ok(val) = std::env::var("FACTCHECK_SCAN_MAX_FILE_SIZE") {
            if let Ok(v) = val.parse::<u64>() {
                config.scan.max_file_size = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FACTCHECK_SCAN_THREADS") {
            if let Ok(v) = val.parse::<usize>() {
                config.scan.threads = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FACTCHECK_EXTRACTION_MIN_CONTEXT_KEY_LEN") {
            if let Ok(v) = val.parse::<usize>() {
                config.extraction.min_context_key_len = Some(v);
            }
        }
        if let Ok(val) = std::env::var("FACTCHECK_GROUPING_SIMILARITY_THRESHOLD") {
            if let Ok(v) = val.parse::<f64>() {
                config.grouping.similarity_threshold = Some(v);
            }
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
