//! factcheck-core: shared foundations for the factcheck consistency checker.
//!
//! - Errors: one `thiserror` enum per subsystem
//! - Config: TOML-based, layered resolution (env > project > user > defaults)
//! - Tracing: `FACTCHECK_LOG`-driven subscriber setup
//! - Types: fast hash collections used across the analysis crate

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::FactcheckConfig;
pub use errors::{ConfigError, PipelineError, ScanError};
