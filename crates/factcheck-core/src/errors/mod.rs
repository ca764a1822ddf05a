//! Error handling for factcheck.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod pipeline_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use pipeline_error::PipelineError;
pub use scan_error::ScanError;
