//! Configuration system for factcheck.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod extraction_config;
pub mod factcheck_config;
pub mod grouping_config;
pub mod scan_config;

pub use extraction_config::ExtractionConfig;
pub use factcheck_config::FactcheckConfig;
pub use grouping_config::GroupingConfig;
pub use scan_config::ScanConfig;
