//! Fact extraction
//!
//! Pattern-based extraction of monetary amounts and unit counts, numeral
//! normalization, and context-key fingerprinting.

pub mod context_key;
pub mod extractor;
pub mod normalizer;
pub mod types;

pub use context_key::{build_context_key, PLACEHOLDER};
pub use extractor::{FactExtractor, SkipReason};
pub use normalizer::{normalize_currency, normalize_numeral};
pub use types::{Fact, FactKind};
