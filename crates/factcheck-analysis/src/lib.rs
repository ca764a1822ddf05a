//! factcheck-analysis: cross-document fact consistency checking
//!
//! This crate scans a corpus of text documents for quantitative assertions
//! and reports where the same fact is stated with different values:
//! - Corpus: in-memory and directory-backed document providers
//! - Facts: monetary amount / unit count extraction, numeral normalization,
//!   number-masked context keys
//! - Conflicts: exact-key grouping and word-overlap clustering
//! - Pipeline: corpus → facts → `ConsistencyReport`

pub mod conflicts;
pub mod corpus;
pub mod facts;
pub mod parallel;
pub mod pipeline;

pub use conflicts::{
    ConflictGrouper, CrossContextConflict, DirectConflict, GroupingResult, ValueOccurrence,
};
pub use corpus::{Corpus, CorpusSnapshot, DirectoryCorpus, Document, InMemoryCorpus};
pub use facts::{Fact, FactExtractor, FactKind};
pub use pipeline::{check_directory, ConsistencyChecker, ConsistencyReport, ReportStats};
