//! Conflict grouping
//!
//! Exact context-key grouping plus word-overlap clustering of near-duplicate
//! keys; surfaces values that disagree without judging which is right.

pub mod grouper;
pub mod similarity;
pub mod types;

pub use grouper::{cluster_context_keys, group_by_context_key, summarize_values, ConflictGrouper};
pub use similarity::{context_similarity, jaccard_similarity, key_tokens};
pub use types::*;
