//! Types for conflict grouping

use serde::{Deserialize, Serialize};

use crate::facts::Fact;

/// All facts sharing one exact context key.
#[derive(Debug, Clone)]
pub struct ContextKeyGroup<'a> {
    pub context_key: &'a str,
    pub facts: Vec<&'a Fact>,
}

/// Context keys linked to a common seed key by word overlap, with their facts.
#[derive(Debug, Clone)]
pub struct SimilarityCluster<'a> {
    pub context_keys: Vec<&'a str>,
    pub facts: Vec<&'a Fact>,
}

/// One distinct value within a conflict and where it was stated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueOccurrence {
    /// Normalized numeric value
    pub value: f64,
    /// Formatted value, e.g. `$5,000,000` or `12 vehicles`
    pub display: String,
    /// Documents stating this value, deduplicated, first appearance first
    pub documents: Vec<String>,
    /// Original matched text forms, deduplicated
    pub raw_forms: Vec<String>,
}

/// Two or more values under one identical context key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectConflict {
    pub context_key: String,
    /// Distinct values, ascending
    pub values: Vec<ValueOccurrence>,
}

/// Two or more values across similarity-linked context keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrossContextConflict {
    /// Member keys; the first is the cluster seed
    pub context_keys: Vec<String>,
    /// Distinct values, ascending
    pub values: Vec<ValueOccurrence>,
}

/// Output of a grouping pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupingResult {
    pub direct_conflicts: Vec<DirectConflict>,
    pub cross_context_conflicts: Vec<CrossContextConflict>,
    /// Number of distinct context keys seen
    pub distinct_context_keys: usize,
    /// Number of similarity clusters formed (singletons included)
    pub similarity_clusters: usize,
}
