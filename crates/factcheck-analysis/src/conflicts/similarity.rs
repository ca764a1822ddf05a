//! Word-overlap similarity between context keys.

use factcheck_core::types::collections::FxHashSet;

use crate::facts::PLACEHOLDER;

/// Tokens that carry meaning: whitespace-split, longer than one char, not the placeholder.
pub fn key_tokens(context_key: &str) -> FxHashSet<&str> {
    context_key
        .split_whitespace()
        .filter(|t| t.len() > 1 && *t != PLACEHOLDER)
        .collect()
}

/// Compute exact Jaccard similarity between two token sets.
///
/// J(A, B) = |A ∩ B| / |A ∪ B|
/// Returns 0.0 if both sets are empty.
pub fn jaccard_similarity(set_a: &FxHashSet<&str>, set_b: &FxHashSet<&str>) -> f64 {
    if set_a.is_empty() && set_b.is_empty() {
        return 0.0;
    }
    let intersection = set_a.intersection(set_b).count();
    let union = set_a.len() + set_b.len() - intersection;
    intersection as f64 / union as f64
}

/// Similarity of two context keys.
pub fn context_similarity(key_a: &str, key_b: &str) -> f64 {
    jaccard_similarity(&key_tokens(key_a), &key_tokens(key_b))
}
