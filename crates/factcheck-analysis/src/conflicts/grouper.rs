//! Conflict grouping
//!
//! Direct conflicts: one exact context key, several values.
//! Cross-context conflicts: several values across keys that a greedy,
//! single-pass clustering links by word overlap.

use factcheck_core::config::GroupingConfig;
use factcheck_core::types::collections::{FxHashMap, FxHashSet};

use super::similarity::{jaccard_similarity, key_tokens};
use super::types::*;
use crate::facts::Fact;

/// Groups pooled facts and flags disagreeing values
#[derive(Debug, Clone)]
pub struct ConflictGrouper {
    similarity_threshold: f64,
}

impl ConflictGrouper {
    pub fn new(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
        }
    }

    pub fn from_config(config: &GroupingConfig) -> Self {
        Self::new(config.effective_similarity_threshold())
    }

    /// Produce direct and cross-context conflicts for the pooled facts.
    pub fn group(&self, facts: &[Fact]) -> GroupingResult {
        let groups = group_by_context_key(facts);

        let direct_conflicts: Vec<DirectConflict> = groups
            .iter()
            .filter_map(|group| {
                let values = summarize_values(group.facts.iter().copied());
                (values.len() >= 2).then(|| DirectConflict {
                    context_key: group.context_key.to_string(),
                    values,
                })
            })
            .collect();

        let covered: FxHashSet<&str> = direct_conflicts
            .iter()
            .map(|c| c.context_key.as_str())
            .collect();

        let clusters = cluster_context_keys(&groups, self.similarity_threshold);

        let cross_context_conflicts: Vec<CrossContextConflict> = clusters
            .iter()
            .filter(|cluster| !cluster.context_keys.iter().all(|k| covered.contains(k)))
            .filter_map(|cluster| {
                let values = summarize_values(cluster.facts.iter().copied());
                (values.len() >= 2).then(|| CrossContextConflict {
                    context_keys: cluster.context_keys.iter().map(|k| k.to_string()).collect(),
                    values,
                })
            })
            .collect();

        GroupingResult {
            direct_conflicts,
            cross_context_conflicts,
            distinct_context_keys: groups.len(),
            similarity_clusters: clusters.len(),
        }
    }
}

impl Default for ConflictGrouper {
    fn default() -> Self {
        Self::from_config(&GroupingConfig::default())
    }
}

/// Partition facts by exact context key, groups in order of first appearance.
pub fn group_by_context_key(facts: &[Fact]) -> Vec<ContextKeyGroup<'_>> {
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<ContextKeyGroup<'_>> = Vec::new();

    for fact in facts {
        let key = fact.context_key();
        let slot = *index.entry(key).or_insert_with(|| {
            groups.push(ContextKeyGroup {
                context_key: key,
                facts: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].facts.push(fact);
    }

    groups
}

/// Greedy single-link clustering of the groups' keys.
///
/// Keys are visited in order; an unassigned key seeds a cluster and absorbs
/// every later unassigned key whose similarity to the seed meets `threshold`.
/// Assignment is final, so transitively similar keys may land in different
/// clusters.
pub fn cluster_context_keys<'a>(
    groups: &[ContextKeyGroup<'a>],
    threshold: f64,
) -> Vec<SimilarityCluster<'a>> {
    let token_sets: Vec<FxHashSet<&str>> = groups.iter().map(|g| key_tokens(g.context_key)).collect();
    let mut assigned = vec![false; groups.len()];
    let mut clusters = Vec::new();

    for seed in 0..groups.len() {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut members = vec![seed];

        for candidate in (seed + 1)..groups.len() {
            if assigned[candidate] {
                continue;
            }
            if jaccard_similarity(&token_sets[seed], &token_sets[candidate]) >= threshold {
                assigned[candidate] = true;
                members.push(candidate);
            }
        }

        clusters.push(SimilarityCluster {
            context_keys: members.iter().map(|&i| groups[i].context_key).collect(),
            facts: members
                .iter()
                .flat_map(|&i| groups[i].facts.iter().copied())
                .collect(),
        });
    }

    clusters
}

/// Collapse facts into distinct values (ascending) with deduplicated sources.
pub fn summarize_values<'a>(facts: impl IntoIterator<Item = &'a Fact>) -> Vec<ValueOccurrence> {
    let mut index: FxHashMap<u64, usize> = FxHashMap::default();
    let mut occurrences: Vec<ValueOccurrence> = Vec::new();

    for fact in facts {
        let slot = *index.entry(fact.value().to_bits()).or_insert_with(|| {
            occurrences.push(ValueOccurrence {
                value: fact.value(),
                display: fact.display_value(),
                documents: Vec::new(),
                raw_forms: Vec::new(),
            });
            occurrences.len() - 1
        });

        let occurrence = &mut occurrences[slot];
        if !occurrence.documents.iter().any(|d| d == fact.source_document()) {
            occurrence.documents.push(fact.source_document().to_string());
        }
        if !occurrence.raw_forms.iter().any(|r| r == fact.raw_text()) {
            occurrence.raw_forms.push(fact.raw_text().to_string());
        }
    }

    occurrences.sort_by(|a, b| a.value.total_cmp(&b.value));
    occurrences
}
