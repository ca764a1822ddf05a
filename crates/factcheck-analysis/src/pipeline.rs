//! Consistency pipeline
//!
//! Corpus snapshot → per-document extraction → pooled facts → conflict
//! grouping → `ConsistencyReport`. Extraction and grouping are pure; the
//! corpus is the only source of failure.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use factcheck_core::config::FactcheckConfig;
use factcheck_core::errors::PipelineError;

use crate::conflicts::{ConflictGrouper, CrossContextConflict, DirectConflict};
use crate::corpus::{Corpus, DirectoryCorpus, Document};
use crate::facts::{Fact, FactExtractor};
use crate::parallel::with_thread_pool;

/// Counts describing one run. No timings, so identical corpora give identical reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    /// Documents offered by the corpus, including ones left unread
    pub documents_total: usize,
    /// Documents actually scanned for facts
    pub documents_scanned: usize,
    /// Oversized or binary documents
    pub documents_skipped: usize,
    pub facts_extracted: usize,
    pub distinct_context_keys: usize,
    pub similarity_clusters: usize,
}

/// Everything handed to the report consumer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    pub direct_conflicts: Vec<DirectConflict>,
    pub cross_context_conflicts: Vec<CrossContextConflict>,
    pub stats: ReportStats,
}

impl ConsistencyReport {
    /// True when no disagreement was found.
    pub fn is_clean(&self) -> bool {
        self.direct_conflicts.is_empty() && self.cross_context_conflicts.is_empty()
    }

    pub fn conflict_count(&self) -> usize {
        self.direct_conflicts.len() + self.cross_context_conflicts.len()
    }
}

/// Facts pooled across a corpus, in corpus order
#[derive(Debug, Clone, Default)]
pub struct ExtractionSummary {
    pub facts: Vec<Fact>,
    pub documents_scanned: usize,
    pub documents_skipped: usize,
}

/// Runs extraction and grouping over a corpus
#[derive(Debug, Clone, Default)]
pub struct ConsistencyChecker {
    extractor: FactExtractor,
    grouper: ConflictGrouper,
    /// Worker threads for reads and extraction (0 = current pool)
    threads: usize,
}

impl ConsistencyChecker {
    pub fn new(extractor: FactExtractor, grouper: ConflictGrouper) -> Self {
        Self {
            extractor,
            grouper,
            threads: 0,
        }
    }

    pub fn from_config(config: &FactcheckConfig) -> Self {
        Self::new(
            FactExtractor::from_config(&config.extraction, &config.scan),
            ConflictGrouper::from_config(&config.grouping),
        )
        .with_threads(config.scan.effective_threads())
    }

    /// Run on a dedicated pool of `threads` workers (0 = current pool).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Extract facts from every document, preserving document order.
    pub fn extract_all(&self, documents: &[Document]) -> ExtractionSummary {
        let per_document: Vec<Option<Vec<Fact>>> = with_thread_pool(self.threads, || {
            documents
                .par_iter()
                .map(|doc| match self.extractor.skip_reason(&doc.text) {
                    Some(reason) => {
                        tracing::debug!(document = %doc.id, ?reason, "skipping document");
                        None
                    }
                    None => {
                        let facts = self.extractor.extract_unchecked(&doc.text, &doc.id);
                        tracing::debug!(document = %doc.id, facts = facts.len(), "extracted");
                        Some(facts)
                    }
                })
                .collect()
        });

        let mut summary = ExtractionSummary::default();
        for facts in per_document {
            match facts {
                Some(facts) => {
                    summary.documents_scanned += 1;
                    summary.facts.extend(facts);
                }
                None => summary.documents_skipped += 1,
            }
        }
        summary
    }

    /// Check documents already in memory.
    pub fn check_documents(&self, documents: &[Document]) -> ConsistencyReport {
        let extraction = self.extract_all(documents);
        let grouping = self.grouper.group(&extraction.facts);

        ConsistencyReport {
            direct_conflicts: grouping.direct_conflicts,
            cross_context_conflicts: grouping.cross_context_conflicts,
            stats: ReportStats {
                documents_total: documents.len(),
                documents_scanned: extraction.documents_scanned,
                documents_skipped: extraction.documents_skipped,
                facts_extracted: extraction.facts.len(),
                distinct_context_keys: grouping.distinct_context_keys,
                similarity_clusters: grouping.similarity_clusters,
            },
        }
    }

    /// Snapshot `corpus` and check it. Fails only if the corpus cannot be read.
    ///
    /// Reads and extraction share one pool.
    pub fn check<C: Corpus + Sync + ?Sized>(&self, corpus: &C) -> Result<ConsistencyReport, PipelineError> {
        let start = Instant::now();
        let (snapshot, mut report) = with_thread_pool(self.threads, || {
            corpus.snapshot().map(|snapshot| {
                let report = self.check_documents(&snapshot.documents);
                (snapshot, report)
            })
        })?;

        report.stats.documents_total += snapshot.skipped;
        report.stats.documents_skipped += snapshot.skipped;

        tracing::info!(
            documents = report.stats.documents_total,
            skipped = report.stats.documents_skipped,
            facts = report.stats.facts_extracted,
            direct_conflicts = report.direct_conflicts.len(),
            cross_context_conflicts = report.cross_context_conflicts.len(),
            read_errors = snapshot.errors.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "consistency check complete"
        );

        Ok(report)
    }
}

/// Load config for `root` and check every document under it.
pub fn check_directory(root: &Path) -> Result<ConsistencyReport, PipelineError> {
    let config = FactcheckConfig::load(root)?;
    let corpus = DirectoryCorpus::new(root, &config.scan);
    ConsistencyChecker::from_config(&config).check(&corpus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_corpus_is_clean() {
        let report = ConsistencyChecker::default().check_documents(&[]);
        assert!(report.is_clean());
        assert_eq!(report.stats, ReportStats::default());
    }

    #[test]
    fn test_skipped_documents_are_counted() {
        let docs = vec![
            Document::new("a.md", "The shelter budget this year reached $40k in total."),
            Document::new("b.bin", "binary\0payload with $5 million inside it"),
        ];
        let report = ConsistencyChecker::default().check_documents(&docs);
        assert_eq!(report.stats.documents_total, 2);
        assert_eq!(report.stats.documents_scanned, 1);
        assert_eq!(report.stats.documents_skipped, 1);
        assert_eq!(report.stats.facts_extracted, 1);
    }

    #[test]
    fn test_dedicated_pool_gives_same_report() {
        let docs: Vec<Document> = (0..40)
            .map(|i| {
                Document::new(
                    format!("doc_{i:02}.md"),
                    format!(
                        "In its annual letter the board confirmed that ${} million was donated to the shelter fund.",
                        i % 3 + 1
                    ),
                )
            })
            .collect();

        let shared = ConsistencyChecker::default().check_documents(&docs);
        let pooled = ConsistencyChecker::default().with_threads(2).check_documents(&docs);
        assert_eq!(shared, pooled);
        assert_eq!(pooled.direct_conflicts.len(), 1);
        assert_eq!(pooled.direct_conflicts[0].values.len(), 3);
    }

    #[test]
    fn test_from_config_carries_thread_count() {
        let config = FactcheckConfig::from_toml("[scan]\nthreads = 2\n").unwrap();
        let checker = ConsistencyChecker::from_config(&config);
        assert_eq!(checker.threads, 2);
    }
}
