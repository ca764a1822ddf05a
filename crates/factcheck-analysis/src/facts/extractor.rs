//! Regex-based fact extraction
//!
//! Finds monetary amounts (`$5 million`) and unit counts (`12 vehicles`) in a
//! document and fingerprints each with its context key.

use std::sync::LazyLock;

use regex::Regex;

use factcheck_core::config::{ExtractionConfig, ScanConfig};

use super::context_key::build_context_key;
use super::normalizer::{normalize_currency, normalize_numeral};
use super::types::Fact;

/// `$` amount with optional thousands separators, fraction and magnitude.
static MONEY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\$(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)(?:\.[0-9]+)?(?:\s*(?:thousand|million|k|m)\b)?",
    )
    .expect("valid money regex")
});

/// Small integer followed by a counted noun.
static UNIT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)\b([0-9]{1,4})\s*(",
        r"square\s+met(?:re|er)s?|met(?:re|er)s?|vehicles?|sites?|units?|acres?|dogs?|",
        r"fleets?|years?|months?|treehouses?|sections?|nodes?",
        r")\b",
    ))
    .expect("valid unit regex")
});

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));

/// Key fragments typical of scripts (regex substitution, string slicing).
/// A small dollar value next to one of these is `$1`-style backreference noise.
const CODE_FRAGMENTS: &[&str] = &["regex", "replace", "match", "gsub", "substr", "printf", "split"];

/// Monetary values below this are checked against `CODE_FRAGMENTS`.
const CODE_SUSPECT_MAX_VALUE: f64 = 10.0;

/// Why a document contributed no facts without being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    TooLarge,
    Binary,
}

/// Extracts facts from document text
#[derive(Debug, Clone)]
pub struct FactExtractor {
    min_context_key_len: usize,
    max_document_size: u64,
}

impl FactExtractor {
    pub fn new(min_context_key_len: usize, max_document_size: u64) -> Self {
        Self {
            min_context_key_len,
            max_document_size,
        }
    }

    pub fn from_config(extraction: &ExtractionConfig, scan: &ScanConfig) -> Self {
        Self::new(
            extraction.effective_min_context_key_len(),
            scan.effective_max_file_size(),
        )
    }

    pub fn min_context_key_len(&self) -> usize {
        self.min_context_key_len
    }

    /// Returns why `text` would be skipped, or `None` if it is scannable.
    pub fn skip_reason(&self, text: &str) -> Option<SkipReason> {
        if text.len() as u64 > self.max_document_size {
            Some(SkipReason::TooLarge)
        } else if text.contains('\0') {
            Some(SkipReason::Binary)
        } else {
            None
        }
    }

    /// Extract all facts from one document, in order of appearance.
    ///
    /// Oversized and binary documents yield nothing.
    pub fn extract(&self, text: &str, document_id: &str) -> Vec<Fact> {
        if self.skip_reason(text).is_some() {
            return Vec::new();
        }
        self.extract_unchecked(text, document_id)
    }

    /// Extract without the size and binary check; callers must have run
    /// `skip_reason` already.
    pub(crate) fn extract_unchecked(&self, text: &str, document_id: &str) -> Vec<Fact> {
        let mut found: Vec<(usize, Fact)> = Vec::new();
        found.extend(self.extract_monetary(text, document_id));
        found.extend(self.extract_unit_counts(text, document_id));

        found.sort_by_key(|(offset, _)| *offset);
        found.into_iter().map(|(_, fact)| fact).collect()
    }

    fn extract_monetary(&self, text: &str, document_id: &str) -> Vec<(usize, Fact)> {
        let mut facts = Vec::new();

        for m in MONEY_REGEX.find_iter(text) {
            let raw = m.as_str().trim();
            let Some(value) = normalize_currency(raw) else {
                continue;
            };

            let key = build_context_key(text, m.start(), m.end());
            if key.len() < self.min_context_key_len {
                continue;
            }
            if value < CODE_SUSPECT_MAX_VALUE && looks_like_code(&key) {
                continue;
            }

            if let Some(fact) = Fact::monetary(key, value, raw, document_id) {
                facts.push((m.start(), fact));
            }
        }

        facts
    }

    fn extract_unit_counts(&self, text: &str, document_id: &str) -> Vec<(usize, Fact)> {
        let mut facts = Vec::new();

        for caps in UNIT_REGEX.captures_iter(text) {
            let (Some(whole), Some(number), Some(unit)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            // Tail of a longer numeral such as `12,000` or `3.5`, or the
            // digits of a `$` amount.
            if let Some(prev) = text[..whole.start()].chars().next_back() {
                if prev == ',' || prev == '.' || prev == '$' || prev.is_ascii_digit() {
                    continue;
                }
            }

            let Some(value) = normalize_numeral(number.as_str(), None) else {
                continue;
            };

            let key = build_context_key(text, whole.start(), whole.end());
            if key.len() < self.min_context_key_len {
                continue;
            }

            let unit = WHITESPACE_REGEX
                .replace_all(unit.as_str().trim(), " ")
                .to_lowercase();

            if let Some(fact) = Fact::unit_count(key, value, unit, whole.as_str(), document_id) {
                facts.push((whole.start(), fact));
            }
        }

        facts
    }
}

impl Default for FactExtractor {
    fn default() -> Self {
        Self::from_config(&ExtractionConfig::default(), &ScanConfig::default())
    }
}

fn looks_like_code(context_key: &str) -> bool {
    CODE_FRAGMENTS
        .iter()
        .any(|fragment| context_key.contains(fragment))
}
