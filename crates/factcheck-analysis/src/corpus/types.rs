//! Corpus types - documents and the provider trait

use serde::{Deserialize, Serialize};

use factcheck_core::errors::ScanError;

/// One document of the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier reported in conflicts (root-relative path for files)
    pub id: String,
    /// Full text
    pub text: String,
    /// xxHash of the raw bytes, when read from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_hash: Option<String>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            content_hash: None,
        }
    }
}

/// The documents a provider could read, plus what it had to leave out.
#[derive(Debug, Clone, Default)]
pub struct CorpusSnapshot {
    /// Documents in traversal order
    pub documents: Vec<Document>,
    /// Files left unread because they exceed the size cap
    pub skipped: usize,
    /// Non-fatal errors (unreadable files or directories)
    pub errors: Vec<String>,
}

/// Supplies the documents for one run.
///
/// Failing here is the only way a run fails as a whole.
pub trait Corpus {
    fn snapshot(&self) -> Result<CorpusSnapshot, ScanError>;
}

/// Corpus over documents already in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    documents: Vec<Document>,
}

impl InMemoryCorpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Append a document; order of insertion is traversal order.
    pub fn push(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.documents.push(Document::new(id, text));
    }
}

impl FromIterator<(String, String)> for InMemoryCorpus {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(|(id, text)| Document::new(id, text)).collect())
    }
}

impl Corpus for InMemoryCorpus {
    fn snapshot(&self) -> Result<CorpusSnapshot, ScanError> {
        Ok(CorpusSnapshot {
            documents: self.documents.clone(),
            ..Default::default()
        })
    }
}
