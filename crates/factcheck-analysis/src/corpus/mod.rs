//! Corpus providers
//!
//! A corpus is an ordered sequence of `(document id, text)` pairs. Extraction
//! never touches the filesystem; it only sees what a `Corpus` hands it.
//!
//! - `InMemoryCorpus` wraps documents built by the caller
//! - `DirectoryCorpus` walks a directory with gitignore-style ignores,
//!   an extension allow-list, and a size cap, reading files in parallel

mod ignores;
mod types;
mod walker;

pub use ignores::{IgnorePatterns, DEFAULT_IGNORE_DIRS, DEFAULT_IGNORE_FILES, IGNORE_FILE_NAME};
pub use types::{Corpus, CorpusSnapshot, Document, InMemoryCorpus};
pub use walker::DirectoryCorpus;
