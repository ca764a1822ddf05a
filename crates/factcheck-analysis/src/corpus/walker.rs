//! Directory corpus: ordered walk + parallel reads
//!
//! The walk is single-threaded and sorted so document order is stable across
//! runs; reading and hashing run on rayon and are collected back in order.

use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use xxhash_rust::xxh3::xxh3_64;

use factcheck_core::config::ScanConfig;
use factcheck_core::errors::ScanError;

use super::ignores::IgnorePatterns;
use super::types::{Corpus, CorpusSnapshot, Document};
use crate::parallel::with_thread_pool;

/// Corpus backed by the text files under a root directory
pub struct DirectoryCorpus {
    root: PathBuf,
    ignores: IgnorePatterns,
    include_globs: GlobSet,
    max_file_size: u64,
    threads: usize,
}

enum ReadOutcome {
    Read(Document),
    TooLarge,
}

impl DirectoryCorpus {
    /// Create a corpus for `root` using the scan section of the config
    pub fn new(root: impl Into<PathBuf>, config: &ScanConfig) -> Self {
        let root = root.into();
        let ignores = IgnorePatterns::new(&root, &config.extra_ignores);

        let mut builder = GlobSetBuilder::new();
        for ext in config.effective_extensions() {
            let pattern = format!("**/*.{}", ext);
            match GlobBuilder::new(&pattern).case_insensitive(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => tracing::warn!(pattern = %pattern, error = %e, "invalid extension glob"),
            }
        }
        let include_globs = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "extension globs failed to compile, including every file");
            GlobSet::empty()
        });

        Self {
            root,
            ignores,
            include_globs,
            max_file_size: config.effective_max_file_size(),
            threads: config.effective_threads(),
        }
    }

    /// Collect candidate files in sorted traversal order
    fn collect_files(&self, errors: &mut Vec<String>) -> Result<Vec<PathBuf>, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::RootNotFound {
                path: self.root.clone(),
            });
        }
        if !self.root.is_dir() {
            return Err(ScanError::NotADirectory {
                path: self.root.clone(),
            });
        }

        // The root itself must be listable; nested failures are non-fatal.
        let entries = fs::read_dir(&self.root).map_err(|source| ScanError::IoError {
            path: self.root.clone(),
            source,
        })?;

        let mut files = Vec::new();
        self.walk_entries(entries, &mut files, errors);
        Ok(files)
    }

    fn walk_dir(&self, dir: &Path, files: &mut Vec<PathBuf>, errors: &mut Vec<String>) {
        match fs::read_dir(dir) {
            Ok(entries) => self.walk_entries(entries, files, errors),
            Err(e) => {
                tracing::warn!(path = %dir.display(), error = %e, "unreadable directory");
                errors.push(format!("{}: {}", dir.display(), e));
            }
        }
    }

    fn walk_entries(&self, entries: fs::ReadDir, files: &mut Vec<PathBuf>, errors: &mut Vec<String>) {
        let mut entries: Vec<fs::DirEntry> = entries.flatten().collect();
        entries.sort_by_key(|e| e.file_name());

        for entry in entries {
            // Symlinks are not followed.
            let Ok(file_type) = entry.file_type() else {
                continue;
            };
            let path = entry.path();
            let relative = path.strip_prefix(&self.root).unwrap_or(&path);

            if file_type.is_dir() {
                if !self.ignores.is_ignored(relative, true) {
                    self.walk_dir(&path, files, errors);
                }
            } else if file_type.is_file()
                && !self.ignores.is_ignored(relative, false)
                && (self.include_globs.is_empty() || self.include_globs.is_match(relative))
            {
                files.push(path);
            }
        }
    }

    /// Read one file, skipping it if it exceeds the size cap
    fn read_file(&self, path: &Path) -> Result<ReadOutcome, std::io::Error> {
        let size = fs::metadata(path)?.len();
        if size > self.max_file_size {
            return Ok(ReadOutcome::TooLarge);
        }

        let bytes = fs::read(path)?;
        let content_hash = format!("{:016x}", xxh3_64(&bytes));
        let text = String::from_utf8_lossy(&bytes).into_owned();

        Ok(ReadOutcome::Read(Document {
            id: document_id(&self.root, path),
            text,
            content_hash: Some(content_hash),
        }))
    }

    fn read_all(&self, files: &[PathBuf]) -> Vec<(PathBuf, Result<ReadOutcome, std::io::Error>)> {
        with_thread_pool(self.threads, || {
            files
                .par_iter()
                .map(|path| (path.clone(), self.read_file(path)))
                .collect()
        })
    }
}

impl Corpus for DirectoryCorpus {
    fn snapshot(&self) -> Result<CorpusSnapshot, ScanError> {
        let mut snapshot = CorpusSnapshot::default();
        let files = self.collect_files(&mut snapshot.errors)?;

        for (path, outcome) in self.read_all(&files) {
            match outcome {
                Ok(ReadOutcome::Read(document)) => snapshot.documents.push(document),
                Ok(ReadOutcome::TooLarge) => {
                    tracing::debug!(path = %path.display(), max = self.max_file_size, "skipping oversized file");
                    snapshot.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "unreadable file");
                    snapshot.errors.push(format!("{}: {}", path.display(), e));
                }
            }
        }

        tracing::debug!(
            root = %self.root.display(),
            documents = snapshot.documents.len(),
            skipped = snapshot.skipped,
            "corpus snapshot complete"
        );

        Ok(snapshot)
    }
}

/// Root-relative path with `/` separators
fn document_id(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
