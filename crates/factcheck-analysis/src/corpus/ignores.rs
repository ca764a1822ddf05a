//! Default ignore patterns for document corpora
//!
//! Keeps dependency trees, build output, VCS metadata and binary formats out
//! of a scan; everything else is narrowed further by the extension allow-list.

use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Per-corpus ignore file, gitignore syntax.
pub const IGNORE_FILE_NAME: &str = ".factcheckignore";

/// Directories never worth scanning for prose
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    // Version control
    ".git",
    ".svn",
    ".hg",
    // Dependencies
    "node_modules",
    "vendor",
    "bower_components",
    ".venv",
    "venv",
    "site-packages",
    "__pycache__",
    // Build output
    "target",
    "dist",
    "build",
    "out",
    "_build",
    "_site",
    ".next",
    ".docusaurus",
    // Caches and editor state
    ".cache",
    ".idea",
    ".vscode",
    "coverage",
    "tmp",
];

/// Files that look textual but only carry generated or machine data
pub const DEFAULT_IGNORE_FILES: &[&str] = &[
    // Lock files
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.lock",
    "poetry.lock",
    "composer.lock",
    // Our own project config
    "factcheck.toml",
    // Minified and maps
    "*.min.js",
    "*.min.css",
    "*.map",
    // Office and archive formats
    "*.pdf",
    "*.docx",
    "*.xlsx",
    "*.pptx",
    "*.zip",
    "*.gz",
    // Images
    "*.png",
    "*.jpg",
    "*.jpeg",
    "*.gif",
    "*.svg",
    "*.webp",
];

/// Compiled ignore rules for one corpus root
pub struct IgnorePatterns {
    gitignore: Gitignore,
}

impl IgnorePatterns {
    /// Defaults + `extra_patterns` + `.factcheckignore` / `.gitignore` at the root.
    pub fn new(root: &Path, extra_patterns: &[String]) -> Self {
        let mut builder = GitignoreBuilder::new(root);

        for pattern in DEFAULT_IGNORE_DIRS.iter().chain(DEFAULT_IGNORE_FILES) {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!(pattern, error = %e, "invalid default ignore pattern");
            }
        }

        for pattern in extra_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                tracing::warn!(pattern = %pattern, error = %e, "invalid ignore pattern");
            }
        }

        for name in [IGNORE_FILE_NAME, ".gitignore"] {
            let path = root.join(name);
            if path.exists() {
                if let Some(e) = builder.add(&path) {
                    tracing::warn!(path = %path.display(), error = %e, "could not load ignore file");
                }
            }
        }

        let gitignore = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignore rules failed to compile, ignoring nothing");
            Gitignore::empty()
        });

        Self { gitignore }
    }

    /// Check if a root-relative path should be ignored
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(path, is_dir).is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_ignore_dependency_and_vcs_dirs() {
        let root = PathBuf::from("/corpus");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(patterns.is_ignored(Path::new("node_modules"), true));
        assert!(patterns.is_ignored(Path::new("docs/node_modules"), true));
        assert!(patterns.is_ignored(Path::new(".git"), true));
    }

    #[test]
    fn test_ignore_generated_files() {
        let root = PathBuf::from("/corpus");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(patterns.is_ignored(Path::new("package-lock.json"), false));
        assert!(patterns.is_ignored(Path::new("assets/logo.png"), false));
    }

    #[test]
    fn test_allow_prose_files() {
        let root = PathBuf::from("/corpus");
        let patterns = IgnorePatterns::new(&root, &[]);

        assert!(!patterns.is_ignored(Path::new("README.md"), false));
        assert!(!patterns.is_ignored(Path::new("docs/annual-report.txt"), false));
    }

    #[test]
    fn test_extra_patterns() {
        let root = PathBuf::from("/corpus");
        let patterns = IgnorePatterns::new(&root, &["drafts/".to_string()]);

        assert!(patterns.is_ignored(Path::new("drafts"), true));
        assert!(!patterns.is_ignored(Path::new("published"), true));
    }
}
