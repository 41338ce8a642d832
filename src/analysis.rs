// src/analysis.rs
//! Per-file analysis: parse with the host grammar, then run checks over
//! the tree. The checks themselves never touch the filesystem or the raw
//! parser; they only see the tree and the source text through
//! [`CheckContext`](crate::checks::CheckContext).

use std::path::Path;
use tree_sitter::Parser;

use crate::checks::{self, CheckContext};
use crate::error::{KeylintError, Result};
use crate::lang::Lang;
use crate::types::{FileReport, Issue};

pub struct Analyzer;

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Analyzes one file's content. Content the grammar cannot handle
    /// yields an empty issue list rather than an error.
    #[must_use]
    pub fn analyze(&self, lang: Lang, filename: &str, content: &str) -> Vec<Issue> {
        let mut parser = Parser::new();
        if parser.set_language(lang.grammar()).is_err() {
            return Vec::new();
        }
        let Some(tree) = parser.parse(content, None) else {
            return Vec::new();
        };

        let ctx = CheckContext {
            root: tree.root_node(),
            source: content,
            filename,
        };
        let mut issues = Vec::new();
        checks::check_private_keys(&ctx, &mut issues);
        issues
    }

    /// Reads and analyzes a file on disk. Returns `None` for paths outside
    /// the supported languages.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read as UTF-8 text.
    pub fn analyze_file(&self, path: &Path) -> Result<Option<FileReport>> {
        let Some(lang) = Lang::from_path(path) else {
            return Ok(None);
        };
        let content = std::fs::read_to_string(path).map_err(|source| KeylintError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let filename = path.to_string_lossy();
        let issues = self.analyze(lang, &filename, &content);
        Ok(Some(FileReport {
            path: path.to_path_buf(),
            issues,
        }))
    }
}
