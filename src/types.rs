// src/types.rs
use serde::Serialize;
use std::path::PathBuf;

/// A single finding reported by a check.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub row: usize,
    pub column: usize,
    pub message: String,
    pub rule: &'static str,
    pub details: Option<IssueDetails>,
}

/// Extra context attached to an issue for reporting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueDetails {
    pub binding_name: Option<String>,
}

impl Issue {
    /// Creates an issue without details.
    #[must_use]
    pub fn simple(row: usize, column: usize, message: String, rule: &'static str) -> Self {
        Self {
            row,
            column,
            message,
            rule,
            details: None,
        }
    }

    /// Creates an issue carrying reporting details.
    #[must_use]
    pub fn with_details(
        row: usize,
        column: usize,
        message: String,
        rule: &'static str,
        details: IssueDetails,
    ) -> Self {
        Self {
            row,
            column,
            message,
            rule,
            details: Some(details),
        }
    }
}

/// Destination for issues, written one at a time as checks produce them.
pub trait IssueSink {
    fn report(&mut self, issue: Issue);
}

impl IssueSink for Vec<Issue> {
    fn report(&mut self, issue: Issue) {
        self.push(issue);
    }
}

/// Analysis results for a single file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<Issue>,
}

impl FileReport {
    /// Returns true if no issues were found.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Returns the number of issues.
    #[must_use]
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Aggregated results from scanning multiple files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub files: Vec<FileReport>,
    pub total_issues: usize,
    pub duration_ms: u128,
}

impl ScanReport {
    /// Returns true if any issues were found.
    #[must_use]
    pub fn has_issues(&self) -> bool {
        self.total_issues > 0
    }

    /// Returns the number of clean files.
    #[must_use]
    pub fn clean_file_count(&self) -> usize {
        self.files.iter().filter(|f| f.is_clean()).count()
    }
}
