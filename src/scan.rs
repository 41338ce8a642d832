// src/scan.rs
//! Directory walking and parallel per-file scanning.

use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use walkdir::WalkDir;

use crate::analysis::Analyzer;
use crate::config::{Config, PRUNE_DIRS};
use crate::lang::Lang;
use crate::types::{FileReport, ScanReport};

/// Walks `roots`, analyzes every JavaScript/TypeScript file, and aggregates
/// the results. Files are scanned in parallel; each worker owns its parser
/// and tree, so the marker constants are the only shared data.
#[must_use]
pub fn scan(roots: &[PathBuf], config: &Config) -> ScanReport {
    let started = Instant::now();
    let files = collect_files(roots, config);

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .filter_map(|path| {
            let analyzer = Analyzer::new();
            match analyzer.analyze_file(path) {
                Ok(report) => report,
                Err(e) => {
                    if config.verbose {
                        eprintln!("keylint: skipping {}: {e}", path.display());
                    }
                    None
                }
            }
        })
        .collect();

    // Parallel collection order is nondeterministic; sort for stable output.
    reports.sort_by(|a, b| a.path.cmp(&b.path));

    let total_issues = reports.iter().map(FileReport::issue_count).sum();
    ScanReport {
        files: reports,
        total_issues,
        duration_ms: started.elapsed().as_millis(),
    }
}

fn collect_files(roots: &[PathBuf], config: &Config) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| !is_pruned_dir(e.path()));
        for entry in walker {
            let Ok(entry) = entry else { continue };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.into_path();
            if Lang::from_path(&path).is_none() {
                continue;
            }
            if !path_selected(&path, config) {
                continue;
            }
            files.push(path);
        }
    }
    files.sort();
    files.dedup();
    files
}

fn is_pruned_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| PRUNE_DIRS.contains(&name))
}

fn path_selected(path: &Path, config: &Config) -> bool {
    let text = path.to_string_lossy();
    if config.exclude_patterns.iter().any(|re| re.is_match(&text)) {
        return false;
    }
    if config.include_patterns.is_empty() {
        return true;
    }
    config.include_patterns.iter().any(|re| re.is_match(&text))
}
