// src/reporting.rs
//! Console and JSON report output.

use colored::Colorize;
use std::path::Path;

use crate::config::Config;
use crate::types::{Issue, ScanReport};

/// Prints a human-readable scan report to stdout.
pub fn print_report(report: &ScanReport, config: &Config) {
    for file in &report.files {
        for issue in &file.issues {
            print_issue(&file.path, issue, config);
        }
    }
    print_summary(report);
}

fn print_issue(path: &Path, issue: &Issue, config: &Config) {
    let location = format!("{}:{}:{}", path.display(), issue.row, issue.column);
    let severity = format!("[{}]", config.severity);
    println!(
        "{} {} {}",
        location.bold(),
        severity.red().bold(),
        issue.message
    );
    if let Some(name) = issue.details.as_ref().and_then(|d| d.binding_name.as_deref()) {
        println!("  {} {name}", "bound to:".dimmed());
    }
}

fn print_summary(report: &ScanReport) {
    let files = report.files.len();
    if report.has_issues() {
        let line = format!(
            "{} issue(s) across {files} file(s) ({} ms)",
            report.total_issues, report.duration_ms
        );
        println!("{}", line.red().bold());
    } else {
        let line = format!(
            "No private keys found in {files} file(s) ({} ms)",
            report.duration_ms
        );
        println!("{}", line.green());
    }
}

/// Writes the full report as pretty-printed JSON to stdout.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn print_json(report: &ScanReport) -> serde_json::Result<()> {
    let out = std::io::stdout();
    serde_json::to_writer_pretty(out.lock(), report)?;
    println!();
    Ok(())
}
