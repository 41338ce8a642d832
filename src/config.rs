// src/config.rs
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

use crate::error::{KeylintError, Result};
use crate::rule::{Severity, RULE_SEVERITY};

#[derive(Debug, Clone)]
pub struct Config {
    pub include_patterns: Vec<Regex>,
    pub exclude_patterns: Vec<Regex>,
    pub severity: Severity,
    pub json: bool,
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            severity: RULE_SEVERITY,
            json: false,
            verbose: false,
        }
    }

    /// Applies overrides from a `keylint.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// names an unknown severity / invalid exclude regex.
    pub fn apply_file(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|source| KeylintError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        let file: ConfigFile = toml::from_str(&text)?;

        let Some(rule) = file.rule else { return Ok(()) };
        if let Some(name) = rule.severity {
            self.severity = Severity::from_name(&name)
                .ok_or_else(|| KeylintError::Config(format!("unknown severity '{name}'")))?;
        }
        for pattern in rule.exclude {
            self.exclude_patterns.push(Regex::new(&pattern)?);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk config shape.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    rule: Option<RuleSection>,
}

#[derive(Debug, Deserialize)]
struct RuleSection {
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    exclude: Vec<String>,
}

/// Directories never descended into.
pub const PRUNE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "dist",
    "build",
    "coverage",
    "vendor",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::new();
        assert_eq!(config.severity, Severity::Blocker);
        assert!(config.include_patterns.is_empty());
        assert!(!config.json);
    }

    #[test]
    fn test_apply_file_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "[rule]\nseverity = \"critical\"\nexclude = [\"fixtures/\"]\n"
        )
        .unwrap();

        let mut config = Config::new();
        config.apply_file(file.path()).unwrap();
        assert_eq!(config.severity, Severity::Critical);
        assert_eq!(config.exclude_patterns.len(), 1);
    }

    #[test]
    fn test_apply_file_rejects_unknown_severity() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[rule]\nseverity = \"fatal\"\n").unwrap();

        let mut config = Config::new();
        assert!(config.apply_file(file.path()).is_err());
    }
}
