// src/rule.rs
//! Rule identity metadata consumed by hosts and reporters.

use serde::Serialize;
use std::fmt;

pub const RULE_KEY: &str = "sonar-secrets-javascript-05";
pub const RULE_NAME: &str = "Private Keys";
pub const RULE_TAGS: &[&str] = &["security", "vulnerability"];
pub const RULE_SEVERITY: Severity = Severity::Blocker;

/// The message attached to every private-key issue. Fixed wording; hosts
/// key on it.
pub const RULE_MESSAGE: &str =
    "Private keys exposed in code may lead to impersonation, data falsification and service compromise.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Blocker,
    Critical,
    Major,
    Minor,
    Info,
}

impl Severity {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "blocker" => Some(Self::Blocker),
            "critical" => Some(Self::Critical),
            "major" => Some(Self::Major),
            "minor" => Some(Self::Minor),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Blocker => "BLOCKER",
            Self::Critical => "CRITICAL",
            Self::Major => "MAJOR",
            Self::Minor => "MINOR",
            Self::Info => "INFO",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_from_name() {
        assert_eq!(Severity::from_name("blocker"), Some(Severity::Blocker));
        assert_eq!(Severity::from_name("MAJOR"), Some(Severity::Major));
        assert_eq!(Severity::from_name("warning"), None);
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Blocker.to_string(), "BLOCKER");
    }
}
