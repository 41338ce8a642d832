// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeylintError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, KeylintError>;

// Allow `?` on std::io::Error by converting to KeylintError::Io with unknown path.
impl From<std::io::Error> for KeylintError {
    fn from(source: std::io::Error) -> Self {
        KeylintError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for KeylintError {
    fn from(e: walkdir::Error) -> Self {
        KeylintError::Other(e.to_string())
    }
}

impl From<toml::de::Error> for KeylintError {
    fn from(e: toml::de::Error) -> Self {
        KeylintError::Config(e.to_string())
    }
}
