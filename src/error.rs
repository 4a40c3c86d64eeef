//! Error types for wiki-excerpt

use thiserror::Error;

/// Everything that can end an excerpt invocation early.
///
/// None of these are fatal: the orchestrator turns each one into a single
/// user-visible notice (the `Display` text) and leaves the text sink alone.
#[derive(Debug, Error)]
pub enum ExcerptError {
    #[error("Could not find \"{0}\" on Wikipedia")]
    NotFound(String),

    #[error("Could not resolve disambiguation for \"{original}\" (tried \"{candidate}\")")]
    DisambiguationUnresolved { original: String, candidate: String },

    #[error("Failed to fetch from Wikipedia: {0}")]
    Fetch(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExcerptError {
    pub fn not_found(term: impl Into<String>) -> Self {
        Self::NotFound(term.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub fn is_fetch_error(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}

impl From<reqwest::Error> for ExcerptError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Fetch(format!("request timed out: {}", err))
        } else if err.is_decode() {
            Self::Fetch(format!("invalid response body: {}", err))
        } else {
            Self::Fetch(err.to_string())
        }
    }
}

impl From<serde_json::Error> for ExcerptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Fetch(format!("invalid JSON: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, ExcerptError>;
