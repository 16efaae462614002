//! Application error types.
//!
//! Provides unified error handling with actionable context for debugging.

use thiserror::Error;

use crate::types::Sentiment;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// Network error (connection, timeout, DNS)
    #[error("Network error: {0}")]
    Network(String),

    /// A single lyrics item could not be acquired
    #[error("Failed to acquire {item}: {message}")]
    Acquisition {
        /// The `artist - title` the failure refers to.
        item: String,
        /// Description of the failure.
        message: String,
    },

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// File parsing error
    #[error("Parse error in {file:?}: {message}")]
    Parse {
        /// File that failed to parse, if known.
        file: Option<std::path::PathBuf>,
        /// Description of the parse failure.
        message: String,
    },

    /// Sentiment lexicon could not be loaded
    #[error("Lexicon error in {path:?} at line {line}: {message}")]
    Lexicon {
        /// Lexicon file, if the lexicon came from disk.
        path: Option<std::path::PathBuf>,
        /// 1-based line number in the lexicon source.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// A class has too few samples for a stratified train/test split
    #[error("Class {class} has {count} sample(s); at least 2 are needed for a stratified split")]
    InsufficientSamples {
        /// The under-represented class.
        class: Sentiment,
        /// How many samples of that class were present.
        count: usize,
    },

    /// Training was attempted without any labeled rows
    #[error("No labeled records to train on")]
    EmptyDataset,

    /// Record failed validation at construction
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// CSV read/write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create an acquisition error for a single item
    pub fn acquisition(item: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Acquisition { item: item.into(), message: message.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }

    /// Create a parse error with file context
    pub fn parse(message: impl Into<String>, file: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Parse { file: file.into(), message: message.into() }
    }

    /// Create a lexicon error for a given line
    pub fn lexicon(line: usize, message: impl Into<String>) -> Self {
        Self::Lexicon { path: None, line, message: message.into() }
    }

    /// Whether a batch may skip the failing item and continue.
    pub const fn is_item_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Acquisition { .. } | Self::InvalidRecord(_) | Self::Json(_)
        )
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn insufficient_samples_names_class() {
        let err = Error::InsufficientSamples { class: Sentiment::Negative, count: 1 };
        let msg = err.to_string();
        assert!(msg.contains("Negative"));
        assert!(msg.contains("1 sample"));
    }

    #[test]
    fn item_failures_are_recoverable() {
        assert!(Error::acquisition("Dewa 19 - Kangen", "HTTP 404").is_item_recoverable());
        assert!(Error::Network("timeout".into()).is_item_recoverable());
        assert!(!Error::EmptyDataset.is_item_recoverable());
        assert!(!Error::config("bad", "fix it").is_item_recoverable());
    }
}
