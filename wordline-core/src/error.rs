//! Error types for the indexing engine

use std::path::PathBuf;
use thiserror::Error;

/// Error type for indexing operations
#[derive(Debug, Error)]
pub enum IndexError {
    /// A stopword list or document could not be opened or read
    #[error("Cannot open {what} file: {}", path.display())]
    ResourceUnavailable {
        /// Which input failed ("stopwords", "input")
        what: &'static str,
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A bounded table refused a word or a line number
    #[error(transparent)]
    CapacityExceeded(#[from] CapacityError),

    /// The report sink could not be opened or written
    #[error("Cannot write to output file: {}", path.display())]
    OutputUnwritable {
        /// Path of the report sink
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Capacity violations raised by the index table.
///
/// Neither variant is fatal: the engine records it as a warning and keeps scanning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapacityError {
    /// The word table already holds its maximum number of distinct words
    #[error("index table full ({limit} words), word ignored: {word}")]
    WordTableFull { word: String, limit: usize },

    /// The word already tracks its maximum number of line numbers
    #[error("line list full ({limit} lines), further lines not recorded for: {word}")]
    LineListFull { word: String, limit: usize },
}

impl CapacityError {
    /// The word that triggered the violation
    pub fn word(&self) -> &str {
        match self {
            CapacityError::WordTableFull { word, .. } | CapacityError::LineListFull { word, .. } => {
                word
            }
        }
    }
}

/// Result type for indexing operations
pub type Result<T> = std::result::Result<T, IndexError>;
