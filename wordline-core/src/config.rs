//! Configuration for the indexing engine

use crate::error::{IndexError, Result};
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Longest word kept; longer runs of letters are truncated
    pub const MAX_WORD_LEN: usize = 100;

    /// Maximum number of distinct words in the index table
    pub const MAX_WORDS: usize = 10_000;

    /// Maximum number of line numbers tracked per word
    pub const MAX_LINES_PER_WORD: usize = 1_000;
}

/// Capacity bounds of the index table.
///
/// `None` disables a bound. Disabling bounds never changes the report for a
/// document that stays within them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum number of distinct words
    pub max_words: Option<usize>,
    /// Maximum number of line numbers recorded per word
    pub max_lines_per_word: Option<usize>,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_words: Some(defaults::MAX_WORDS),
            max_lines_per_word: Some(defaults::MAX_LINES_PER_WORD),
        }
    }
}

impl Limits {
    /// No bounds at all
    pub fn unbounded() -> Self {
        Self {
            max_words: None,
            max_lines_per_word: None,
        }
    }
}

/// Indexing configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexerConfig {
    pub(crate) max_word_len: usize,
    pub(crate) limits: Limits,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            max_word_len: defaults::MAX_WORD_LEN,
            limits: Limits::default(),
        }
    }
}

impl IndexerConfig {
    /// Create a configuration builder
    pub fn builder() -> IndexerConfigBuilder {
        IndexerConfigBuilder::default()
    }

    /// Longest word the tokenizer keeps
    pub fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Capacity bounds of the index table
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_word_len == 0 {
            return Err(IndexError::Configuration(
                "max_word_len must be greater than 0".into(),
            ));
        }

        if self.limits.max_words == Some(0) {
            return Err(IndexError::Configuration(
                "max_words must be greater than 0".into(),
            ));
        }

        if self.limits.max_lines_per_word == Some(0) {
            return Err(IndexError::Configuration(
                "max_lines_per_word must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`IndexerConfig`]
#[derive(Debug, Default)]
pub struct IndexerConfigBuilder {
    max_word_len: Option<usize>,
    limits: Option<Limits>,
}

impl IndexerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum word length in characters
    pub fn max_word_len(mut self, len: usize) -> Self {
        self.max_word_len = Some(len);
        self
    }

    /// Replace both capacity bounds
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Set the distinct-word bound (None = unbounded)
    pub fn max_words(mut self, max: Option<usize>) -> Self {
        self.limits.get_or_insert_with(Limits::default).max_words = max;
        self
    }

    /// Set the per-word line bound (None = unbounded)
    pub fn max_lines_per_word(mut self, max: Option<usize>) -> Self {
        self.limits
            .get_or_insert_with(Limits::default)
            .max_lines_per_word = max;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<IndexerConfig> {
        let mut config = IndexerConfig::default();

        if let Some(len) = self.max_word_len {
            config.max_word_len = len;
        }

        if let Some(limits) = self.limits {
            config.limits = limits;
        }

        config.validate()?;
        Ok(config)
    }
}
