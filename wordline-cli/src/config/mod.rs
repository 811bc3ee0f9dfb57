//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wordline_core::config::defaults;
use wordline_core::Limits;

/// Stopword list used when none is given
pub const DEFAULT_STOPWORDS: &str = "stopw.txt";

/// Report destination used when none is given
pub const DEFAULT_OUTPUT: &str = "index.txt";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Tokenizer configuration
    #[serde(default)]
    pub indexing: IndexingConfig,

    /// Index table bounds
    #[serde(default)]
    pub limits: Limits,

    /// Default file locations
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Indexing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct IndexingConfig {
    /// Longest word kept
    pub max_word_len: usize,

    /// Ignore `[limits]` and grow without bounds
    pub unbounded: bool,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            max_word_len: defaults::MAX_WORD_LEN,
            unbounded: false,
        }
    }
}

/// Path-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PathsConfig {
    /// Stopword list
    pub stopwords: PathBuf,

    /// Report destination
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            stopwords: PathBuf::from(DEFAULT_STOPWORDS),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load a configuration file if one was given, defaults otherwise
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Effective table bounds
    pub fn effective_limits(&self) -> Limits {
        if self.indexing.unbounded {
            Limits::unbounded()
        } else {
            self.limits
        }
    }
}
