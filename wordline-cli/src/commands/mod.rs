//! CLI command implementations

use clap::Parser;
use std::path::PathBuf;

pub mod index;

/// Build a sorted word-occurrence index of a text document
#[derive(Debug, Parser)]
#[command(name = "wordline", version, about)]
pub struct Cli {
    /// Text document to index
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Stopword list, one word per line [default: stopw.txt]
    #[arg(value_name = "STOPWORDS")]
    pub stopwords: Option<PathBuf>,

    /// Report file, or `-` for stdout [default: index.txt]
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE", env = "WORDLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum number of distinct words
    #[arg(long, value_name = "N", conflicts_with = "unbounded")]
    pub max_words: Option<usize>,

    /// Maximum number of line numbers recorded per word
    #[arg(long, value_name = "N", conflicts_with = "unbounded")]
    pub max_lines: Option<usize>,

    /// Longest word kept; longer words are truncated
    #[arg(long, value_name = "N")]
    pub max_word_len: Option<usize>,

    /// Remove both table bounds
    #[arg(long)]
    pub unbounded: bool,

    /// Suppress status output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
