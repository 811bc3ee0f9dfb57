//! Wordline CLI library
//!
//! This library provides the command-line interface for the wordline
//! word-occurrence indexer.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use commands::Cli;
pub use error::{CliError, CliResult};
