//! Word-occurrence indexing for plain-text documents
//!
//! This crate builds a line index over a document: for every content word it
//! records how often the word occurs and on which lines, skipping stopwords
//! and capitalized words that look like proper nouns. The finished index is
//! sorted byte-wise and written one word per line.
//!
//! # Architecture
//!
//! - **Tokenizer**: splits lines into letter runs and tracks whether the next
//!   word opens a sentence
//! - **Classifier**: stopword and proper-noun filtering
//! - **Index table**: word → (count, line numbers)
//! - **Report**: one-shot sort and text serialization
//!
//! # Example
//!
//! ```rust
//! use wordline_core::{Indexer, StopwordSet};
//!
//! let stopwords = StopwordSet::from_lines(["the"]);
//! let indexer = Indexer::with_stopwords(stopwords);
//!
//! let report = indexer
//!     .scan_text("The cat sat.\nThe cat ran, then London.")
//!     .into_report();
//!
//! assert_eq!(
//!     report.to_text(),
//!     "cat 2,1,2\nran 1,2\nsat 1,1\nthen 1,2\n"
//! );
//! ```

pub mod classifier;
pub mod config;
pub mod engine;
pub mod error;
pub mod index;
pub mod input;
pub mod report;
pub mod tokenizer;

pub use classifier::{Classifier, StopwordSet, Verdict};
pub use config::{IndexerConfig, IndexerConfigBuilder, Limits};
pub use engine::{Indexer, ScanStats, ScannedIndex};
pub use error::{CapacityError, IndexError, Result};
pub use index::{IndexTable, Insertion, WordEntry};
pub use input::Input;
pub use report::{Report, ReportFormatter, TextFormatter};
pub use tokenizer::{SentenceBoundary, Token, Tokenizer};
