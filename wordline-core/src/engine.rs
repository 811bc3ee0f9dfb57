//! Indexing engine
//!
//! A run moves through three phases, each one consuming the previous:
//!
//! 1. **Loading**: [`Indexer::new`] takes ownership of the stopword set.
//! 2. **Scanning**: [`Indexer::scan`] makes one pass over the document and
//!    returns a [`ScannedIndex`].
//! 3. **Reporting**: [`ScannedIndex::into_report`] sorts the table once.
//!
//! Capacity violations never stop a scan. They are collected as warnings, one
//! per offending word, and surfaced on the [`ScannedIndex`] for the caller to
//! report.

use crate::classifier::{Classifier, StopwordSet, Verdict};
use crate::config::IndexerConfig;
use crate::error::{CapacityError, Result};
use crate::index::IndexTable;
use crate::input::Input;
use crate::report::Report;
use crate::tokenizer::Tokenizer;
use std::collections::HashSet;

/// Counters collected during a scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    /// Lines read from the document
    pub lines: usize,
    /// Words produced by the tokenizer
    pub tokens: usize,
    /// Words inserted into the index (including refused ones)
    pub accepted: usize,
    /// Words rejected as stopwords
    pub stopwords: usize,
    /// Words rejected as proper nouns
    pub proper_nouns: usize,
    /// Occurrences refused because the word table was full
    pub refused: usize,
}

/// Engine holding the loaded stopwords and configuration
#[derive(Debug, Clone)]
pub struct Indexer {
    config: IndexerConfig,
    classifier: Classifier,
}

impl Default for Indexer {
    fn default() -> Self {
        Self::new(IndexerConfig::default(), StopwordSet::empty())
    }
}

impl Indexer {
    /// Create an engine from a configuration and a loaded stopword set
    pub fn new(config: IndexerConfig, stopwords: StopwordSet) -> Self {
        log::debug!(
            "Loaded {} stopwords, limits: {:?}",
            stopwords.len(),
            config.limits()
        );
        Self {
            config,
            classifier: Classifier::new(stopwords),
        }
    }

    /// Create an engine with default configuration
    pub fn with_stopwords(stopwords: StopwordSet) -> Self {
        Self::new(IndexerConfig::default(), stopwords)
    }

    /// Get the current configuration
    pub fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Scan a document source.
    ///
    /// Fails only if the document cannot be opened or read.
    pub fn scan(self, input: Input) -> Result<ScannedIndex> {
        log::info!("Scanning {input:?}");
        let mut scanner = Scanner::new(self);
        for line in input.open()? {
            scanner.scan_line(&line?);
        }
        Ok(scanner.finish())
    }

    /// Scan a document held in memory
    pub fn scan_text(self, text: &str) -> ScannedIndex {
        let mut scanner = Scanner::new(self);
        for line in text.lines() {
            scanner.scan_line(line);
        }
        scanner.finish()
    }
}

/// Per-run scanning state
struct Scanner {
    classifier: Classifier,
    tokenizer: Tokenizer,
    table: IndexTable,
    stats: ScanStats,
    warnings: Vec<CapacityError>,
    refused_words: HashSet<String>,
}

impl Scanner {
    fn new(indexer: Indexer) -> Self {
        let Indexer { config, classifier } = indexer;
        Self {
            classifier,
            tokenizer: Tokenizer::new(config.max_word_len()),
            table: IndexTable::new(config.limits()),
            stats: ScanStats::default(),
            warnings: Vec::new(),
            refused_words: HashSet::new(),
        }
    }

    fn scan_line(&mut self, line: &str) {
        self.stats.lines += 1;

        for token in self.tokenizer.tokenize_line(line) {
            self.stats.tokens += 1;

            let word = match self.classifier.classify(&token) {
                Verdict::Accept(word) => word,
                Verdict::Stopword => {
                    self.stats.stopwords += 1;
                    continue;
                }
                Verdict::ProperNoun => {
                    log::trace!("Proper noun skipped: {} (line {})", token.word, token.line);
                    self.stats.proper_nouns += 1;
                    continue;
                }
            };

            self.stats.accepted += 1;
            if let Err(error) = self.table.insert(&word, token.line) {
                self.record(error);
            }
        }
    }

    fn record(&mut self, error: CapacityError) {
        if let CapacityError::WordTableFull { word, .. } = &error {
            self.stats.refused += 1;
            if !self.refused_words.insert(word.clone()) {
                return;
            }
        }

        log::debug!("Capacity exceeded: {error}");
        self.warnings.push(error);
    }

    fn finish(self) -> ScannedIndex {
        log::debug!(
            "Scan finished: {} lines, {} words, {} distinct",
            self.stats.lines,
            self.stats.tokens,
            self.table.len()
        );
        ScannedIndex {
            table: self.table,
            stats: self.stats,
            warnings: self.warnings,
        }
    }
}

/// Result of the scanning phase, ready for reporting
#[derive(Debug, Clone)]
pub struct ScannedIndex {
    table: IndexTable,
    stats: ScanStats,
    warnings: Vec<CapacityError>,
}

impl ScannedIndex {
    /// The unsorted index table
    pub fn table(&self) -> &IndexTable {
        &self.table
    }

    /// Scan counters
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// Capacity warnings, one per offending word, in the order raised
    pub fn warnings(&self) -> &[CapacityError] {
        &self.warnings
    }

    /// Number of distinct indexed words
    pub fn unique_words(&self) -> usize {
        self.table.len()
    }

    /// Sort the table and produce the report
    pub fn into_report(self) -> Report {
        Report::from_table(self.table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;

    fn index(text: &str, stopwords: &[&str]) -> ScannedIndex {
        Indexer::with_stopwords(StopwordSet::from_lines(stopwords)).scan_text(text)
    }

    #[test]
    fn test_stats_by_verdict() {
        let scanned = index("The cat, Tom and the dog.", &["the"]);
        let stats = scanned.stats();
        assert_eq!(stats.lines, 1);
        assert_eq!(stats.tokens, 6);
        assert_eq!(stats.stopwords, 2);
        assert_eq!(stats.proper_nouns, 1);
        assert_eq!(stats.accepted, 3);
        assert_eq!(scanned.unique_words(), 3);
    }

    #[test]
    fn test_scan_matches_scan_text() {
        let text = "One fish. Two fish,\nRed fish? Blue fish!\n";
        let from_text = Indexer::default().scan_text(text).into_report();
        let from_input = Indexer::default()
            .scan(Input::from_text(text))
            .unwrap()
            .into_report();
        assert_eq!(from_text, from_input);
    }

    #[test]
    fn test_word_table_full_warns_once_per_word() {
        let config = IndexerConfig::builder()
            .limits(Limits {
                max_words: Some(1),
                max_lines_per_word: None,
            })
            .build()
            .unwrap();
        let scanned = Indexer::new(config, StopwordSet::empty()).scan_text("a b b c\nb a");

        assert_eq!(scanned.unique_words(), 1);
        assert_eq!(scanned.stats().refused, 4);
        let warned: Vec<_> = scanned.warnings().iter().map(|w| w.word()).collect();
        assert_eq!(warned, vec!["b", "c"]);

        let report = scanned.into_report();
        assert_eq!(report.to_text(), "a 2,1,2\n");
    }

    #[test]
    fn test_line_list_full_warns() {
        let config = IndexerConfig::builder()
            .max_lines_per_word(Some(2))
            .build()
            .unwrap();
        let scanned = Indexer::new(config, StopwordSet::empty()).scan_text("x\nx\nx\nx\n");

        assert_eq!(scanned.warnings().len(), 1);
        assert!(matches!(
            scanned.warnings()[0],
            CapacityError::LineListFull { limit: 2, .. }
        ));
        assert_eq!(scanned.into_report().to_text(), "x 4,1,2\n");
    }

    #[test]
    fn test_missing_document_fails() {
        let result = Indexer::default().scan(Input::from_file("/nonexistent/doc.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_max_word_len_applied() {
        let config = IndexerConfig::builder().max_word_len(4).build().unwrap();
        let report = Indexer::new(config, StopwordSet::empty())
            .scan_text("abcdefgh abcdxyz")
            .into_report();
        assert_eq!(report.to_text(), "abcd 2,1\n");
    }
}
