//! Index command implementation

use super::Cli;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::ReportSink;
use std::path::PathBuf;
use wordline_core::{Indexer, IndexerConfig, Input, Limits, StopwordSet};

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct words in the report
    pub unique_words: usize,
    /// Capacity warnings raised during the scan
    pub warnings: usize,
    /// Whether the stopword list was loaded
    pub stopwords_loaded: bool,
}

/// Paths after applying arguments, config file and defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub document: PathBuf,
    pub stopwords: PathBuf,
    pub sink: ReportSink,
}

impl Cli {
    /// Execute the indexing run
    pub fn execute(&self) -> CliResult<RunSummary> {
        self.init_logging();

        log::info!("Starting indexing run");
        log::debug!("Arguments: {:?}", self);

        let file_config = CliConfig::load_optional(self.config.as_deref())?;
        let indexer_config = self.indexer_config(&file_config)?;
        let paths = self.resolve_paths(&file_config);

        self.status(&paths.sink, &format!("Input: {}", paths.document.display()));
        self.status(&paths.sink, &format!("Stopwords: {}", paths.stopwords.display()));
        self.status(&paths.sink, &format!("Output: {}", paths.sink));

        // A missing stopword list degrades to an empty set
        let (stopwords, stopwords_loaded) = match StopwordSet::load(&paths.stopwords) {
            Ok(set) => (set, true),
            Err(e) => {
                eprintln!("{e}");
                log::debug!("Stopword load failure: {e:?}");
                (StopwordSet::empty(), false)
            }
        };

        let scanned = Indexer::new(indexer_config, stopwords)
            .scan(Input::from_file(&paths.document))?;

        for warning in scanned.warnings() {
            eprintln!("Warning: {warning}");
        }

        let summary = RunSummary {
            unique_words: scanned.unique_words(),
            warnings: scanned.warnings().len(),
            stopwords_loaded,
        };
        log::info!("Scan stats: {:?}", scanned.stats());

        paths.sink.write(&scanned.into_report())?;

        self.status(
            &paths.sink,
            &format!("Done. Unique words: {}", summary.unique_words),
        );
        Ok(summary)
    }

    /// Merge flags over the config file over built-in defaults
    pub fn indexer_config(&self, file_config: &CliConfig) -> CliResult<IndexerConfig> {
        let mut limits = file_config.effective_limits();
        if self.unbounded {
            limits = Limits::unbounded();
        }
        if let Some(max) = self.max_words {
            limits.max_words = Some(max);
        }
        if let Some(max) = self.max_lines {
            limits.max_lines_per_word = Some(max);
        }

        let max_word_len = self
            .max_word_len
            .unwrap_or(file_config.indexing.max_word_len);

        IndexerConfig::builder()
            .max_word_len(max_word_len)
            .limits(limits)
            .build()
            .map_err(|e| CliError::InvalidArgument(e.to_string()).into())
    }

    /// Resolve document, stopword and report paths
    pub fn resolve_paths(&self, file_config: &CliConfig) -> ResolvedPaths {
        let stopwords = self
            .stopwords
            .clone()
            .unwrap_or_else(|| file_config.paths.stopwords.clone());
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| file_config.paths.output.clone());

        ResolvedPaths {
            document: self.document.clone(),
            stopwords,
            sink: ReportSink::from_path(&output),
        }
    }

    /// Print a status line; stderr when the report itself goes to stdout
    fn status(&self, sink: &ReportSink, message: &str) {
        if self.quiet {
            return;
        }
        if sink.is_stdout() {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // Ignore repeated initialization when run more than once in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
