//! Stopword and proper-noun filtering

use crate::error::{IndexError, Result};
use crate::input::read_line_lossy;
use crate::tokenizer::Token;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Set of lowercase words excluded from the index
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Create an empty stopword set (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from stopword lines.
    ///
    /// Trailing line terminators are stripped and empty lines skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = lines
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim_end_matches(['\r', '\n']);
                (!word.is_empty()).then(|| word.to_lowercase())
            })
            .collect();
        Self { words }
    }

    /// Read a stopword list from any buffered reader.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so
    /// one bad line never discards the rest of the list.
    pub fn from_reader<R: BufRead>(mut reader: R) -> std::io::Result<Self> {
        let mut buffer = Vec::new();
        let mut lines = Vec::new();
        while let Some(line) = read_line_lossy(&mut reader, &mut buffer)? {
            lines.push(line);
        }
        Ok(Self::from_lines(lines))
    }

    /// Load a stopword list from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |source| IndexError::ResourceUnavailable {
            what: "stopwords",
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(unavailable)?;
        Self::from_reader(BufReader::new(file)).map_err(unavailable)
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of distinct stopwords
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Outcome of classifying one token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Index the word under this normalized form
    Accept(String),
    /// Word is in the stopword set
    Stopword,
    /// Capitalized word outside a sentence start
    ProperNoun,
}

impl Verdict {
    /// Whether the token should be indexed
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accept(_))
    }
}

/// Heuristic filter deciding which tokens get indexed
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    stopwords: StopwordSet,
}

impl Classifier {
    /// Create a classifier over a stopword set
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Classify a token.
    ///
    /// Stopwords are checked before the proper-noun rule, so a capitalized
    /// stopword is always reported as a stopword.
    pub fn classify(&self, token: &Token) -> Verdict {
        let normalized = token.word.to_lowercase();

        if self.stopwords.contains(&normalized) {
            Verdict::Stopword
        } else if is_proper_noun(&token.word, token.sentence_start) {
            Verdict::ProperNoun
        } else {
            Verdict::Accept(normalized)
        }
    }
}

/// Capitalized word that does not open a sentence
#[inline]
pub fn is_proper_noun(word: &str, sentence_start: bool) -> bool {
    !sentence_start && word.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}
