//! Word index table
//!
//! Maps each normalized word to its occurrence count and the line numbers it
//! was seen on. A line number is appended only when it differs from the last
//! one recorded for that word, so `3, 4, 3` is kept as `[3, 4, 3]` while
//! `2, 2, 5` becomes `[2, 5]`.

use crate::config::Limits;
use crate::error::CapacityError;
use std::collections::HashMap;

/// Aggregate record for one indexed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    count: usize,
    lines: Vec<usize>,
    lines_truncated: bool,
}

impl WordEntry {
    fn new(word: String, line: usize) -> Self {
        Self {
            word,
            count: 1,
            lines: vec![line],
            lines_truncated: false,
        }
    }

    /// The normalized word
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Total accepted occurrences
    pub fn count(&self) -> usize {
        self.count
    }

    /// Recorded line numbers, in recording order
    pub fn lines(&self) -> &[usize] {
        &self.lines
    }

    /// Whether line numbers were dropped because of the per-word bound
    pub fn lines_truncated(&self) -> bool {
        self.lines_truncated
    }
}

/// Effect of a successful insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// First occurrence of the word
    New,
    /// Count incremented and the line appended
    LineAdded,
    /// Count incremented; the line repeats the last recorded one
    SameLine,
    /// Count incremented; the line list is already full
    LineDropped,
}

/// Word table with optional capacity bounds.
///
/// Entries are stored in first-seen order; the hash map only accelerates lookup.
#[derive(Debug, Clone, Default)]
pub struct IndexTable {
    entries: Vec<WordEntry>,
    slots: HashMap<String, usize>,
    limits: Limits,
}

impl IndexTable {
    /// Create an empty table with the given bounds
    pub fn new(limits: Limits) -> Self {
        Self {
            entries: Vec::new(),
            slots: HashMap::new(),
            limits,
        }
    }

    /// Create an empty table without bounds
    pub fn unbounded() -> Self {
        Self::new(Limits::unbounded())
    }

    /// Record one occurrence of `word` on `line`.
    ///
    /// `LineListFull` is returned only the first time a word's line list
    /// overflows; the occurrence is still counted. `WordTableFull` leaves the
    /// table untouched.
    pub fn insert(&mut self, word: &str, line: usize) -> Result<Insertion, CapacityError> {
        let Some(&slot) = self.slots.get(word) else {
            let len = self.entries.len();
            if let Some(limit) = self.limits.max_words.filter(|&limit| len >= limit) {
                return Err(CapacityError::WordTableFull {
                    word: word.to_string(),
                    limit,
                });
            }

            self.slots.insert(word.to_string(), self.entries.len());
            self.entries.push(WordEntry::new(word.to_string(), line));
            return Ok(Insertion::New);
        };

        let entry = &mut self.entries[slot];
        entry.count += 1;

        if entry.lines.last() == Some(&line) {
            return Ok(Insertion::SameLine);
        }

        match self.limits.max_lines_per_word {
            Some(limit) if entry.lines.len() >= limit => {
                if entry.lines_truncated {
                    Ok(Insertion::LineDropped)
                } else {
                    entry.lines_truncated = true;
                    Err(CapacityError::LineListFull {
                        word: entry.word.clone(),
                        limit,
                    })
                }
            }
            _ => {
                entry.lines.push(line);
                Ok(Insertion::LineAdded)
            }
        }
    }

    /// Look up a word by exact normalized form
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.slots.get(word).map(|&slot| &self.entries[slot])
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the table, sorting entries by byte-wise word order
    pub fn into_sorted(self) -> Vec<WordEntry> {
        let mut entries = self.entries;
        entries.sort_unstable_by(|a, b| a.word.as_bytes().cmp(b.word.as_bytes()));
        entries
    }
}
