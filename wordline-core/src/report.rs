//! Sorted report generation
//!
//! Each record is one line: `<word> <count>,<line1>,...,<lineN>`.

use crate::error::{IndexError, Result};
use crate::index::{IndexTable, WordEntry};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Trait for report formatters
pub trait ReportFormatter {
    /// Format and output a single entry
    fn format_entry(&mut self, entry: &WordEntry) -> io::Result<()>;

    /// Finalize output
    fn finish(&mut self) -> io::Result<()>;
}

/// Plain text formatter - one record per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportFormatter for TextFormatter<W> {
    fn format_entry(&mut self, entry: &WordEntry) -> io::Result<()> {
        write!(self.writer, "{} {}", entry.word(), entry.count())?;
        for line in entry.lines() {
            write!(self.writer, ",{line}")?;
        }
        writeln!(self.writer)
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Word entries in byte-wise ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    entries: Vec<WordEntry>,
}

impl Report {
    /// Sort a finished table into a report
    pub fn from_table(table: IndexTable) -> Self {
        Self {
            entries: table.into_sorted(),
        }
    }

    /// Sorted entries
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the report has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by word
    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.entries
            .binary_search_by(|e| e.word().as_bytes().cmp(word.as_bytes()))
            .ok()
            .map(|i| &self.entries[i])
    }

    /// Feed every entry to a formatter, then finish it
    pub fn write_with<F: ReportFormatter>(&self, formatter: &mut F) -> io::Result<()> {
        for entry in &self.entries {
            formatter.format_entry(entry)?;
        }
        formatter.finish()
    }

    /// Write the text report to any writer
    pub fn write_text<W: Write>(&self, writer: W) -> io::Result<()> {
        self.write_with(&mut TextFormatter::new(writer))
    }

    /// Render the text report to a string
    pub fn to_text(&self) -> String {
        let mut formatter = TextFormatter::new(Vec::new());
        // Writing into a Vec cannot fail
        let _ = self.write_with(&mut formatter);
        String::from_utf8_lossy(&formatter.into_inner()).into_owned()
    }

    /// Write the text report to a file, replacing it
    pub fn write_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let unwritable = |source| IndexError::OutputUnwritable {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(unwritable)?;
        self.write_text(BufWriter::new(file)).map_err(unwritable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;

    fn report_from(pairs: &[(&str, usize)]) -> Report {
        let mut table = IndexTable::new(Limits::unbounded());
        for &(word, line) in pairs {
            table.insert(word, line).unwrap();
        }
        Report::from_table(table)
    }

    #[test]
    fn test_line_format() {
        let report = report_from(&[("apple", 2), ("apple", 2), ("apple", 5)]);
        assert_eq!(report.to_text(), "apple 3,2,5\n");
    }

    #[test]
    fn test_records_sorted() {
        let report = report_from(&[("ran", 1), ("dog", 1), ("sat", 1), ("the", 1)]);
        assert_eq!(report.to_text(), "dog 1,1\nran 1,1\nsat 1,1\nthe 1,1\n");
    }

    #[test]
    fn test_empty_report() {
        let report = Report::from_table(IndexTable::default());
        assert!(report.is_empty());
        assert_eq!(report.to_text(), "");
    }

    #[test]
    fn test_get_uses_sorted_order() {
        let report = report_from(&[("pear", 1), ("fig", 2), ("kiwi", 3)]);
        assert_eq!(report.get("fig").unwrap().lines(), &[2]);
        assert!(report.get("plum").is_none());
    }

    #[test]
    fn test_write_file_unwritable() {
        let report = report_from(&[("word", 1)]);
        let result = report.write_file("/nonexistent/dir/index.txt");
        assert!(matches!(result, Err(IndexError::OutputUnwritable { .. })));
    }

    #[test]
    fn test_write_file_roundtrip() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("index.txt");

        let report = report_from(&[("zeta", 1), ("alpha", 4)]);
        report.write_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "alpha 1,4\nzeta 1,1\n");
    }

    struct CountingFormatter {
        entries: usize,
        finished: bool,
    }

    impl ReportFormatter for CountingFormatter {
        fn format_entry(&mut self, _entry: &WordEntry) -> io::Result<()> {
            self.entries += 1;
            Ok(())
        }

        fn finish(&mut self) -> io::Result<()> {
            self.finished = true;
            Ok(())
        }
    }

    #[test]
    fn test_custom_formatter() {
        let report = report_from(&[("a", 1), ("b", 1), ("c", 1)]);
        let mut formatter = CountingFormatter {
            entries: 0,
            finished: false,
        };
        report.write_with(&mut formatter).unwrap();
        assert_eq!(formatter.entries, 3);
        assert!(formatter.finished);
    }
}
