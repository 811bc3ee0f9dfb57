//! Document sources

use crate::error::{IndexError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

/// Unified input abstraction for document sources
pub enum Input {
    /// Direct text input
    Text(String),
    /// File path input
    File(PathBuf),
    /// Reader input (boxed for object safety)
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f
                .debug_struct("Input::Text")
                .field("length", &text.len())
                .finish(),
            Input::File(path) => f.debug_struct("Input::File").field("path", path).finish(),
            Input::Reader(_) => f.debug_struct("Input::Reader").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    /// Create input from reader
    pub fn from_reader(reader: impl Read + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Path used in diagnostics
    fn label(&self) -> PathBuf {
        match self {
            Input::File(path) => path.clone(),
            Input::Text(_) => PathBuf::from("<text>"),
            Input::Reader(_) => PathBuf::from("<reader>"),
        }
    }

    /// Open the source as a line reader
    pub(crate) fn open(self) -> Result<LineReader> {
        let label = self.label();
        let reader: Box<dyn BufRead> = match self {
            Input::Text(text) => Box::new(Cursor::new(text.into_bytes())),
            Input::Reader(reader) => Box::new(BufReader::new(reader)),
            Input::File(path) => {
                let file = File::open(&path).map_err(|source| IndexError::ResourceUnavailable {
                    what: "input",
                    path: path.clone(),
                    source,
                })?;
                Box::new(BufReader::new(file))
            }
        };

        Ok(LineReader {
            reader,
            label,
            buffer: Vec::new(),
        })
    }
}

/// Iterator over document lines with terminators stripped.
///
/// Lines are decoded lossily: bytes that are not valid UTF-8 become U+FFFD,
/// which the tokenizer treats like any other non-letter.
pub struct LineReader {
    reader: Box<dyn BufRead>,
    label: PathBuf,
    buffer: Vec<u8>,
}

impl LineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_line_lossy(&mut self.reader, &mut self.buffer)
    }
}

/// Read one line with its `\n` or `\r\n` terminator stripped, decoding
/// invalid UTF-8 lossily. Returns `None` at end of input.
pub(crate) fn read_line_lossy<R: BufRead + ?Sized>(
    reader: &mut R,
    buffer: &mut Vec<u8>,
) -> io::Result<Option<String>> {
    buffer.clear();
    if reader.read_until(b'\n', buffer)? == 0 {
        return Ok(None);
    }

    if buffer.last() == Some(&b'\n') {
        buffer.pop();
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buffer).into_owned()))
}

impl Iterator for LineReader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line()
            .map_err(|source| IndexError::ResourceUnavailable {
                what: "input",
                path: self.label.clone(),
                source,
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: Input) -> Vec<String> {
        input
            .open()
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_text_lines() {
        let lines = collect(Input::from_text("one\ntwo\r\n\nfour"));
        assert_eq!(lines, vec!["one", "two", "", "four"]);
    }

    #[test]
    fn test_trailing_newline_adds_no_line() {
        let lines = collect(Input::from_text("one\ntwo\n"));
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert!(collect(Input::from_text("")).is_empty());
    }

    #[test]
    fn test_reader_input() {
        let lines = collect(Input::from_reader(Cursor::new(b"a\nb".to_vec())));
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        let lines = collect(Input::from_reader(Cursor::new(b"ab\xffcd\n".to_vec())));
        assert_eq!(lines, vec!["ab\u{fffd}cd"]);
    }

    #[test]
    fn test_file_input() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "first\nsecond\n").unwrap();

        assert_eq!(collect(Input::from_file(&path)), vec!["first", "second"]);
    }

    #[test]
    fn test_missing_file() {
        let result = Input::from_file("/nonexistent/doc.txt").open();
        match result {
            Err(IndexError::ResourceUnavailable { what, .. }) => assert_eq!(what, "input"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn test_debug_hides_content() {
        let debug = format!("{:?}", Input::from_text("secret words"));
        assert!(debug.contains("length"));
        assert!(!debug.contains("secret"));
    }
}
