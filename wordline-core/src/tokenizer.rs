//! Word extraction with sentence-boundary tracking
//!
//! A word is a maximal run of ASCII letters. Everything else is a delimiter,
//! and delimiters drive a single document-wide flag telling whether the next
//! word opens a sentence:
//!
//! - `.`, `!` and `?` set the flag
//! - space and tab leave it alone
//! - any other delimiter clears it
//!
//! The flag starts set, so the first word of a document counts as a sentence
//! start. The line break ending each line is an ordinary delimiter, so it
//! clears the flag: a capitalized word opening a line is only a sentence
//! start when punctuation earlier on that line set the flag again.

use crate::config::defaults;

/// A word extracted from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The word as it appeared (case preserved, possibly truncated)
    pub word: String,
    /// 1-based line number
    pub line: usize,
    /// Whether the word opens a sentence
    pub sentence_start: bool,
}

impl Token {
    /// Create a new token
    pub fn new(word: impl Into<String>, line: usize, sentence_start: bool) -> Self {
        Self {
            word: word.into(),
            line,
            sentence_start,
        }
    }
}

/// Punctuation-derived sentence boundary state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentenceBoundary {
    at_sentence_start: bool,
}

impl Default for SentenceBoundary {
    fn default() -> Self {
        Self {
            at_sentence_start: true,
        }
    }
}

impl SentenceBoundary {
    /// Create the state for the start of a document
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the next word opens a sentence
    #[inline]
    pub fn is_sentence_start(&self) -> bool {
        self.at_sentence_start
    }

    /// Update the state with a delimiter character
    #[inline]
    pub fn observe(&mut self, delimiter: char) {
        match delimiter {
            '.' | '!' | '?' => self.at_sentence_start = true,
            ' ' | '\t' => {}
            _ => self.at_sentence_start = false,
        }
    }
}

/// Check if a character can be part of a word
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Line-by-line tokenizer with document-wide sentence state
#[derive(Debug, Clone)]
pub struct Tokenizer {
    max_word_len: usize,
    boundary: SentenceBoundary,
    line: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(defaults::MAX_WORD_LEN)
    }
}

impl Tokenizer {
    /// Create a tokenizer that truncates words to `max_word_len` letters
    pub fn new(max_word_len: usize) -> Self {
        Self {
            max_word_len,
            boundary: SentenceBoundary::new(),
            line: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_consumed(&self) -> usize {
        self.line
    }

    /// Tokenize the next line of the document.
    ///
    /// `line` must not contain its terminator; the line break is observed
    /// after the last word. Each call advances the line number by one,
    /// including for empty lines.
    pub fn tokenize_line(&mut self, line: &str) -> Vec<Token> {
        self.line += 1;
        let line_no = self.line;

        let mut tokens = Vec::new();
        let mut word = String::new();

        for ch in line.chars() {
            if is_word_char(ch) {
                // Overflow letters are consumed without extending the word
                if word.len() < self.max_word_len {
                    word.push(ch);
                }
                continue;
            }

            if !word.is_empty() {
                tokens.push(Token::new(
                    std::mem::take(&mut word),
                    line_no,
                    self.boundary.is_sentence_start(),
                ));
            }
            self.boundary.observe(ch);
        }

        if !word.is_empty() {
            tokens.push(Token::new(word, line_no, self.boundary.is_sentence_start()));
        }
        self.boundary.observe('\n');

        tokens
    }

    /// Tokenize a whole document held in memory
    pub fn tokenize(mut self, text: &str) -> Vec<Token> {
        text.lines()
            .flat_map(|line| self.tokenize_line(line))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.word.as_str()).collect()
    }

    #[test]
    fn test_splits_on_non_letters() {
        let tokens = Tokenizer::default().tokenize("hello, world42foo  bar-baz");
        assert_eq!(words(&tokens), vec!["hello", "world", "foo", "bar", "baz"]);
    }

    #[test]
    fn test_final_word_without_delimiter() {
        let mut tokenizer = Tokenizer::default();
        let tokens = tokenizer.tokenize_line("last word");
        assert_eq!(words(&tokens), vec!["last", "word"]);
        assert_eq!(tokens[1].line, 1);
    }

    #[test]
    fn test_consecutive_delimiters_produce_nothing() {
        let tokens = Tokenizer::default().tokenize(" ,,;  ... !!\t");
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_line_numbers_count_empty_lines() {
        let tokens = Tokenizer::default().tokenize("one\n\nthree\n");
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[1].line, 3);
    }

    #[test]
    fn test_crlf_lines() {
        let tokens = Tokenizer::default().tokenize("alpha.\r\nBeta\r\n");
        assert_eq!(words(&tokens), vec!["alpha", "Beta"]);
        assert!(!tokens[1].sentence_start);
    }

    #[test]
    fn test_document_start_is_sentence_start() {
        let tokens = Tokenizer::default().tokenize("The cat");
        assert!(tokens[0].sentence_start);
        assert!(tokens[1].sentence_start);
    }

    #[test]
    fn test_terminators_set_flag() {
        for text in ["a, b. Next", "a, b! Next", "a, b? Next", "a, b.\t Next"] {
            let tokens = Tokenizer::default().tokenize(text);
            let last = tokens.last().unwrap();
            assert_eq!(last.word, "Next");
            assert!(last.sentence_start, "expected sentence start in {text:?}");
        }
    }

    #[test]
    fn test_other_punctuation_clears_flag() {
        let tokens = Tokenizer::default().tokenize("Start, Paris");
        assert!(tokens[0].sentence_start);
        assert!(!tokens[1].sentence_start);
    }

    #[test]
    fn test_punctuation_after_terminator_clears_flag() {
        let tokens = Tokenizer::default().tokenize("end.\" Quoted");
        assert!(!tokens[1].sentence_start);
    }

    #[test]
    fn test_flag_uses_state_before_terminating_delimiter() {
        let tokens = Tokenizer::default().tokenize("x, Word. Next");
        // "Word" is followed by '.', but preceded by ','
        assert!(!tokens[1].sentence_start);
        assert!(tokens[2].sentence_start);
    }

    #[test]
    fn test_line_break_clears_flag() {
        let mut tokenizer = Tokenizer::default();
        tokenizer.tokenize_line("It ended.");
        let tokens = tokenizer.tokenize_line("Then more. London");
        assert!(!tokens[0].sentence_start);
        assert!(tokens[2].sentence_start);
        assert_eq!(tokenizer.lines_consumed(), 2);
    }

    #[test]
    fn test_empty_line_clears_flag() {
        let tokens = Tokenizer::default().tokenize("\nFirst");
        assert!(!tokens[0].sentence_start);
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn test_last_word_keeps_flag_before_line_break() {
        let tokens = Tokenizer::default().tokenize("Done. Last\nnext");
        assert!(tokens[1].sentence_start);
        assert!(!tokens[2].sentence_start);
    }

    #[test]
    fn test_digits_clear_flag() {
        let tokens = Tokenizer::default().tokenize("Done. 42 Apples");
        assert!(!tokens[1].sentence_start);
    }

    #[test]
    fn test_non_ascii_letters_are_delimiters() {
        let tokens = Tokenizer::default().tokenize("café");
        assert_eq!(words(&tokens), vec!["caf"]);
    }

    #[test]
    fn test_long_word_truncated_not_split() {
        let long = "a".repeat(150);
        let text = format!("{long} b");
        let tokens = Tokenizer::default().tokenize(&text);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].word.len(), 100);
        assert_eq!(tokens[1].word, "b");
    }

    #[test]
    fn test_custom_max_word_len() {
        let tokens = Tokenizer::new(3).tokenize("abcdef gh");
        assert_eq!(words(&tokens), vec!["abc", "gh"]);
    }

    #[test]
    fn test_boundary_observe() {
        let mut boundary = SentenceBoundary::new();
        assert!(boundary.is_sentence_start());
        boundary.observe(';');
        assert!(!boundary.is_sentence_start());
        boundary.observe(' ');
        assert!(!boundary.is_sentence_start());
        boundary.observe('?');
        assert!(boundary.is_sentence_start());
        boundary.observe('\t');
        assert!(boundary.is_sentence_start());
    }
}
