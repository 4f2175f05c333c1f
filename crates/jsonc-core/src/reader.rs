//! Cursor-based character view over the input text.
//!
//! The reader has no JSON knowledge: it only advances a byte-offset
//! cursor through a borrowed string. The single mutation path besides
//! sequential reads is [`backtrack`](Reader::backtrack), which the lexer
//! uses to re-scan a just-consumed number run.

use crate::error::{JsonError, Result};

pub(crate) struct Reader<'a> {
    text: &'a str,
    cursor: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Reader { text, cursor: 0 }
    }

    /// The character at the cursor, without advancing.
    pub(crate) fn peek(&self) -> Result<char> {
        self.text[self.cursor..]
            .chars()
            .next()
            .ok_or(JsonError::EndOfInput)
    }

    /// The character at the cursor, advancing past it.
    pub(crate) fn read(&mut self) -> Result<char> {
        let c = self.peek()?;
        self.cursor += c.len_utf8();
        Ok(c)
    }

    /// The next `n` characters as a slice, advancing past them. Fails
    /// with `EndOfInput` if fewer than `n` remain.
    pub(crate) fn read_n(&mut self, n: usize) -> Result<&'a str> {
        let start = self.cursor;
        let mut end = start;
        let mut chars = self.text[start..].chars();
        for _ in 0..n {
            let c = chars.next().ok_or(JsonError::EndOfInput)?;
            end += c.len_utf8();
        }
        self.cursor = end;
        Ok(&self.text[start..end])
    }

    /// Advances until a character in `delimiters` is found and returns
    /// everything scanned, leaving the delimiter unconsumed. If no
    /// delimiter occurs before the end, fails with `EndOfInput` and
    /// leaves the cursor at the end of the input.
    pub(crate) fn read_until(&mut self, delimiters: &[char]) -> Result<&'a str> {
        let start = self.cursor;
        while let Some(c) = self.text[self.cursor..].chars().next() {
            if delimiters.contains(&c) {
                return Ok(&self.text[start..self.cursor]);
            }
            self.cursor += c.len_utf8();
        }
        Err(JsonError::EndOfInput)
    }

    pub(crate) fn is_eof(&self) -> bool {
        self.cursor >= self.text.len()
    }

    /// Rewinds the cursor by `n` bytes. Only valid for re-scanning a run
    /// of ASCII characters just consumed, where bytes and characters
    /// coincide.
    pub(crate) fn backtrack(&mut self, n: usize) {
        self.cursor -= n;
    }

    /// 1-indexed `(line, column)` of the cursor, computed by counting
    /// newlines in the consumed prefix.
    pub(crate) fn position(&self) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;
        for c in self.text[..self.cursor].chars() {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        (line, column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let mut reader = Reader::new("ab");
        assert_eq!(reader.peek(), Ok('a'));
        assert_eq!(reader.peek(), Ok('a'));
        assert_eq!(reader.read(), Ok('a'));
        assert_eq!(reader.read(), Ok('b'));
        assert!(reader.is_eof());
        assert_eq!(reader.peek(), Err(JsonError::EndOfInput));
    }

    #[test]
    fn read_n_exact_remainder_succeeds() {
        let mut reader = Reader::new("true");
        assert_eq!(reader.read_n(4), Ok("true"));
        assert!(reader.is_eof());
    }

    #[test]
    fn read_n_past_end_fails() {
        let mut reader = Reader::new("tru");
        assert_eq!(reader.read_n(4), Err(JsonError::EndOfInput));
    }

    #[test]
    fn read_until_leaves_delimiter() {
        let mut reader = Reader::new("abc\ndef");
        assert_eq!(reader.read_until(&['\n', '\r']), Ok("abc"));
        assert_eq!(reader.read(), Ok('\n'));
    }

    #[test]
    fn read_until_without_delimiter_exhausts_input() {
        let mut reader = Reader::new("abc");
        assert_eq!(reader.read_until(&['\n']), Err(JsonError::EndOfInput));
        assert!(reader.is_eof());
    }

    #[test]
    fn backtrack_rewinds_ascii_run() {
        let mut reader = Reader::new("12.5]");
        reader.read_n(4).unwrap();
        reader.backtrack(4);
        assert_eq!(reader.read_n(4), Ok("12.5"));
        assert_eq!(reader.peek(), Ok(']'));
    }

    #[test]
    fn position_counts_lines_and_columns() {
        let mut reader = Reader::new("ab\ncd");
        assert_eq!(reader.position(), (1, 1));
        reader.read_n(3).unwrap();
        assert_eq!(reader.position(), (2, 1));
        reader.read().unwrap();
        assert_eq!(reader.position(), (2, 2));
    }

    #[test]
    fn multibyte_characters_advance_by_char() {
        let mut reader = Reader::new("héllo");
        assert_eq!(reader.read(), Ok('h'));
        assert_eq!(reader.read(), Ok('é'));
        assert_eq!(reader.read_n(3), Ok("llo"));
        assert!(reader.is_eof());
    }
}
