//! Tokenizer: raw text → ordered [`Token`] sequence.
//!
//! The lexer owns whitespace and comment skipping and literal
//! recognition. Comments (`// …` and `/* … */`) are an optional
//! extension controlled by `allow_comments`; they produce no tokens.
//! Whitespace runs emit a transient [`Token::WhiteSpace`] that is
//! filtered out before the sequence is returned.
//!
//! Number scanning is deliberately greedy over a superset of valid JSON
//! number syntax (`+ - . e E x` and digits), then backtracks the cursor
//! and lets the double conversion reject malformed runs. This keeps the
//! scanner a single character class instead of a grammar.

use crate::error::{JsonError, Result};
use crate::reader::Reader;
use crate::token::Token;

/// Tokenize a document into its non-whitespace tokens.
///
/// Fails fast on the first lexical error, reporting the 1-indexed
/// `(line, column)` of the cursor at the point of failure.
pub fn tokenize(text: &str, allow_comments: bool) -> Result<Vec<Token>> {
    let mut lexer = Lexer {
        reader: Reader::new(text),
        allow_comments,
    };
    let mut tokens = Vec::new();
    while !lexer.reader.is_eof() {
        let token = lexer.next_token()?;
        if matches!(token, Token::WhiteSpace) {
            continue;
        }
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    reader: Reader<'a>,
    allow_comments: bool,
}

impl Lexer<'_> {
    fn next_token(&mut self) -> Result<Token> {
        let next = self.reader.peek()?;
        if next == '/' && self.allow_comments {
            self.skip_comment()?;
            return Ok(Token::WhiteSpace);
        }
        match next {
            ' ' | '\t' | '\n' => {
                self.reader.read()?;
                Ok(Token::WhiteSpace)
            }
            // CR is whitespace only as part of a CRLF pair; a bare CR is
            // an invalid character.
            '\r' => {
                self.reader.read()?;
                match self.reader.peek() {
                    Ok('\n') => {
                        self.reader.read()?;
                        Ok(Token::WhiteSpace)
                    }
                    _ => Err(self.unexpected_character()),
                }
            }
            '{' => self.punctuation(Token::LeftBrace),
            '}' => self.punctuation(Token::RightBrace),
            '[' => self.punctuation(Token::LeftBracket),
            ']' => self.punctuation(Token::RightBracket),
            ',' => self.punctuation(Token::Comma),
            ':' => self.punctuation(Token::Colon),
            '"' => self.string_token(),
            't' => self.keyword_token("true", Token::Boolean(true)),
            'f' => self.keyword_token("false", Token::Boolean(false)),
            'n' => self.keyword_token("null", Token::Null),
            '+' | '-' | '.' | '0'..='9' => self.number_token(),
            _ => Err(self.unexpected_character()),
        }
    }

    fn punctuation(&mut self, token: Token) -> Result<Token> {
        self.reader.read()?;
        Ok(token)
    }

    /// Consume and discard a comment. The leading `/` has been peeked
    /// but not consumed.
    fn skip_comment(&mut self) -> Result<()> {
        self.reader.read()?;
        match self.reader.read()? {
            // Line comment: runs to the next newline, which is left for
            // the whitespace rules. End of input also terminates it.
            '/' => match self.reader.read_until(&['\n', '\r']) {
                Ok(_) | Err(JsonError::EndOfInput) => Ok(()),
                Err(other) => Err(other),
            },
            // Block comment: runs to the first `*/`, inclusive.
            '*' => loop {
                self.reader.read_until(&['*'])?;
                self.reader.read()?;
                if self.reader.peek()? == '/' {
                    self.reader.read()?;
                    return Ok(());
                }
            },
            _ => {
                let (line, column) = self.reader.position();
                Err(JsonError::UnknownCommentMarker { line, column })
            }
        }
    }

    /// String literal. A backslash keeps the following character
    /// verbatim — standard JSON escape sequences are not interpreted,
    /// only the backslash itself is stripped.
    fn string_token(&mut self) -> Result<Token> {
        self.reader.read()?;
        let mut value = String::new();
        loop {
            match self.reader.read()? {
                '\\' => value.push(self.reader.read()?),
                '"' => return Ok(Token::String(value)),
                c => value.push(c),
            }
        }
    }

    fn keyword_token(&mut self, keyword: &str, token: Token) -> Result<Token> {
        if self.reader.read_n(keyword.len())? == keyword {
            Ok(token)
        } else {
            Err(self.unexpected_character())
        }
    }

    /// Greedily consume a maximal run of number-ish characters, rewind,
    /// and convert the whole run at once.
    fn number_token(&mut self) -> Result<Token> {
        let mut len = 0;
        while let Ok(c) = self.reader.peek() {
            match c {
                '+' | '-' | '.' | 'e' | 'E' | 'x' | '0'..='9' => {
                    self.reader.read()?;
                    len += 1;
                }
                _ => break,
            }
        }
        self.reader.backtrack(len);
        let run = self.reader.read_n(len)?;
        match run.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Token::Number(v)),
            _ => {
                let (line, column) = self.reader.position();
                Err(JsonError::InvalidNumericLiteral {
                    literal: run.to_string(),
                    line,
                    column,
                })
            }
        }
    }

    fn unexpected_character(&self) -> JsonError {
        let (line, column) = self.reader.position();
        JsonError::UnexpectedCharacter { line, column }
    }
}
