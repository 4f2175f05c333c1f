//! Recursive-descent parser: token sequence → [`Object`] tree.
//!
//! The parser never touches raw text and never backtracks across the
//! token stream; it dispatches on a peeked token and consumes strictly
//! left to right. The document root must be an object — a bare array or
//! scalar at the top level is rejected, as is anything left over after
//! the root object closes.

use crate::error::{JsonError, Result};
use crate::lexer::tokenize;
use crate::token::Token;
use crate::types::{Object, Value};

/// Parsing configuration. The default is the permissive mode: comments
/// and trailing commas both accepted.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    pub allow_comments: bool,
    pub allow_trailing_commas: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            allow_comments: true,
            allow_trailing_commas: true,
        }
    }
}

impl ParseOptions {
    /// Strict JSON: no comments, no trailing commas.
    pub fn strict() -> Self {
        ParseOptions {
            allow_comments: false,
            allow_trailing_commas: false,
        }
    }
}

/// Parse a document: tokenize then build the value tree.
pub fn parse(text: &str, options: ParseOptions) -> Result<Object> {
    let tokens = tokenize(text, options.allow_comments)?;
    parse_tokens(&tokens, options.allow_trailing_commas)
}

/// Parse an already-tokenized document.
pub fn parse_tokens(tokens: &[Token], allow_trailing_commas: bool) -> Result<Object> {
    let mut parser = Parser {
        tokens,
        cursor: 0,
        allow_trailing_commas,
    };
    let object = parser.parse_object()?;
    if parser.cursor != tokens.len() {
        return Err(parser.unexpected());
    }
    Ok(object)
}

struct Parser<'a> {
    tokens: &'a [Token],
    cursor: usize,
    allow_trailing_commas: bool,
}

impl Parser<'_> {
    /// The error for the token at the cursor: its index and the total
    /// token count. An exhausted stream reports `index == total`.
    fn unexpected(&self) -> JsonError {
        JsonError::UnexpectedToken {
            index: self.cursor,
            total: self.tokens.len(),
        }
    }

    fn peek(&self) -> Result<&Token> {
        self.tokens.get(self.cursor).ok_or_else(|| self.unexpected())
    }

    fn advance(&mut self) {
        self.cursor += 1;
    }

    fn parse_value(&mut self) -> Result<Value> {
        let value = match self.peek()? {
            Token::LeftBrace => return self.parse_object().map(Value::Object),
            Token::LeftBracket => return self.parse_array(),
            Token::String(s) => Value::String(s.clone()),
            Token::Number(n) => Value::Number(*n),
            Token::Boolean(b) => Value::Boolean(*b),
            Token::Null => Value::Null,
            _ => return Err(self.unexpected()),
        };
        self.advance();
        Ok(value)
    }

    fn parse_object(&mut self) -> Result<Object> {
        match self.peek()? {
            Token::LeftBrace => self.advance(),
            _ => return Err(self.unexpected()),
        }
        let mut object = Object::new();
        if matches!(self.peek()?, Token::RightBrace) {
            self.advance();
            return Ok(object);
        }
        loop {
            let key = match self.peek()? {
                Token::String(s) => s.clone(),
                _ => return Err(self.unexpected()),
            };
            self.advance();
            match self.peek()? {
                Token::Colon => self.advance(),
                _ => return Err(self.unexpected()),
            }
            let value = self.parse_value()?;
            // raw append: duplicate keys from the source are kept
            object.append(key, value);

            match self.peek()? {
                Token::RightBrace => {
                    self.advance();
                    return Ok(object);
                }
                Token::Comma => {
                    self.advance();
                    if self.allow_trailing_commas && matches!(self.peek()?, Token::RightBrace) {
                        self.advance();
                        return Ok(object);
                    }
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        match self.peek()? {
            Token::LeftBracket => self.advance(),
            _ => return Err(self.unexpected()),
        }
        let mut values = Vec::new();
        if matches!(self.peek()?, Token::RightBracket) {
            self.advance();
            return Ok(Value::Array(values));
        }
        loop {
            values.push(self.parse_value()?);
            match self.peek()? {
                Token::RightBracket => {
                    self.advance();
                    return Ok(Value::Array(values));
                }
                Token::Comma => {
                    self.advance();
                    if self.allow_trailing_commas && matches!(self.peek()?, Token::RightBracket) {
                        self.advance();
                        return Ok(Value::Array(values));
                    }
                }
                _ => return Err(self.unexpected()),
            }
        }
    }
}
