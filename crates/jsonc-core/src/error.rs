//! Error types for lexing and parsing.

use thiserror::Error;

/// Errors that can occur while tokenizing or parsing a document.
///
/// Every failure is fail-fast: the first error aborts the whole call and
/// no partial tree is produced. `deparse` and `pretty` cannot fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// The input ended before a required read completed (e.g. an
    /// unterminated string or block comment).
    #[error("unexpected end of input")]
    EndOfInput,

    /// A character no token can start with, or a malformed literal.
    /// Positions are 1-indexed.
    #[error("unexpected character at line {line}, column {column}")]
    UnexpectedCharacter { line: usize, column: usize },

    /// `/` followed by something other than `/` or `*` while comments
    /// are enabled.
    #[error("unknown comment marker at line {line}, column {column}")]
    UnknownCommentMarker { line: usize, column: usize },

    /// A scanned number run that failed conversion to a finite double.
    #[error("invalid numeric literal {literal:?} at line {line}, column {column}")]
    InvalidNumericLiteral {
        literal: String,
        line: usize,
        column: usize,
    },

    /// A token of the wrong kind at some grammar position, or the token
    /// stream ran out. `index` is the offending token's position within
    /// the `total` tokens of the document.
    #[error("unexpected token {index} of {total}")]
    UnexpectedToken { index: usize, total: usize },
}

/// Convenience alias used throughout jsonc-core.
pub type Result<T> = std::result::Result<T, JsonError>;
