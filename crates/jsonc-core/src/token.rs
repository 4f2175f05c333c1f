//! Lexical tokens produced by [`tokenize`](crate::tokenize).

/// Smallest lexical unit of a document: punctuation or a literal.
///
/// `WhiteSpace` is transient — the lexer emits it internally for each
/// skipped whitespace run and filters it out before the token sequence
/// reaches the parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    WhiteSpace,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Comma,
    Colon,
}
