//! Property-based round-trip tests.
//!
//! Generates random value trees and checks that `parse(deparse(tree))`
//! reproduces the tree, that deparsing is a fixed point, and that
//! inserting whitespace or comments between any two tokens of a valid
//! document leaves the parsed tree unchanged.
//!
//! Generated objects use unique keys: structural equality matches
//! entries by first occurrence of a key, so duplicate generated keys
//! would compare a tree against itself unequal by design.

use jsonc_core::{deparse, parse, parse_tokens, tokenize, Object, ParseOptions, Token, Value};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z_][a-zA-Z0-9_]{0,8}").unwrap()
}

/// Printable strings, including quotes and backslashes that force the
/// deparser's escaping path.
fn arb_string() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[ -~]{0,20}").unwrap(),
        Just(String::new()),
        Just(r#"say "hi""#.to_string()),
        Just(r"back\slash".to_string()),
        Just("caf\u{00e9} \u{4f60}\u{597d}".to_string()),
        Just("true".to_string()),
        Just("// not a comment".to_string()),
    ]
}

fn arb_number() -> impl Strategy<Value = f64> {
    prop_oneof![
        (-1_000_000i64..1_000_000i64).prop_map(|n| n as f64),
        -1.0e6..1.0e6,
        any::<f64>().prop_filter("finite", |f| f.is_finite()),
    ]
}

fn arb_primitive() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_number().prop_map(Value::Number),
        arb_string().prop_map(Value::String),
        any::<bool>().prop_map(Value::Boolean),
        Just(Value::Null),
    ]
}

fn arb_value(depth: u32) -> BoxedStrategy<Value> {
    if depth == 0 {
        arb_primitive().boxed()
    } else {
        prop_oneof![
            4 => arb_primitive(),
            1 => prop::collection::vec(arb_value(depth - 1), 0..5).prop_map(Value::Array),
            1 => arb_object_inner(depth - 1).prop_map(Value::Object),
        ]
        .boxed()
    }
}

/// Objects with unique keys (see the module note on equality).
fn arb_object_inner(depth: u32) -> BoxedStrategy<Object> {
    prop::collection::hash_map(arb_key(), arb_value(depth), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
        .boxed()
}

fn arb_object() -> BoxedStrategy<Object> {
    arb_object_inner(3)
}

/// Token separators that must never change the parse: whitespace forms
/// and, in permissive mode, comments.
fn arb_separator() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("\t".to_string()),
        Just("\n".to_string()),
        Just("\r\n".to_string()),
        Just("  \n\t".to_string()),
        Just(" // note\n".to_string()),
        Just("/* note */".to_string()),
        Just("/* multi\nline */".to_string()),
    ]
}

/// Render a single token back to source text, escaping strings the same
/// way the deparser does.
fn render_token(token: &Token) -> String {
    match token {
        Token::String(s) => {
            let mut out = String::from('"');
            for c in s.chars() {
                if c == '"' || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push('"');
            out
        }
        Token::Number(n) => n.to_string(),
        Token::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
        Token::Null => "null".to_string(),
        Token::WhiteSpace => " ".to_string(),
        Token::LeftBrace => "{".to_string(),
        Token::RightBrace => "}".to_string(),
        Token::LeftBracket => "[".to_string(),
        Token::RightBracket => "]".to_string(),
        Token::Comma => ",".to_string(),
        Token::Colon => ":".to_string(),
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Core property: deparse then strict parse reproduces the tree.
    #[test]
    fn roundtrip_preserves_tree(object in arb_object()) {
        let text = deparse(&object);
        let reparsed = parse(&text, ParseOptions::strict()).unwrap();
        prop_assert_eq!(&object, &reparsed, "round trip changed tree, text: {}", text);
    }

    /// Deparsing is a fixed point: a second round trip yields byte-equal text.
    #[test]
    fn deparse_is_fixed_point(object in arb_object()) {
        let text = deparse(&object);
        let reparsed = parse(&text, ParseOptions::strict()).unwrap();
        prop_assert_eq!(text, deparse(&reparsed));
    }

    /// Inserting whitespace or comments between any two tokens of a
    /// valid document does not change the parsed tree.
    #[test]
    fn separator_insertion_is_invisible(
        object in arb_object(),
        separators in prop::collection::vec(arb_separator(), 64),
    ) {
        let text = deparse(&object);
        let tokens = tokenize(&text, false).unwrap();

        let mut spaced = String::new();
        for (i, token) in tokens.iter().enumerate() {
            spaced.push_str(&separators[i % separators.len()]);
            spaced.push_str(&render_token(token));
        }
        spaced.push_str(&separators[tokens.len() % separators.len()]);

        let reparsed = parse(&spaced, ParseOptions::default()).unwrap();
        prop_assert_eq!(&object, &reparsed, "separators changed tree, text: {}", spaced);
    }

    /// The token stream alone is enough: parse and parse_tokens agree.
    #[test]
    fn parse_and_parse_tokens_agree(object in arb_object()) {
        let text = deparse(&object);
        let tokens = tokenize(&text, false).unwrap();
        let from_text = parse(&text, ParseOptions::strict()).unwrap();
        let from_tokens = parse_tokens(&tokens, false).unwrap();
        prop_assert_eq!(from_text, from_tokens);
    }

    /// Lexing never panics on arbitrary input, and any error it reports
    /// is positioned within the input.
    #[test]
    fn tokenize_never_panics(input in "\\PC{0,64}") {
        let _ = tokenize(&input, true);
        let _ = tokenize(&input, false);
    }
}
