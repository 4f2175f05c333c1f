//! # jsonc-core
//!
//! A small, self-contained codec for a permissive superset of JSON:
//! strict JSON plus optional `// line` and `/* block */` comments and
//! optional trailing commas. Parsing produces an ordered [`Object`] tree
//! of typed [`Value`]s; deparsing renders a tree back to compact strict
//! JSON. No external JSON library is involved.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonc_core::{deparse, parse, ParseOptions};
//!
//! let text = r#"
//!     // service endpoint
//!     {
//!         "host": "localhost",
//!         "port": 8080,
//!         "tags": ["a", "b",],
//!     }
//! "#;
//! let config = parse(text, ParseOptions::default()).unwrap();
//! assert_eq!(config.find("port").and_then(|v| v.as_number()), Some(8080.0));
//! assert_eq!(
//!     deparse(&config),
//!     r#"{"host":"localhost","port":8080,"tags":["a","b"]}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`lexer`] — text → [`Token`] sequence (comments and whitespace
//!   stripped here)
//! - [`parser`] — tokens → [`Object`] tree, recursive descent
//! - [`deparser`] — tree → compact JSON text
//! - [`pretty`] — indented debug rendering
//! - [`types`] — the [`Value`]/[`Object`] data model
//! - [`error`] — the [`JsonError`] taxonomy
//!
//! The whole crate is single-threaded and synchronous; each call owns
//! its working state, so callers parallelize by running independent
//! `parse` calls on independent inputs.

pub mod deparser;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod pretty;
mod reader;
pub mod token;
pub mod types;

pub use deparser::deparse;
pub use error::{JsonError, Result};
pub use lexer::tokenize;
pub use parser::{parse, parse_tokens, ParseOptions};
pub use pretty::pretty;
pub use token::Token;
pub use types::{Object, Value};
