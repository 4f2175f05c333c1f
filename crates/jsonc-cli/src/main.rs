//! `jsonc` CLI — check, minify, and format permissive JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Validate a document (comments and trailing commas accepted)
//! jsonc check -i config.jsonc
//!
//! # Strip comments/trailing commas down to compact strict JSON
//! jsonc minify -i config.jsonc -o config.json
//!
//! # Pretty-print a document (stdin → stdout)
//! cat config.jsonc | jsonc format
//!
//! # Enforce strict JSON (no comments, no trailing commas)
//! jsonc check --strict -i data.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jsonc_core::ParseOptions;
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "jsonc", version, about = "Permissive JSON checker and formatter")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a document and report whether it is valid
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Reject comments and trailing commas
        #[arg(long)]
        strict: bool,
    },
    /// Rewrite a document as compact strict JSON
    Minify {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Reject comments and trailing commas in the input
        #[arg(long)]
        strict: bool,
    },
    /// Pretty-print a document for reading
    Format {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Reject comments and trailing commas in the input
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { input, strict } => {
            let text = read_input(input.as_deref())?;
            jsonc_core::parse(&text, options(strict)).context("Invalid document")?;
            println!("ok");
        }
        Commands::Minify {
            input,
            output,
            strict,
        } => {
            let text = read_input(input.as_deref())?;
            let object =
                jsonc_core::parse(&text, options(strict)).context("Failed to parse document")?;
            write_output(output.as_deref(), &jsonc_core::deparse(&object))?;
        }
        Commands::Format {
            input,
            output,
            strict,
        } => {
            let text = read_input(input.as_deref())?;
            let object =
                jsonc_core::parse(&text, options(strict)).context("Failed to parse document")?;
            write_output(output.as_deref(), &jsonc_core::pretty(&object))?;
        }
    }

    Ok(())
}

fn options(strict: bool) -> ParseOptions {
    if strict {
        ParseOptions::strict()
    } else {
        ParseOptions::default()
    }
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
