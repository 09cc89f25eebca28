//! Streaming lexer for the Moss scripting language.
//!
//! Converts a stream of Unicode characters into typed, located tokens:
//! identifiers and keywords, integer/float/string literals, operators,
//! and the statement-terminator tokens Moss inserts automatically at
//! line breaks, in the style of Go's semicolon rule. Literal text is
//! passed through verbatim; interpreting it is the parser's job.
//!
//! # Quick start
//!
//! ```
//! use moss_lexer::{Tag, tokenize};
//!
//! let tokens = tokenize("x = 1 + 2\n").unwrap();
//! let tags: Vec<Tag> = tokens.iter().map(|t| t.tag).collect();
//! assert_eq!(
//!     tags,
//!     [
//!         Tag::Identifier,
//!         Tag::Let,
//!         Tag::LiteralInt,
//!         Tag::Add,
//!         Tag::LiteralInt,
//!         Tag::Newline,
//!     ],
//! );
//! ```
//!
//! # Streaming from a reader
//!
//! ```
//! use std::io::Cursor;
//!
//! use moss_lexer::{Lexer, Tag};
//!
//! let mut lexer = Lexer::new(Cursor::new("def greet() {\n}\n"));
//! let first = lexer.next_token().unwrap();
//! assert_eq!(first.tag, Tag::KwDef);
//! assert_eq!(first.text, "def");
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod lexer;
mod position;
mod source;
pub mod token;

pub use lexer::{LexError, LexErrorKind, Lexer, tokenize};
pub use token::{Location, Tag, Token};

/// Unified error type covering lexical errors and stream failures.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failure of the underlying character stream, propagated
    /// unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// A lexical error with its source location.
    #[error("{0}")]
    Lex(#[from] LexError),
}
