//! mat-lex - Lexical analyzer for math expressions
//!
//! This crate turns a math expression, written either in a LaTeX-like
//! notation (`\frac{1}{2}`, `\sqrt{x}`) or in the plain ASCII Mat notation
//! (`1/2`, `x^2`), into a stream of typed tokens. It does not parse,
//! validate or evaluate the stream.
//!
//! # Example Usage
//!
//! ```
//! use mat_lex::{tokenize, LexOptions, Token};
//! use mat_util::Handler;
//!
//! let handler = Handler::new();
//! let tokens = tokenize("x+2", &handler, LexOptions::default());
//! assert_eq!(tokens, vec![Token::Variable('x'), Token::Add, Token::Number(2.0)]);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, TokenKind, Payload and the escape keyword table
//! - [`lexer`] - The Lexer and its scanning rules
//! - [`cursor`] - Byte cursor over the buffer
//! - [`word`] - Borrowed escape-word slices
//! - [`options`] - Lexer options
//! - [`error`] - Construction errors
//!
//! # Token Categories
//!
//! ## Values
//!
//! - **Number**: `42`, `3.14`, `.5`, `6.02e23`
//! - **Variable**: any single letter except `e` and `i`
//! - **Function**: a variable letter directly followed by `(`
//!
//! ## Constants
//!
//! `e`, `i`, `\pi`, `\infty`
//!
//! ## Escape words
//!
//! `\cos \sin \log \ln \sqrt \frac \lim_ \to \prime \lt \gt \le \ge \neq`
//!
//! ## Operators
//!
//! `= + - * ^ / _ ! < > <= >= !=`
//!
//! ## Delimiters
//!
//! `( ) { } [ ]`
//!
//! # Failures
//!
//! Whitespace is an unexpected character unless
//! [`LexOptions::skip_whitespace`] is set.
//!
//! Nothing in this crate panics on bad input. An unknown escape word is
//! reported as a warning and stops the stream. An unexpected character
//! produces a [`Token::Fail`]; with strict reporting on, lexing halts
//! there.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod options;
pub mod token;
pub mod word;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::{Failure, Lexer};
pub use options::{LexOptions, Notation};
pub use token::{keyword_from_word, Payload, Token, TokenKind, KEYWORDS};
pub use word::Word;

use mat_util::Handler;

/// Collects every token of `source`.
///
/// Diagnostics go to `handler`. See [`Lexer::collect_tokens`].
pub fn tokenize(source: &str, handler: &Handler, options: LexOptions) -> Vec<Token> {
    Lexer::new(source, handler, options).collect_tokens()
}
