//! Lexer module.
//!
//! The lexer implementation is split by the character class it handles:
//! - `core` - Lexer state, the dispatch in `advance`, failure handling
//! - `number` - Decimal literals
//! - `identifier` - Single-letter variables and function names
//! - `escape` - `\word` keywords
//! - `operator` - Operators and delimiters

mod core;
mod escape;
mod identifier;
mod number;
mod operator;

pub use core::{Failure, Lexer};
