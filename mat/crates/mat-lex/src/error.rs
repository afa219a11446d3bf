//! Error types for lexer construction.
//!
//! Malformed expressions never produce an `Err`; they are reported as
//! diagnostics and `Fail` tokens. Only an unusable buffer does.

use thiserror::Error;

/// Error returned when a lexer cannot be built over a buffer.
#[derive(Debug, Error)]
pub enum LexError {
    /// The buffer is not valid UTF-8
    #[error("input is not valid UTF-8 (first bad byte at offset {offset})")]
    InvalidUtf8 {
        /// Offset of the first byte that is not valid UTF-8
        offset: usize,
        /// Underlying decode error
        #[source]
        source: std::str::Utf8Error,
    },
}

/// Result type alias for lexer construction
pub type LexResult<T> = std::result::Result<T, LexError>;

impl From<std::str::Utf8Error> for LexError {
    fn from(source: std::str::Utf8Error) -> Self {
        LexError::InvalidUtf8 {
            offset: source.valid_up_to(),
            source,
        }
    }
}
