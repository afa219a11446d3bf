//! Borrowed escape-word slices.

use std::fmt;

use crate::token::{keyword_from_word, Token};

/// The letters following a `\`, borrowed from the input buffer.
///
/// A `Word` never owns or copies text; `text` points into the source the
/// lexer was built on.
///
/// # Example
///
/// ```
/// use mat_lex::Word;
///
/// let source = r"\cos x";
/// let word = Word::new(&source[1..4], 1);
/// assert_eq!(word.as_str(), "cos");
/// assert_eq!(word.end(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Word<'a> {
    text: &'a str,
    start: usize,
}

impl<'a> Word<'a> {
    /// Creates a word covering `text`, which begins at byte `start` of the
    /// source.
    pub const fn new(text: &'a str, start: usize) -> Self {
        Self { text, start }
    }

    /// The borrowed text of the word.
    pub const fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first letter.
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last letter.
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Length in bytes.
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true for the word of a bare `\`.
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Maps the word through the escape keyword table.
    pub fn keyword(&self) -> Option<Token> {
        keyword_from_word(self.text)
    }
}

impl fmt::Display for Word<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}", self.text)
    }
}
