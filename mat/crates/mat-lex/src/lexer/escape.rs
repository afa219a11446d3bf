//! Escape-word lexing.
//!
//! A `\` introduces a keyword such as `\frac` or `\infty`. The word is the
//! run of lowercase ASCII letters after the backslash, borrowed straight
//! from the buffer.

use mat_util::{DiagnosticCode, Span};

use crate::token::{keyword_from_word, Token};
use crate::word::Word;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Reads the word after the `\` under the cursor without consuming it.
    ///
    /// A trailing `_` belongs to the word when the word with it is a
    /// keyword, which is how `\lim_` is spelled.
    pub(super) fn scan_word(&self) -> Word<'a> {
        let source = self.cursor.source();
        let bytes = source.as_bytes();
        let start = self.cursor.position() + 1;

        let mut end = start;
        while bytes.get(end).is_some_and(|b| b.is_ascii_lowercase()) {
            end += 1;
        }
        if bytes.get(end) == Some(&b'_') && keyword_from_word(&source[start..=end]).is_some() {
            end += 1;
        }

        Word::new(&source[start..end], start)
    }

    /// Lexes `\word`.
    ///
    /// Returns `None` for an unknown or empty word. In that case a warning
    /// is reported and neither the cursor nor the current token changes.
    pub(super) fn lex_escape(&mut self) -> Option<Token> {
        let word = self.scan_word();

        match word.keyword() {
            Some(token) => {
                self.cursor.advance_bytes(1 + word.len());
                Some(token)
            },
            None => {
                let span = Span::new(
                    self.cursor.position(),
                    word.end(),
                    self.cursor.line(),
                    self.cursor.column(),
                );
                let message = if word.is_empty() {
                    "expected a word after '\\'".to_string()
                } else {
                    format!("unknown escape word '{}'", word)
                };
                self.warn(
                    DiagnosticCode::W_LEX_UNKNOWN_ESCAPE,
                    message,
                    span,
                    "not a known keyword",
                );
                None
            },
        }
    }
}
