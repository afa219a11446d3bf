//! Single-letter variable and function lexing.
//!
//! Identifiers are one ASCII letter long. `e` and `i` never reach this
//! module; they are the constants [`Token::E`] and [`Token::Imaginary`].

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a letter as a function name or a variable.
    ///
    /// A letter directly followed by `(` is a function. Only the letter is
    /// consumed; the `(` is produced by the next call.
    pub(super) fn lex_letter(&mut self) -> Token {
        let letter = char::from(self.cursor.current_byte().unwrap_or(b'?'));
        let is_call = self.cursor.peek_byte(1) == Some(b'(');
        self.cursor.advance();

        if is_call {
            Token::Function(letter)
        } else {
            Token::Variable(letter)
        }
    }
}
