//! Number literal lexing.
//!
//! Numbers are plain decimals read the way C's `strtod` reads them:
//! `42`, `3.14`, `.5`, `2.`, `6.02e23`, `1E-3`. Hex floats, `inf` and
//! `nan` are not numbers here; `0x1` is `0`, `x`, `1`.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Returns true if the cursor is on a `.` that starts a number.
    pub(super) fn starts_number(&self) -> bool {
        self.cursor.current_byte() == Some(b'.')
            && self.cursor.peek_byte(1).is_some_and(|b| b.is_ascii_digit())
    }

    /// Lexes a decimal literal.
    ///
    /// The exponent is only consumed when at least one digit follows
    /// `e`/`E` and its optional sign, so `2e` lexes as `2` followed by `e`.
    pub(super) fn lex_number(&mut self) -> Token {
        let start = self.cursor.snapshot();

        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.match_byte(b'.') {
            self.cursor.eat_while(|b| b.is_ascii_digit());
        }

        if matches!(self.cursor.current_byte(), Some(b'e' | b'E')) {
            let before_exponent = self.cursor.snapshot();
            self.cursor.advance();
            if !self.cursor.match_byte(b'+') {
                self.cursor.match_byte(b'-');
            }
            if self.cursor.eat_while(|b| b.is_ascii_digit()) == 0 {
                self.cursor.restore(before_exponent);
            }
        }

        let text = self.cursor.slice_from(start.position);
        match text.parse::<f64>() {
            Ok(value) => Token::Number(value),
            Err(_) => {
                self.cursor.restore(start);
                self.lex_unexpected(start)
            },
        }
    }
}
