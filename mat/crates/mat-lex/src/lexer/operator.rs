//! Operator and delimiter lexing.
//!
//! Handles the single-character operators shared by both notations, the
//! Mat spellings `/ _ < >` and the digraphs `<= >= !=`.

use crate::token::Token;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator or delimiter.
    ///
    /// Returns `None` without consuming anything if the current byte is
    /// not one.
    pub(super) fn lex_operator(&mut self) -> Option<Token> {
        let token = match self.cursor.current_byte()? {
            b'(' => Token::OParen,
            b')' => Token::CParen,
            b'{' => Token::OCurly,
            b'}' => Token::CCurly,
            b'[' => Token::OBracket,
            b']' => Token::CBracket,
            b'=' => Token::Equal,
            b'+' => Token::Add,
            b'-' => Token::Subtract,
            b'*' => Token::Multiply,
            b'^' => Token::Exponent,
            b'/' => Token::Fraction,
            b'_' => Token::SubScript,
            b'e' => Token::E,
            b'i' => Token::Imaginary,
            b'!' => return Some(self.lex_digraph(Token::Factorial, Token::NotEqual)),
            b'<' => return Some(self.lex_digraph(Token::Less, Token::LessEqual)),
            b'>' => return Some(self.lex_digraph(Token::Greater, Token::GreaterEqual)),
            _ => return None,
        };
        self.cursor.advance();
        Some(token)
    }

    /// Lexes `single`, or `with_eq` when the next byte is `=`.
    ///
    /// Handles: `!` `!=`, `<` `<=`, `>` `>=`
    fn lex_digraph(&mut self, single: Token, with_eq: Token) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            with_eq
        } else {
            single
        }
    }
}
