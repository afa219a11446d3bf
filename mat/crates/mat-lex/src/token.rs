//! Token definitions for the Mat tokenizer.
//!
//! A [`Token`] is one lexical unit of a math expression. Tokens that carry a
//! value hold it inside the variant, so reading the wrong payload is not
//! expressible. [`TokenKind`] is the payload-free mirror used wherever only
//! the category matters, and [`Payload`] is the uniform view of the value.
//!
//! # Example
//!
//! ```
//! use mat_lex::{Payload, Token, TokenKind};
//!
//! let token = Token::Number(3.14);
//! assert_eq!(token.kind(), TokenKind::Number);
//! assert_eq!(token.payload(), Payload::Number(3.14));
//! assert_eq!(token.to_string(), "Number(3.140000)");
//! ```

use serde::Serialize;
use std::fmt;

/// A lexical token produced by the [`Lexer`](crate::Lexer).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value")]
pub enum Token {
    /// An unexpected character was scanned
    Fail,
    /// End of input, also the state of a fresh lexer
    Done,

    // ===== Values =====
    /// Single-letter variable, `x`
    Variable(char),
    /// Decimal literal, `3.14`
    Number(f64),
    /// Single-letter function name directly followed by `(`, `f(`
    Function(char),

    // ===== Constants =====
    /// Euler's number, `e`
    E,
    /// Imaginary unit, `i`
    Imaginary,
    /// `\pi`
    Pi,
    /// `\infty`
    Inf,

    // ===== Named functions =====
    /// `\cos`
    Cos,
    /// `\sin`
    Sin,
    /// `\log`
    Log,
    /// `\ln`
    Ln,
    /// `\sqrt`
    Sqrt,
    /// `\lim_`
    Lim,

    // ===== Operators =====
    /// `!`
    Factorial,
    /// `=`
    Equal,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `^`
    Exponent,
    /// `\frac` or `/`
    Fraction,
    /// `_`
    SubScript,
    /// `\lt` or `<`
    Less,
    /// `\gt` or `>`
    Greater,
    /// `\le` or `<=`
    LessEqual,
    /// `\ge` or `>=`
    GreaterEqual,
    /// `\neq` or `!=`
    NotEqual,
    /// `\prime`
    Prime,
    /// `\to`
    To,

    // ===== Delimiters =====
    /// `(`
    OParen,
    /// `)`
    CParen,
    /// `{`
    OCurly,
    /// `}`
    CCurly,
    /// `[`
    OBracket,
    /// `]`
    CBracket,
}

/// The category of a [`Token`], without its payload.
///
/// Variants mirror [`Token`] one to one.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    Fail,
    Done,
    Variable,
    Number,
    Function,
    E,
    Imaginary,
    Pi,
    Inf,
    Cos,
    Sin,
    Log,
    Ln,
    Sqrt,
    Lim,
    Factorial,
    Equal,
    Add,
    Subtract,
    Multiply,
    Exponent,
    Fraction,
    SubScript,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    NotEqual,
    Prime,
    To,
    OParen,
    CParen,
    OCurly,
    CCurly,
    OBracket,
    CBracket,
}

impl TokenKind {
    /// Display string for this kind.
    ///
    /// Payload-carrying kinds render their bare name; see the
    /// [`Display`](fmt::Display) impl of [`Token`] for the payload form.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Fail => "Fail",
            TokenKind::Done => "Done",
            TokenKind::Variable => "Variable",
            TokenKind::Number => "Number",
            TokenKind::Function => "Function",
            TokenKind::E => "e",
            TokenKind::Imaginary => "i",
            TokenKind::Pi => "π (pi)",
            TokenKind::Inf => "∞ (infty)",
            TokenKind::Cos => "cos",
            TokenKind::Sin => "sin",
            TokenKind::Log => "log",
            TokenKind::Ln => "ln",
            TokenKind::Sqrt => "sqrt",
            TokenKind::Lim => "Lim",
            TokenKind::Factorial => "!",
            TokenKind::Equal => "=",
            TokenKind::Add => "+",
            TokenKind::Subtract => "-",
            TokenKind::Multiply => "*",
            TokenKind::Exponent => "Exponent",
            TokenKind::Fraction => "Fraction",
            TokenKind::SubScript => "SubScript",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEqual => "<=",
            TokenKind::GreaterEqual => ">=",
            TokenKind::NotEqual => "!=",
            TokenKind::Prime => "Prime (`)",
            TokenKind::To => "To (->)",
            TokenKind::OParen => "(",
            TokenKind::CParen => ")",
            TokenKind::OCurly => "{",
            TokenKind::CCurly => "}",
            TokenKind::OBracket => "[",
            TokenKind::CBracket => "]",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The value carried by a token, if any.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// The token carries no value
    None,
    /// Letter of a variable or function
    Char(char),
    /// Value of a number literal
    Number(f64),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::None => f.write_str("none"),
            Payload::Char(c) => write!(f, "{}", c),
            Payload::Number(n) => write!(f, "{:.6}", n),
        }
    }
}

impl Token {
    /// Returns the payload-free category of this token.
    pub const fn kind(&self) -> TokenKind {
        match self {
            Token::Fail => TokenKind::Fail,
            Token::Done => TokenKind::Done,
            Token::Variable(_) => TokenKind::Variable,
            Token::Number(_) => TokenKind::Number,
            Token::Function(_) => TokenKind::Function,
            Token::E => TokenKind::E,
            Token::Imaginary => TokenKind::Imaginary,
            Token::Pi => TokenKind::Pi,
            Token::Inf => TokenKind::Inf,
            Token::Cos => TokenKind::Cos,
            Token::Sin => TokenKind::Sin,
            Token::Log => TokenKind::Log,
            Token::Ln => TokenKind::Ln,
            Token::Sqrt => TokenKind::Sqrt,
            Token::Lim => TokenKind::Lim,
            Token::Factorial => TokenKind::Factorial,
            Token::Equal => TokenKind::Equal,
            Token::Add => TokenKind::Add,
            Token::Subtract => TokenKind::Subtract,
            Token::Multiply => TokenKind::Multiply,
            Token::Exponent => TokenKind::Exponent,
            Token::Fraction => TokenKind::Fraction,
            Token::SubScript => TokenKind::SubScript,
            Token::Less => TokenKind::Less,
            Token::Greater => TokenKind::Greater,
            Token::LessEqual => TokenKind::LessEqual,
            Token::GreaterEqual => TokenKind::GreaterEqual,
            Token::NotEqual => TokenKind::NotEqual,
            Token::Prime => TokenKind::Prime,
            Token::To => TokenKind::To,
            Token::OParen => TokenKind::OParen,
            Token::CParen => TokenKind::CParen,
            Token::OCurly => TokenKind::OCurly,
            Token::CCurly => TokenKind::CCurly,
            Token::OBracket => TokenKind::OBracket,
            Token::CBracket => TokenKind::CBracket,
        }
    }

    /// Returns the value carried by this token.
    pub const fn payload(&self) -> Payload {
        match *self {
            Token::Variable(c) | Token::Function(c) => Payload::Char(c),
            Token::Number(n) => Payload::Number(n),
            _ => Payload::None,
        }
    }

    /// Returns true for [`Token::Fail`].
    pub const fn is_fail(&self) -> bool {
        matches!(self, Token::Fail)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = self.kind().as_str();
        match self.payload() {
            Payload::None => f.write_str(kind),
            payload => write!(f, "{}({})", kind, payload),
        }
    }
}

/// Escape words recognized after `\`, in lookup order.
///
/// Matching is exact and case-sensitive. `lim_` keeps its trailing
/// underscore, the subscript that always follows a limit.
pub const KEYWORDS: &[(&str, Token)] = &[
    ("pi", Token::Pi),
    ("infty", Token::Inf),
    ("cos", Token::Cos),
    ("sin", Token::Sin),
    ("log", Token::Log),
    ("ln", Token::Ln),
    ("frac", Token::Fraction),
    ("sqrt", Token::Sqrt),
    ("lt", Token::Less),
    ("gt", Token::Greater),
    ("le", Token::LessEqual),
    ("ge", Token::GreaterEqual),
    ("neq", Token::NotEqual),
    ("prime", Token::Prime),
    ("lim_", Token::Lim),
    ("to", Token::To),
];

/// Looks up an escape word (without the leading `\`).
///
/// # Example
///
/// ```
/// use mat_lex::{keyword_from_word, Token};
///
/// assert_eq!(keyword_from_word("sqrt"), Some(Token::Sqrt));
/// assert_eq!(keyword_from_word("lim"), None);
/// ```
pub fn keyword_from_word(word: &str) -> Option<Token> {
    KEYWORDS
        .iter()
        .find(|(text, _)| *text == word)
        .map(|(_, token)| *token)
}
