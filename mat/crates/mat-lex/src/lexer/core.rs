//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the per-call dispatch and the
//! failure latch.

use mat_util::{DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet, Span};
use tracing::{debug, trace};

use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::LexResult;
use crate::options::LexOptions;
use crate::token::{Payload, Token, TokenKind};

/// The unexpected character that stopped (or would stop) lexing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure {
    /// Human-readable description of the failure
    pub message: String,
    /// Byte offset of the offending character
    pub offset: usize,
    /// Span of the offending character
    pub span: Span,
}

/// Lexer for Mat and LaTeX-like math expressions.
///
/// The lexer borrows the buffer and the diagnostic handler; it produces
/// one token per call to [`advance`](Lexer::advance) and keeps no token
/// history of its own.
///
/// # Example
///
/// ```
/// use mat_lex::{LexOptions, Lexer, Token};
/// use mat_util::Handler;
///
/// let handler = Handler::new();
/// let mut lexer = Lexer::new("x+2", &handler, LexOptions::default());
///
/// assert!(lexer.advance());
/// assert_eq!(lexer.token(), Token::Variable('x'));
/// assert_eq!(lexer.position(), 1);
/// ```
pub struct Lexer<'a> {
    /// Byte cursor over the buffer.
    pub(super) cursor: Cursor<'a>,

    /// Diagnostic sink.
    pub(super) handler: &'a Handler,

    /// Options fixed at construction.
    pub(super) options: LexOptions,

    /// Most recently produced token.
    token: Token,

    /// Where the most recent token started and ended.
    token_span: Span,

    /// Payload of the last value-carrying token.
    last_payload: Payload,

    /// Latched unexpected-character failure.
    failure: Option<Failure>,

    /// Whether the halt error has been emitted.
    halt_reported: bool,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer at the start of `source`.
    ///
    /// The current token of a fresh lexer is [`Token::Done`].
    pub fn new(source: &'a str, handler: &'a Handler, options: LexOptions) -> Self {
        debug!(len = source.len(), notation = %options.notation, "lexer created");
        Self {
            cursor: Cursor::new(source),
            handler,
            options,
            token: Token::Done,
            token_span: Span::point(0, 1, 1),
            last_payload: Payload::None,
            failure: None,
            halt_reported: false,
        }
    }

    /// Creates a lexer over a raw byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`LexError::InvalidUtf8`](crate::LexError::InvalidUtf8) if
    /// the buffer is not UTF-8.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::{LexOptions, Lexer};
    /// use mat_util::Handler;
    ///
    /// let handler = Handler::new();
    /// assert!(Lexer::from_bytes(b"\\pi r^2", &handler, LexOptions::default()).is_ok());
    /// assert!(Lexer::from_bytes(&[b'x', 0xff], &handler, LexOptions::default()).is_err());
    /// ```
    pub fn from_bytes(
        bytes: &'a [u8],
        handler: &'a Handler,
        options: LexOptions,
    ) -> LexResult<Self> {
        let source = std::str::from_utf8(bytes)?;
        Ok(Self::new(source, handler, options))
    }

    /// Scans the next token.
    ///
    /// Returns `true` when a token was produced (including [`Token::Fail`])
    /// and `false` when there is nothing more to produce: at the end of
    /// input, after an unknown escape word, or once a `Fail` has halted a
    /// strict lexer. A `false` return never moves the cursor past input
    /// that was not turned into a token.
    pub fn advance(&mut self) -> bool {
        let halted = self.options.strict_reporting && self.token.is_fail();

        if self.options.skip_whitespace && !halted {
            self.cursor.skip_whitespace();
        }

        if self.cursor.is_at_end() {
            self.token = Token::Done;
            return false;
        }

        if halted {
            self.report_halt();
            return false;
        }

        let start = self.cursor.snapshot();
        let token = match self.cursor.current_byte() {
            Some(b'0'..=b'9') => self.lex_number(),
            Some(b'.') if self.starts_number() => self.lex_number(),
            Some(b'a'..=b'd' | b'f'..=b'h' | b'j'..=b'z' | b'A'..=b'Z') => self.lex_letter(),
            Some(b'\\') => match self.lex_escape() {
                Some(token) => token,
                None => return false,
            },
            _ => match self.lex_operator() {
                Some(token) => token,
                None => self.lex_unexpected(start),
            },
        };

        self.commit(token, start);
        true
    }

    fn commit(&mut self, token: Token, start: CursorSnapshot) {
        self.token = token;
        self.token_span = self.cursor.span_from(start);
        if token.payload() != Payload::None {
            self.last_payload = token.payload();
        }
    }

    /// Reports an unexpected character, latches the failure and steps over
    /// the character.
    pub(super) fn lex_unexpected(&mut self, start: CursorSnapshot) -> Token {
        let c = self.cursor.current_char();
        let message = format!("unexpected character '{}'", c.escape_debug());

        let span = Span::new(
            start.position,
            start.position + c.len_utf8(),
            start.line,
            start.column,
        );
        self.warn(
            DiagnosticCode::W_LEX_UNEXPECTED_CHAR,
            message.clone(),
            span,
            "not part of any token",
        );

        if self.failure.is_none() {
            debug!(offset = start.position, %message, "failure latched");
        }
        self.failure = Some(Failure {
            message,
            offset: start.position,
            span,
        });

        self.cursor.advance();
        Token::Fail
    }

    /// Emits the halt error once per lexer.
    fn report_halt(&mut self) {
        if self.halt_reported {
            return;
        }
        self.halt_reported = true;

        let offset = self.cursor.position();
        debug!(offset, "lexing halted");

        // Covers the failing character through the stop position.
        let here = Span::point(offset, self.cursor.line(), self.cursor.column());
        let span = self.failure.as_ref().map_or(here, |f| f.span.merge(here));

        let mut builder = DiagnosticBuilder::error("lexing halted")
            .code(DiagnosticCode::E_LEX_HALTED)
            .span(span)
            .note(format!("last payload: {}", self.last_payload));
        if let Some(failure) = &self.failure {
            builder = builder.note(format!("{} at offset {}", failure.message, failure.offset));
        }
        builder.emit(self.handler);
    }

    /// Emits a warning if warnings are enabled.
    pub(super) fn warn(
        &self,
        code: DiagnosticCode,
        message: String,
        span: Span,
        label: &str,
    ) {
        if !self.options.show_warnings {
            return;
        }
        DiagnosticBuilder::warning(message)
            .code(code)
            .span(span)
            .snippet(self.snippet(span, label))
            .emit(self.handler);
    }

    fn snippet(&self, span: Span, label: &str) -> SourceSnippet {
        let width = span.slice(self.cursor.source()).map_or(1, |s| s.chars().count());
        let column = span.column as usize;
        SourceSnippet::new(
            self.cursor.line_text(span.start),
            span.line as usize,
            column,
            column + width,
            Some(label),
        )
    }

    /// Returns the most recently produced token.
    pub fn token(&self) -> Token {
        self.token
    }

    /// Returns the category of the current token.
    pub fn kind(&self) -> TokenKind {
        self.token.kind()
    }

    /// Returns the payload of the current token.
    pub fn payload(&self) -> Payload {
        self.token.payload()
    }

    /// Returns the span of the current token.
    pub fn span(&self) -> Span {
        self.token_span
    }

    /// Returns the current byte offset into the buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns true once an unexpected character has been seen.
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }

    /// Returns the latched failure, if any.
    ///
    /// With strict reporting off the most recent failure is kept.
    pub fn failure(&self) -> Option<&Failure> {
        self.failure.as_ref()
    }

    /// Returns the options this lexer was built with.
    pub fn options(&self) -> &LexOptions {
        &self.options
    }

    /// Advances until the lexer stops, collecting every produced token.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::{LexOptions, Lexer, Token};
    /// use mat_util::Handler;
    ///
    /// let handler = Handler::new();
    /// let mut lexer = Lexer::new(r"\cos(x)", &handler, LexOptions::default());
    /// assert_eq!(
    ///     lexer.collect_tokens(),
    ///     vec![Token::Cos, Token::OParen, Token::Variable('x'), Token::CParen]
    /// );
    /// ```
    pub fn collect_tokens(&mut self) -> Vec<Token> {
        self.collect_tokens_with(|_, _| {})
    }

    /// Like [`collect_tokens`](Lexer::collect_tokens), also handing each
    /// token and its span to `on_token` as it is produced.
    pub fn collect_tokens_with(&mut self, mut on_token: impl FnMut(Token, Span)) -> Vec<Token> {
        let mut tokens = Vec::new();
        while self.advance() {
            trace!(token = %self.token, offset = self.token_span.start, "token");
            on_token(self.token, self.token_span);
            tokens.push(self.token);
        }
        debug!(count = tokens.len(), failed = self.is_failed(), "token stream collected");
        tokens
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            Some(self.token)
        } else {
            None
        }
    }
}
