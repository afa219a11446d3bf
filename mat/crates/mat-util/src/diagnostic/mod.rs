//! Diagnostic module - Warning and error reporting infrastructure.
//!
//! The lexer never panics or returns errors for malformed input. Instead it
//! reports through a [`Handler`], which collects every [`Diagnostic`] and,
//! when created with [`Handler::new_echoing`], also writes each one to
//! standard error as it arrives.
//!
//! # Examples
//!
//! ```
//! use mat_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use mat_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unexpected character '$'")
//!     .code(DiagnosticCode::W_LEX_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! let diags = handler.diagnostics();
//! assert_eq!(
//!     diags[0].to_string(),
//!     "warning[W1002]: unexpected character '$' at offset 4"
//! );
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use crate::Span;
use serde::Serialize;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use mat_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Lexing cannot continue on this input
    Error,
    /// Something was skipped or rejected; output may be incomplete
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Source code snippets for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Render the diagnostic with its notes and snippets, one per line.
    ///
    /// The first line is the [`Display`](fmt::Display) form.
    pub fn render(&self) -> String {
        let mut out = self.to_string();
        for snippet in &self.snippets {
            out.push('\n');
            out.push_str(&snippet.format());
        }
        for note in &self.notes {
            out.push_str("\n  = note: ");
            out.push_str(note);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        if self.span != Span::DUMMY {
            write!(f, " at offset {}", self.span.start)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// The handler uses interior mutability so that a lexer can hold a shared
/// reference to it while the caller inspects it between steps. It is not
/// `Sync`; one handler serves one thread.
///
/// # Examples
///
/// ```
/// use mat_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("lexing halted").emit(&handler);
///
/// if handler.has_errors() {
///     eprintln!("tokenizing failed with {} errors", handler.error_count());
/// }
/// ```
pub struct Handler {
    /// Collected diagnostics
    diagnostics: RefCell<Vec<Diagnostic>>,
    /// Whether to write each diagnostic to stderr when emitted
    echo: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
            echo: false,
        }
    }

    /// Create a handler that also writes every diagnostic to stderr
    pub fn new_echoing() -> Self {
        Self {
            echo: true,
            ..Self::new()
        }
    }

    /// Emit a diagnostic
    fn emit(&self, diagnostic: Diagnostic) {
        if self.echo {
            eprintln!("{}", diagnostic.render());
        }
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.emit(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Returns true if a diagnostic with `code` has been reported
    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.code == Some(code))
    }

    /// Get all diagnostics
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
    }

    #[test]
    fn test_diagnostic_display_without_code_or_span() {
        let diag = DiagnosticBuilder::warning("something odd").build();
        assert_eq!(diag.to_string(), "warning: something odd");
    }

    #[test]
    fn test_diagnostic_display_with_code_and_span() {
        let diag = DiagnosticBuilder::error("lexing halted")
            .code(DiagnosticCode::E_LEX_HALTED)
            .span(Span::point(6, 1, 7))
            .build();
        assert_eq!(diag.to_string(), "error[E1001]: lexing halted at offset 6");
    }

    #[test]
    fn test_diagnostic_render_includes_notes_and_snippets() {
        let diag = DiagnosticBuilder::warning("unexpected character '$'")
            .span(Span::new(2, 3, 1, 3))
            .snippet(SourceSnippet::new("x $", 1, 3, 4, None::<String>))
            .note("the character was skipped")
            .build();
        let rendered = diag.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "warning: unexpected character '$' at offset 2");
        assert_eq!(lines[1], "  1 | x $");
        assert_eq!(lines[3], "  = note: the character was skipped");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert_eq!(handler.warning_count(), 0);
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        DiagnosticBuilder::error("e").emit(&handler);
        DiagnosticBuilder::warning("w1").emit(&handler);
        handler.emit_diagnostic(DiagnosticBuilder::warning("w2").build());

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.warning_count(), 2);
        assert_eq!(handler.diagnostics().len(), 3);
    }

    #[test]
    fn test_handler_has_code() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("w")
            .code(DiagnosticCode::W_LEX_UNKNOWN_ESCAPE)
            .emit(&handler);
        assert!(handler.has_code(DiagnosticCode::W_LEX_UNKNOWN_ESCAPE));
        assert!(!handler.has_code(DiagnosticCode::W_LEX_UNEXPECTED_CHAR));
    }

    #[test]
    fn test_handler_echoing_still_collects() {
        let handler = Handler::new_echoing();
        DiagnosticBuilder::warning("echoed").emit(&handler);
        assert_eq!(handler.warning_count(), 1);
    }

    #[test]
    fn test_diagnostic_serializes() {
        let diag = DiagnosticBuilder::warning("w")
            .code(DiagnosticCode::W_LEX_UNEXPECTED_CHAR)
            .span(Span::new(1, 2, 1, 2))
            .build();
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["level"], "warning");
        assert_eq!(json["code"], "W1002");
        assert_eq!(json["span"]["start"], 1);
    }
}
