//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for showing the
//! offending part of the input under a message.

use serde::Serialize;

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::Span;

/// A source line with a highlighted range, rendered under a diagnostic.
///
/// # Examples
///
/// ```
/// use mat_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x + $", 1, 5, 6, Some("not a token"));
/// assert!(snippet.format().contains("^ not a token"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the highlight starts (1-based)
    pub start_column: usize,
    /// Column where the highlight ends (1-based, exclusive)
    pub end_column: usize,
    /// Optional label displayed after the carets
    pub label: Option<String>,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
            label: label.map(Into::into),
        }
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, followed by a caret
    /// line pointing at the highlighted range.
    pub fn format(&self) -> String {
        let line_num_width = self.line_number.to_string().len().max(3);
        let mut result = format!(
            "{:>width$} | {}\n",
            self.line_number,
            self.line,
            width = line_num_width
        );

        result.push_str(&format!("{:>width$} | ", "", width = line_num_width));

        let underline_start = self.start_column.saturating_sub(1);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);

        result.push_str(&" ".repeat(underline_start));
        result.push_str(&"^".repeat(underline_len));

        if let Some(ref label) = self.label {
            result.push(' ');
            result.push_str(label);
        }

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use mat_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use mat_util::Span;
///
/// let diag = DiagnosticBuilder::new(Level::Warning, "unhandled escape word `\\foo`")
///     .code(DiagnosticCode::W_LEX_UNKNOWN_ESCAPE)
///     .span(Span::new(0, 4, 1, 1))
///     .build();
/// assert_eq!(diag.level, Level::Warning);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Create a warning builder
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    ///
    /// Notes provide additional context about the diagnostic.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a source code snippet
    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            snippets: self.snippets,
        }
    }

    /// Build and emit the diagnostic to the given handler
    ///
    /// # Examples
    ///
    /// ```
    /// use mat_util::diagnostic::{DiagnosticBuilder, Handler};
    ///
    /// let handler = Handler::new();
    /// DiagnosticBuilder::error("lexing halted").emit(&handler);
    ///
    /// assert!(handler.has_errors());
    /// ```
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
