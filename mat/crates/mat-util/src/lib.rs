//! mat-util - Shared foundation types for the Mat tokenizer.
//!
//! This crate holds the pieces every other Mat crate leans on:
//!
//! - [`span`] - byte-offset source locations with line/column info
//! - [`diagnostic`] - warnings and errors, their codes, and the [`Handler`]
//!   that collects them
//!
//! # Example
//!
//! ```
//! use mat_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::warning("unexpected character '$'")
//!     .code(DiagnosticCode::W_LEX_UNEXPECTED_CHAR)
//!     .span(Span::new(3, 4, 1, 4))
//!     .emit(&handler);
//!
//! assert_eq!(handler.warning_count(), 1);
//! assert!(!handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level, SourceSnippet};
pub use span::Span;
