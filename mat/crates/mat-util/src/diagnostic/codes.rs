//! Diagnostic codes for categorizing lexer errors and warnings.
//!
//! This module provides the [`DiagnosticCode`] type for uniquely identifying
//! diagnostic messages, so tools can filter or document them.
//!
//! # Examples
//!
//! ```
//! use mat_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::W_LEX_UNKNOWN_ESCAPE;
//! assert_eq!(code.prefix(), "W");
//! assert_eq!(code.number(), 1001);
//! assert_eq!(code.as_str(), "W1001");
//! ```

use serde::{Serialize, Serializer};

/// A unique code identifying a diagnostic message
///
/// Diagnostic codes follow the format `{prefix}{number}` where:
/// - `prefix` is "E" for errors or "W" for warnings
/// - `number` is a 4-digit number (padded with zeros)
///
/// # Examples
///
/// ```
/// use mat_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 1);
/// assert_eq!(code.as_str(), "E0001");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    ///
    /// # Examples
    ///
    /// ```
    /// use mat_util::diagnostic::DiagnosticCode;
    ///
    /// let code = DiagnosticCode::new("E", 1001);
    /// assert_eq!(code.prefix(), "E");
    /// assert_eq!(code.number(), 1001);
    /// ```
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix ("E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001", "W1002")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // LEXER CODES
    // =========================================================================

    /// E1001: Lexing halted after a latched failure (strict reporting)
    pub const E_LEX_HALTED: Self = Self::new("E", 1001);

    /// W1001: Unknown or empty escape word after `\`
    pub const W_LEX_UNKNOWN_ESCAPE: Self = Self::new("W", 1001);
    /// W1002: Character that starts no token
    pub const W_LEX_UNEXPECTED_CHAR: Self = Self::new("W", 1002);
}

impl std::fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for DiagnosticCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
