//! Lexer configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Input notation the caller declares.
///
/// Both notations are scanned by the same rules; the value is carried for
/// tooling and reporting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    /// LaTeX-like input, `\frac{1}{2}`
    #[default]
    Latex,
    /// Plain ASCII Mat input, `1/2`
    Mat,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Latex => write!(f, "latex"),
            Notation::Mat => write!(f, "mat"),
        }
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "latex" => Ok(Notation::Latex),
            "mat" => Ok(Notation::Mat),
            other => Err(format!("unknown notation '{}' (expected latex or mat)", other)),
        }
    }
}

/// Options fixed at lexer construction.
///
/// # Example
///
/// ```
/// use mat_lex::{LexOptions, Notation};
///
/// let options = LexOptions::default()
///     .with_notation(Notation::Mat)
///     .with_strict_reporting(false);
/// assert!(options.show_warnings);
/// assert!(!options.strict_reporting);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexOptions {
    /// Declared input notation
    pub notation: Notation,
    /// Emit warning diagnostics. Errors are always emitted.
    pub show_warnings: bool,
    /// Stop lexing for good once a `Fail` token has been produced
    pub strict_reporting: bool,
    /// Skip ASCII whitespace between tokens. Off by default, where a
    /// space is an unexpected character like any other.
    pub skip_whitespace: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        Self {
            notation: Notation::Latex,
            show_warnings: true,
            strict_reporting: true,
            skip_whitespace: false,
        }
    }
}

impl LexOptions {
    /// Sets the declared notation.
    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Enables or disables warning diagnostics.
    pub fn with_show_warnings(mut self, show_warnings: bool) -> Self {
        self.show_warnings = show_warnings;
        self
    }

    /// Enables or disables the halt after a `Fail` token.
    pub fn with_strict_reporting(mut self, strict_reporting: bool) -> Self {
        self.strict_reporting = strict_reporting;
        self
    }

    /// Enables or disables whitespace skipping.
    pub fn with_skip_whitespace(mut self, skip_whitespace: bool) -> Self {
        self.skip_whitespace = skip_whitespace;
        self
    }
}
