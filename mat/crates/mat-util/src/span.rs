//! Span module - Source location tracking.
//!
//! A [`Span`] names a byte range of the input buffer together with the
//! line and column of its first byte. Expressions are usually one line, but
//! buffers loaded from files may hold several.
//!
//! # Examples
//!
//! ```
//! use mat_util::span::Span;
//!
//! let source = r"x + \alpha";
//! let span = Span::new(4, 10, 1, 5);
//! assert_eq!(span.slice(source), Some(r"\alpha"));
//! ```

use serde::Serialize;

/// Source location span
///
/// # Examples
///
/// ```
/// use mat_util::span::Span;
///
/// let point = Span::point(7, 1, 8);
/// assert_eq!(point.start, point.end);
/// assert_eq!(point.start, 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use mat_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    ///
    /// # Examples
    ///
    /// ```
    /// use mat_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 11);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single offset.
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Merge two spans into the smallest span covering both.
    ///
    /// Line and column are taken from whichever span starts first.
    ///
    /// # Examples
    ///
    /// ```
    /// use mat_util::span::Span;
    ///
    /// let a = Span::new(0, 2, 1, 1);
    /// let b = Span::new(5, 8, 1, 6);
    /// assert_eq!(a.merge(b), Span::new(0, 8, 1, 1));
    /// ```
    pub fn merge(self, other: Span) -> Span {
        let first = if self.start <= other.start { self } else { other };
        Span {
            start: first.start,
            end: self.end.max(other.end),
            line: first.line,
            column: first.column,
        }
    }

    /// The source text covered by this span, if it lies within `source`
    /// on character boundaries.
    pub fn slice<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.start..self.end)
    }
}
