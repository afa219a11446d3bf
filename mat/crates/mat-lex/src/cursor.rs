//! Byte cursor over the input buffer.
//!
//! The Mat grammar is ASCII, so the cursor works on bytes and only decodes
//! a full UTF-8 scalar when it has to step over or name a character it
//! does not recognize. Line and column are tracked for diagnostics.

use mat_util::Span;

/// A cursor for traversing an expression buffer.
///
/// # Example
///
/// ```
/// use mat_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x+2");
/// assert_eq!(cursor.current_byte(), Some(b'x'));
/// cursor.advance();
/// assert_eq!(cursor.current_byte(), Some(b'+'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The buffer being traversed.
    source: &'a str,

    /// Current byte position in the buffer.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte under the cursor, or `None` at the end of the buffer.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes past the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("f(x)");
    /// assert_eq!(cursor.peek_byte(1), Some(b'('));
    /// assert_eq!(cursor.peek_byte(4), None);
    /// ```
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Returns the full character under the cursor.
    ///
    /// Returns '\0' at the end of the buffer.
    pub fn current_char(&self) -> char {
        self.remaining().chars().next().unwrap_or('\0')
    }

    /// Returns true at the end of the buffer or on a NUL byte.
    ///
    /// A NUL terminates the expression the same way the end of a
    /// C string would.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::cursor::Cursor;
    ///
    /// assert!(Cursor::new("").is_at_end());
    /// assert!(Cursor::new("\0x").is_at_end());
    /// assert!(!Cursor::new("x").is_at_end());
    /// ```
    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_byte(), None | Some(0))
    }

    /// Advances past one character.
    ///
    /// Updates line and column tracking. Does nothing if already at the end
    /// of the buffer.
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.current_byte() else {
            return;
        };

        // Fast path for ASCII
        if b < 128 {
            self.position += 1;
            self.bump_line_column(b == b'\n');
            return;
        }

        let width = self.current_char().len_utf8();
        self.position += width;
        self.column += 1;
    }

    /// Advances by `count` bytes, which must all be ASCII.
    ///
    /// Stops at the end of the buffer.
    #[inline]
    pub fn advance_bytes(&mut self, count: usize) {
        let end = (self.position + count).min(self.source.len());
        for i in self.position..end {
            let is_newline = self.source.as_bytes()[i] == b'\n';
            self.bump_line_column(is_newline);
        }
        self.position = end;
    }

    fn bump_line_column(&mut self, newline: bool) {
        if newline {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Consumes bytes while `pred` holds. Returns the number consumed.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123.5");
    /// assert_eq!(cursor.eat_while(|b| b.is_ascii_digit()), 3);
    /// assert_eq!(cursor.current_byte(), Some(b'.'));
    /// ```
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> usize {
        let start = self.position;
        while let Some(b) = self.current_byte() {
            if !pred(b) {
                break;
            }
            self.advance();
        }
        self.position - start
    }

    /// Consumes `expected` if it is the current byte.
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current_byte() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Skips ASCII whitespace.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" \t\nx");
    /// cursor.skip_whitespace();
    /// assert_eq!(cursor.current_byte(), Some(b'x'));
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn skip_whitespace(&mut self) {
        self.eat_while(|b| b.is_ascii_whitespace());
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the buffer.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the buffer from `start` up to the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("42+x");
    /// cursor.advance_bytes(2);
    /// assert_eq!(cursor.slice_from(0), "42");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the buffer from the cursor to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// Returns the full buffer.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Span from a saved position up to the cursor.
    pub fn span_from(&self, start: CursorSnapshot) -> Span {
        Span::new(start.position, self.position, start.line, start.column)
    }

    /// Returns the text of the line containing byte `offset`, without its
    /// line terminator.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("x+1\ny$\nz");
    /// assert_eq!(cursor.line_text(5), "y$");
    /// ```
    pub fn line_text(&self, offset: usize) -> &'a str {
        let bytes = self.source.as_bytes();
        let offset = offset.min(bytes.len());
        let start = bytes[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |i| i + 1);
        let end = bytes[offset..]
            .iter()
            .position(|&b| b == b'\n' || b == 0)
            .map_or(bytes.len(), |i| offset + i);
        self.source[start..end].trim_end_matches('\r')
    }

    /// Saves the current cursor state.
    ///
    /// # Example
    ///
    /// ```
    /// use mat_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("1e+x");
    /// let snapshot = cursor.snapshot();
    /// cursor.advance_bytes(3);
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.position(), 0);
    /// ```
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores a previously saved state.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A saved cursor state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in the buffer.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("x+1");
        assert_eq!(cursor.current_byte(), Some(b'x'));
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_utf8() {
        let mut cursor = Cursor::new("π2");
        assert_eq!(cursor.current_char(), 'π');
        cursor.advance();
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 2);
        assert_eq!(cursor.current_byte(), Some(b'2'));
    }

    #[test]
    fn test_advance_at_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current_char(), '\0');
    }

    #[test]
    fn test_nul_is_end() {
        let mut cursor = Cursor::new("a\0b");
        assert!(!cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_match_byte() {
        let mut cursor = Cursor::new("<=");
        assert!(cursor.match_byte(b'<'));
        assert!(!cursor.match_byte(b'<'));
        assert!(cursor.match_byte(b'='));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_advance_bytes_clamps() {
        let mut cursor = Cursor::new("ab");
        cursor.advance_bytes(10);
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.column(), 3);
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("x\ny");
        cursor.advance_bytes(2);
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_span_from() {
        let mut cursor = Cursor::new("\n12");
        cursor.advance();
        let start = cursor.snapshot();
        cursor.advance_bytes(2);
        let span = cursor.span_from(start);
        assert_eq!(span, Span::new(1, 3, 2, 1));
    }

    #[test]
    fn test_line_text() {
        let cursor = Cursor::new("a\r\nbc\n");
        assert_eq!(cursor.line_text(0), "a");
        assert_eq!(cursor.line_text(3), "bc");
        assert_eq!(cursor.line_text(6), "");
    }

    #[test]
    fn test_line_text_stops_at_nul() {
        let cursor = Cursor::new("x$\0junk");
        assert_eq!(cursor.line_text(1), "x$");
    }

    #[test]
    fn test_empty_source() {
        let cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_byte(), None);
        assert_eq!(cursor.remaining(), "");
    }
}
