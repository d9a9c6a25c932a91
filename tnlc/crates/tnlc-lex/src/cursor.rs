//! Character cursor for traversing source code.
//!
//! The cursor walks the source one character at a time, tracking the byte
//! position and the 1-based line/column needed for error reporting. It is
//! UTF-8 aware; TNL sources are usually ASCII but header strings and
//! patterns are free to carry anything.

/// A cursor over source text.
///
/// # Example
///
/// ```
/// use tnlc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a -> b");
/// assert_eq!(cursor.current_char(), 'a');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), ' ');
/// ```
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the character under the cursor, or `'\0'` at end of input.
    #[inline]
    pub fn current_char(&self) -> char {
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Returns the character `offset` characters ahead of the cursor
    /// (0 = current), or `'\0'` past the end.
    pub fn peek_char(&self, offset: usize) -> char {
        self.source[self.position..]
            .chars()
            .nth(offset)
            .unwrap_or('\0')
    }

    /// Advances past the current character, updating line/column tracking.
    /// Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(c) = self.source[self.position..].chars().next() {
            self.position += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    /// True once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Consumes the current character if it equals `expected`.
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The source text from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The source text from the current position to the end.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_starts_at_origin() {
        let cursor = Cursor::new("transform T {}");
        assert_eq!(cursor.current_char(), 't');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_advance_and_peek() {
        let mut cursor = Cursor::new("abc");
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), 'c');
        assert_eq!(cursor.peek_char(3), '\0');
        cursor.advance();
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn test_line_column_tracking() {
        let mut cursor = Cursor::new("ab\ncd");
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.column(), 3);
        cursor.advance(); // consumes '\n'
        assert_eq!(cursor.line(), 2);
        assert_eq!(cursor.column(), 1);
    }

    #[test]
    fn test_utf8_advance() {
        let mut cursor = Cursor::new("α/β");
        assert_eq!(cursor.current_char(), 'α');
        cursor.advance();
        assert_eq!(cursor.current_char(), '/');
    }

    #[test]
    fn test_match_char() {
        let mut cursor = Cursor::new("->");
        assert!(cursor.match_char('-'));
        assert!(!cursor.match_char('-'));
        assert!(cursor.match_char('>'));
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_slice_and_remaining() {
        let mut cursor = Cursor::new("headers {");
        let start = cursor.position();
        for _ in 0..7 {
            cursor.advance();
        }
        assert_eq!(cursor.slice_from(start), "headers");
        assert_eq!(cursor.remaining(), " {");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        cursor.advance();
        assert!(cursor.is_at_end());
    }
}
