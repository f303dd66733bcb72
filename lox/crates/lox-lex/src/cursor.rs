//! Character cursor for traversing source code.
//!
//! The cursor walks the source one `char` at a time, keeps the byte offset
//! of the next unconsumed character, and counts lines as newlines are
//! consumed.

/// A cursor over source text.
///
/// # Example
///
/// ```
/// use lox_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("a\nb");
/// assert_eq!(cursor.advance(), Some('a'));
/// assert_eq!(cursor.advance(), Some('\n'));
/// assert_eq!(cursor.line(), 2);
/// assert_eq!(cursor.current_char(), 'b');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Byte offset of the next unconsumed character.
    position: usize,

    /// Current line number (1-based).
    line: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`, on line 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
        }
    }

    /// Returns the character at the cursor, or `'\0'` at end of input.
    ///
    /// A NUL in the source is indistinguishable from end of input here;
    /// callers that care check [`Cursor::is_at_end`] first.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// Returns the character `offset` characters ahead of the cursor, or
    /// `'\0'` past the end.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("1.5");
    /// assert_eq!(cursor.peek_char(0), '1');
    /// assert_eq!(cursor.peek_char(1), '.');
    /// assert_eq!(cursor.peek_char(2), '5');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = &self.source[self.position..];

        // Fast path for ASCII (most common)
        if let Some(&b) = rest.as_bytes().get(offset) {
            if rest.as_bytes()[..=offset].is_ascii() {
                return b as char;
            }
        }

        rest.chars().nth(offset).unwrap_or('\0')
    }

    /// Consumes and returns the next character, or `None` at end of input.
    ///
    /// Consuming a newline increments the line counter.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let c = self.source[self.position..].chars().next()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    /// Consumes the next character if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use lox_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// assert_eq!(cursor.current_char(), '>');
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes characters while `predicate` holds.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Returns true if every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the byte offset of the next unconsumed character.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source from byte `start` up to the cursor.
    ///
    /// `start` must be a position previously returned by
    /// [`Cursor::position`].
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source between two positions previously returned by
    /// [`Cursor::position`].
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current_char(), '\0');
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.line(), 1);
    }

    #[test]
    fn test_advance_counts_lines() {
        let mut cursor = Cursor::new("a\n\nb");
        cursor.advance();
        assert_eq!(cursor.line(), 1);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.line(), 3);
        assert_eq!(cursor.current_char(), 'b');
    }

    #[test]
    fn test_advance_multibyte() {
        let mut cursor = Cursor::new("é!");
        assert_eq!(cursor.advance(), Some('é'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.current_char(), '!');
    }

    #[test]
    fn test_peek_past_multibyte() {
        let cursor = Cursor::new("aé1");
        assert_eq!(cursor.peek_char(1), 'é');
        assert_eq!(cursor.peek_char(2), '1');
        assert_eq!(cursor.peek_char(3), '\0');
    }

    #[test]
    fn test_match_char_at_end() {
        let mut cursor = Cursor::new("");
        assert!(!cursor.match_char('\0'));
    }

    #[test]
    fn test_eat_while_and_slice() {
        let mut cursor = Cursor::new("abc123 rest");
        let start = cursor.position();
        cursor.eat_while(|c| c.is_ascii_alphanumeric());
        assert_eq!(cursor.slice_from(start), "abc123");
        assert_eq!(cursor.current_char(), ' ');
        assert_eq!(cursor.slice(0, 3), "abc");
    }
}
