//! Source cursor.
//!
//! [`Cursor`] walks a `&str` one `char` at a time and keeps the 1-based
//! line and column of the next unread character. `\n`, `\r\n` and a lone
//! `\r` each end one line; columns count characters, not bytes.

/// Where the cursor stands: byte offset plus line and column.
///
/// Also used as a mark for token starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte offset into the source
    pub position: usize,
    /// Line, 1-based
    pub line: u32,
    /// Column, 1-based
    pub column: u32,
}

impl CursorSnapshot {
    const START: Self = Self {
        position: 0,
        line: 1,
        column: 1,
    };
}

/// Cursor over Worm source text.
///
/// ```
/// use worm_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("x = 42;");
/// assert_eq!(cursor.current_char(), 'x');
/// cursor.advance();
/// assert_eq!((cursor.current_char(), cursor.column()), (' ', 2));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    at: CursorSnapshot,
}

impl<'a> Cursor<'a> {
    /// Starts at the first character of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            at: CursorSnapshot::START,
        }
    }

    /// The next unread character, or `'\0'` once the input is exhausted.
    ///
    /// A NUL in the input reads the same; use [`Cursor::is_at_end`] to tell
    /// them apart.
    #[inline]
    pub fn current_char(&self) -> char {
        self.peek_char(0)
    }

    /// The character `offset` chars past the current one, `'\0'` beyond the end.
    ///
    /// ```
    /// use worm_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("a?.");
    /// assert_eq!(cursor.peek_char(2), '.');
    /// assert_eq!(cursor.peek_char(3), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        let rest = self.remaining();
        match rest.as_bytes().get(..=offset) {
            Some(window) if window.is_ascii() => window[offset] as char,
            _ => rest.chars().nth(offset).unwrap_or('\0'),
        }
    }

    /// Consumes one character. A no-op at the end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.remaining().chars().next() else {
            return;
        };

        self.at.position += c.len_utf8();
        let breaks_line = match c {
            '\n' => true,
            // The `\n` of a `\r\n` pair does the line break.
            '\r' => self.current_char() != '\n',
            _ => false,
        };

        if breaks_line {
            self.at.line += 1;
            self.at.column = 1;
        } else {
            self.at.column += 1;
        }
    }

    /// Consumes up to `count` characters.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            self.advance();
        }
    }

    /// True once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.at.position >= self.source.len()
    }

    /// Whether the unread input begins with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Current line.
    #[inline]
    pub fn line(&self) -> u32 {
        self.at.line
    }

    /// Current column.
    #[inline]
    pub fn column(&self) -> u32 {
        self.at.column
    }

    /// Current byte offset.
    #[inline]
    pub fn position(&self) -> usize {
        self.at.position
    }

    /// The text consumed since byte offset `start`.
    ///
    /// ```
    /// use worm_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("max_attempts:int");
    /// cursor.advance_n(12);
    /// assert_eq!(cursor.slice_from(0), "max_attempts");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.at.position]
    }

    /// The unread input.
    pub fn remaining(&self) -> &'a str {
        &self.source[self.at.position..]
    }

    /// Marks the current location.
    pub fn snapshot(&self) -> CursorSnapshot {
        self.at
    }
}
