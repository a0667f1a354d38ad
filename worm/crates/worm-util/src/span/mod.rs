//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte offsets for slicing the buffer, plus line/column information for
//! human-readable output.
//!
//! # Examples
//!
//! ```
//! use worm_util::span::Span;
//!
//! // The lexeme `x` at byte 4, line 1, column 5
//! let span = Span::new(4, 5, 1, 5);
//! assert_eq!(span.len(), 1);
//! ```

mod source_file;

pub use source_file::SourceFile;

/// Source location span
///
/// A `Span` represents a half-open byte range `start..end` in a source
/// buffer together with the line and column where the range begins.
/// Columns count characters, not bytes, so they match what an editor shows.
///
/// # Examples
///
/// ```
/// use worm_util::span::Span;
///
/// let span = Span::new(10, 20, 2, 5);
/// assert_eq!(span.range(), 10..20);
///
/// // An empty span marks a position, e.g. end of input
/// let point = Span::point(20, 3, 1);
/// assert!(point.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use worm_util::span::Span;
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
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single position
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Check if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// The byte range covered by this span
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
