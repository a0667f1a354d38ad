//! Source files with precomputed line starts.
//!
//! Line numbering follows the lexer: `\n`, `\r\n` and a lone `\r` each end
//! a line, so a [`Span`]'s `line` can be fed straight into
//! [`SourceFile::line_at`].

use std::sync::Arc;

use super::Span;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use worm_util::span::SourceFile;
///
/// let file = SourceFile::new("main.worm", "x = 1\ny = 2");
/// assert_eq!(file.name(), "main.worm");
/// assert_eq!(file.line_count(), 2);
/// assert_eq!(file.line_at(2), Some("y = 2"));
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<str>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(name: impl Into<String>, content: impl Into<Arc<str>>) -> Self {
        let content = content.into();
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    fn line_starts(content: &str) -> Arc<[usize]> {
        let bytes = content.as_bytes();
        let mut line_starts = vec![0];

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'\n' => line_starts.push(i + 1),
                b'\r' if bytes.get(i + 1) != Some(&b'\n') => line_starts.push(i + 1),
                _ => {},
            }
        }

        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the total number of lines
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get a specific source line (1-indexed), without its terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use worm_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.worm", "one\r\ntwo\rthree");
    /// assert_eq!(file.line_at(1), Some("one"));
    /// assert_eq!(file.line_at(2), Some("two"));
    /// assert_eq!(file.line_at(3), Some("three"));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }
        let start = *self.line_starts.get(line - 1)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        Some(self.content[start..end].trim_end_matches(['\n', '\r']))
    }

    /// Like [`SourceFile::line_at`], but reports out-of-range lines as errors
    pub fn try_line_at(&self, line: usize) -> SourceMapResult<&str> {
        self.line_at(line).ok_or(SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }

    /// Extract the text covered by a span, with bounds checking
    ///
    /// # Examples
    ///
    /// ```
    /// use worm_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.worm", "x = 42");
    /// assert_eq!(file.extract(Span::new(4, 6, 1, 5)).unwrap(), "42");
    /// assert!(file.extract(Span::new(4, 60, 1, 5)).is_err());
    /// ```
    pub fn extract(&self, span: Span) -> SourceMapResult<&str> {
        let (start, end) = (span.start, span.end);
        if start > end {
            return Err(SourceMapError::InvalidSpan { start, end });
        }
        if end > self.content.len() {
            return Err(SourceMapError::SpanOutOfBounds {
                file_len: self.content.len(),
                span_start: start,
                span_end: end,
            });
        }
        if !self.content.is_char_boundary(start) || !self.content.is_char_boundary(end) {
            return Err(SourceMapError::NotCharBoundary { start, end });
        }

        Ok(&self.content[span.range()])
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("lines", &self.line_count())
            .finish()
    }
}
