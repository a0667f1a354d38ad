//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for rendering the
//! offending source line under a diagnostic.

use super::{Diagnostic, DiagnosticKind};
use crate::error::SourceMapResult;
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic, with the offending
/// column range underlined by carets.
///
/// # Examples
///
/// ```
/// use worm_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("x = 1__0;", 1, 5, 9);
/// assert_eq!(snippet.format(), "  1 | x = 1__0;\n    |     ^^^^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Column where the issue starts (1-based)
    pub start_column: usize,
    /// Column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Create a new source snippet
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column,
        }
    }

    /// Build the snippet for a span inside a source file
    ///
    /// The underline is clipped to the span's first line.
    ///
    /// # Examples
    ///
    /// ```
    /// use worm_util::diagnostic::SourceSnippet;
    /// use worm_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.worm", "name = \"abc\nnext");
    /// let snippet = SourceSnippet::for_span(&file, Span::new(7, 11, 1, 8)).unwrap();
    /// assert_eq!(snippet.line, "name = \"abc");
    /// assert_eq!((snippet.start_column, snippet.end_column), (8, 12));
    /// ```
    pub fn for_span(file: &SourceFile, span: Span) -> SourceMapResult<Self> {
        let line = file.try_line_at(span.line as usize)?;
        let text = file.extract(span)?;
        let width = text
            .chars()
            .take_while(|c| *c != '\n' && *c != '\r')
            .count();
        let start_column = span.column as usize;

        Ok(Self::new(line, span.line as usize, start_column, start_column + width))
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, and a caret line
    /// underneath. Empty ranges still get a single caret.
    ///
    /// The caret indent copies the line's tabs and skips a BOM.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));

        let indent: String = self
            .line
            .chars()
            .take(self.start_column.saturating_sub(1))
            .filter_map(|c| match c {
                '\t' => Some('\t'),
                '\u{feff}' => None,
                _ => Some(' '),
            })
            .collect();
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        result.push_str(&indent);
        result.push_str(&"^".repeat(underline_len));

        result
    }
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use worm_util::diagnostic::{DiagnosticBuilder, DiagnosticKind};
/// use worm_util::span::Span;
///
/// let diag = DiagnosticBuilder::new(DiagnosticKind::UnterminatedString, "unterminated string literal")
///     .span(Span::new(0, 4, 1, 1))
///     .help("add a closing `\"`")
///     .build();
/// assert_eq!(diag.helps.len(), 1);
/// ```
pub struct DiagnosticBuilder {
    kind: DiagnosticKind,
    message: String,
    span: Span,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create a new diagnostic builder
    pub fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: Span::DUMMY,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a note to the diagnostic
    ///
    /// Notes provide additional context about the diagnostic.
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Build the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            kind: self.kind,
            message: self.message,
            span: self.span,
            notes: self.notes,
            helps: self.helps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_single_caret_for_empty_range() {
        let snippet = SourceSnippet::new("abc", 1, 4, 4);
        assert_eq!(snippet.format(), "  1 | abc\n    |    ^");
    }

    #[test]
    fn test_snippet_wide_line_numbers() {
        let snippet = SourceSnippet::new("x", 1234, 1, 2);
        assert_eq!(snippet.format(), "1234 | x\n     | ^");
    }

    #[test]
    fn test_snippet_for_span_counts_chars() {
        let file = SourceFile::new("a.worm", "é = @");
        let snippet = SourceSnippet::for_span(&file, Span::new(5, 6, 1, 5)).unwrap();
        assert_eq!((snippet.start_column, snippet.end_column), (5, 6));
    }

    #[test]
    fn test_snippet_for_span_bad_line() {
        let file = SourceFile::new("a.worm", "x");
        assert!(SourceSnippet::for_span(&file, Span::new(0, 1, 5, 1)).is_err());
    }

    #[test]
    fn test_builder_collects_notes_and_helps() {
        let diag = DiagnosticBuilder::new(DiagnosticKind::MalformedNumber, "bad separator")
            .span(Span::new(5, 6, 1, 6))
            .note("underscores must sit between two digits")
            .help("remove the extra `_`")
            .build();

        assert_eq!(diag.kind, DiagnosticKind::MalformedNumber);
        assert_eq!(diag.notes, vec!["underscores must sit between two digits"]);
        assert_eq!(diag.helps, vec!["remove the extra `_`"]);
        assert_eq!(diag.span.column, 6);
    }

    #[test]
    fn test_snippet_keeps_tabs_in_indent() {
        let snippet = SourceSnippet::new("\tx = 1__0", 2, 7, 8);
        assert_eq!(snippet.format(), "  2 | \tx = 1__0\n    | \t     ^");
    }

    #[test]
    fn test_snippet_indent_after_bom() {
        let file = SourceFile::new("a.worm", "\u{feff}x @");
        let snippet = SourceSnippet::for_span(&file, Span::new(5, 6, 1, 4)).unwrap();
        assert_eq!(snippet.format(), "  1 | \u{feff}x @\n    |   ^");
    }
}
