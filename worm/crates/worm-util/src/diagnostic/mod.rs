//! Diagnostic module - Error reporting infrastructure.
//!
//! Lexical problems never abort a scan. Instead they are recorded as
//! [`Diagnostic`]s in a [`Handler`], in the order they were found, and
//! handed back to the caller next to the token stream.
//!
//! # Examples
//!
//! ```
//! use worm_util::diagnostic::{DiagnosticBuilder, DiagnosticKind, Handler};
//! use worm_util::span::Span;
//!
//! let mut handler = Handler::new();
//! handler.emit_diagnostic(
//!     DiagnosticBuilder::new(DiagnosticKind::MalformedNumber, "misplaced digit separator")
//!         .span(Span::new(6, 7, 1, 7))
//!         .help("underscores may only appear between two digits")
//!         .build(),
//! );
//!
//! let diags = handler.into_diagnostics();
//! assert_eq!(diags[0].to_string(), "error[E0002]: misplaced digit separator");
//! ```

mod builder;
mod kind;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use kind::DiagnosticKind;

use crate::Span;
use std::fmt;

/// A diagnostic message with its category and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic category
    pub kind: DiagnosticKind,
    /// Main diagnostic message
    pub message: String,
    /// Source location of the offending text
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic without notes or helps
    pub fn new(kind: DiagnosticKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            message: message.into(),
            span,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Line of the offending position (1-based)
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column of the offending position (1-based)
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Add a help suggestion
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.kind.code(), self.message)
    }
}

/// Handler for collecting diagnostics
///
/// The `Handler` keeps diagnostics in emission order. It can be configured
/// to panic on the first diagnostic, which is handy in tests that expect
/// clean input.
///
/// # Examples
///
/// ```
/// use worm_util::diagnostic::{Diagnostic, DiagnosticKind, Handler};
/// use worm_util::span::Span;
///
/// let mut handler = Handler::new();
/// handler.emit_diagnostic(Diagnostic::new(
///     DiagnosticKind::UnexpectedCharacter,
///     "unexpected character '@'",
///     Span::DUMMY,
/// ));
///
/// assert!(handler.has_errors());
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
    /// Whether to panic on errors (for testing)
    panic_on_error: bool,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler that panics on the first diagnostic (for testing)
    pub fn new_panicking() -> Self {
        Self {
            diagnostics: Vec::new(),
            panic_on_error: true,
        }
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        if self.panic_on_error {
            panic!("Diagnostic error: {}", diagnostic.message);
        }
        self.diagnostics.push(diagnostic);
    }

    /// Check if any diagnostics have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of diagnostics
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// Count the diagnostics of one kind
    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.diagnostics.iter().filter(|d| d.kind == kind).count()
    }

    /// Borrow all diagnostics, in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Take ownership of all diagnostics, in emission order
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
