//! Error types for the lexer.
//!
//! Malformed input never produces an error here: it is reported through
//! diagnostics. [`LexError`] covers only input the lexer refuses to scan.

use thiserror::Error;
use worm_util::{Diagnostic, DiagnosticKind, Span};

/// Errors that prevent a scan from starting
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    /// The source exceeds [`LexerConfig::max_source_size`](crate::LexerConfig::max_source_size)
    #[error("source is {size} bytes, exceeding the limit of {limit} bytes")]
    SourceTooLarge {
        /// Size of the rejected source
        size: usize,
        /// Configured limit
        limit: usize,
    },
}

impl LexError {
    /// Converts the error into a diagnostic anchored at the start of input.
    ///
    /// # Example
    ///
    /// ```
    /// use worm_lex::LexError;
    /// use worm_util::DiagnosticKind;
    ///
    /// let diag = LexError::SourceTooLarge { size: 10, limit: 8 }.to_diagnostic();
    /// assert_eq!(diag.kind, DiagnosticKind::SourceTooLarge);
    /// assert_eq!((diag.line(), diag.column()), (1, 1));
    /// ```
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            LexError::SourceTooLarge { limit, .. } => {
                Diagnostic::new(DiagnosticKind::SourceTooLarge, self.to_string(), Span::point(0, 1, 1))
                    .with_help(format!("split the input into parts of at most {} bytes", limit))
            },
        }
    }
}

/// Result type alias for lexer operations
pub type LexResult<T> = Result<T, LexError>;
