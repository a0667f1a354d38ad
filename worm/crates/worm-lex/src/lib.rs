//! worm-lex - Lexical Analyzer for the Worm Language
//!
//! This crate turns Worm source text into a flat, ordered stream of tokens
//! for display and downstream parsing.
//!
//! # Example Usage
//!
//! ```
//! use worm_lex::{scan, Literal, OperatorKind, TokenKind};
//!
//! let result = scan("max_attempts:int = 1_000_000;");
//! assert!(!result.has_errors());
//!
//! let kinds: Vec<TokenKind> = result.tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     vec![
//!         TokenKind::Identifier,
//!         TokenKind::Operator(OperatorKind::Colon),
//!         TokenKind::Identifier,
//!         TokenKind::Operator(OperatorKind::Assign),
//!         TokenKind::IntegerLiteral,
//!         TokenKind::Operator(OperatorKind::Semicolon),
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! assert_eq!(result.tokens[4].literal, Some(Literal::Integer(1_000_000)));
//! ```
//!
//! Scanning never fails on malformed input. Problems are collected as
//! [`Diagnostic`]s next to the tokens, and the scan continues after each
//! one:
//!
//! ```
//! use worm_lex::scan;
//! use worm_util::DiagnosticKind;
//!
//! let result = scan("x = 1__0;");
//! assert_eq!(result.diagnostics.len(), 1);
//! assert_eq!(result.diagnostics[0].kind, DiagnosticKind::MalformedNumber);
//! assert_eq!(result.tokens.len(), 5);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token, keyword, operator and literal types
//! - [`lexer`] - The [`Lexer`] and its sub-scanners
//! - [`cursor`] - Character cursor for source traversal
//! - [`chars`] - Character classes
//! - [`config`] - [`LexerConfig`] and [`KeywordSet`]
//! - [`error`] - [`LexError`]
//!
//! # Token Categories
//!
//! ## Identifiers and Keywords
//!
//! Identifiers match `[A-Za-z_][A-Za-z0-9_]*`. `None` is always a keyword,
//! `True` and `False` are boolean literals. Type names (`int`, `float`,
//! `str`, `bool`, `char`) and statement words (`if`, `while`, `def`, ...)
//! are reserved only under [`KeywordSet::TypeNames`] and
//! [`KeywordSet::Extended`].
//!
//! ## Literals
//!
//! - **Integer**: `42`, `1_000_000`
//! - **Float**: `3.14`, `99.999_999`, `2.5e-3`
//! - **String**: `"hello"`, `'world\n'`
//! - **Boolean**: `True`, `False`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `//`, `%`, `**`
//! - **Comparison**: `==`, `!=`, `<`, `>`, `<=`, `>=`
//! - **Assignment**: `=`, `+=`, `-=`, `*=`, `/=`, `%=`, `//=`, `**=`
//! - **Null handling**: `??`, `?.`
//! - **Punctuation**: `:`, `;`, `,`, `.`, `!`, `->`, `=>`, `()`, `{}`, `[]`
//!
//! ## Comments
//!
//! `# line` and `"""block"""` / `'''block'''`, dropped unless
//! [`LexerConfig::include_comments`] is set. A triple quote with no closer
//! is lexed as strings instead.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

mod edge_cases;

pub use config::{KeywordSet, LexerConfig};
pub use cursor::Cursor;
pub use error::{LexError, LexResult};
pub use lexer::Lexer;
pub use token::{Keyword, KeywordCategory, Literal, OperatorKind, Token, TokenKind};

use worm_util::{Diagnostic, Handler};

/// Tokens and diagnostics produced by one scan.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanResult {
    /// Tokens in source order, ending with `EndOfInput`
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were found
    pub diagnostics: Vec<Diagnostic>,
}

impl ScanResult {
    /// Returns true if any diagnostic was reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Iterates over the tokens, without the final `EndOfInput`.
    pub fn significant_tokens(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter().filter(|t| !t.is_end())
    }
}

/// Scans a source buffer with the default configuration.
///
/// Always succeeds: malformed input is reported through
/// [`ScanResult::diagnostics`].
pub fn scan(source: &str) -> ScanResult {
    scan_unchecked(source, LexerConfig::default())
}

/// Scans a source buffer with the given configuration.
///
/// # Errors
///
/// Returns [`LexError::SourceTooLarge`] before scanning if the source
/// exceeds [`LexerConfig::max_source_size`].
///
/// # Example
///
/// ```
/// use worm_lex::{scan_with_config, LexError, LexerConfig};
///
/// let config = LexerConfig::default().with_max_source_size(4);
/// assert!(scan_with_config("x=1", &config).is_ok());
/// assert_eq!(
///     scan_with_config("x = 1", &config),
///     Err(LexError::SourceTooLarge { size: 5, limit: 4 })
/// );
/// ```
pub fn scan_with_config(source: &str, config: &LexerConfig) -> LexResult<ScanResult> {
    config.check_size(source.len())?;
    Ok(scan_unchecked(source, *config))
}

fn scan_unchecked(source: &str, config: LexerConfig) -> ScanResult {
    let mut handler = Handler::new();
    let tokens = Lexer::with_config(source, &mut handler, config).tokenize();
    ScanResult {
        tokens,
        diagnostics: handler.into_diagnostics(),
    }
}
