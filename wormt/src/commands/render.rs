//! Rendering of scan results.
//!
//! Tables and snippets are plain text; JSON output is built from the
//! serializable record types below.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use worm_lex::{Literal, Token, TokenKind};
use worm_util::{Diagnostic, SourceFile, SourceSnippet};

use crate::commands::common::FileReport;
use crate::error::Result;

/// One token as shown to users.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenRecord<'a> {
    /// Kind name, e.g. `integer_literal`
    pub kind: &'static str,
    /// Keyword spelling or operator name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'static str>,
    /// Exact source text
    pub lexeme: &'a str,
    /// Decoded literal value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub literal: Option<Value>,
    /// Line (1-based)
    pub line: u32,
    /// Column (1-based)
    pub column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        let detail = match token.kind {
            TokenKind::Keyword(kw) => Some(kw.as_str()),
            TokenKind::Operator(op) => Some(op.name()),
            _ => None,
        };
        let literal = token.literal.as_ref().filter(|_| token.kind.is_literal());
        let literal = literal.map(|literal| match literal {
            Literal::Integer(n) => Value::from(*n),
            Literal::Float(x) => Value::from(*x),
            Literal::String(s) => Value::from(s.as_str()),
            Literal::Boolean(b) => Value::from(*b),
        });

        Self {
            kind: token.kind.name(),
            detail,
            lexeme: &token.lexeme,
            literal,
            line: token.line(),
            column: token.column(),
        }
    }
}

/// One diagnostic as shown to users.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticRecord<'a> {
    /// Stable code, e.g. `E0002`
    pub code: String,
    /// Kind name, e.g. `malformed_number`
    pub kind: &'static str,
    /// Message text
    pub message: &'a str,
    /// Line (1-based)
    pub line: u32,
    /// Column (1-based)
    pub column: u32,
    /// Additional notes
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<&'a str>,
    /// Suggestions
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub helps: Vec<&'a str>,
}

impl<'a> From<&'a Diagnostic> for DiagnosticRecord<'a> {
    fn from(diag: &'a Diagnostic) -> Self {
        Self {
            code: diag.kind.code(),
            kind: diag.kind.name(),
            message: &diag.message,
            line: diag.line(),
            column: diag.column(),
            notes: diag.notes.iter().map(String::as_str).collect(),
            helps: diag.helps.iter().map(String::as_str).collect(),
        }
    }
}

/// Scan results of one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord<'a> {
    /// File name, or `<stdin>`
    pub file: &'a str,
    /// Tokens, omitted by `check`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Vec<TokenRecord<'a>>>,
    /// Diagnostics
    pub diagnostics: Vec<DiagnosticRecord<'a>>,
}

impl<'a> FileRecord<'a> {
    /// Build the record for a report.
    pub fn new(report: &'a FileReport, include_tokens: bool) -> Self {
        Self {
            file: report.file.name(),
            tokens: include_tokens.then(|| report.tokens.iter().map(TokenRecord::from).collect()),
            diagnostics: report.diagnostics.iter().map(DiagnosticRecord::from).collect(),
        }
    }
}

/// Render reports as pretty-printed JSON.
pub fn render_json(reports: &[FileReport], include_tokens: bool) -> Result<String> {
    let records: Vec<FileRecord<'_>> = reports
        .iter()
        .map(|report| FileRecord::new(report, include_tokens))
        .collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

/// Render the token table of one file.
pub fn render_token_table(report: &FileReport) -> String {
    let mut out = format!("{}\n", report.file.name());
    out.push_str(&format!(
        "{:>9}  {:<16} {:<12} {:<24} {}\n",
        "LINE:COL", "KIND", "DETAIL", "LEXEME", "LITERAL"
    ));

    for token in &report.tokens {
        let record = TokenRecord::from(token);
        let position = format!("{}:{}", record.line, record.column);
        let literal = token.literal.as_ref().map(ToString::to_string).unwrap_or_default();
        out.push_str(&format!(
            "{:>9}  {:<16} {:<12} {:<24} {}",
            position,
            record.kind,
            record.detail.unwrap_or(""),
            printable(record.lexeme),
            literal
        ));
        // Keep rows free of trailing padding
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }

    out
}

/// Make line breaks and tabs visible so each token stays on one row.
fn printable(text: &str) -> String {
    text.replace('\r', "\\r")
        .replace('\n', "\\n")
        .replace('\t', "\\t")
}

/// Render one diagnostic with its source line and a caret underline.
///
/// ```text
/// error[E0002]: misplaced digit separator in `1__0`
///   --> main.worm:1:7
///   1 | x = 1__0;
///     |       ^
///    = help: `_` may only appear between two digits
/// ```
pub fn render_diagnostic(file: &SourceFile, diag: &Diagnostic) -> String {
    let mut out = format!(
        "{}\n  --> {}:{}:{}\n",
        diag,
        file.name(),
        diag.line(),
        diag.column()
    );

    match SourceSnippet::for_span(file, diag.span) {
        Ok(snippet) => {
            out.push_str(&snippet.format());
            out.push('\n');
        },
        Err(err) => debug!("no snippet for {}: {}", diag.kind.code(), err),
    }

    for note in &diag.notes {
        out.push_str(&format!("   = note: {}\n", note));
    }
    for help in &diag.helps {
        out.push_str(&format!("   = help: {}\n", help));
    }

    out
}
