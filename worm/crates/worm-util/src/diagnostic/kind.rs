//! Diagnostic kinds and their stable codes.
//!
//! Every lexical problem belongs to exactly one [`DiagnosticKind`]. The kind
//! determines the code shown to users (`E0001`...) so messages can be looked
//! up and filtered independently of their wording.

use std::fmt;

/// The category of a diagnostic
///
/// # Examples
///
/// ```
/// use worm_util::DiagnosticKind;
///
/// let kind = DiagnosticKind::MalformedNumber;
/// assert_eq!(kind.code(), "E0002");
/// assert_eq!(kind.name(), "malformed_number");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A string literal reached end of line or input before its closing quote
    UnterminatedString,
    /// A numeric literal with misplaced digit separators or an unrepresentable value
    MalformedNumber,
    /// A character (or escape) the language does not define at that position
    UnexpectedCharacter,
    /// The source buffer exceeds the configured size limit
    SourceTooLarge,
}

impl DiagnosticKind {
    /// The numeric part of the code
    pub const fn number(&self) -> u32 {
        match self {
            DiagnosticKind::UnterminatedString => 1,
            DiagnosticKind::MalformedNumber => 2,
            DiagnosticKind::UnexpectedCharacter => 3,
            DiagnosticKind::SourceTooLarge => 4,
        }
    }

    /// The user-facing code, e.g. `E0003`
    pub fn code(&self) -> String {
        format!("E{:04}", self.number())
    }

    /// Snake-case name, used in machine-readable output
    pub const fn name(&self) -> &'static str {
        match self {
            DiagnosticKind::UnterminatedString => "unterminated_string",
            DiagnosticKind::MalformedNumber => "malformed_number",
            DiagnosticKind::UnexpectedCharacter => "unexpected_character",
            DiagnosticKind::SourceTooLarge => "source_too_large",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
