//! Character classes for the Worm lexer.
//!
//! Worm identifiers are ASCII-only. Every other non-ASCII character outside
//! string literals and comments is reported as unexpected.

/// The UTF-8 byte order mark, accepted as whitespace at the start of input.
pub const BOM: char = '\u{FEFF}';

/// Checks if a character can start an identifier (`[A-Za-z_]`).
///
/// # Example
///
/// ```
/// use worm_lex::chars::is_ident_start;
///
/// assert!(is_ident_start('m'));
/// assert!(is_ident_start('_'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('α'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Checks if a character can continue an identifier (`[A-Za-z0-9_]`).
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Checks if a character is insignificant whitespace.
///
/// Space, tab, line feed, carriage return and form feed.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0c')
}

/// Checks if a character ends a line.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Checks if a character opens a string literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ident_classes_are_ascii() {
        assert!(is_ident_continue('9'));
        assert!(!is_ident_start('é'));
        assert!(!is_ident_continue('é'));
        assert!(!is_ident_continue('-'));
    }

    #[test]
    fn test_whitespace() {
        for c in [' ', '\t', '\n', '\r', '\x0c'] {
            assert!(is_whitespace(c), "{:?}", c);
        }
        assert!(!is_whitespace('\u{a0}'));
        assert!(!is_whitespace(BOM));
    }

    #[test]
    fn test_line_terminators() {
        assert!(is_line_terminator('\n'));
        assert!(is_line_terminator('\r'));
        assert!(!is_line_terminator('\x0c'));
    }
}
