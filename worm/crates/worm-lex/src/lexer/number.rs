//! Number literal lexing.
//!
//! Integers and floats with `_` digit separators and an optional exponent:
//!
//! ```text
//! digits ('.' digits)? (('e' | 'E') ('+' | '-')? digits)?
//! digits = digit (digit | '_')*
//! ```

use worm_util::{DiagnosticBuilder, DiagnosticKind, Span};

use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a number literal starting at an ASCII digit.
    ///
    /// Misplaced separators are reported once per literal, at the first
    /// offending `_`, and the literal is still decoded without them. Values
    /// that do not fit (`u64` overflow, infinite floats) are reported and the
    /// token carries no literal.
    pub(crate) fn lex_number(&mut self) -> Token {
        let mut misplaced_separator = None;
        let mut is_float = false;

        self.eat_digits(&mut misplaced_separator);

        if self.cursor.current_char() == '.' && self.cursor.peek_char(1).is_ascii_digit() {
            self.cursor.advance();
            self.eat_digits(&mut misplaced_separator);
            is_float = true;
        }

        if self.at_exponent() {
            self.cursor.advance();
            if matches!(self.cursor.current_char(), '+' | '-') {
                self.cursor.advance();
            }
            self.eat_digits(&mut misplaced_separator);
            is_float = true;
        }

        let text = self.cursor.slice_from(self.token_start.position);
        let digits: String = text.chars().filter(|&c| c != '_').collect();

        let (kind, literal) = if is_float {
            let value = digits.parse::<f64>().ok().filter(|v| v.is_finite());
            (TokenKind::FloatLiteral, value.map(Literal::Float))
        } else {
            let value = digits.parse::<u64>().ok();
            (TokenKind::IntegerLiteral, value.map(Literal::Integer))
        };

        if let Some(span) = misplaced_separator {
            self.report(
                DiagnosticBuilder::new(
                    DiagnosticKind::MalformedNumber,
                    format!("misplaced digit separator in `{}`", text),
                )
                .span(span)
                .help("`_` may only appear between two digits"),
            );
        } else if literal.is_none() {
            let diagnostic = if is_float {
                DiagnosticBuilder::new(
                    DiagnosticKind::MalformedNumber,
                    format!("float literal `{}` is out of range", text),
                )
            } else {
                DiagnosticBuilder::new(
                    DiagnosticKind::MalformedNumber,
                    format!("integer literal `{}` is too large", text),
                )
                .note(format!("the maximum integer is {}", u64::MAX))
            };
            self.report(diagnostic.span(self.token_span()));
        }

        self.make_token(kind, literal)
    }

    /// Consumes a run of digits and separators.
    ///
    /// Records the span of the first separator that does not sit between
    /// two digits.
    fn eat_digits(&mut self, misplaced: &mut Option<Span>) {
        let mut after_digit = false;
        loop {
            match self.cursor.current_char() {
                c if c.is_ascii_digit() => after_digit = true,
                '_' => {
                    let next = self.cursor.peek_char(1);
                    let between_digits = after_digit && (next.is_ascii_digit() || next == '_');
                    if !between_digits && misplaced.is_none() {
                        *misplaced = Some(self.char_span());
                    }
                    after_digit = false;
                },
                _ => return,
            }
            self.cursor.advance();
        }
    }

    /// Checks for an exponent marker followed by a digit, with an optional sign.
    fn at_exponent(&self) -> bool {
        if !matches!(self.cursor.current_char(), 'e' | 'E') {
            return false;
        }
        match self.cursor.peek_char(1) {
            '+' | '-' => self.cursor.peek_char(2).is_ascii_digit(),
            c => c.is_ascii_digit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Literal, Token, TokenKind};
    use crate::Lexer;
    use worm_util::{Diagnostic, Handler, Span};

    fn lex_number(source: &str) -> (Token, Vec<Diagnostic>) {
        let mut handler = Handler::new();
        let token = Lexer::new(source, &mut handler).lex_number();
        (token, handler.into_diagnostics())
    }

    #[test]
    fn test_integer() {
        let (token, diags) = lex_number("42;");
        assert_eq!(token.kind, TokenKind::IntegerLiteral);
        assert_eq!(token.lexeme, "42");
        assert_eq!(token.literal, Some(Literal::Integer(42)));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_separators_are_stripped() {
        let (token, diags) = lex_number("1_000_000");
        assert_eq!(token.literal, Some(Literal::Integer(1_000_000)));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_float_with_separator() {
        let (token, diags) = lex_number("99.999_999");
        assert_eq!(token.kind, TokenKind::FloatLiteral);
        assert_eq!(token.literal, Some(Literal::Float(99.999999)));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_exponents() {
        let (token, _) = lex_number("1e10");
        assert_eq!(token.literal, Some(Literal::Float(1e10)));

        let (token, _) = lex_number("2.5E-3");
        assert_eq!(token.lexeme, "2.5E-3");
        assert_eq!(token.literal, Some(Literal::Float(2.5e-3)));

        let (token, _) = lex_number("7e+2");
        assert_eq!(token.literal, Some(Literal::Float(700.0)));
    }

    #[test]
    fn test_exponent_needs_digit() {
        let (token, _) = lex_number("1e");
        assert_eq!(token.lexeme, "1");
        assert_eq!(token.kind, TokenKind::IntegerLiteral);

        let (token, _) = lex_number("3e+x");
        assert_eq!(token.lexeme, "3");
    }

    #[test]
    fn test_dot_without_digit_is_not_consumed() {
        let (token, _) = lex_number("1.x");
        assert_eq!(token.lexeme, "1");
        assert_eq!(token.kind, TokenKind::IntegerLiteral);
    }

    #[test]
    fn test_second_dot_ends_literal() {
        let (token, _) = lex_number("1.5.6");
        assert_eq!(token.lexeme, "1.5");
    }

    #[test]
    fn test_doubled_separator() {
        let (token, diags) = lex_number("1__0;");
        assert_eq!(token.lexeme, "1__0");
        assert_eq!(token.literal, Some(Literal::Integer(10)));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].span, Span::new(2, 3, 1, 3));
    }

    #[test]
    fn test_trailing_separator() {
        let (token, diags) = lex_number("12_ ");
        assert_eq!(token.lexeme, "12_");
        assert_eq!(token.literal, Some(Literal::Integer(12)));
        assert_eq!(diags[0].column(), 3);
    }

    #[test]
    fn test_separator_next_to_dot() {
        let (token, diags) = lex_number("1_.5");
        assert_eq!(token.literal, Some(Literal::Float(1.5)));
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].column(), 2);
    }

    #[test]
    fn test_separator_before_exponent() {
        let (token, diags) = lex_number("1_e3");
        assert_eq!(token.lexeme, "1_e3");
        assert_eq!(token.literal, Some(Literal::Float(1000.0)));
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_one_diagnostic_per_literal() {
        let (_, diags) = lex_number("1__2__3_");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].column(), 3);
    }

    #[test]
    fn test_integer_overflow() {
        let (token, diags) = lex_number("18446744073709551616");
        assert_eq!(token.kind, TokenKind::IntegerLiteral);
        assert_eq!(token.literal, None);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].span, Span::new(0, 20, 1, 1));
    }

    #[test]
    fn test_max_integer_fits() {
        let (token, diags) = lex_number("18446744073709551615");
        assert_eq!(token.literal, Some(Literal::Integer(u64::MAX)));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_infinite_float() {
        let (token, diags) = lex_number("1e999");
        assert_eq!(token.kind, TokenKind::FloatLiteral);
        assert_eq!(token.literal, None);
        assert!(diags[0].message.contains("out of range"));
    }
}
