//! String literal lexing.
//!
//! Strings are delimited by `"` or `'` and must close on the line they open.

use worm_util::{DiagnosticBuilder, DiagnosticKind};

use crate::chars::is_line_terminator;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string literal.
    ///
    /// Supports the escapes `\"`, `\'`, `\\`, `\n`, `\t`, `\r` and `\0`.
    /// An unknown escape is reported and kept verbatim. A string that hits
    /// the end of the line or input is reported as unterminated and returned
    /// with the text decoded so far.
    pub(crate) fn lex_string(&mut self) -> Token {
        let quote = self.cursor.current_char();
        self.cursor.advance();

        let mut value = String::new();
        loop {
            if self.cursor.is_at_end() || is_line_terminator(self.cursor.current_char()) {
                self.report(
                    DiagnosticBuilder::new(
                        DiagnosticKind::UnterminatedString,
                        "unterminated string literal",
                    )
                    .span(self.token_span())
                    .help(format!("add a closing `{}` before the end of the line", quote)),
                );
                return self.make_token(TokenKind::StringLiteral, Some(Literal::String(value)));
            }

            match self.cursor.current_char() {
                c if c == quote => {
                    self.cursor.advance();
                    return self.make_token(TokenKind::StringLiteral, Some(Literal::String(value)));
                },
                '\\' => self.lex_escape(&mut value),
                c => {
                    value.push(c);
                    self.cursor.advance();
                },
            }
        }
    }

    /// Decodes one escape sequence starting at a backslash.
    fn lex_escape(&mut self, value: &mut String) {
        let start = self.cursor.snapshot();
        self.cursor.advance();

        let c = self.cursor.current_char();
        if self.cursor.is_at_end() || is_line_terminator(c) {
            value.push('\\');
            return;
        }
        self.cursor.advance();

        let decoded = match c {
            '"' => '"',
            '\'' => '\'',
            '\\' => '\\',
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            '0' => '\0',
            _ => {
                value.push('\\');
                value.push(c);
                self.report(
                    DiagnosticBuilder::new(
                        DiagnosticKind::UnexpectedCharacter,
                        format!("unknown escape sequence `\\{}`", c),
                    )
                    .span(self.span_from(start))
                    .help(r#"valid escapes are \" \' \\ \n \t \r and \0"#),
                );
                return;
            },
        };
        value.push(decoded);
    }
}
