//! Comment lexing.
//!
//! `#` starts a line comment. `"""` or `'''` opens a block comment only when
//! the same triple closes it later in the input. An unclosed triple is left
//! to the string scanner, so `"""abc"` reads as `""` followed by `"abc"`.
//! Comments become tokens only when
//! [`LexerConfig::include_comments`](crate::LexerConfig::include_comments)
//! is set.

use crate::chars::is_line_terminator;
use crate::token::{Token, TokenKind};
use crate::Lexer;

const DOUBLE_TRIPLE: &str = "\"\"\"";
const SINGLE_TRIPLE: &str = "'''";

impl<'a> Lexer<'a> {
    /// Lexes a line comment up to, but not including, the line terminator.
    pub(crate) fn lex_line_comment(&mut self) -> Option<Token> {
        while !self.cursor.is_at_end() && !is_line_terminator(self.cursor.current_char()) {
            self.cursor.advance();
        }
        self.comment_token()
    }

    /// The delimiter of a closed block comment starting at the cursor.
    pub(crate) fn block_comment_delimiter(&self) -> Option<&'static str> {
        let rest = self.cursor.remaining();
        [DOUBLE_TRIPLE, SINGLE_TRIPLE].into_iter().find(|delimiter| {
            rest.strip_prefix(delimiter)
                .is_some_and(|body| body.contains(delimiter))
        })
    }

    /// Lexes a block comment through its closing `delimiter`.
    ///
    /// Block comments do not nest.
    pub(crate) fn lex_block_comment(&mut self, delimiter: &str) -> Option<Token> {
        self.cursor.advance_n(delimiter.len());
        while !self.cursor.is_at_end() && !self.cursor.starts_with(delimiter) {
            self.cursor.advance();
        }
        self.cursor.advance_n(delimiter.len());

        self.comment_token()
    }

    fn comment_token(&self) -> Option<Token> {
        self.config
            .include_comments
            .then(|| self.make_token(TokenKind::Comment, None))
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{Token, TokenKind};
    use crate::{Lexer, LexerConfig};
    use worm_util::{DiagnosticKind, Handler};

    fn lex_with_comments(source: &str) -> (Vec<Token>, Handler) {
        let mut handler = Handler::new();
        let config = LexerConfig::default().with_comments(true);
        let tokens = Lexer::with_config(source, &mut handler, config).tokenize();
        (tokens, handler)
    }

    #[test]
    fn test_line_comment_discarded_by_default() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("# note\nx", &mut handler).tokenize();
        assert_eq!(tokens[0].lexeme, "x");
        assert_eq!(tokens[0].line(), 2);
    }

    #[test]
    fn test_line_comment_token_excludes_newline() {
        let (tokens, _) = lex_with_comments("x # note\r\ny");
        assert_eq!(tokens[1].kind, TokenKind::Comment);
        assert_eq!(tokens[1].lexeme, "# note");
        assert_eq!(tokens[2].lexeme, "y");
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let (tokens, handler) = lex_with_comments("\"\"\"a\nb\"\"\" z");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(tokens[0].lexeme, "\"\"\"a\nb\"\"\"");
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 6));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_single_quoted_block_comment() {
        let (tokens, _) = lex_with_comments("'''doc ''' x");
        assert_eq!(tokens[0].lexeme, "'''doc '''");
    }

    #[test]
    fn test_block_comment_needs_matching_closer() {
        let (tokens, handler) = lex_with_comments("'''a\"\"\"");
        let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["''", "'a\"\"\"", ""]);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(handler.count_of(DiagnosticKind::UnterminatedString), 1);
    }

    #[test]
    fn test_unclosed_triple_quote_is_strings() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("x \"\"\" never closed", &mut handler).tokenize();
        assert_eq!(tokens[1].lexeme, "\"\"");
        assert_eq!(tokens[2].lexeme, "\" never closed");
        assert!(tokens[3].is_end());

        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.kind, DiagnosticKind::UnterminatedString);
        assert_eq!(diag.column(), 5);
    }

    #[test]
    fn test_four_quotes_are_two_empty_strings() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("''''", &mut handler).tokenize();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lexeme, "''");
        assert_eq!(tokens[1].lexeme, "''");
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_empty_string_is_not_a_comment() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("\"\" x", &mut handler).tokenize();
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[1].lexeme, "x");
    }
}
