//! Identifier and keyword lexing.
//!
//! This module handles lexing of identifiers, keywords and the boolean
//! literals `True` / `False`.

use crate::chars::is_ident_continue;
use crate::token::{Literal, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an identifier, keyword or boolean literal.
    ///
    /// Identifiers start with an ASCII letter or underscore, followed by
    /// ASCII letters, digits or underscores. The word is then classified
    /// against the active keyword set.
    pub(crate) fn lex_identifier(&mut self) -> Token {
        while is_ident_continue(self.cursor.current_char()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(self.token_start.position);
        match text {
            "True" => self.make_token(TokenKind::BooleanLiteral, Some(Literal::Boolean(true))),
            "False" => self.make_token(TokenKind::BooleanLiteral, Some(Literal::Boolean(false))),
            _ => match self.config.keywords.classify(text) {
                Some(keyword) => self.make_token(TokenKind::Keyword(keyword), None),
                None => self.make_token(TokenKind::Identifier, None),
            },
        }
    }
}
