//! Core lexer implementation.
//!
//! This module contains the main Lexer struct and its core methods.

use tracing::{debug, trace};
use worm_util::{DiagnosticBuilder, Handler, Span};

use crate::chars::{is_ident_start, is_quote, is_whitespace, BOM};
use crate::config::LexerConfig;
use crate::cursor::{Cursor, CursorSnapshot};
use crate::token::{Literal, Token, TokenKind};

/// Lexer for the Worm language.
///
/// The lexer transforms source code text into a stream of tokens. Lexical
/// errors are reported to the [`Handler`] and never stop the scan.
///
/// # Example
///
/// ```
/// use worm_lex::{Lexer, TokenKind};
/// use worm_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("x ?? 0", &mut handler);
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Identifier);
/// assert_eq!(lexer.next_token().lexeme, "??");
/// assert_eq!(lexer.next_token().kind, TokenKind::IntegerLiteral);
/// assert!(lexer.next_token().is_end());
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Error handler for reporting lexical errors.
    pub(crate) handler: &'a mut Handler,

    /// Keyword set and comment policy.
    pub(crate) config: LexerConfig,

    /// Where the current token starts.
    pub(crate) token_start: CursorSnapshot,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer with the default configuration.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        Self::with_config(source, handler, LexerConfig::default())
    }

    /// Creates a new lexer with the given configuration.
    ///
    /// The size limit of `config` is not checked here; see
    /// [`scan_with_config`](crate::scan_with_config).
    pub fn with_config(source: &'a str, handler: &'a mut Handler, config: LexerConfig) -> Self {
        let cursor = Cursor::new(source);
        let token_start = cursor.snapshot();
        Self {
            cursor,
            handler,
            config,
            token_start,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Skips whitespace, and comments unless they are kept, then dispatches
    /// on the current character. Returns an `EndOfInput` token once the
    /// source is exhausted, and keeps returning it on further calls.
    pub fn next_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();
            self.token_start = self.cursor.snapshot();

            if self.cursor.is_at_end() {
                return self.end_of_input();
            }

            if let Some(token) = self.scan_token() {
                return token;
            }
        }
    }

    /// Scans the whole source, including the trailing `EndOfInput` token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_end();
            tokens.push(token);
            if done {
                break;
            }
        }

        debug!(
            tokens = tokens.len(),
            diagnostics = self.handler.error_count(),
            "scan finished"
        );
        tokens
    }

    /// Scans one lexeme starting at the current character.
    ///
    /// Returns `None` when the lexeme produced no token: a discarded
    /// comment, or a character that was reported and skipped.
    pub(crate) fn scan_token(&mut self) -> Option<Token> {
        match self.cursor.current_char() {
            '#' => self.lex_line_comment(),
            c if is_quote(c) => match self.block_comment_delimiter() {
                Some(delimiter) => self.lex_block_comment(delimiter),
                None => Some(self.lex_string()),
            },
            c if is_ident_start(c) => Some(self.lex_identifier()),
            c if c.is_ascii_digit() => Some(self.lex_number()),
            _ => self.lex_operator(),
        }
    }

    fn skip_whitespace(&mut self) {
        if self.cursor.position() == 0 && self.cursor.current_char() == BOM {
            self.cursor.advance();
        }

        while !self.cursor.is_at_end() && is_whitespace(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }

    fn end_of_input(&self) -> Token {
        let span = Span::point(self.cursor.position(), self.cursor.line(), self.cursor.column());
        Token::new(TokenKind::EndOfInput, "", None, span)
    }

    /// Builds a token covering the source from the token start to the cursor.
    pub(crate) fn make_token(&self, kind: TokenKind, literal: Option<Literal>) -> Token {
        Token::new(
            kind,
            self.cursor.slice_from(self.token_start.position),
            literal,
            self.token_span(),
        )
    }

    /// Span from the start of the current token to the cursor.
    #[inline]
    pub(crate) fn token_span(&self) -> Span {
        self.span_from(self.token_start)
    }

    /// Span from a snapshot to the cursor.
    pub(crate) fn span_from(&self, start: CursorSnapshot) -> Span {
        Span::new(start.position, self.cursor.position(), start.line, start.column)
    }

    /// Span of the single character under the cursor.
    pub(crate) fn char_span(&self) -> Span {
        let position = self.cursor.position();
        let width = self.cursor.remaining().chars().next().map_or(0, char::len_utf8);
        Span::new(position, position + width, self.cursor.line(), self.cursor.column())
    }

    /// Reports a lexical error to the handler.
    pub(crate) fn report(&mut self, diagnostic: DiagnosticBuilder) {
        let diagnostic = diagnostic.build();
        trace!(
            code = %diagnostic.kind.code(),
            line = diagnostic.line(),
            column = diagnostic.column(),
            "{}",
            diagnostic.message
        );
        self.handler.emit_diagnostic(diagnostic);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}
