//! Operator and punctuation lexing.

use worm_util::{DiagnosticBuilder, DiagnosticKind};

use crate::token::{OperatorKind, Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an operator by maximal munch over [`OperatorKind::ALL`].
    ///
    /// A character that starts no operator is reported as unexpected and
    /// skipped; no token is produced for it.
    pub(crate) fn lex_operator(&mut self) -> Option<Token> {
        let remaining = self.cursor.remaining();
        match OperatorKind::ALL.iter().find(|op| remaining.starts_with(op.as_str())) {
            Some(&op) => {
                self.cursor.advance_n(op.as_str().len());
                Some(self.make_token(TokenKind::Operator(op), None))
            },
            None => {
                self.unexpected_character();
                None
            },
        }
    }

    fn unexpected_character(&mut self) {
        let c = self.cursor.current_char();
        let span = self.char_span();
        self.cursor.advance();

        let mut diagnostic = DiagnosticBuilder::new(
            DiagnosticKind::UnexpectedCharacter,
            format!("unexpected character {:?}", c),
        )
        .span(span);
        if c == '?' {
            diagnostic = diagnostic.help("`?` is only valid in `?.` and `??`");
        }
        self.report(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use crate::token::{OperatorKind, TokenKind};
    use crate::Lexer;
    use worm_util::{DiagnosticKind, Handler};

    fn lex_ops(source: &str) -> Vec<OperatorKind> {
        let mut handler = Handler::new_panicking();
        Lexer::new(source, &mut handler)
            .map(|t| match t.kind {
                TokenKind::Operator(op) => op,
                other => panic!("expected operator, got {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_every_operator_lexes_alone() {
        for &op in OperatorKind::ALL {
            assert_eq!(lex_ops(op.as_str()), vec![op], "{}", op);
        }
    }

    #[test]
    fn test_maximal_munch() {
        assert_eq!(lex_ops("??"), vec![OperatorKind::NullCoalesce]);
        assert_eq!(lex_ops("?."), vec![OperatorKind::SafeNav]);
        assert_eq!(lex_ops("=>"), vec![OperatorKind::FatArrow]);
        assert_eq!(lex_ops("**="), vec![OperatorKind::StarStarEq]);
        assert_eq!(lex_ops("//="), vec![OperatorKind::SlashSlashEq]);
    }

    #[test]
    fn test_runs_split_greedily() {
        assert_eq!(lex_ops("==="), vec![OperatorKind::EqEq, OperatorKind::Assign]);
        assert_eq!(lex_ops("***"), vec![OperatorKind::StarStar, OperatorKind::Star]);
        assert_eq!(lex_ops("->>"), vec![OperatorKind::Arrow, OperatorKind::Gt]);
        assert_eq!(lex_ops("???."), vec![OperatorKind::NullCoalesce, OperatorKind::SafeNav]);
    }

    #[test]
    fn test_lone_question_mark() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("a ? b", &mut handler).tokenize();
        assert_eq!(tokens.len(), 3);
        assert_eq!(handler.count_of(DiagnosticKind::UnexpectedCharacter), 1);
        assert_eq!(handler.diagnostics()[0].column(), 3);
        assert_eq!(handler.diagnostics()[0].helps.len(), 1);
    }

    #[test]
    fn test_non_ascii_is_unexpected() {
        let mut handler = Handler::new();
        let tokens = Lexer::new("λ", &mut handler).tokenize();
        assert_eq!(tokens.len(), 1);
        let diag = &handler.diagnostics()[0];
        assert_eq!(diag.span.len(), 'λ'.len_utf8());
    }
}
