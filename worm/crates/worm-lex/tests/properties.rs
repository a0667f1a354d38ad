//! Property-based tests for worm-lex

use proptest::prelude::*;
use worm_lex::{scan, scan_with_config, LexerConfig, OperatorKind, ScanResult, TokenKind};
use worm_util::DiagnosticKind;

fn scan_keeping_comments(source: &str) -> ScanResult {
    let config = LexerConfig::default().with_comments(true);
    scan_with_config(source, &config).expect("no size limit configured")
}

/// Checks that tokens cover the source except for whitespace and reported
/// characters.
fn assert_span_coverage(source: &str) {
    let result = scan_keeping_comments(source);

    let skipped: Vec<usize> = result
        .diagnostics
        .iter()
        .filter(|d| d.kind == DiagnosticKind::UnexpectedCharacter)
        .map(|d| d.span.start)
        .collect();

    let end = result.tokens.last().expect("at least EndOfInput");
    assert!(end.is_end());
    assert_eq!(end.span.start, source.len());

    let mut covered = 0;
    for token in &result.tokens {
        assert_eq!(token.lexeme, &source[token.span.range()], "{:?}", token);
        assert!(token.span.start >= covered, "overlap at {:?}", token);

        for (offset, c) in source[covered..token.span.start].char_indices() {
            let at = covered + offset;
            let allowed = c.is_ascii_whitespace()
                || (c == '\u{FEFF}' && at == 0)
                || skipped.contains(&at);
            assert!(allowed, "uncovered {:?} at byte {}", c, at);
        }
        covered = token.span.end;
    }
}

#[test]
fn test_property_span_coverage_arbitrary_text() {
    proptest!(|(source in ".{0,64}")| {
        assert_span_coverage(&source);
    });
}

#[test]
fn test_property_span_coverage_lexer_alphabet() {
    proptest!(|(source in "[a-zA-Z0-9_ .eE+\\-\"'#\\\\\n\r\t?=*/<>!:;@$é]{0,80}")| {
        assert_span_coverage(&source);
    });
}

#[test]
fn test_property_never_panics_on_bytes() {
    proptest!(|(bytes in proptest::collection::vec(any::<u8>(), 0..128))| {
        let source = String::from_utf8_lossy(&bytes);
        let result = scan(&source);
        assert!(result.tokens.last().map_or(false, |t| t.is_end()));
    });
}

fn well_formed_lexeme() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,8}",
        "[1-9][0-9]{0,5}(_[0-9]{3}){0,2}",
        "[0-9]{1,3}\\.[0-9]{1,3}([eE][+-]?[0-9]{1,2})?",
        "\"[a-z #]{0,8}\"",
        "'[A-Z ]{0,8}'",
        proptest::sample::select(OperatorKind::ALL).prop_map(|op| op.as_str().to_string()),
    ]
}

#[test]
fn test_property_classification_is_idempotent() {
    proptest!(|(lexemes in proptest::collection::vec(well_formed_lexeme(), 0..24))| {
        let first = scan(&lexemes.join(" "));
        prop_assert!(!first.has_errors(), "{:?}", first.diagnostics);

        let rejoined: Vec<&str> = first.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        let second = scan(&rejoined.join(" "));

        let kinds = |r: &ScanResult| r.tokens.iter().map(|t| t.kind).collect::<Vec<TokenKind>>();
        prop_assert_eq!(kinds(&first), kinds(&second));
        prop_assert_eq!(first.tokens.len(), lexemes.len() + 1);
    });
}

#[test]
fn test_property_separators_do_not_change_value() {
    proptest!(|(n in 0u64..1_000_000_000)| {
        let plain = n.to_string();
        let grouped = plain
            .as_bytes()
            .rchunks(3)
            .rev()
            .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("_");

        let a = scan(&plain);
        let b = scan(&grouped);
        prop_assert!(!b.has_errors());
        prop_assert_eq!(&a.tokens[0].literal, &b.tokens[0].literal);
    });
}
