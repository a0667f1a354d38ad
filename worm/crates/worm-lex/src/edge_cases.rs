//! Edge case tests for worm-lex
