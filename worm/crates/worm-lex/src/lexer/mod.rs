//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, whitespace skipping and dispatch
//! - `identifier` - Identifier, keyword and boolean lexing
//! - `number` - Number literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Line and block comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
