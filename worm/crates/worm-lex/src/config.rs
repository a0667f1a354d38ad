//! Lexer configuration.
//!
//! A [`LexerConfig`] selects which words are reserved, whether comments are
//! returned as tokens and how large an input the scanner accepts.

use crate::error::{LexError, LexResult};
use crate::token::{Keyword, KeywordCategory};

/// The set of reserved words used to classify identifiers.
///
/// `None` is reserved in every set. `True` and `False` are always boolean
/// literals and are not affected by the keyword set.
///
/// # Example
///
/// ```
/// use worm_lex::{Keyword, KeywordSet};
///
/// assert_eq!(KeywordSet::Core.classify("int"), None);
/// assert_eq!(KeywordSet::TypeNames.classify("int"), Some(Keyword::Int));
/// assert_eq!(KeywordSet::Extended.classify("elif"), Some(Keyword::Elif));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum KeywordSet {
    /// Only `None`; type names stay identifiers
    #[default]
    Core,
    /// `None` plus the built-in type names
    TypeNames,
    /// Every Worm keyword, including statement words
    Extended,
}

impl KeywordSet {
    /// Returns true if `keyword` is reserved under this set.
    pub const fn reserves(&self, keyword: Keyword) -> bool {
        match keyword.category() {
            KeywordCategory::Constant => true,
            KeywordCategory::TypeName => !matches!(self, KeywordSet::Core),
            KeywordCategory::Statement => matches!(self, KeywordSet::Extended),
        }
    }

    /// Classifies an identifier-shaped word.
    pub fn classify(&self, text: &str) -> Option<Keyword> {
        Keyword::lookup(text).filter(|kw| self.reserves(*kw))
    }

    /// Kebab-case name of the set.
    pub const fn name(&self) -> &'static str {
        match self {
            KeywordSet::Core => "core",
            KeywordSet::TypeNames => "type-names",
            KeywordSet::Extended => "extended",
        }
    }
}

/// Configuration for a scan.
///
/// # Example
///
/// ```
/// use worm_lex::{KeywordSet, LexerConfig};
///
/// let config = LexerConfig::default()
///     .with_keywords(KeywordSet::Extended)
///     .with_comments(true)
///     .with_max_source_size(1 << 20);
///
/// assert!(config.include_comments);
/// assert_eq!(config.max_source_size, Some(1 << 20));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Reserved words
    pub keywords: KeywordSet,
    /// Emit `Comment` tokens instead of discarding comments
    pub include_comments: bool,
    /// Maximum accepted source size in bytes
    pub max_source_size: Option<usize>,
}

impl LexerConfig {
    /// Sets the keyword set.
    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }

    /// Sets whether comments are emitted as tokens.
    pub fn with_comments(mut self, include_comments: bool) -> Self {
        self.include_comments = include_comments;
        self
    }

    /// Sets the maximum source size in bytes.
    pub fn with_max_source_size(mut self, limit: usize) -> Self {
        self.max_source_size = Some(limit);
        self
    }

    /// Checks a source size against the configured limit.
    pub fn check_size(&self, size: usize) -> LexResult<()> {
        match self.max_source_size {
            Some(limit) if size > limit => Err(LexError::SourceTooLarge { size, limit }),
            _ => Ok(()),
        }
    }
}
