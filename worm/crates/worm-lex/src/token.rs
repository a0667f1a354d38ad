//! Token definitions for the Worm lexer.
//!
//! A [`Token`] is an immutable record of one lexeme: its [`TokenKind`], the
//! exact source text, an optional decoded [`Literal`] and its [`Span`].

use std::fmt;

use worm_util::Span;

/// Category of a reserved word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Reserved in every keyword set (`None`).
    Constant,
    /// Built-in type names (`int`, `float`, `str`, `bool`, `char`).
    TypeName,
    /// Statement and operator words of the full language.
    Statement,
}

macro_rules! keywords {
    ($($variant:ident => $text:literal, $category:ident;)*) => {
        /// Reserved words of the Worm language.
        ///
        /// Which of them are actually reserved during a scan depends on the
        /// active [`KeywordSet`](crate::KeywordSet).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in declaration order.
            pub const ALL: &'static [Keyword] = &[$(Keyword::$variant),*];

            /// The source spelling of this keyword.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Keyword::$variant => $text,)*
                }
            }

            /// The category this keyword belongs to.
            pub const fn category(&self) -> KeywordCategory {
                match self {
                    $(Keyword::$variant => KeywordCategory::$category,)*
                }
            }

            /// Looks up a keyword by its exact (case-sensitive) spelling.
            pub fn lookup(text: &str) -> Option<Keyword> {
                match text {
                    $($text => Some(Keyword::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

keywords! {
    None => "None", Constant;

    Int => "int", TypeName;
    Float => "float", TypeName;
    Str => "str", TypeName;
    Bool => "bool", TypeName;
    Char => "char", TypeName;

    If => "if", Statement;
    Elif => "elif", Statement;
    Else => "else", Statement;
    While => "while", Statement;
    For => "for", Statement;
    Def => "def", Statement;
    Return => "return", Statement;
    Class => "class", Statement;
    Import => "import", Statement;
    From => "from", Statement;
    As => "as", Statement;
    Try => "try", Statement;
    Except => "except", Statement;
    Finally => "finally", Statement;
    Raise => "raise", Statement;
    With => "with", Statement;
    Print => "print", Statement;
    Break => "break", Statement;
    Continue => "continue", Statement;
    In => "in", Statement;
    Is => "is", Statement;
    Not => "not", Statement;
    And => "and", Statement;
    Or => "or", Statement;
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! operators {
    ($($variant:ident => $text:literal,)*) => {
        /// Operators and punctuation.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum OperatorKind {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl OperatorKind {
            /// The operator table, longest lexemes first.
            ///
            /// The lexer picks the first entry that prefixes the remaining
            /// input, so this order implements maximal munch. New operators
            /// are added by inserting them into the block of their length.
            pub const ALL: &'static [OperatorKind] = &[$(OperatorKind::$variant),*];

            /// The source spelling of this operator.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(OperatorKind::$variant => $text,)*
                }
            }

            /// The variant name, used in machine-readable output.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(OperatorKind::$variant => stringify!($variant),)*
                }
            }
        }
    };
}

operators! {
    StarStarEq => "**=",
    SlashSlashEq => "//=",

    FatArrow => "=>",
    Arrow => "->",
    NullCoalesce => "??",
    SafeNav => "?.",
    EqEq => "==",
    NotEq => "!=",
    LtEq => "<=",
    GtEq => ">=",
    PlusEq => "+=",
    MinusEq => "-=",
    StarEq => "*=",
    SlashEq => "/=",
    PercentEq => "%=",
    StarStar => "**",
    SlashSlash => "//",

    Assign => "=",
    Colon => ":",
    Semicolon => ";",
    Comma => ",",
    Dot => ".",
    Bang => "!",
    LParen => "(",
    RParen => ")",
    LBrace => "{",
    RBrace => "}",
    LBracket => "[",
    RBracket => "]",
    Plus => "+",
    Minus => "-",
    Star => "*",
    Slash => "/",
    Percent => "%",
    Lt => "<",
    Gt => ">",
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A name that is not reserved by the active keyword set
    Identifier,
    /// A reserved word
    Keyword(Keyword),
    /// An integer literal such as `1_000_000`
    IntegerLiteral,
    /// A literal with a fraction or an exponent, such as `99.999_999`
    FloatLiteral,
    /// A quoted string literal
    StringLiteral,
    /// `True` or `False`
    BooleanLiteral,
    /// An operator or punctuation mark
    Operator(OperatorKind),
    /// A line or block comment (only produced when comments are kept)
    Comment,
    /// End of the source buffer, always the last token
    EndOfInput,
}

impl TokenKind {
    /// Snake-case name of the kind, without its payload.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword(_) => "keyword",
            TokenKind::IntegerLiteral => "integer_literal",
            TokenKind::FloatLiteral => "float_literal",
            TokenKind::StringLiteral => "string_literal",
            TokenKind::BooleanLiteral => "boolean_literal",
            TokenKind::Operator(_) => "operator",
            TokenKind::Comment => "comment",
            TokenKind::EndOfInput => "end_of_input",
        }
    }

    /// Returns true for the literal kinds.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::BooleanLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "keyword `{}`", kw),
            TokenKind::Operator(op) => write!(f, "operator `{}`", op),
            other => f.write_str(other.name()),
        }
    }
}

/// A decoded literal value.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// Integer value with digit separators removed
    Integer(u64),
    /// Floating-point value with digit separators removed
    Float(f64),
    /// String contents with escapes resolved
    String(String),
    /// Boolean value of `True` / `False`
    Boolean(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Float(x) => write!(f, "{}", x),
            Literal::String(s) => write!(f, "{:?}", s),
            Literal::Boolean(b) => write!(f, "{}", b),
        }
    }
}

/// A single lexical token.
///
/// # Example
///
/// ```
/// use worm_lex::{scan, Literal, TokenKind};
///
/// let result = scan("count = 42");
/// let number = &result.tokens[2];
///
/// assert_eq!(number.kind, TokenKind::IntegerLiteral);
/// assert_eq!(number.lexeme, "42");
/// assert_eq!(number.literal, Some(Literal::Integer(42)));
/// assert_eq!((number.line(), number.column()), (1, 9));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// Classification of the token
    pub kind: TokenKind,
    /// Exact source text of the token
    pub lexeme: String,
    /// Decoded value, for literal kinds
    pub literal: Option<Literal>,
    /// Source location of the lexeme
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            span,
        }
    }

    /// Line where the lexeme starts (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Column where the lexeme starts (1-based, in characters).
    #[inline]
    pub fn column(&self) -> u32 {
        self.span.column
    }

    /// Returns true if this is the end-of-input marker.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} at {}", self.kind.name(), self.lexeme, self.span)?;
        if let Some(literal) = &self.literal {
            write!(f, " = {}", literal)?;
        }
        Ok(())
    }
}
