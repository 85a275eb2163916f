// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Token types for Wode lexical analysis.
//!
//! A [`Token`] is a classified, positioned slice of source text: a
//! [`TokenKind`] plus the [`Span`] it covers. The lexeme is always derived
//! from the span via [`Token::lexeme`], never stored, so tokens stay
//! `Copy` and the token stream cannot drift out of sync with its source.

use crate::source::Source;

use super::Span;

/// The kind of token, not including source location.
///
/// This is the closed set of all syntactic elements that can appear in
/// Wode source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // === Punctuation ===
    /// Left parenthesis: `(`
    LeftParen,
    /// Right parenthesis: `)`
    RightParen,
    /// Left square bracket: `[`
    LeftBracket,
    /// Right square bracket: `]`
    RightBracket,
    /// Left curly bracket: `{`
    LeftBrace,
    /// Right curly bracket: `}`
    RightBrace,
    /// Argument separator: `,`
    Comma,
    /// Statement terminator: `;`
    Semicolon,
    /// Type annotation marker: `:`
    Colon,
    /// Member access: `.`
    Dot,

    // === Operators ===
    /// Addition or unary plus: `+`
    Plus,
    /// Subtraction or unary minus: `-`
    Minus,
    /// Multiplication: `*`
    Star,
    /// Division: `/`
    Slash,
    /// Exponentiation: `^`
    Caret,
    /// Comparison: `<`
    Less,
    /// Comparison: `<=`
    LessEqual,
    /// Comparison: `>`
    Greater,
    /// Comparison: `>=`
    GreaterEqual,
    /// Equality: `==`
    EqualEqual,
    /// Inequality: `!=`
    BangEqual,
    /// Logical and: `&&`
    AmpAmp,
    /// Logical or: `||`
    PipePipe,
    /// Logical not: `!`
    Bang,
    /// Pipeline: `|>`
    Pipe,
    /// Function type arrow: `->`
    Arrow,
    /// Lambda arrow: `=>`
    FatArrow,
    /// Spread: `...`
    Ellipsis,
    /// Assignment: `=`
    Equal,

    // === Literals ===
    /// An integer literal: `123`
    Integer,
    /// A floating-point literal: `123.456`
    Float,
    /// A string literal; the span covers the content between the quotes
    String,
    /// An identifier: `foo`, `snake_case`, `_private`
    Identifier,

    // === Keywords ===
    /// The boolean literal `true`
    True,
    /// The boolean literal `false`
    False,
    /// The unit literal `nothing`
    Nothing,
    /// `if`
    If,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `for`
    For,
    /// `in`
    In,
    /// `while`
    While,
    /// `let`
    Let,
    /// `match`
    Match,
    /// `return`
    Return,
    /// `struct`
    Struct,
    /// `yield`
    Yield,

    // === Special ===
    /// A `#` line comment (comments are discarded by the scanner; the kind
    /// exists so the token taxonomy is closed over everything the grammar
    /// names)
    Comment,
    /// End of file, always present exactly once at the end of a scan
    Eof,
}

/// The reserved-word table: exact identifier text to keyword kind.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("nothing", TokenKind::Nothing),
    ("if", TokenKind::If),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("for", TokenKind::For),
    ("in", TokenKind::In),
    ("while", TokenKind::While),
    ("let", TokenKind::Let),
    ("match", TokenKind::Match),
    ("return", TokenKind::Return),
    ("struct", TokenKind::Struct),
    ("yield", TokenKind::Yield),
];

impl TokenKind {
    /// Looks up an identifier's text in the reserved-word table.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == text)
            .map(|&(_, kind)| kind)
    }

    /// Returns `true` if this token is a literal value.
    ///
    /// The keyword literals `true`, `false`, and `nothing` count;
    /// identifiers do not — they are names that reference values.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::Float | Self::String | Self::True | Self::False | Self::Nothing
        )
    }

    /// Returns `true` if this token is a reserved keyword.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::True
                | Self::False
                | Self::Nothing
                | Self::If
                | Self::Elif
                | Self::Else
                | Self::For
                | Self::In
                | Self::While
                | Self::Let
                | Self::Match
                | Self::Return
                | Self::Struct
                | Self::Yield
        )
    }

    /// Returns `true` if this is the end-of-file marker.
    #[must_use]
    pub const fn is_eof(self) -> bool {
        matches!(self, Self::Eof)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::LeftBrace => "{",
            Self::RightBrace => "}",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Dot => ".",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::Caret => "^",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::AmpAmp => "&&",
            Self::PipePipe => "||",
            Self::Bang => "!",
            Self::Pipe => "|>",
            Self::Arrow => "->",
            Self::FatArrow => "=>",
            Self::Ellipsis => "...",
            Self::Equal => "=",
            Self::Integer => "<integer>",
            Self::Float => "<float>",
            Self::String => "<string>",
            Self::Identifier => "<identifier>",
            Self::True => "true",
            Self::False => "false",
            Self::Nothing => "nothing",
            Self::If => "if",
            Self::Elif => "elif",
            Self::Else => "else",
            Self::For => "for",
            Self::In => "in",
            Self::While => "while",
            Self::Let => "let",
            Self::Match => "match",
            Self::Return => "return",
            Self::Struct => "struct",
            Self::Yield => "yield",
            Self::Comment => "<comment>",
            Self::Eof => "<eof>",
        };
        f.write_str(text)
    }
}

/// A token with its source location.
///
/// # Examples
///
/// ```
/// use wode_core::source::Source;
/// use wode_core::source_analysis::{Span, Token, TokenKind};
///
/// let source = Source::new("answer");
/// let token = Token::new(TokenKind::Identifier, Span::new(0, 6));
/// assert_eq!(token.lexeme(&source), "answer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The source span of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the literal source text this token spans.
    #[must_use]
    pub fn lexeme<'src>(&self, source: &'src Source) -> &'src str {
        source.slice(self.span)
    }
}
