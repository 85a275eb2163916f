// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lexical analysis for Wode source code.
//!
//! This module converts source text into a stream of [`Token`]s. The
//! scanner is hand-written for maximum control over error recovery.
//!
//! # Design Principles
//!
//! - **Error recovery**: Never panic on malformed input; collect a
//!   [`ScanError`] and resume at the next character
//! - **Precise spans**: Every token carries its exact source location;
//!   lexemes are recovered from spans, never copied
//! - **Single pass**: One left-to-right walk over the text, no
//!   backtracking past a committed character
//!
//! # Example
//!
//! ```
//! use wode_core::source::Source;
//! use wode_core::source_analysis::{scan, TokenKind};
//!
//! let source = Source::new("1 + 2;");
//! let (tokens, errors) = scan(&source);
//! assert!(errors.is_empty());
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Integer,
//!         TokenKind::Plus,
//!         TokenKind::Integer,
//!         TokenKind::Semicolon,
//!         TokenKind::Eof,
//!     ]
//! );
//! ```

use std::iter::Peekable;
use std::str::CharIndices;

use crate::source::Source;

use super::{ScanError, Span, Token, TokenKind};

/// Operators spelled with three characters. Checked before the shorter
/// tables so `...` never scans as `.` `.` `.`.
const THREE_CHAR_OPERATORS: &[(&str, TokenKind)] = &[("...", TokenKind::Ellipsis)];

/// Operators spelled with two characters. Checked before the one-character
/// table so `<=` never scans as `<` `=`.
const TWO_CHAR_OPERATORS: &[(&str, TokenKind)] = &[
    ("->", TokenKind::Arrow),
    ("!=", TokenKind::BangEqual),
    ("<=", TokenKind::LessEqual),
    ("==", TokenKind::EqualEqual),
    ("=>", TokenKind::FatArrow),
    (">=", TokenKind::GreaterEqual),
    ("|>", TokenKind::Pipe),
    ("&&", TokenKind::AmpAmp),
    ("||", TokenKind::PipePipe),
];

/// Single-character tokens.
fn single_char_token(c: char) -> Option<TokenKind> {
    let kind = match c {
        '(' => TokenKind::LeftParen,
        ')' => TokenKind::RightParen,
        '[' => TokenKind::LeftBracket,
        ']' => TokenKind::RightBracket,
        '{' => TokenKind::LeftBrace,
        '}' => TokenKind::RightBrace,
        ',' => TokenKind::Comma,
        ';' => TokenKind::Semicolon,
        ':' => TokenKind::Colon,
        '.' => TokenKind::Dot,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '^' => TokenKind::Caret,
        '<' => TokenKind::Less,
        '>' => TokenKind::Greater,
        '!' => TokenKind::Bang,
        '=' => TokenKind::Equal,
        _ => return None,
    };
    Some(kind)
}

/// Scans an entire source into tokens and errors.
///
/// The token stream always ends with exactly one zero-length
/// [`TokenKind::Eof`] token, whatever errors occurred along the way.
#[must_use]
pub fn scan(source: &Source) -> (Vec<Token>, Vec<ScanError>) {
    let mut scanner = Scanner::new(source);
    scanner.scan_all();
    (scanner.tokens, scanner.errors)
}

/// A scanner that tokenizes Wode source code.
///
/// # Error Recovery
///
/// The scanner never fails completely. Unknown characters, malformed
/// float literals, and unterminated strings each record a [`ScanError`]
/// and scanning resumes right after the rejected text, so one mistake
/// never hides later ones.
struct Scanner<'src> {
    /// The source text being scanned.
    text: &'src str,
    /// Character iterator with byte positions.
    chars: Peekable<CharIndices<'src>>,
    /// Current byte position in source.
    position: usize,
    /// Tokens produced so far.
    tokens: Vec<Token>,
    /// Errors collected so far.
    errors: Vec<ScanError>,
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("position", &self.position)
            .field("remaining", &self.text.get(self.position..).unwrap_or(""))
            .finish()
    }
}

impl<'src> Scanner<'src> {
    fn new(source: &'src Source) -> Self {
        let text = source.text();
        Self {
            text,
            chars: text.char_indices().peekable(),
            position: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, c)| c)
    }

    /// Peeks `n+1` characters ahead without consuming (n=0 is same as
    /// `peek_char`, n=1 returns the second character, etc.).
    fn peek_char_n(&self, n: usize) -> Option<char> {
        let mut iter = self.chars.clone();
        for _ in 0..n {
            iter.next();
        }
        iter.next().map(|(_, c)| c)
    }

    /// Consumes the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let (pos, c) = self.chars.next()?;
        self.position = pos + c.len_utf8();
        Some(c)
    }

    /// Consumes characters while the predicate is true.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek_char().is_some_and(&predicate) {
            self.advance();
        }
    }

    /// Returns the current byte position.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    fn current_position(&self) -> u32 {
        self.position as u32
    }

    /// Creates a span from start to current position.
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.current_position())
    }

    /// Extracts source text for a span.
    fn text_for(&self, span: Span) -> &'src str {
        &self.text[span.as_range()]
    }

    /// Returns `true` if the remaining source starts with `needle`.
    fn rest_starts_with(&self, needle: &str) -> bool {
        self.text[self.position..].starts_with(needle)
    }

    fn push_token(&mut self, kind: TokenKind, span: Span) {
        self.tokens.push(Token::new(kind, span));
    }

    /// Scans to the end of the source, then appends the EOF token.
    fn scan_all(&mut self) {
        while self.peek_char().is_some() {
            self.scan_token();
        }
        let end = self.current_position();
        self.push_token(TokenKind::Eof, Span::point(end));
    }

    /// Scans one lexeme, pushing a token, an error, or (for whitespace
    /// and comments) nothing at all.
    fn scan_token(&mut self) {
        let start = self.current_position();
        let Some(c) = self.peek_char() else {
            return;
        };

        match c {
            ' ' | '\t' | '\r' | '\n' => {
                self.advance_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
            }
            '#' => self.scan_comment(),
            '"' => self.scan_string(),
            _ => {
                if self.scan_operator(start) {
                    return;
                }
                if c.is_ascii_digit() || (c == '.' && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())) {
                    self.scan_number(start);
                } else if let Some(kind) = single_char_token(c) {
                    self.advance();
                    self.push_token(kind, self.span_from(start));
                } else if c.is_alphabetic() || c == '_' {
                    self.scan_identifier(start);
                } else {
                    self.advance();
                    self.errors
                        .push(ScanError::unknown_character(c, self.span_from(start)));
                }
            }
        }
    }

    /// Scans a `#` line comment. The comment and its terminating newline
    /// are consumed and discarded; nothing is emitted.
    fn scan_comment(&mut self) {
        self.advance();
        self.advance_while(|c| c != '\n');
        // The newline belongs to the comment, not to the next token.
        if self.peek_char() == Some('\n') {
            self.advance();
        }
    }

    /// Scans a string literal. Strings are raw: any character except the
    /// closing quote is content, newlines included, and there are no
    /// escape sequences. The token's span covers the content between the
    /// quotes, so the lexeme is the string's value.
    fn scan_string(&mut self) {
        self.advance();
        let content_start = self.current_position();
        self.advance_while(|c| c != '"');
        let content_span = self.span_from(content_start);

        if self.peek_char() == Some('"') {
            self.advance();
            self.push_token(TokenKind::String, content_span);
        } else {
            let position = self.current_position();
            self.errors
                .push(ScanError::unexpected_end_of_file(Span::point(position)));
        }
    }

    /// Tries the multi-character operator tables, longest spelling first.
    fn scan_operator(&mut self, start: u32) -> bool {
        for &(spelling, kind) in THREE_CHAR_OPERATORS {
            if self.rest_starts_with(spelling) {
                for _ in 0..spelling.len() {
                    self.advance();
                }
                self.push_token(kind, self.span_from(start));
                return true;
            }
        }
        for &(spelling, kind) in TWO_CHAR_OPERATORS {
            if self.rest_starts_with(spelling) {
                for _ in 0..spelling.len() {
                    self.advance();
                }
                self.push_token(kind, self.span_from(start));
                return true;
            }
        }
        false
    }

    /// Scans an integer or float literal.
    ///
    /// Malformed floats are consumed whole into an error so the scanner
    /// resumes cleanly after them: a bare `.5` is a missing leading zero,
    /// a dangling `123.` is unterminated, and `1.2.3` has one decimal
    /// point too many.
    fn scan_number(&mut self, start: u32) {
        if self.peek_char() == Some('.') {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
            self.errors
                .push(ScanError::no_leading_zero(self.span_from(start)));
            return;
        }

        self.advance_while(|c| c.is_ascii_digit());

        if self.peek_char() != Some('.') {
            self.push_token(TokenKind::Integer, self.span_from(start));
            return;
        }
        // An ellipsis after a number is not a decimal point.
        if self.rest_starts_with("...") {
            self.push_token(TokenKind::Integer, self.span_from(start));
            return;
        }

        self.advance();
        if !self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            let partial = self.text_for(self.span_from(start));
            self.errors
                .push(ScanError::unterminated_float(partial, self.span_from(start)));
            return;
        }
        self.advance_while(|c| c.is_ascii_digit());

        if self.peek_char() == Some('.') && !self.rest_starts_with("...") {
            // Consume the rest of the digit/dot run so scanning resumes
            // after the whole malformed literal.
            self.advance_while(|c| c.is_ascii_digit() || c == '.');
            self.errors
                .push(ScanError::too_many_decimal_points(self.span_from(start)));
            return;
        }

        self.push_token(TokenKind::Float, self.span_from(start));
    }

    /// Scans an identifier or keyword with maximal munch.
    fn scan_identifier(&mut self, start: u32) {
        self.advance();
        self.advance_while(|c| c.is_alphanumeric() || c == '_');
        let span = self.span_from(start);
        let kind =
            TokenKind::from_keyword(self.text_for(span)).unwrap_or(TokenKind::Identifier);
        self.push_token(kind, span);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::ScanErrorKind;

    fn scan_text(text: &str) -> (Vec<Token>, Vec<ScanError>) {
        scan(&Source::new(text))
    }

    /// Scans and returns `(kind, lexeme)` pairs, excluding EOF.
    fn simplified(text: &str) -> Vec<(TokenKind, String)> {
        let source = Source::new(text);
        let (tokens, errors) = scan(&source);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        tokens
            .iter()
            .take_while(|t| !t.kind.is_eof())
            .map(|t| (t.kind, t.lexeme(&source).to_string()))
            .collect()
    }

    fn error_kinds(text: &str) -> Vec<ScanErrorKind> {
        let (_, errors) = scan_text(text);
        errors.into_iter().map(|e| e.kind).collect()
    }

    #[test]
    fn empty_source_is_just_eof() {
        let (tokens, errors) = scan_text("");
        assert!(errors.is_empty());
        assert_eq!(tokens, [Token::new(TokenKind::Eof, Span::point(0))]);
    }

    #[test]
    fn whitespace_only_source_is_just_eof() {
        let (tokens, errors) = scan_text("  \t\r\n  \n");
        assert!(errors.is_empty());
        assert_eq!(tokens, [Token::new(TokenKind::Eof, Span::point(8))]);
    }

    #[test]
    fn integers_and_floats() {
        assert_eq!(
            simplified("123; 456.789;"),
            [
                (TokenKind::Integer, "123".into()),
                (TokenKind::Semicolon, ";".into()),
                (TokenKind::Float, "456.789".into()),
                (TokenKind::Semicolon, ";".into()),
            ]
        );
    }

    #[test]
    fn float_error_taxonomy() {
        assert_eq!(error_kinds(".456;"), [ScanErrorKind::NoLeadingZeroOnFloat]);
        assert_eq!(
            error_kinds("123.;"),
            [ScanErrorKind::UnterminatedFloat("123.".into())]
        );
        assert_eq!(
            error_kinds("123.456.789;"),
            [ScanErrorKind::TooManyDecimalPoints]
        );
    }

    #[test]
    fn malformed_float_yields_no_number_token() {
        let (tokens, _) = scan_text("123.456.789;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(kinds, [TokenKind::Semicolon, TokenKind::Eof]);
    }

    #[test]
    fn scanning_resumes_after_malformed_float() {
        let source = Source::new("1.2.3 4;");
        let (tokens, errors) = scan(&source);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ScanErrorKind::TooManyDecimalPoints);
        assert_eq!(tokens[0].lexeme(&source), "4");
    }

    #[test]
    fn string_span_covers_content_between_quotes() {
        let source = Source::new("\"hello\";");
        let (tokens, errors) = scan(&source);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].span, Span::new(1, 6));
        assert_eq!(tokens[0].lexeme(&source), "hello");
    }

    #[test]
    fn strings_may_span_lines_and_hold_comment_markers() {
        let source = Source::new("\"line one\nline two # not a comment\";");
        let (tokens, errors) = scan(&source);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(
            tokens[0].lexeme(&source),
            "line one\nline two # not a comment"
        );
    }

    #[test]
    fn empty_string_literal() {
        let source = Source::new("\"\";");
        let (tokens, errors) = scan(&source);
        assert!(errors.is_empty());
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].span, Span::point(1));
    }

    #[test]
    fn unterminated_string() {
        let (tokens, errors) = scan_text("\"abc");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind.is_eof());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ScanErrorKind::UnexpectedEndOfFile);
        assert_eq!(errors[0].span, Span::point(4));
    }

    #[test]
    fn comments_produce_no_tokens() {
        assert_eq!(
            simplified("1; # the rest of this line vanishes\n2;"),
            [
                (TokenKind::Integer, "1".into()),
                (TokenKind::Semicolon, ";".into()),
                (TokenKind::Integer, "2".into()),
                (TokenKind::Semicolon, ";".into()),
            ]
        );
    }

    #[test]
    fn comment_at_end_of_file_without_newline() {
        let (tokens, errors) = scan_text("# trailing");
        assert!(errors.is_empty());
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind.is_eof());
    }

    #[test]
    fn maximal_munch_on_operators() {
        assert_eq!(
            simplified("!=!"),
            [
                (TokenKind::BangEqual, "!=".into()),
                (TokenKind::Bang, "!".into()),
            ]
        );
        assert_eq!(simplified("..."), [(TokenKind::Ellipsis, "...".into())]);
        assert_eq!(
            simplified("|> ||"),
            [
                (TokenKind::Pipe, "|>".into()),
                (TokenKind::PipePipe, "||".into()),
            ]
        );
    }

    #[test]
    fn keywords_require_a_word_boundary() {
        assert_eq!(simplified("formula"), [(TokenKind::Identifier, "formula".into())]);
        assert_eq!(simplified("for"), [(TokenKind::For, "for".into())]);
        assert_eq!(
            simplified("for mula"),
            [
                (TokenKind::For, "for".into()),
                (TokenKind::Identifier, "mula".into()),
            ]
        );
    }

    #[test]
    fn operator_soup() {
        let kinds: Vec<_> = simplified("!*+-/ =<><=>===!=->=>")
            .into_iter()
            .map(|(kind, _)| kind)
            .collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Bang,
                TokenKind::Star,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Slash,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::EqualEqual,
                TokenKind::BangEqual,
                TokenKind::Arrow,
                TokenKind::FatArrow,
            ]
        );
    }

    #[test]
    fn integer_before_ellipsis_stays_an_integer() {
        assert_eq!(
            simplified("1...10"),
            [
                (TokenKind::Integer, "1".into()),
                (TokenKind::Ellipsis, "...".into()),
                (TokenKind::Integer, "10".into()),
            ]
        );
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(
            simplified("let truth = true;"),
            [
                (TokenKind::Let, "let".into()),
                (TokenKind::Identifier, "truth".into()),
                (TokenKind::Equal, "=".into()),
                (TokenKind::True, "true".into()),
                (TokenKind::Semicolon, ";".into()),
            ]
        );
        assert_eq!(
            simplified("_private nothing42"),
            [
                (TokenKind::Identifier, "_private".into()),
                (TokenKind::Identifier, "nothing42".into()),
            ]
        );
    }

    #[test]
    fn unknown_character_is_skipped_and_reported() {
        let source = Source::new("1 § 2;");
        let (tokens, errors) = scan(&source);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ScanErrorKind::UnknownCharacter('§'));
        assert_eq!(errors[0].span, Span::new(2, 4));
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Integer,
                TokenKind::Integer,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn multiple_independent_errors_are_all_reported() {
        assert_eq!(
            error_kinds("§ 1.2.3 \"open"),
            [
                ScanErrorKind::UnknownCharacter('§'),
                ScanErrorKind::TooManyDecimalPoints,
                ScanErrorKind::UnexpectedEndOfFile,
            ]
        );
    }

    #[test]
    fn eof_is_always_last_and_zero_length() {
        for text in ["", "1 + 2;", "\"open", "§§§"] {
            let source = Source::new(text);
            let (tokens, _) = scan(&source);
            let last = tokens.last().unwrap();
            assert!(last.kind.is_eof());
            assert_eq!(last.span, Span::point(source.len()));
        }
    }

    #[test]
    fn spans_reconstruct_the_source() {
        let source = Source::new("let x = (1 + 2.5) |> f;");
        let (tokens, errors) = scan(&source);
        assert!(errors.is_empty());
        for token in &tokens {
            assert!(token.span.end() <= source.len());
            assert!(token.span.start() <= token.span.end());
        }
        // Tokens appear in source order.
        for pair in tokens.windows(2) {
            assert!(pair[0].span.end() <= pair[1].span.start() + 1);
        }
    }
}
