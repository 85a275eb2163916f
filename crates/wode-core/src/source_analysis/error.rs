// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Error types for the Wode front end.
//!
//! Errors carry source locations ([`Span`]) for precise diagnostics.
//! They integrate with [`miette`] for beautiful error reporting, and can
//! also be rendered as plain text via [`ScanError::render`] and
//! [`ParseError::render`].
//!
//! Errors are values, not exceptions: both the scanner and the parser
//! collect them and keep going, so one mistake never hides the next.

// Spurious warnings from miette derive macro expansion
#![allow(unused_assignments)]

use ecow::EcoString;
use miette::Diagnostic;
use thiserror::Error;

use crate::source::Source;

use super::{Span, TokenKind};

/// A lexical error encountered during scanning.
///
/// The scanner uses error recovery, so lexical errors never stop the
/// scan; they accumulate alongside the token stream.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct ScanError {
    /// The kind of lexical error.
    #[source]
    pub kind: ScanErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl ScanError {
    /// Creates a new lexical error.
    #[must_use]
    pub fn new(kind: ScanErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected end of file" error.
    #[must_use]
    pub fn unexpected_end_of_file(span: Span) -> Self {
        Self::new(ScanErrorKind::UnexpectedEndOfFile, span)
    }

    /// Creates an "unknown character" error.
    #[must_use]
    pub fn unknown_character(c: char, span: Span) -> Self {
        Self::new(ScanErrorKind::UnknownCharacter(c), span)
    }

    /// Creates an "unterminated float" error.
    ///
    /// `partial` is the text consumed so far, ending in the dangling dot.
    #[must_use]
    pub fn unterminated_float(partial: impl Into<EcoString>, span: Span) -> Self {
        Self::new(ScanErrorKind::UnterminatedFloat(partial.into()), span)
    }

    /// Creates a "no leading zero on float" error.
    #[must_use]
    pub fn no_leading_zero(span: Span) -> Self {
        Self::new(ScanErrorKind::NoLeadingZeroOnFloat, span)
    }

    /// Creates a "too many decimal points" error.
    #[must_use]
    pub fn too_many_decimal_points(span: Span) -> Self {
        Self::new(ScanErrorKind::TooManyDecimalPoints, span)
    }

    /// Renders this error as plain text with the offending line and a
    /// caret marker.
    #[must_use]
    pub fn render(&self, source: &Source) -> String {
        render_with_source(&self.kind.to_string(), self.span, source)
    }
}

/// The kind of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanErrorKind {
    /// The source ended inside a construct, such as an unclosed string.
    #[error("unexpected end of file")]
    UnexpectedEndOfFile,

    /// A character with no meaning in Wode was encountered.
    #[error("unknown character '{0}'")]
    UnknownCharacter(char),

    /// A float literal ended at its decimal point.
    #[error("unterminated float literal '{0}', expected a digit as in '{0}0'")]
    UnterminatedFloat(EcoString),

    /// A float literal began with a bare decimal point.
    #[error("float literal is missing a leading zero before the decimal point")]
    NoLeadingZeroOnFloat,

    /// A float literal contained more than one decimal point.
    #[error("too many decimal points in float literal")]
    TooManyDecimalPoints,
}

/// A syntax error encountered during parsing.
///
/// The parser recovers at statement boundaries, so one malformed
/// expression never stops the parse of the rest of the program.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("{kind}")]
#[diagnostic()]
pub struct ParseError {
    /// The kind of syntax error.
    #[source]
    pub kind: ParseErrorKind,
    /// The source location of the error.
    #[label("here")]
    pub span: Span,
}

impl ParseError {
    /// Creates a new syntax error.
    #[must_use]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates an "unexpected end of expression" error.
    #[must_use]
    pub fn unexpected_end_of_expression(span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedEndOfExpression, span)
    }

    /// Creates an "unexpected token" error.
    #[must_use]
    pub fn unexpected_token_type(kind: TokenKind, span: Span) -> Self {
        Self::new(ParseErrorKind::UnexpectedTokenType(kind), span)
    }

    /// Creates an "expected semicolon" error.
    #[must_use]
    pub fn expected_semicolon(span: Span) -> Self {
        Self::new(ParseErrorKind::ExpectedSemicolon, span)
    }

    /// Renders this error as plain text with the offending line and a
    /// caret marker.
    #[must_use]
    pub fn render(&self, source: &Source) -> String {
        render_with_source(&self.kind.to_string(), self.span, source)
    }
}

/// The kind of syntax error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A statement ended where an expression was still expected.
    #[error("unexpected end of expression")]
    UnexpectedEndOfExpression,

    /// A token that cannot appear at this point in an expression.
    #[error("unexpected token `{0}`")]
    UnexpectedTokenType(TokenKind),

    /// A statement's expression was not followed by `;`.
    #[error("expected `;` after expression")]
    ExpectedSemicolon,
}

/// Renders a diagnostic as plain text: the message, a `name:line:col`
/// locator, the offending line, and a caret run under the span.
fn render_with_source(message: &str, span: Span, source: &Source) -> String {
    let start = span.start().min(source.len());
    let end = span.end().clamp(start, source.len());
    let (line, byte_column) = source.line_col(start);
    let line_text = source.line_text(line);

    // Pad and mark in characters, not bytes, so the caret lines up under
    // multi-byte text.
    let prefix = &line_text[..(byte_column as usize).min(line_text.len())];
    let column = prefix.chars().count();
    let spanned = source.slice(Span::new(start, end));
    let spanned = spanned.split(['\n', '\r']).next().unwrap_or("");
    let caret_count = spanned.chars().count().max(1);
    let marker = format!("{}{}", " ".repeat(column), "^".repeat(caret_count));

    let name = source.name().unwrap_or("<source>");
    format!("{message}\n{name}:{line}:{col}\n{line_text}\n{marker}", col = column + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_display() {
        let err = ScanError::unknown_character('§', Span::new(0, 2));
        assert_eq!(err.to_string(), "unknown character '§'");

        let err = ScanError::unterminated_float("123.", Span::new(0, 4));
        assert_eq!(
            err.to_string(),
            "unterminated float literal '123.', expected a digit as in '123.0'"
        );
    }

    #[test]
    fn parse_error_display() {
        let err = ParseError::unexpected_token_type(TokenKind::Star, Span::new(0, 1));
        assert_eq!(err.to_string(), "unexpected token `*`");

        let err = ParseError::expected_semicolon(Span::point(3));
        assert_eq!(err.to_string(), "expected `;` after expression");
    }

    #[test]
    fn scan_error_span() {
        let err = ScanError::no_leading_zero(Span::new(5, 9));
        assert_eq!(err.span.start(), 5);
        assert_eq!(err.span.end(), 9);
    }

    #[test]
    fn render_points_at_offending_text() {
        let source = Source::with_name("bad.wode", "1 + §;\n");
        let err = ScanError::unknown_character('§', Span::new(4, 6));
        assert_eq!(
            err.render(&source),
            "unknown character '§'\nbad.wode:1:5\n1 + §;\n    ^"
        );
    }

    #[test]
    fn render_on_later_line() {
        let source = Source::new("1;\n2 +;\n");
        let err = ParseError::unexpected_end_of_expression(Span::new(6, 7));
        assert_eq!(
            err.render(&source),
            "unexpected end of expression\n<source>:2:4\n2 +;\n   ^"
        );
    }

    #[test]
    fn render_clamps_caret_at_end_of_source() {
        let source = Source::new("\"abc");
        let err = ScanError::unexpected_end_of_file(Span::point(4));
        assert_eq!(
            err.render(&source),
            "unexpected end of file\n<source>:1:5\n\"abc\n    ^"
        );
    }
}
