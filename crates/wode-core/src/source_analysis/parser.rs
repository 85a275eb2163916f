// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The Wode expression parser.
//!
//! A precedence-climbing parser over the scanner's token stream. Each
//! statement is one expression terminated by `;`. Operator precedence
//! and associativity come entirely from the
//! [`binding powers`](super::binding_power), so the grammar has a single
//! expression rule: parse a primary, then fold infix operators while
//! their left binding power stays at or above the current minimum.
//!
//! # Error Recovery
//!
//! The parser recovers per statement. A failure aborts the current
//! statement (no partial node is kept) and parsing resumes from wherever
//! the cursor landed; it does not skip ahead to a synchronisation point,
//! so one missing token can produce follow-on errors. Every error path
//! consumes at least one token, which guarantees the statement loop
//! always reaches EOF.
//!
//! # Example
//!
//! ```
//! use wode_core::source::Source;
//! use wode_core::source_analysis::{parse, scan};
//! use wode_core::sexpr::to_s_expression;
//!
//! let source = Source::new("1 + 2 * 3;");
//! let (tokens, _) = scan(&source);
//! let (expressions, errors) = parse(tokens);
//! assert!(errors.is_empty());
//! assert_eq!(
//!     to_s_expression(&expressions[0], &source).to_string(),
//!     "(+ 1 (* 2 3))"
//! );
//! ```

use crate::ast::Expression;

use super::binding_power::{infix_binding_power, prefix_binding_power};
use super::{ParseError, Span, Token, TokenKind};

/// Parses a token stream into a sequence of statement expressions.
///
/// Returns every successfully parsed statement together with every
/// error encountered. The two are independent: a program can yield both
/// expressions and errors.
#[must_use]
pub fn parse(tokens: Vec<Token>) -> (Vec<Expression>, Vec<ParseError>) {
    let mut parser = Parser::new(tokens);
    let expressions = parser.parse_program();
    (expressions, parser.errors)
}

/// The parser state: a token stream, a cursor, and accumulated errors.
struct Parser {
    tokens: Vec<Token>,
    /// Current token index.
    current: usize,
    /// Accumulated errors.
    errors: Vec<ParseError>,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            errors: Vec::new(),
        }
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Returns the current token.
    ///
    /// Reading at or past the end of the stream yields the trailing EOF
    /// token (synthesized if the stream is empty) rather than panicking.
    fn current_token(&self) -> Token {
        if let Some(&token) = self.tokens.get(self.current) {
            return token;
        }
        let end = self.tokens.last().map_or(0, |t| t.span.end());
        Token::new(TokenKind::Eof, Span::point(end))
    }

    /// Checks if we're at the end of input.
    fn is_at_end(&self) -> bool {
        self.current_token().kind.is_eof()
    }

    /// Advances to the next token and returns the one stepped over.
    ///
    /// At EOF this is a no-op returning the EOF token, so error paths may
    /// consume unconditionally.
    fn advance(&mut self) -> Token {
        let token = self.current_token();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    // ========================================================================
    // Grammar
    // ========================================================================

    /// Parses statements until EOF.
    fn parse_program(&mut self) -> Vec<Expression> {
        let mut expressions = Vec::new();
        while !self.is_at_end() {
            match self.parse_expression() {
                Ok(expression) => {
                    let next = self.current_token();
                    if next.kind == TokenKind::Semicolon {
                        self.advance();
                        expressions.push(expression);
                    } else {
                        // The statement is incomplete, so its expression
                        // is dropped rather than kept half-formed.
                        self.errors
                            .push(ParseError::expected_semicolon(Span::point(next.span.start())));
                    }
                }
                Err(error) => self.errors.push(error),
            }
        }
        expressions
    }

    /// Parses one expression at minimum binding power zero.
    fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.expression_binding_power(0)
    }

    /// The precedence-climbing core: a primary, then infix operators
    /// while they bind at least as tightly as `min_binding_power`.
    ///
    /// Recursion depth tracks the nesting of the input, so the stack is
    /// grown on the heap when deeply nested operands run it low.
    fn expression_binding_power(
        &mut self,
        min_binding_power: u8,
    ) -> Result<Expression, ParseError> {
        stacker::maybe_grow(32 * 1024, 256 * 1024, || {
            self.expression_binding_power_inner(min_binding_power)
        })
    }

    fn expression_binding_power_inner(
        &mut self,
        min_binding_power: u8,
    ) -> Result<Expression, ParseError> {
        let mut left = self.parse_primary()?;

        loop {
            let token = self.current_token();
            // The semicolon is left for the statement loop, and a right
            // parenthesis is left for the grouping that opened it.
            if matches!(
                token.kind,
                TokenKind::Eof | TokenKind::Semicolon | TokenKind::RightParen
            ) {
                break;
            }

            let Some(power) = infix_binding_power(token.kind) else {
                self.advance();
                return Err(ParseError::unexpected_token_type(token.kind, token.span));
            };
            if power.left < min_binding_power {
                break;
            }

            self.advance();
            let right = self.expression_binding_power(power.right)?;
            left = Expression::Binary {
                left: Box::new(left),
                operator: token,
                right: Box::new(right),
            };
        }

        Ok(left)
    }

    /// Parses the start of an expression: a literal, a variable, a
    /// prefix operator, or a parenthesised group.
    fn parse_primary(&mut self) -> Result<Expression, ParseError> {
        let token = self.current_token();
        match token.kind {
            kind if kind.is_literal() => {
                self.advance();
                Ok(Expression::Literal(token))
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expression::Variable(token))
            }
            TokenKind::Plus | TokenKind::Minus | TokenKind::Bang => {
                self.advance();
                let power = prefix_binding_power(token.kind)
                    .expect("prefix operators always have a binding power");
                let operand = self.expression_binding_power(power)?;
                Ok(Expression::Unary {
                    operator: token,
                    operand: Box::new(operand),
                })
            }
            TokenKind::LeftParen => {
                self.advance();
                let inner = self.expression_binding_power(0)?;
                let closing = self.advance();
                if closing.kind == TokenKind::RightParen {
                    Ok(Expression::Grouping(Box::new(inner)))
                } else if closing.kind.is_eof() {
                    Err(ParseError::unexpected_end_of_expression(closing.span))
                } else {
                    Err(ParseError::unexpected_token_type(closing.kind, closing.span))
                }
            }
            TokenKind::Semicolon => {
                self.advance();
                Err(ParseError::unexpected_end_of_expression(token.span))
            }
            TokenKind::Eof => Err(ParseError::unexpected_end_of_expression(token.span)),
            _ => {
                self.advance();
                Err(ParseError::unexpected_token_type(token.kind, token.span))
            }
        }
    }
}
