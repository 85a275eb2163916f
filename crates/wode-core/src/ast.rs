// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The abstract syntax tree for Wode expressions.
//!
//! Every node carries the [`Token`]s it was built from, so any node can
//! report its exact source [`Span`] and recover its lexemes from the
//! [`Source`](crate::source::Source) without storing copies of the text.

use crate::source_analysis::{Span, Token};

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    /// A literal value: an integer, float, string, `true`, `false`, or
    /// `nothing`.
    Literal(Token),
    /// A reference to a named value.
    Variable(Token),
    /// A prefix operator applied to an operand, such as `-x` or `!done`.
    Unary {
        /// The operator token.
        operator: Token,
        /// The operand the operator applies to.
        operand: Box<Expression>,
    },
    /// An infix operator with two operands, such as `a + b`.
    Binary {
        /// The left-hand operand.
        left: Box<Expression>,
        /// The operator token.
        operator: Token,
        /// The right-hand operand.
        right: Box<Expression>,
    },
    /// A parenthesised expression.
    Grouping(Box<Expression>),
}

impl Expression {
    /// Returns the source span this expression covers.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Literal(token) | Self::Variable(token) => token.span,
            Self::Unary { operator, operand } => operator.span.merge(operand.span()),
            Self::Binary { left, right, .. } => left.span().merge(right.span()),
            Self::Grouping(inner) => inner.span(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::TokenKind;

    #[test]
    fn spans_cover_whole_subtrees() {
        // -1 + 2
        let expr = Expression::Binary {
            left: Box::new(Expression::Unary {
                operator: Token::new(TokenKind::Minus, Span::new(0, 1)),
                operand: Box::new(Expression::Literal(Token::new(
                    TokenKind::Integer,
                    Span::new(1, 2),
                ))),
            }),
            operator: Token::new(TokenKind::Plus, Span::new(3, 4)),
            right: Box::new(Expression::Literal(Token::new(
                TokenKind::Integer,
                Span::new(5, 6),
            ))),
        };
        assert_eq!(expr.span(), Span::new(0, 6));
    }
}
