// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! S-expression rendering of the AST.
//!
//! An [`SExpression`] is a compact, order-preserving picture of a parse
//! tree: atoms for leaves and operator-first lists for everything else.
//! `1 + 2 * 3` becomes `(+ 1 (* 2 3))`. Parser tests assert against
//! these rather than against nested [`Expression`] constructors.

use ecow::EcoString;

use crate::ast::Expression;
use crate::source::Source;
use crate::source_analysis::TokenKind;

/// A rendered expression: an atom or a list of s-expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SExpression {
    /// A leaf: a literal's lexeme, a variable name, or an operator.
    Atom(EcoString),
    /// An operator-first list, such as `(+ 1 2)`.
    List(Vec<SExpression>),
}

impl SExpression {
    fn atom(text: impl Into<EcoString>) -> Self {
        Self::Atom(text.into())
    }
}

impl std::fmt::Display for SExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atom(text) => f.write_str(text),
            Self::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Converts an expression into its s-expression rendering.
///
/// Leaves render as their lexemes, recovered from `source`. String
/// literals are re-quoted so `"a"` stays distinguishable from the
/// variable `a`. Groupings render as `(group ...)`.
#[must_use]
pub fn to_s_expression(expression: &Expression, source: &Source) -> SExpression {
    match expression {
        Expression::Literal(token) => {
            let lexeme = token.lexeme(source);
            if token.kind == TokenKind::String {
                SExpression::atom(format!("\"{lexeme}\""))
            } else {
                SExpression::atom(lexeme)
            }
        }
        Expression::Variable(token) => SExpression::atom(token.lexeme(source)),
        Expression::Unary { operator, operand } => SExpression::List(vec![
            SExpression::atom(operator.lexeme(source)),
            to_s_expression(operand, source),
        ]),
        Expression::Binary {
            left,
            operator,
            right,
        } => SExpression::List(vec![
            SExpression::atom(operator.lexeme(source)),
            to_s_expression(left, source),
            to_s_expression(right, source),
        ]),
        Expression::Grouping(inner) => SExpression::List(vec![
            SExpression::atom("group"),
            to_s_expression(inner, source),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source_analysis::{parse, scan};

    fn render(text: &str) -> Vec<String> {
        let source = Source::new(text);
        let (tokens, scan_errors) = scan(&source);
        assert!(scan_errors.is_empty(), "scan errors: {scan_errors:?}");
        let (expressions, parse_errors) = parse(tokens);
        assert!(parse_errors.is_empty(), "parse errors: {parse_errors:?}");
        expressions
            .iter()
            .map(|e| to_s_expression(e, &source).to_string())
            .collect()
    }

    #[test]
    fn atoms_render_bare() {
        assert_eq!(render("123;"), ["123"]);
        assert_eq!(render("123.456;"), ["123.456"]);
        assert_eq!(render("nothing;"), ["nothing"]);
        assert_eq!(render("x;"), ["x"]);
    }

    #[test]
    fn strings_are_requoted() {
        assert_eq!(render("\"a\";"), ["\"a\""]);
    }

    #[test]
    fn operators_render_prefix() {
        assert_eq!(render("1 + 2 * 3;"), ["(+ 1 (* 2 3))"]);
        assert_eq!(render("-x;"), ["(- x)"]);
        assert_eq!(render("(1 + 2) * 3;"), ["(* (group (+ 1 2)) 3)"]);
    }
}
