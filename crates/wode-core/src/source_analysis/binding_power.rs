// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Operator binding powers for precedence climbing.
//!
//! Each infix operator binds with a distinct strength on each side.
//! Associativity falls out of the asymmetry: a left-associative operator
//! binds tighter on its right side so the parser folds eagerly, while a
//! right-associative operator binds tighter on its left side so the
//! parser recurses first.
//!
//! Powers are spread out by a factor of ten so the one-unit nudge that
//! encodes associativity can never cross into a neighbouring precedence
//! level.

use super::TokenKind;

/// How strongly an infix operator binds to its left and right operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingPower {
    /// Binding strength toward the left operand.
    pub left: u8,
    /// Binding strength toward the right operand.
    pub right: u8,
}

impl BindingPower {
    /// A left-associative operator at precedence level `level`.
    #[must_use]
    pub const fn left_assoc(level: u8) -> Self {
        Self {
            left: level * 10,
            right: level * 10 + 1,
        }
    }

    /// A right-associative operator at precedence level `level`.
    #[must_use]
    pub const fn right_assoc(level: u8) -> Self {
        Self {
            left: level * 10 + 1,
            right: level * 10,
        }
    }
}

/// Looks up the binding power of an infix operator.
///
/// Returns `None` for every token kind that is not a recognized infix
/// operator, including the comparison operators, which are tokenized but
/// not yet part of the expression grammar.
#[must_use]
pub const fn infix_binding_power(kind: TokenKind) -> Option<BindingPower> {
    let power = match kind {
        TokenKind::Caret => BindingPower::right_assoc(9),
        TokenKind::Star | TokenKind::Slash => BindingPower::left_assoc(7),
        TokenKind::Plus | TokenKind::Minus => BindingPower::left_assoc(6),
        TokenKind::Pipe => BindingPower::left_assoc(5),
        TokenKind::AmpAmp => BindingPower::right_assoc(3),
        TokenKind::PipePipe => BindingPower::right_assoc(2),
        TokenKind::Equal => BindingPower::right_assoc(1),
        _ => return None,
    };
    Some(power)
}

/// Looks up the right binding power of a prefix operator.
///
/// Unary operators have no left operand, so a single strength suffices.
#[must_use]
pub const fn prefix_binding_power(kind: TokenKind) -> Option<u8> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some(80),
        TokenKind::Bang => Some(40),
        _ => None,
    }
}
