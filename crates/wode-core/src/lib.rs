// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Wode language front end.
//!
//! This crate contains the core front-end functionality:
//! - Source and span bookkeeping
//! - Lexical analysis (tokenization with error recovery)
//! - Parsing (precedence-climbing expression parser)
//! - S-expression rendering of the AST
//!
//! Both passes collect errors as values and keep going, so a single
//! mistake never hides the rest of a program's diagnostics.
//!
//! ```
//! use wode_core::sexpr::to_s_expression;
//! use wode_core::source::Source;
//! use wode_core::source_analysis::{parse, scan};
//!
//! let source = Source::new("1 + 2 * 3;");
//! let (tokens, scan_errors) = scan(&source);
//! let (expressions, parse_errors) = parse(tokens);
//! assert!(scan_errors.is_empty() && parse_errors.is_empty());
//! assert_eq!(
//!     to_s_expression(&expressions[0], &source).to_string(),
//!     "(+ 1 (* 2 3))"
//! );
//! ```

pub mod ast;
pub mod sexpr;
pub mod source;
pub mod source_analysis;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::Expression;
    pub use crate::source::Source;
    pub use crate::source_analysis::{parse, scan, Span, Token, TokenKind};
}
