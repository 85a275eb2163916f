// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Parsing infrastructure for Wode source code.
//!
//! This module contains the scanner, the parser, and their shared
//! token, span, and error types.
//!
//! # Lexical Analysis
//!
//! The [`scan`] function converts a [`Source`](crate::source::Source)
//! into a stream of [`Token`]s plus any [`ScanError`]s. Each token
//! carries its exact location via [`Span`]; lexemes are recovered from
//! the source on demand.
//!
//! ```
//! use wode_core::source::Source;
//! use wode_core::source_analysis::scan;
//!
//! let (tokens, errors) = scan(&Source::new("x + 1;"));
//! assert!(errors.is_empty());
//! assert_eq!(tokens.len(), 5); // x, +, 1, ;, EOF
//! ```
//!
//! See [`TokenKind`] for all supported syntactic elements.
//!
//! # Parsing
//!
//! The [`parse`] function converts tokens into
//! [`Expression`](crate::ast::Expression)s using precedence climbing
//! over the [`binding_power`] table.
//!
//! # Error Handling
//!
//! Both passes recover from errors and collect them as values: the
//! scanner resumes at the next character, the parser at the next
//! statement. See [`ScanError`] and [`ParseError`].

pub mod binding_power;
mod error;
mod parser;
mod scanner;
mod span;
mod token;


pub use error::{ParseError, ParseErrorKind, ScanError, ScanErrorKind};
pub use parser::parse;
pub use scanner::scan;
pub use span::Span;
pub use token::{Token, TokenKind};
