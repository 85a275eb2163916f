// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Beautiful error diagnostics using miette.
//!
//! Converts wode-core scan and parse errors into miette-formatted
//! errors with:
//! - Source code context
//! - Arrows pointing to the error location
//! - Diagnostic codes for easy reference

// Suppress unused_assignments for struct fields used by derive macros
#![allow(unused_assignments)]

use miette::{Diagnostic, SourceSpan};
use wode_core::source::Source;
use wode_core::source_analysis::{ParseError, ScanError, Span};

/// A front-end diagnostic with rich formatting.
#[derive(Debug, Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(wode::syntax))]
pub struct FrontEndDiagnostic {
    /// Human-readable error message.
    pub message: String,
    /// Source code for context.
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the error.
    #[label("here")]
    pub span: SourceSpan,
}

impl FrontEndDiagnostic {
    fn new(message: String, span: Span, source: &Source, path: &str) -> Self {
        Self {
            message,
            src: miette::NamedSource::new(path, source.text().to_string()),
            span: (span.start() as usize, span.len() as usize).into(),
        }
    }

    /// Wraps a scanner error for display.
    pub fn from_scan_error(error: &ScanError, source: &Source, path: &str) -> Self {
        Self::new(error.kind.to_string(), error.span, source, path)
    }

    /// Wraps a parser error for display.
    pub fn from_parse_error(error: &ParseError, source: &Source, path: &str) -> Self {
        Self::new(error.kind.to_string(), error.span, source, path)
    }
}
