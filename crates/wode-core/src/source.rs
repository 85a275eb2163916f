// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The source text model.
//!
//! A [`Source`] wraps the raw text of one file or snippet together with an
//! optional display name, and resolves absolute byte offsets into
//! line/column coordinates for diagnostics. The line-start table is built
//! once at construction; every later query is a binary search.
//!
//! Lines are 1-based and columns are 0-based byte offsets within the line.

use crate::source_analysis::Span;

/// An immutable source file or snippet.
///
/// # Examples
///
/// ```
/// use wode_core::source::Source;
///
/// let source = Source::with_name("demo.wode", "let x = 1;\nx + 2;\n");
/// assert_eq!(source.line_col(11), (2, 0));
/// assert_eq!(source.line_text(2), "x + 2;");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    name: Option<String>,
    text: String,
    /// Byte offset of the first character of each line.
    line_starts: Vec<u32>,
}

impl Source {
    /// Creates an anonymous source (REPL input, test snippets).
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let line_starts = line_starts(&text);
        Self {
            name: None,
            text,
            line_starts,
        }
    }

    /// Creates a source with a display name used in diagnostics.
    #[must_use]
    pub fn with_name(name: impl Into<String>, text: impl Into<String>) -> Self {
        let mut source = Self::new(text);
        source.name = Some(name.into());
        source
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the full source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the length of the source text in bytes.
    #[expect(
        clippy::cast_possible_truncation,
        reason = "source files over 4GB are not supported"
    )]
    #[must_use]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Returns true if the source text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns the text covered by `span` — the lexeme of a token whose
    /// span this is.
    ///
    /// # Panics
    ///
    /// Panics if the span is out of bounds or not on character boundaries.
    /// The scanner and parser only hand out spans they produced, so this
    /// indicates a programming error, not bad input.
    #[must_use]
    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.as_range()]
    }

    /// Resolves an absolute byte offset to `(line, column)` coordinates.
    ///
    /// Lines are 1-based; columns are 0-based. Offset `len()` (one past the
    /// last character) resolves to the position just after the final line,
    /// which is where end-of-file diagnostics point.
    ///
    /// # Panics
    ///
    /// Panics if `offset > len()`.
    #[must_use]
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        assert!(
            offset <= self.len(),
            "offset {offset} is out of bounds for source of length {}",
            self.len()
        );
        let line_index = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let column = offset - self.line_starts[line_index];
        (u32::try_from(line_index).expect("line count fits in u32") + 1, column)
    }

    /// Returns the text of the given 1-based line, without its terminator.
    ///
    /// # Panics
    ///
    /// Panics if the line number is 0 or beyond the last line.
    #[must_use]
    pub fn line_text(&self, line: u32) -> &str {
        let line_index = line.checked_sub(1).expect("line numbers are 1-based") as usize;
        let start = self.line_starts[line_index] as usize;
        let end = self
            .line_starts
            .get(line_index + 1)
            .map_or(self.text.len(), |&next| next as usize);
        self.text[start..end].trim_end_matches(['\n', '\r'])
    }
}

/// Computes the byte offset of the start of each line.
///
/// There is always at least one line; a trailing newline opens a final
/// empty line so that offset `len` stays resolvable.
#[expect(
    clippy::cast_possible_truncation,
    reason = "source files over 4GB are not supported"
)]
fn line_starts(text: &str) -> Vec<u32> {
    let mut starts = vec![0];
    for (offset, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(offset as u32 + 1);
        }
    }
    starts
}
