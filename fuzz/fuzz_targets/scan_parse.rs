// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for scanner and parser crash safety.
//!
//! Feeds arbitrary byte sequences through the full front end and asserts
//! that it never panics: every input must produce tokens plus scan
//! errors, then expressions plus parse errors.
//!
//! # Success Criteria
//!
//! - No panic on any input (including invalid UTF-8, which is filtered
//!   out before scanning since sources are strings)
//! - The token stream always ends in EOF
//! - No assertion fails during scanning or parsing

#![no_main]

use libfuzzer_sys::fuzz_target;
use wode_core::source::Source;
use wode_core::source_analysis::{parse, scan};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let source = Source::new(text);
        let (tokens, _scan_errors) = scan(&source);
        assert!(tokens.last().is_some_and(|t| t.kind.is_eof()));

        // Success = no panic. Errors are expected and fine.
        let (_expressions, _parse_errors) = parse(tokens);
    }
});
