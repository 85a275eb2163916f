// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests for the `wode` binary.
//!
//! Each test runs the real binary against a fixture file under
//! `tests/fixtures/` and checks the printed s-expressions, the emitted
//! diagnostics, and the exit code.

use assert_cmd::Command;
use predicates::prelude::*;

fn wode() -> Command {
    Command::cargo_bin("wode").expect("binary builds")
}

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn prints_s_expressions_for_a_clean_file() {
    wode()
        .arg(fixture("ok.wode"))
        .assert()
        .success()
        .stdout(predicate::str::contains("(+ 1 (* 2 3))"))
        .stdout(predicate::str::contains("(|> (group (- x y)) f)"));
}

#[test]
fn dumps_tokens_when_asked() {
    wode()
        .arg(fixture("ok.wode"))
        .arg("--tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("Integer"))
        .stdout(predicate::str::contains("Eof"));
}

#[test]
fn scan_errors_fail_with_a_diagnostic() {
    wode()
        .arg(fixture("scan_error.wode"))
        .arg("--plain")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("too many decimal points"))
        .stderr(predicate::str::contains("scan_error.wode:1:1"));
}

#[test]
fn parse_errors_fail_but_good_statements_still_print() {
    wode()
        .arg(fixture("parse_error.wode"))
        .arg("--plain")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("(+ 1 2)"))
        .stderr(predicate::str::contains("unexpected end of expression"));
}

#[test]
fn missing_file_reports_an_io_error() {
    wode()
        .arg(fixture("does_not_exist.wode"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
