// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Wode front-end command-line interface.
//!
//! This is the main entry point for the `wode` command. It scans and
//! parses a source file, prints the parsed statements as s-expressions,
//! and reports every scan and parse error found along the way.

use camino::Utf8PathBuf;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::debug;
use wode_core::sexpr::to_s_expression;
use wode_core::source::Source;
use wode_core::source_analysis::{parse, scan};

mod diagnostic;

use diagnostic::FrontEndDiagnostic;

/// Wode: scan and parse a source file
#[derive(Debug, Parser)]
#[command(name = "wode")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Source file to scan and parse
    file: Utf8PathBuf,

    /// Print the token stream instead of the parsed statements
    #[arg(long)]
    tokens: bool,

    /// Render errors as plain text instead of rich diagnostics
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    // Install miette's fancy error handler
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))?;

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let clean = run(&cli)?;
    if !clean {
        std::process::exit(1);
    }
    Ok(())
}

/// Runs the front end over one file. Returns whether it was error-free.
fn run(cli: &Cli) -> Result<bool> {
    let text = std::fs::read_to_string(&cli.file).into_diagnostic()?;
    let source = Source::with_name(cli.file.as_str(), text);

    let (tokens, scan_errors) = scan(&source);
    debug!(tokens = tokens.len(), errors = scan_errors.len(), "scanned {}", cli.file);

    if cli.tokens {
        for token in &tokens {
            println!(
                "{:>5}..{:<5} {:?} {:?}",
                token.span.start(),
                token.span.end(),
                token.kind,
                token.lexeme(&source),
            );
        }
    }

    // Scan errors make the token stream unreliable, so parsing would only
    // add noise on top of them.
    if !scan_errors.is_empty() {
        for error in &scan_errors {
            if cli.plain {
                eprintln!("{}", error.render(&source));
            } else {
                let diag = FrontEndDiagnostic::from_scan_error(error, &source, cli.file.as_str());
                eprintln!("{:?}", miette::Report::new(diag));
            }
        }
        return Ok(false);
    }

    let (expressions, parse_errors) = parse(tokens);
    debug!(
        expressions = expressions.len(),
        errors = parse_errors.len(),
        "parsed {}",
        cli.file
    );

    if !cli.tokens {
        for expression in &expressions {
            println!("{}", to_s_expression(expression, &source));
        }
    }

    for error in &parse_errors {
        if cli.plain {
            eprintln!("{}", error.render(&source));
        } else {
            let diag = FrontEndDiagnostic::from_parse_error(error, &source, cli.file.as_str());
            eprintln!("{:?}", miette::Report::new(diag));
        }
    }

    Ok(parse_errors.is_empty())
}
