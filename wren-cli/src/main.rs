//! Wren CLI
//!
//! Tokenizes an HTML document and prints the token stream.

use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;
use serde::Serialize;
use wren_common::warning::set_quiet;
use wren_html::{CharSource, HTMLTokenizer, IoSource, ParseError, StringSource, Token};

/// Wren: print the tokens of an HTML document
#[derive(Parser, Debug)]
#[command(name = "wren")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Tokenize a file
    wren ./index.html

    # Tokenize standard input
    cat index.html | wren -

    # Tokenize an HTML string and show parse errors
    wren --errors --html '<p id=a id=b>'

    # Tokenize the content of a <script> element
    wren --fragment script --html 'if (a < b) {}</script>'

    # Machine-readable output
    wren --json ./index.html
"#)]
struct Cli {
    /// Path to an HTML file, or `-` for standard input
    #[arg(value_name = "FILE", required_unless_present = "html")]
    path: Option<String>,

    /// Tokenize the given HTML string instead of a file
    #[arg(long, value_name = "HTML", conflicts_with = "path")]
    html: Option<String>,

    /// Print the token stream and parse errors as JSON
    #[arg(long)]
    json: bool,

    /// Print parse errors after the tokens
    #[arg(long)]
    errors: bool,

    /// Do not print diagnostic warnings while tokenizing
    #[arg(short, long)]
    quiet: bool,

    /// Tokenize as the content of this element (e.g. `script`, `title`)
    #[arg(long, value_name = "ELEMENT")]
    fragment: Option<String>,
}

/// Everything one run of the tokenizer produced.
#[derive(Debug, Serialize)]
struct Report {
    tokens: Vec<Token>,
    errors: Vec<ParseError>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    set_quiet(cli.quiet);

    let report = if let Some(ref html) = cli.html {
        tokenize(StringSource::new(html.as_str()), &cli).0
    } else if let Some(ref path) = cli.path {
        if path == "-" {
            let stdin = io::stdin().lock();
            let (report, mut tokenizer) = tokenize(IoSource::new(stdin), &cli);
            if let Some(err) = tokenizer.source_mut().take_error() {
                return Err(err).context("failed to read standard input");
            }
            report
        } else {
            let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
            let (report, mut tokenizer) = tokenize(IoSource::new(file), &cli);
            if let Some(err) = tokenizer.source_mut().take_error() {
                return Err(err).with_context(|| format!("failed to read {path}"));
            }
            report
        }
    } else {
        anyhow::bail!("expected a file path, `-`, or --html")
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for token in &report.tokens {
        print_token(token);
    }

    if cli.errors {
        println!();
        println!("=== Parse Errors ({}) ===", report.errors.len());
        for error in &report.errors {
            println!("{}", error.red());
        }
    }

    Ok(())
}

/// Run a tokenizer over `source` to the end of input.
///
/// The tokenizer is handed back so the caller can inspect its source.
fn tokenize<S: CharSource>(source: S, cli: &Cli) -> (Report, HTMLTokenizer<S>) {
    let mut tokenizer = match cli.fragment {
        Some(ref element) => HTMLTokenizer::new_fragment(source, element),
        None => HTMLTokenizer::from_source(source),
    };
    let tokens = tokenizer.run();
    let errors = tokenizer.take_errors();
    (Report { tokens, errors }, tokenizer)
}

/// Print one token, colored by kind.
fn print_token(token: &Token) {
    match token {
        Token::Doctype { .. } => println!("{}", token.magenta()),
        Token::StartTag { .. } => println!("{}", token.cyan()),
        Token::EndTag { .. } => println!("{}", token.blue()),
        Token::Comment { .. } => println!("{}", token.bright_black()),
        Token::Text { .. } => println!("{}", token.green()),
        Token::EndOfInput => println!("{}", token.dimmed()),
    }
}
