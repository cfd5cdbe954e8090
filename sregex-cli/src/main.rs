use clap::Parser;
use sregex::{ParseError, Regex};
use std::io::{self, BufRead};
use std::process::ExitCode;
use thiserror::Error;

/// Match lines from standard input against a regular expression.
///
/// The pattern is compiled to a DFA once; every line read from stdin is then run through the
/// automaton and reported as `Result: ACCEPTED` or `Result: NOT ACCEPTED`.
#[derive(Debug, Parser)]
#[command(name = "sregex", version, about)]
struct SregexArgs {
    /// The pattern to compile
    pattern: String,
    /// Accept a line if any substring of it matches, instead of the whole line
    #[arg(long)]
    test: bool,
    /// Print the transition table of the compiled DFA before matching
    #[arg(long)]
    table: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error("invalid pattern: {0}")]
    Pattern(#[from] ParseError),
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
}

fn run(args: &SregexArgs) -> Result<(), Error> {
    let regex = Regex::compile(&args.pattern)?;

    if args.table {
        println!("{}", regex.dfa().to_table());
        println!();
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        let accepted = if args.test {
            regex.test(&line)
        } else {
            regex.accepts(&line)
        };
        println!(
            "Result: {}",
            if accepted { "ACCEPTED" } else { "NOT ACCEPTED" }
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = SregexArgs::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("sregex: {error}");
            ExitCode::FAILURE
        }
    }
}
