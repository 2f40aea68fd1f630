extern crate advent_of_code_2017 as aoc;

use aoc::{CaptchaError, Digits, Rule, Sums};
use clap::Parser;
use failure::Error;
use log::debug;
use std::io::{BufWriter, IsTerminal, Read, Write};
use std::str::FromStr;

/// Day 1: Inverse Captcha. Sum the digits that match the next digit (P1) and
/// the digit halfway around the list (P2).
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// The puzzle input. Read from standard input when omitted.
    digits: Option<String>,

    /// Print the bare sums, without the P1/P2 labels
    #[arg(short, long)]
    quiet: bool,
}

fn read_stdin() -> Result<String, Error> {
    let stdin = std::io::stdin();
    // Nothing was piped in; don't sit waiting on the terminal.
    if stdin.is_terminal() {
        return Err(CaptchaError::MissingInput.into());
    }

    let mut input = String::new();
    stdin.lock().read_to_string(&mut input)?;
    Ok(input)
}

fn report<W: Write>(out: &mut W, sums: &Sums, quiet: bool) -> Result<(), Error> {
    for &rule in Rule::ALL.iter() {
        if quiet {
            writeln!(out, "{}", sums.get(rule))?;
        } else {
            writeln!(out, "{}: {}", rule.label(), sums.get(rule))?;
        }
    }
    Ok(())
}

#[test]
fn test_report() -> Result<(), Error> {
    let sums = Digits::from_str("1212")?.sums();

    let mut out = Vec::new();
    report(&mut out, &sums, false)?;
    assert_eq!(String::from_utf8(out)?, "P1: 0\nP2: 6\n");

    let mut out = Vec::new();
    report(&mut out, &sums, true)?;
    assert_eq!(String::from_utf8(out)?, "0\n6\n");

    Ok(())
}

#[test]
fn test_args() {
    let args = Args::parse_from(vec!["day-01", "1122"]);
    assert_eq!(args.digits.as_ref().map(String::as_str), Some("1122"));
    assert!(!args.quiet);

    let args = Args::parse_from(vec!["day-01", "-q"]);
    assert_eq!(args.digits, None);
    assert!(args.quiet);
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let input = match args.digits {
        Some(digits) => {
            debug!("digits taken from the command line");
            digits
        }
        None => {
            debug!("reading digits from standard input");
            read_stdin()?
        }
    };

    let digits = Digits::from_str(&input)?;
    debug!("{} digits, halfway offset {}", digits.len(), Rule::Halfway.offset(digits.len()));

    let stdout = std::io::stdout();
    let mut handle = BufWriter::new(stdout.lock());
    report(&mut handle, &digits.sums(), args.quiet)?;
    handle.flush()?;

    Ok(())
}
