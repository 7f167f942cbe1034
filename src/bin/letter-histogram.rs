//! Prints a histogram of the frequencies of the characters a-z read from stdin.
//!
//! Run:
//! ```bash
//! $ letter-histogram -h
//! ```
//! to see which parameters can be tweaked.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use letter_histogram::params::{Args, Params};
use letter_histogram::{run, Outcome};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match try_main() {
        Ok(Outcome::Histogram) => ExitCode::SUCCESS,
        Ok(Outcome::NoMatch) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn try_main() -> Result<Outcome> {
    let args = Args::parse();
    let params = Params::from_args(&args)?;
    log::debug!("{params:?}");

    let stdin = io::stdin().lock();
    let mut stdout = BufWriter::new(io::stdout().lock());
    let outcome = run(stdin, &mut stdout, &params)?;
    stdout.flush().context("could not write output")?;
    Ok(outcome)
}
