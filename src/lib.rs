//! This program reads text from stdin, counts the occurrences of every
//! lowercase letter and prints a histogram of their relative frequencies.
//!
//! Every letter gets a line with its count and a bar of symbols. The most
//! frequent letter gets the longest bar; any letter seen at least once gets
//! at least one symbol.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use common::frequency::FrequencyTable;
use common::histogram::{draw_histogram, draw_not_found, Report};

pub mod params;
pub mod reader;

pub use common;
use params::{Format, Params};

/// What [`run`] ended up printing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// At least one character was counted and the histogram was printed
    Histogram,
    /// Nothing in range was read, the "no character found" message was printed
    NoMatch,
}

/// Reads all of `input`, then writes the histogram (or the "no character found"
/// message) to `out`.
pub fn run(input: impl BufRead, out: &mut impl Write, params: &Params) -> Result<Outcome> {
    let table = reader::read_table(input)?;
    let max_frq = table.max_frequency();
    log::debug!("max frequency: {max_frq}");

    if max_frq == 0 {
        draw_not_found(out, FrequencyTable::BOUNDS).context("could not write output")?;
        return Ok(Outcome::NoMatch);
    }

    match params.format {
        Format::Text => {
            draw_histogram(out, &table, max_frq, params.style).context("could not write output")?
        }
        Format::Json => {
            let report = Report::new(&table, max_frq, params.style);
            serde_json::to_writer(&mut *out, &report).context("could not serialize report")?;
            writeln!(out).context("could not write output")?;
        }
    }
    Ok(Outcome::Histogram)
}
