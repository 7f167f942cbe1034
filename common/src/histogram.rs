use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::bounds::Bounds;
use crate::constants::{MAX_SYMS, NEW_LINE, NOT_FOUND_MSG, SYM_HIST};
use crate::frequency::FrequencyTable;

/// How bars are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    /// Length of the longest bar
    pub max_syms: usize,
    pub symbol: char,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            max_syms: MAX_SYMS,
            symbol: SYM_HIST,
        }
    }
}

/// Number of symbols to draw for `count` given the largest count `max_frq`.
///
/// Any non-zero count gets at least one symbol.
///
/// # Panics
///
/// Panics if `max_frq` is zero.
pub fn bar_len(count: u64, max_frq: u64, max_syms: usize) -> usize {
    assert!(max_frq != 0, "max frequency must be positive");
    if count == 0 {
        return 0;
    }
    let len = u128::from(count) * max_syms as u128 / u128::from(max_frq);
    (len as usize).max(1)
}

/// Writes one line per letter: the letter, its count and its bar.
///
/// `max_frq` must be the (non-zero) maximum of `table`.
pub fn draw_histogram(
    out: &mut impl Write,
    table: &FrequencyTable,
    max_frq: u64,
    style: Style,
) -> io::Result<()> {
    assert!(max_frq != 0, "max frequency must be positive");
    for (letter, count) in table.iter() {
        write!(out, "{letter}: {count:4} : ")?;
        for _ in 0..bar_len(count, max_frq, style.max_syms) {
            write!(out, "{}", style.symbol)?;
        }
        write!(out, "{NEW_LINE}")?;
    }
    Ok(())
}

/// Writes the message used when no character between `bounds` was read
pub fn draw_not_found(out: &mut impl Write, bounds: Bounds) -> io::Result<()> {
    write!(out, "{NOT_FOUND_MSG}{bounds}.{NEW_LINE}")
}

/// Machine readable form of a histogram
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub start: char,
    pub end: char,
    pub total: u64,
    pub max: u64,
    pub counts: BTreeMap<char, u64>,
    pub bars: BTreeMap<char, usize>,
}

impl Report {
    /// `max_frq` must be the (non-zero) maximum of `table`.
    pub fn new(table: &FrequencyTable, max_frq: u64, style: Style) -> Self {
        Self {
            start: FrequencyTable::BOUNDS.start(),
            end: FrequencyTable::BOUNDS.end(),
            total: table.total(),
            max: max_frq,
            counts: table.iter().collect(),
            bars: table
                .iter()
                .map(|(l, c)| (l, bar_len(c, max_frq, style.max_syms)))
                .collect(),
        }
    }
}
