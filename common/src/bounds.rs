//! The inclusive range of characters that get counted

use std::fmt;

use crate::constants::{ALPHABET_LEN, ASCII_END, ASCII_STR};

/// Inclusive byte range `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    start: u8,
    end: u8,
}

impl Bounds {
    /// `'a'..='z'`
    pub const LOWERCASE: Self = Self {
        start: ASCII_STR,
        end: ASCII_END,
    };

    /// Checks whether `symbol` lies between `start` and `end`
    pub fn is_between(self, symbol: u8) -> bool {
        symbol >= self.start && symbol <= self.end
    }

    /// Offset of `symbol` from `start`, if it is in range
    pub fn index_of(self, symbol: u8) -> Option<usize> {
        self.is_between(symbol).then(|| (symbol - self.start) as usize)
    }

    /// The character stored at slot `index`
    pub fn letter_at(self, index: usize) -> char {
        debug_assert!(index < ALPHABET_LEN);
        (self.start + index as u8) as char
    }

    pub fn start(self) -> char {
        self.start as char
    }

    pub fn end(self) -> char {
        self.end as char
    }
}

/// Formats as `a-z`
impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start as char, self.end as char)
    }
}
