//! Useful constants to have

/// The maximum number of [`SYM_HIST`] printed for a single letter
///
/// Only the most frequent letter(s) reach this length.
pub const MAX_SYMS: usize = 50;

/// The largest accepted value of a user supplied bar length
pub const MAX_BAR_LEN: usize = 10_000;

/// The symbol bars are drawn with
pub const SYM_HIST: char = '*';

/// Line terminator of every printed line
pub const NEW_LINE: char = '\n';

/// First counted character
pub const ASCII_STR: u8 = b'a';

/// Last counted character (inclusive)
pub const ASCII_END: u8 = b'z';

/// Number of slots in the frequency table
pub const ALPHABET_LEN: usize = (ASCII_END - ASCII_STR) as usize + 1;

/// Prefix of the message printed when nothing was counted
pub const NOT_FOUND_MSG: &str = "No character found between: ";
