//! Per-letter occurrence counters

use crate::bounds::Bounds;
use crate::constants::ALPHABET_LEN;

/// Occurrence count of every letter in [`Bounds::LOWERCASE`]
///
/// Slot `i` holds the count of `'a' + i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: [u64; ALPHABET_LEN],
}

impl FrequencyTable {
    /// A table with every entry set to 0
    pub fn new() -> Self {
        Self::filled(0)
    }

    /// A table with every entry set to `number`
    pub fn filled(number: u64) -> Self {
        Self {
            counts: [number; ALPHABET_LEN],
        }
    }

    pub fn fill(&mut self, number: u64) {
        self.counts.fill(number);
    }

    /// The counted characters; every table covers `a-z`
    pub const BOUNDS: Bounds = Bounds::LOWERCASE;

    /// Counts `symbol` if it is in range, ignores it otherwise
    pub fn increment(&mut self, symbol: u8) {
        if let Some(i) = Self::BOUNDS.index_of(symbol) {
            self.counts[i] += 1;
        }
    }

    pub fn count_bytes(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.increment(b);
        }
    }

    /// Count of `letter`, zero for characters out of range
    pub fn count(&self, letter: char) -> u64 {
        u8::try_from(letter)
            .ok()
            .and_then(|b| Self::BOUNDS.index_of(b))
            .map_or(0, |i| self.counts[i])
    }

    pub fn counts(&self) -> &[u64; ALPHABET_LEN] {
        &self.counts
    }

    /// `(letter, count)` pairs in ascending letter order
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (Self::BOUNDS.letter_at(i), c))
    }

    /// The largest entry. Zero means nothing was counted.
    pub fn max_frequency(&self) -> u64 {
        let mut max_frq = self.counts[0];
        for &c in &self.counts[1..] {
            if max_frq < c {
                max_frq = c;
            }
        }
        max_frq
    }

    /// Sum of all entries
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<u8> for FrequencyTable {
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        for b in iter {
            self.increment(b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_zeroed() {
        let t = FrequencyTable::new();
        assert!(t.counts().iter().all(|&c| c == 0));
        assert_eq!(t.max_frequency(), 0);
        assert_eq!(t.total(), 0);
    }

    #[test]
    fn fill() {
        let mut t = FrequencyTable::filled(7);
        assert_eq!(t.count('q'), 7);
        assert_eq!(t.total(), 7 * 26);
        t.fill(0);
        assert_eq!(t, FrequencyTable::default());
    }

    #[test]
    fn counts_only_lowercase() {
        let mut t = FrequencyTable::new();
        t.count_bytes(b"aaabbc ABC 123 !\n\xff");
        assert_eq!(t.count('a'), 3);
        assert_eq!(t.count('b'), 2);
        assert_eq!(t.count('c'), 1);
        assert_eq!(t.count('d'), 0);
        assert_eq!(t.count('A'), 0);
        assert_eq!(t.count('\u{e9}'), 0);
        assert_eq!(t.total(), 6);
        assert_eq!(t.max_frequency(), 3);
    }

    #[test]
    fn max_with_ties() {
        let mut t = FrequencyTable::new();
        t.extend(b"zzyyx".iter().copied());
        assert_eq!(t.max_frequency(), 2);
    }

    #[test]
    fn iter_is_ordered() {
        let mut t = FrequencyTable::new();
        t.count_bytes(b"za");
        let letters: String = t.iter().map(|(l, _)| l).collect();
        assert_eq!(letters, "abcdefghijklmnopqrstuvwxyz");
        assert_eq!(t.iter().next(), Some(('a', 1)));
        assert_eq!(t.iter().last(), Some(('z', 1)));
    }

    proptest! {
        #[test]
        fn total_matches_lowercase_bytes(bytes: Vec<u8>) {
            let mut t = FrequencyTable::new();
            t.count_bytes(&bytes);
            let expected = bytes.iter().filter(|b| b.is_ascii_lowercase()).count() as u64;
            prop_assert_eq!(t.total(), expected);
        }

        #[test]
        fn max_is_largest_entry(bytes: Vec<u8>) {
            let mut t = FrequencyTable::new();
            t.count_bytes(&bytes);
            let max = t.max_frequency();
            prop_assert!(t.counts().iter().all(|&c| c <= max));
            prop_assert!(t.counts().contains(&max));
        }
    }
}
