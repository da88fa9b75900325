//! Lexicographic enumeration of fixed-length keys.
//!
//! The keyspace for length `L` holds all `26^L` keys, ordered as if
//! counting in base 26 with the alphabet as digit symbols (most
//! significant digit first): `AAA`, `AAB`, ..., `ZZZ`.
//!
//! Enumeration is an explicit odometer exposed as a lazy iterator that
//! can be restarted from any rank and partitioned into contiguous rank
//! ranges, so a caller can checkpoint a long search or hand disjoint
//! slices of the space to independent workers without changing the
//! enumeration order.

use std::ops::Range;

use crate::alphabet::ALPHABET_LEN;
use crate::cipher::Key;
use crate::search::SearchError;

const BASE: u128 = ALPHABET_LEN as u128;

/// The set of all keys of a fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpace {
    length: usize,
}

impl KeySpace {
    /// Creates the keyspace for keys of `length` symbols.
    ///
    /// Fails with [`SearchError::InvalidKeyLength`] for `length < 1`.
    pub fn new(length: usize) -> Result<Self, SearchError> {
        if length < 1 {
            return Err(SearchError::InvalidKeyLength);
        }
        Ok(Self { length })
    }

    /// Key length in symbols.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Total number of keys, `26^length`.
    ///
    /// Saturates at `u128::MAX` for lengths no search could ever visit.
    pub fn len(&self) -> u128 {
        BASE.checked_pow(self.length as u32).unwrap_or(u128::MAX)
    }

    /// A keyspace always holds at least 26 keys.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the full space in lexicographic order, starting at `AAA...`.
    pub fn iter(&self) -> KeyIter {
        self.iter_from(0)
    }

    /// Resumes enumeration at the given rank (0-indexed position in
    /// lexicographic order). Ranks at or past the end yield nothing.
    pub fn iter_from(&self, rank: u128) -> KeyIter {
        KeyIter {
            digits: self.digits_at(rank.min(self.len())),
            remaining: self.len().saturating_sub(rank),
        }
    }

    /// The key at the given rank, or `None` past the end of the space.
    pub fn key_at(&self, rank: u128) -> Option<Key> {
        if rank >= self.len() {
            return None;
        }
        Some(Key::from_shifts(self.digits_at(rank)))
    }

    /// Splits the space into `parts` disjoint contiguous rank ranges that
    /// together cover `0..len()`. The remainder is distributed across the
    /// first ranges so sizes differ by at most one.
    ///
    /// Combined with [`iter_from`](Self::iter_from) this is the natural
    /// partition point for parallel workers; the deterministic tie-break
    /// under parallel execution is the lowest rank among all matches.
    pub fn partitions(&self, parts: usize) -> Vec<Range<u128>> {
        let parts = parts.max(1) as u128;
        let total = self.len();
        let base_size = total / parts;
        let remainder = total % parts;

        let mut ranges = Vec::with_capacity(parts as usize);
        let mut start = 0u128;
        for i in 0..parts {
            let size = base_size + u128::from(i < remainder);
            ranges.push(start..start + size);
            start += size;
        }
        ranges
    }

    /// Base-26 digits (most significant first) of a rank.
    fn digits_at(&self, rank: u128) -> Vec<u8> {
        let mut digits = vec![0u8; self.length];
        let mut r = rank;
        for d in digits.iter_mut().rev() {
            *d = (r % BASE) as u8;
            r /= BASE;
        }
        digits
    }
}

/// Odometer over the keyspace digits. Yields keys lazily; never
/// materializes the space.
#[derive(Debug, Clone)]
pub struct KeyIter {
    digits: Vec<u8>,
    remaining: u128,
}

impl Iterator for KeyIter {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let key = Key::from_shifts(self.digits.clone());

        // Odometer increment: bump the least significant digit, carrying
        // left past any digit that wraps.
        for d in self.digits.iter_mut().rev() {
            if (*d as usize) + 1 < ALPHABET_LEN {
                *d += 1;
                break;
            }
            *d = 0;
        }

        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_length() {
        assert_eq!(KeySpace::new(0), Err(SearchError::InvalidKeyLength));
    }

    #[test]
    fn test_len() {
        assert_eq!(KeySpace::new(1).unwrap().len(), 26);
        assert_eq!(KeySpace::new(3).unwrap().len(), 17_576);
        assert_eq!(KeySpace::new(5).unwrap().len(), 11_881_376);
    }

    #[test]
    fn test_enumeration_starts_lexicographic() {
        let space = KeySpace::new(3).unwrap();
        let first: Vec<String> = space.iter().take(3).map(|k| k.to_string()).collect();
        assert_eq!(first, ["AAA", "AAB", "AAC"]);
    }

    #[test]
    fn test_enumeration_carries() {
        let space = KeySpace::new(2).unwrap();
        let keys: Vec<String> = space.iter().map(|k| k.to_string()).collect();
        assert_eq!(keys.len(), 676);
        assert_eq!(keys[25], "AZ");
        assert_eq!(keys[26], "BA");
        assert_eq!(keys[675], "ZZ");
    }

    #[test]
    fn test_full_space_unique_and_complete() {
        let space = KeySpace::new(1).unwrap();
        let keys: Vec<String> = space.iter().map(|k| k.to_string()).collect();
        assert_eq!(keys.first().map(String::as_str), Some("A"));
        assert_eq!(keys.last().map(String::as_str), Some("Z"));
        assert_eq!(keys.len(), 26);
    }

    #[test]
    fn test_key_at_agrees_with_iteration() {
        let space = KeySpace::new(2).unwrap();
        for (rank, key) in space.iter().enumerate() {
            assert_eq!(space.key_at(rank as u128), Some(key));
        }
        assert_eq!(space.key_at(676), None);
    }

    #[test]
    fn test_key_at_known_rank() {
        // K=10, E=4, Y=24 -> 10*676 + 4*26 + 24 = 6888
        let space = KeySpace::new(3).unwrap();
        assert_eq!(space.key_at(6888).unwrap().to_string(), "KEY");
    }

    #[test]
    fn test_iter_from_resumes() {
        let space = KeySpace::new(3).unwrap();
        let resumed: Vec<String> = space.iter_from(6888).take(2).map(|k| k.to_string()).collect();
        assert_eq!(resumed, ["KEY", "KEZ"]);
    }

    #[test]
    fn test_iter_from_past_end_is_empty() {
        let space = KeySpace::new(1).unwrap();
        assert_eq!(space.iter_from(26).count(), 0);
        assert_eq!(space.iter_from(1000).count(), 0);
    }

    #[test]
    fn test_partitions_cover_space() {
        let space = KeySpace::new(2).unwrap();
        let ranges = space.partitions(5);
        assert_eq!(ranges.len(), 5);
        assert_eq!(ranges[0].start, 0);
        assert_eq!(ranges.last().unwrap().end, 676);
        for pair in ranges.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        let total: u128 = ranges.iter().map(|r| r.end - r.start).sum();
        assert_eq!(total, 676);
    }

    #[test]
    fn test_partitions_match_sequential_order() {
        let space = KeySpace::new(2).unwrap();
        let sequential: Vec<String> = space.iter().map(|k| k.to_string()).collect();
        let mut partitioned = Vec::new();
        for range in space.partitions(7) {
            let count = (range.end - range.start) as usize;
            partitioned.extend(space.iter_from(range.start).take(count).map(|k| k.to_string()));
        }
        assert_eq!(partitioned, sequential);
    }

    #[test]
    fn test_size_hint() {
        let space = KeySpace::new(2).unwrap();
        assert_eq!(space.iter().size_hint(), (676, Some(676)));
    }
}
