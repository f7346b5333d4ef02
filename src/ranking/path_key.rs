//! Path keys, symbol allocation and key distance scoring.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::levenshtein::EditDistance;

/// First symbol of the key alphabet.
pub const FIRST_SYMBOL: u32 = 'a' as u32;

/// A path encoded as one symbol per node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathKey(String);

impl PathKey {
    /// Key of a source path with `len` nodes: the first `len` letters.
    pub fn source(len: usize) -> Self {
        PathKey(
            (0..len)
                .map(|index| symbol_at(FIRST_SYMBOL as usize + index))
                .collect(),
        )
    }

    /// Number of symbols (nodes).
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Check if the key has no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append one node's symbol.
    pub fn push(&mut self, symbol: char) {
        self.0.push(symbol);
    }

    /// Distinct symbols of the key.
    pub fn symbols(&self) -> BTreeSet<char> {
        self.0.chars().collect()
    }

    /// The key as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathKey {
    fn from(key: &str) -> Self {
        PathKey(key.to_string())
    }
}

/// Hands out fresh symbols for candidate nodes that match no source node.
///
/// One allocator serves a whole ranking run, so unmatched nodes of different
/// candidates never share a symbol. Symbols are never reused.
#[derive(Debug, Clone)]
pub struct SymbolAllocator {
    next: u32,
}

impl SymbolAllocator {
    /// Allocator for a source path of `source_len` nodes; its first symbol
    /// follows the source letters.
    pub fn new(source_len: usize) -> Self {
        SymbolAllocator {
            next: FIRST_SYMBOL.saturating_add(u32::try_from(source_len).unwrap_or(u32::MAX)),
        }
    }

    /// Take the next unused symbol, skipping code points that are not chars.
    pub fn next_symbol(&mut self) -> char {
        loop {
            let candidate = self.next;
            self.next = self.next.wrapping_add(1);
            if let Some(symbol) = char::from_u32(candidate) {
                return symbol;
            }
        }
    }
}

fn symbol_at(code: usize) -> char {
    u32::try_from(code)
        .ok()
        .and_then(char::from_u32)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Score of a candidate key against the source key, at most `1.0`.
///
/// With `p` the number of distinct candidate symbols absent from the source
/// key, `a = normalized_distance + p` and `b = max(len) + p`, the score is
/// `1 - a / b`. Two empty keys score `0.0`.
pub fn rank<D: EditDistance + ?Sized>(oracle: &D, source: &PathKey, candidate: &PathKey) -> f64 {
    let source_symbols = source.symbols();
    let unmatched = candidate
        .symbols()
        .difference(&source_symbols)
        .count() as f64;

    let a = oracle.normalized(source.as_str(), candidate.as_str()) + unmatched;
    let b = source.len().max(candidate.len()) as f64 + unmatched;
    if b == 0.0 {
        return 0.0;
    }
    1.0 - a / b
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::levenshtein::ClassicEditDistance;

    #[test]
    fn test_source_key() {
        assert_eq!(PathKey::source(0).as_str(), "");
        assert_eq!(PathKey::source(3).as_str(), "abc");
    }

    #[test]
    fn test_allocator_starts_after_source_letters() {
        let mut allocator = SymbolAllocator::new(2);
        assert_eq!(allocator.next_symbol(), 'c');
        assert_eq!(allocator.next_symbol(), 'd');
        assert_eq!(allocator.next_symbol(), 'e');
    }

    #[test]
    fn test_allocator_skips_surrogates() {
        let mut allocator = SymbolAllocator { next: 0xD7FF };
        assert_eq!(allocator.next_symbol(), '\u{D7FF}');
        assert_eq!(allocator.next_symbol(), '\u{E000}');
    }

    #[test]
    fn test_rank_identical_keys() {
        let oracle = ClassicEditDistance;
        let key = PathKey::source(3);
        assert_eq!(rank(&oracle, &key, &key), 1.0);
    }

    #[test]
    fn test_rank_counts_distinct_unmatched_symbols() {
        let oracle = ClassicEditDistance;
        let source = PathKey::source(2);

        // "ac": distance 1/2, one unmatched symbol -> 1 - 1.5 / 3
        let score = rank(&oracle, &source, &PathKey::from("ac"));
        assert!((score - 0.5).abs() < 1e-12);

        // "cd": distance 1, two unmatched symbols -> 1 - 3 / 4
        let score = rank(&oracle, &source, &PathKey::from("cd"));
        assert!((score - 0.25).abs() < 1e-12);

        // "acc": distance 2/3, still one distinct unmatched symbol -> 1 - (5/3) / 4
        let score = rank(&oracle, &source, &PathKey::from("acc"));
        assert!((score - (1.0 - (5.0 / 3.0) / 4.0)).abs() < 1e-12);
    }

    #[test]
    fn test_rank_extra_unmatched_nodes_lower_score() {
        let oracle = ClassicEditDistance;
        let source = PathKey::source(1);
        let equal_length = rank(&oracle, &source, &PathKey::from("a"));
        let one_extra = rank(&oracle, &source, &PathKey::from("ab"));
        let two_extra = rank(&oracle, &source, &PathKey::from("abc"));
        assert!(equal_length > one_extra);
        assert!(one_extra > two_extra);
    }

    #[test]
    fn test_rank_empty_keys() {
        let oracle = ClassicEditDistance;
        assert_eq!(rank(&oracle, &PathKey::default(), &PathKey::default()), 0.0);
    }
}
