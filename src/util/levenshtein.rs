//! Edit distance algorithms and the pluggable edit distance oracle.
//!
//! Node matching uses the classic Levenshtein distance (insert, delete,
//! substitute). Path-key ranking uses a normalized Damerau-Levenshtein distance
//! in its optimal string alignment form, which additionally counts a swap of
//! two adjacent symbols as a single edit.

use std::cmp::min;

use ahash::AHashMap;
use parking_lot::RwLock;

/// Calculate the Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.is_empty() {
        return s2_chars.len();
    }
    if s2_chars.is_empty() {
        return s1_chars.len();
    }

    // Two rows are enough since each cell only looks one row back.
    let mut prev_row: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr_row = vec![0; s2_chars.len() + 1];

    for (i, c1) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, c2) in s2_chars.iter().enumerate() {
            let cost = usize::from(c1 != c2);
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[s2_chars.len()]
}

/// Calculate the Damerau-Levenshtein distance (optimal string alignment).
#[allow(clippy::needless_range_loop)]
pub fn damerau_levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    let len1 = s1_chars.len();
    let len2 = s2_chars.len();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut matrix = vec![vec![0; len2 + 1]; len1 + 1];
    for i in 0..=len1 {
        matrix[i][0] = i;
    }
    for j in 0..=len2 {
        matrix[0][j] = j;
    }

    for i in 1..=len1 {
        for j in 1..=len2 {
            let cost = usize::from(s1_chars[i - 1] != s2_chars[j - 1]);

            matrix[i][j] = min(
                min(matrix[i - 1][j] + 1, matrix[i][j - 1] + 1),
                matrix[i - 1][j - 1] + cost,
            );

            if i > 1
                && j > 1
                && s1_chars[i - 1] == s2_chars[j - 2]
                && s1_chars[i - 2] == s2_chars[j - 1]
            {
                matrix[i][j] = min(matrix[i][j], matrix[i - 2][j - 2] + 1);
            }
        }
    }

    matrix[len1][len2]
}

/// Damerau-Levenshtein distance divided by the longer length, in `[0, 1]`.
///
/// Two empty strings are identical, so their distance is `0.0`.
pub fn normalized_damerau_levenshtein(s1: &str, s2: &str) -> f64 {
    let max_len = s1.chars().count().max(s2.chars().count());
    if max_len == 0 {
        return 0.0;
    }
    damerau_levenshtein_distance(s1, s2) as f64 / max_len as f64
}

/// An edit distance oracle.
///
/// Implementations must be pure: the same arguments always give the same
/// result, which is what makes [`CachedEditDistance`] safe.
pub trait EditDistance {
    /// Classic single-edit-operation distance between two strings.
    fn distance(&self, a: &str, b: &str) -> usize;

    /// Distance normalized into `[0, 1]`, where `0.0` means identical.
    fn normalized(&self, a: &str, b: &str) -> f64;
}

/// Levenshtein for [`EditDistance::distance`] and normalized
/// Damerau-Levenshtein for [`EditDistance::normalized`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicEditDistance;

impl EditDistance for ClassicEditDistance {
    fn distance(&self, a: &str, b: &str) -> usize {
        levenshtein_distance(a, b)
    }

    fn normalized(&self, a: &str, b: &str) -> f64 {
        normalized_damerau_levenshtein(a, b)
    }
}

impl<T: EditDistance + ?Sized> EditDistance for &T {
    fn distance(&self, a: &str, b: &str) -> usize {
        (**self).distance(a, b)
    }

    fn normalized(&self, a: &str, b: &str) -> f64 {
        (**self).normalized(a, b)
    }
}

/// Memoizes another [`EditDistance`] by argument pair.
///
/// Node matching compares the same source synonyms against the same target
/// terms over and over, so repeated pairs are answered from the cache.
#[derive(Debug, Default)]
pub struct CachedEditDistance<D> {
    inner: D,
    distances: RwLock<AHashMap<(String, String), usize>>,
    normalized: RwLock<AHashMap<(String, String), f64>>,
}

impl<D: EditDistance> CachedEditDistance<D> {
    /// Wrap an edit distance oracle with a cache.
    pub fn new(inner: D) -> Self {
        CachedEditDistance {
            inner,
            distances: RwLock::new(AHashMap::new()),
            normalized: RwLock::new(AHashMap::new()),
        }
    }

    /// Number of cached `distance` results.
    pub fn cached_distances(&self) -> usize {
        self.distances.read().len()
    }
}

impl<D: EditDistance> EditDistance for CachedEditDistance<D> {
    fn distance(&self, a: &str, b: &str) -> usize {
        let key = (a.to_string(), b.to_string());
        if let Some(distance) = self.distances.read().get(&key) {
            return *distance;
        }
        let distance = self.inner.distance(a, b);
        self.distances.write().insert(key, distance);
        distance
    }

    fn normalized(&self, a: &str, b: &str) -> f64 {
        let key = (a.to_string(), b.to_string());
        if let Some(distance) = self.normalized.read().get(&key) {
            return *distance;
        }
        let distance = self.inner.normalized(a, b);
        self.normalized.write().insert(key, distance);
        distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("tv", ""), 2);
        assert_eq!(levenshtein_distance("", "tv"), 2);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("television", "televisions"), 1);
        assert_eq!(levenshtein_distance("ab", "ba"), 2);
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein_distance("café", "cafe"), 1);
    }

    #[test]
    fn test_damerau_levenshtein_distance() {
        assert_eq!(damerau_levenshtein_distance("ab", "ba"), 1);
        assert_eq!(damerau_levenshtein_distance("abc", "acb"), 1);
        assert_eq!(damerau_levenshtein_distance("ab", "abc"), 1);
        assert_eq!(damerau_levenshtein_distance("", "abc"), 3);
        // Optimal string alignment never edits a substring twice.
        assert_eq!(damerau_levenshtein_distance("ca", "abc"), 3);
    }

    #[test]
    fn test_normalized_damerau_levenshtein() {
        assert_eq!(normalized_damerau_levenshtein("", ""), 0.0);
        assert_eq!(normalized_damerau_levenshtein("ab", "ab"), 0.0);
        assert_eq!(normalized_damerau_levenshtein("ab", "cd"), 1.0);
        assert!((normalized_damerau_levenshtein("ab", "abc") - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_cached_edit_distance() {
        let cached = CachedEditDistance::new(ClassicEditDistance);
        assert_eq!(cached.distance("chair", "chairs"), 1);
        assert_eq!(cached.distance("chair", "chairs"), 1);
        assert_eq!(cached.distance("chairs", "chair"), 1);
        assert_eq!(cached.cached_distances(), 2);
        assert_eq!(cached.normalized("ab", "ba"), 0.5);
    }
}
