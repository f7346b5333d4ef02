//! Similarity primitives over lower-cased terms.

use serde::{Deserialize, Serialize};

use crate::util::levenshtein::EditDistance;

/// How [`contains_as_component`] decides that one term is part of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentMatch {
    /// Any contiguous occurrence counts, including mid-word fragments
    /// (`"tv"` is found in `"hdtv"`).
    #[default]
    Substring,
    /// The occurrence must be delimited by the string ends or by
    /// non-alphanumeric characters (`"tv"` is found in `"tv stands"` only).
    WordBoundary,
}

/// Length of the longest run of consecutive characters shared by `a` and `b`,
/// divided by the length of the longer string.
///
/// Returns a value in `[0, 1]`; two empty strings give `0.0`.
pub fn lcs_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let longest = a_chars.len().max(b_chars.len());
    if longest == 0 {
        return 0.0;
    }

    // table[i][j] is the length of the common run ending at a[i-1], b[j-1].
    let mut table = vec![vec![0usize; b_chars.len() + 1]; a_chars.len() + 1];
    let mut best = 0;
    for i in 1..=a_chars.len() {
        for j in 1..=b_chars.len() {
            if a_chars[i - 1] == b_chars[j - 1] {
                table[i][j] = table[i - 1][j - 1] + 1;
                best = best.max(table[i][j]);
            }
        }
    }

    best as f64 / longest as f64
}

/// `1 - distance(a, b) / max(len(a), len(b))`.
///
/// Two empty strings are identical and give `1.0`.
pub fn edit_similarity<D: EditDistance + ?Sized>(oracle: &D, a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - oracle.distance(a, b) as f64 / longest as f64
}

/// Check whether `needle` occurs inside `haystack` under the given mode.
///
/// Both inputs are expected to be lower-cased already.
pub fn contains_as_component(haystack: &str, needle: &str, mode: ComponentMatch) -> bool {
    match mode {
        ComponentMatch::Substring => haystack.contains(needle),
        ComponentMatch::WordBoundary => {
            if needle.is_empty() {
                return false;
            }
            haystack.match_indices(needle).any(|(start, _)| {
                let end = start + needle.len();
                let before = haystack[..start].chars().next_back();
                let after = haystack[end..].chars().next();
                !before.is_some_and(char::is_alphanumeric)
                    && !after.is_some_and(char::is_alphanumeric)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::levenshtein::ClassicEditDistance;

    #[test]
    fn test_lcs_ratio_identity() {
        for term in ["tv", "television", "audio & video", "é"] {
            assert_eq!(lcs_ratio(term, term), 1.0);
        }
    }

    #[test]
    fn test_lcs_ratio_symmetry() {
        let pairs = [
            ("television", "a telecommunication system"),
            ("chair", "a seat for one person"),
            ("abc", ""),
            ("furniture", "electronics"),
        ];
        for (a, b) in pairs {
            assert_eq!(lcs_ratio(a, b), lcs_ratio(b, a));
        }
    }

    #[test]
    fn test_lcs_ratio_values() {
        // Longest common run is "tele" (4) over the longer length (10).
        assert!((lcs_ratio("television", "telephone") - 0.4).abs() < 1e-12);
        assert_eq!(lcs_ratio("abc", "xyz"), 0.0);
        assert_eq!(lcs_ratio("", "abc"), 0.0);
        assert_eq!(lcs_ratio("", ""), 0.0);
    }

    #[test]
    fn test_edit_similarity() {
        let oracle = ClassicEditDistance;
        assert_eq!(edit_similarity(&oracle, "chair", "chair"), 1.0);
        assert!((edit_similarity(&oracle, "chair", "chairs") - (1.0 - 1.0 / 6.0)).abs() < 1e-12);
        assert_eq!(edit_similarity(&oracle, "ab", "cd"), 0.0);
        assert_eq!(edit_similarity(&oracle, "", ""), 1.0);
        assert_eq!(edit_similarity(&oracle, "", "ab"), 0.0);
    }

    #[test]
    fn test_contains_as_component_substring() {
        assert!(contains_as_component("hdtv", "tv", ComponentMatch::Substring));
        assert!(contains_as_component("tv stands", "tv", ComponentMatch::Substring));
        assert!(!contains_as_component("tv", "television", ComponentMatch::Substring));
        assert!(contains_as_component("tv", "", ComponentMatch::Substring));
    }

    #[test]
    fn test_contains_as_component_word_boundary() {
        assert!(!contains_as_component("hdtv", "tv", ComponentMatch::WordBoundary));
        assert!(contains_as_component("tv stands", "tv", ComponentMatch::WordBoundary));
        assert!(contains_as_component("home-tv", "tv", ComponentMatch::WordBoundary));
        assert!(contains_as_component("hdtv or tv", "tv", ComponentMatch::WordBoundary));
        assert!(contains_as_component("tv", "tv", ComponentMatch::WordBoundary));
        assert!(!contains_as_component("tv", "", ComponentMatch::WordBoundary));
    }
}
