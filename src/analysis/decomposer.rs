//! Splitting of category paths into nodes and of nodes into composite terms.

use std::collections::BTreeSet;
use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Separators that join several classes inside one category node.
    static ref COMPOSITE_SEPARATOR: Regex =
        Regex::new(r"(?i), | & | and |/").expect("composite separator pattern should be valid");
}

/// A set of lower-cased atomic terms.
///
/// A `BTreeSet` keeps iteration deterministic, so every "first match wins"
/// rule downstream is reproducible across runs.
pub type TermSet = BTreeSet<String>;

/// Ordered, lower-cased nodes of a category path.
///
/// Order is significant: index 0 is the root of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryPath {
    nodes: Vec<String>,
}

impl CategoryPath {
    /// Build a path from already split nodes.
    pub fn from_nodes<I, S>(nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CategoryPath {
            nodes: nodes.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of nodes in the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the path has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes in hierarchy order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    /// Get the node at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.nodes.get(index).map(String::as_str)
    }

    /// Iterate over the nodes in hierarchy order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// The sibling context of node `index`: every node whose text differs from
    /// it, joined by `" & "` so the result splits back into composite terms.
    pub fn context_of(&self, index: usize) -> String {
        let Some(current) = self.nodes.get(index) else {
            return String::new();
        };

        self.nodes
            .iter()
            .filter(|node| *node != current)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" & ")
    }
}

impl fmt::Display for CategoryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.nodes.join("/"))
    }
}

impl<'a> IntoIterator for &'a CategoryPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Split a raw category path into its lower-cased nodes.
///
/// Newlines are stripped before splitting on `/`. Empty nodes are passed
/// through unchanged.
pub fn split_path(raw: &str) -> CategoryPath {
    let cleaned = strip_newlines(raw);
    CategoryPath::from_nodes(cleaned.split('/').map(str::to_lowercase))
}

/// Split a composite node name into its set of lower-cased atomic terms.
///
/// Recognised separators are `", "`, `" & "`, `" and "` and `"/"`. The word
/// separator matches in any case, so no returned term still contains one.
pub fn split_composite(raw: &str) -> TermSet {
    let cleaned = strip_newlines(raw);
    COMPOSITE_SEPARATOR
        .split(&cleaned)
        .map(str::to_lowercase)
        .collect()
}

fn strip_newlines(raw: &str) -> String {
    raw.replace(['\n', '\r'], "")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> TermSet {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_split_path() {
        let path = split_path("Electronics/Audio & Video\n");
        assert_eq!(path.nodes(), &["electronics", "audio & video"]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.to_string(), "electronics/audio & video");
    }

    #[test]
    fn test_split_path_keeps_empty_nodes() {
        let path = split_path("Home//Garden/");
        assert_eq!(path.nodes(), &["home", "", "garden", ""]);
    }

    #[test]
    fn test_split_composite_separators() {
        assert_eq!(
            split_composite("Apparel & Clothing"),
            set(&["apparel", "clothing"])
        );
        assert_eq!(
            split_composite("Audio, Video and Cameras/Optics"),
            set(&["audio", "video", "cameras", "optics"])
        );
        assert_eq!(split_composite("Toys\n"), set(&["toys"]));
    }

    #[test]
    fn test_split_composite_deduplicates() {
        assert_eq!(split_composite("Tools & tools"), set(&["tools"]));
    }

    #[test]
    fn test_split_composite_is_idempotent_on_singletons() {
        for term in split_composite("Home, Garden & Pets and Tools") {
            assert_eq!(split_composite(&term), set(&[term.as_str()]));
        }
    }

    #[test]
    fn test_split_composite_output_is_clean() {
        let inputs = [
            "Sports & Outdoors",
            "Books, Music and Movies",
            "TV/Video",
            "Health, Household & Baby Care",
        ];
        for input in inputs {
            for term in split_composite(input) {
                assert_eq!(term, term.to_lowercase());
                for separator in [", ", " & ", " and ", "/"] {
                    assert!(!term.contains(separator), "{term:?} contains {separator:?}");
                }
            }
        }
    }

    #[test]
    fn test_split_composite_capitalised_and_is_a_separator() {
        assert_eq!(split_composite("Audio And Video"), set(&["audio", "video"]));
    }

    #[test]
    fn test_context_of_skips_equal_nodes() {
        let path = split_path("Electronics/Television/Electronics");
        assert_eq!(path.context_of(1), "electronics & electronics");
        assert_eq!(path.context_of(0), "television");
        assert_eq!(path.context_of(9), "");
    }

    #[test]
    fn test_context_of_single_node() {
        let path = split_path("Apparel & Clothing");
        assert_eq!(path.context_of(0), "");
    }
}
