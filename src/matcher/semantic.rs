//! Semantic matching of enriched source terms against target categories.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::analysis::{TermSet, split_composite};
use crate::sense::ExtendedSplitTermSet;
use crate::util::levenshtein::{ClassicEditDistance, EditDistance};
use crate::util::similarity::{ComponentMatch, contains_as_component, edit_similarity};

/// Default threshold for selecting candidate target categories.
pub const DEFAULT_CANDIDATE_THRESHOLD: f64 = 0.7;

/// How the extended split term set is tested against a full target path
/// when filtering candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// All node sets are merged into one group; one matching term anywhere
    /// in the source is enough.
    #[default]
    Flattened,
    /// Every source node set must match some term of the target path.
    PerNode,
}

/// Decides whether groups of source terms are subsumed by a target string.
#[derive(Debug, Clone, Default)]
pub struct SemanticMatcher<D = ClassicEditDistance> {
    edit_distance: D,
    component_match: ComponentMatch,
    filter_mode: FilterMode,
}

impl SemanticMatcher<ClassicEditDistance> {
    /// Create a matcher with classic edit distance, substring containment and
    /// flattened candidate filtering.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: EditDistance> SemanticMatcher<D> {
    /// Create a matcher over a custom edit distance oracle.
    pub fn with_edit_distance(edit_distance: D) -> Self {
        SemanticMatcher {
            edit_distance,
            component_match: ComponentMatch::default(),
            filter_mode: FilterMode::default(),
        }
    }

    /// Set how term containment is tested.
    pub fn with_component_match(mut self, component_match: ComponentMatch) -> Self {
        self.component_match = component_match;
        self
    }

    /// Set how candidates are filtered.
    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self
    }

    /// The edit distance oracle.
    pub fn edit_distance(&self) -> &D {
        &self.edit_distance
    }

    /// The containment mode.
    pub fn component_match(&self) -> ComponentMatch {
        self.component_match
    }

    /// The candidate filtering mode.
    pub fn filter_mode(&self) -> FilterMode {
        self.filter_mode
    }

    /// Check whether every set in `group` has at least one term matching one
    /// composite term of `target`.
    ///
    /// A source term `s` matches a target term `w` when `w` contains `s` or
    /// their edit similarity reaches `threshold`. An empty group never
    /// matches.
    pub fn matches(&self, group: &[&TermSet], target: &str, threshold: f64) -> bool {
        if group.is_empty() {
            return false;
        }

        let target_terms = split_composite(target);
        group
            .iter()
            .all(|source_terms| self.set_matches(source_terms, &target_terms, threshold))
    }

    fn set_matches(&self, source_terms: &TermSet, target_terms: &TermSet, threshold: f64) -> bool {
        source_terms.iter().any(|source| {
            target_terms.iter().any(|target| {
                let found = contains_as_component(target, source, self.component_match)
                    || edit_similarity(&self.edit_distance, source, target) >= threshold;
                if found {
                    trace!(source = %source, target = %target, "term match");
                }
                found
            })
        })
    }

    /// Keep the target paths the extended split term set matches, in input
    /// order.
    pub fn candidates<'a, S: AsRef<str>>(
        &self,
        extended: &ExtendedSplitTermSet,
        targets: &'a [S],
        threshold: f64,
    ) -> Vec<&'a str> {
        let flattened;
        let group: Vec<&TermSet> = match self.filter_mode {
            FilterMode::Flattened => {
                flattened = extended.flatten();
                if extended.is_empty() {
                    Vec::new()
                } else {
                    vec![&flattened]
                }
            }
            FilterMode::PerNode => extended.iter().collect(),
        };

        let selected: Vec<&str> = targets
            .iter()
            .map(|target| target.as_ref())
            .filter(|target| self.matches(&group, target, threshold))
            .collect();

        debug!(
            targets = targets.len(),
            candidates = selected.len(),
            mode = ?self.filter_mode,
            "filtered candidates"
        );
        selected
    }
}
