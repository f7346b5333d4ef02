//! Extended split term sets: node terms enriched with disambiguated synonyms.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{CategoryPath, TermSet, split_composite};
use crate::lexicon::LexicalOracle;
use crate::sense::disambiguator::SenseDisambiguator;

/// One enriched term set per source node, in path order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtendedSplitTermSet {
    nodes: Vec<TermSet>,
}

impl ExtendedSplitTermSet {
    /// Wrap per-node term sets.
    pub fn new(nodes: Vec<TermSet>) -> Self {
        ExtendedSplitTermSet { nodes }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Term set of node `index`.
    pub fn get(&self, index: usize) -> Option<&TermSet> {
        self.nodes.get(index)
    }

    /// Iterate over node term sets in path order.
    pub fn iter(&self) -> std::slice::Iter<'_, TermSet> {
        self.nodes.iter()
    }

    /// Union of every node's terms.
    pub fn flatten(&self) -> TermSet {
        self.nodes.iter().flatten().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a ExtendedSplitTermSet {
    type Item = &'a TermSet;
    type IntoIter = std::slice::Iter<'a, TermSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Builds [`ExtendedSplitTermSet`]s for source category paths.
#[derive(Debug, Clone)]
pub struct ExtendedTermSetBuilder<L> {
    disambiguator: SenseDisambiguator<L>,
}

impl<L: LexicalOracle> ExtendedTermSetBuilder<L> {
    /// Create a builder over a lexical oracle.
    pub fn new(lexicon: L) -> Self {
        ExtendedTermSetBuilder {
            disambiguator: SenseDisambiguator::new(lexicon),
        }
    }

    /// The disambiguator used for each term.
    pub fn disambiguator(&self) -> &SenseDisambiguator<L> {
        &self.disambiguator
    }

    /// Expand every node of `path`, using the remaining nodes as context.
    pub fn build(&self, path: &CategoryPath) -> ExtendedSplitTermSet {
        let nodes = (0..path.len())
            .map(|index| {
                let node = path.get(index).unwrap_or_default();
                let mut context = split_composite(&path.context_of(index));
                context.remove("");
                self.expand_node(node, &context)
            })
            .collect();

        ExtendedSplitTermSet::new(nodes)
    }

    /// Expand one node: each of its composite terms plus the lemmas of the
    /// term's best sense for `context`.
    ///
    /// The node's own terms are always kept, so the result is never empty.
    pub fn expand_node(&self, node: &str, context: &TermSet) -> TermSet {
        let lexicon = self.disambiguator.lexicon();
        let mut extended = TermSet::new();

        for term in split_composite(node) {
            if let Some(sense) = self.disambiguator.disambiguate(&term, context) {
                debug!(
                    term = %term,
                    sense = %lexicon.sense_name(sense),
                    "disambiguated term"
                );
                extended.extend(lexicon.lemmas(sense).iter().map(|l| normalize_lemma(l)));
            } else {
                debug!(term = %term, "no sense found, keeping term only");
            }
            extended.insert(term);
        }

        extended
    }
}

/// Lemmas are compared against lower-cased target terms, and multi-word
/// lemmas are stored with underscores (`tv_set`).
fn normalize_lemma(lemma: &str) -> String {
    lemma.to_lowercase().replace('_', " ")
}
