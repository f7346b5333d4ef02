//! Candidate path ranking by path-key distance.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::{CategoryPath, split_path};
use crate::matcher::SemanticMatcher;
use crate::ranking::path_key::{FIRST_SYMBOL, PathKey, SymbolAllocator, rank};
use crate::sense::ExtendedSplitTermSet;
use crate::util::levenshtein::EditDistance;

/// Default threshold for aligning a candidate node with a source node.
pub const DEFAULT_NODE_THRESHOLD: f64 = 0.6;

/// Default number of best candidates kept.
pub const DEFAULT_TOP_K: usize = 3;

/// A candidate path with its alignment key and score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// The candidate path as given.
    pub path: String,
    /// Alignment key of the candidate's nodes.
    pub key: PathKey,
    /// Score in `[0, 1]`, higher is better.
    pub score: f64,
}

/// Keeps the `k` highest-scoring items in descending order.
///
/// An item only displaces an entry whose score is strictly lower, so among
/// equal scores the earliest offered item stays ahead. Empty slots count as a
/// score of `0.0`, so an item scoring `0.0` is never kept.
#[derive(Debug, Clone)]
pub struct TopK<T> {
    k: usize,
    entries: Vec<(T, f64)>,
}

impl<T> TopK<T> {
    /// Create an empty buffer holding at most `k` items.
    pub fn new(k: usize) -> Self {
        TopK {
            k,
            entries: Vec::with_capacity(k.min(DEFAULT_TOP_K)),
        }
    }

    /// Offer an item; returns whether it was kept.
    pub fn offer(&mut self, item: T, score: f64) -> bool {
        if score.is_nan() || score <= 0.0 {
            return false;
        }
        if let Some(position) = self.entries.iter().position(|(_, best)| score > *best) {
            self.entries.insert(position, (item, score));
            self.entries.truncate(self.k);
            true
        } else if self.entries.len() < self.k {
            self.entries.push((item, score));
            true
        } else {
            false
        }
    }

    /// Number of items kept so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no item has been kept.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items with their scores, best first.
    pub fn into_sorted_vec(self) -> Vec<(T, f64)> {
        self.entries
    }
}

/// Aligns candidate paths against a source path and ranks them.
#[derive(Debug, Clone)]
pub struct PathKeyRanker<'a, D> {
    matcher: &'a SemanticMatcher<D>,
    extended: &'a ExtendedSplitTermSet,
    node_threshold: f64,
    top_k: usize,
}

impl<'a, D: EditDistance> PathKeyRanker<'a, D> {
    /// Create a ranker for the source path whose extended split term set is
    /// `extended`.
    pub fn new(matcher: &'a SemanticMatcher<D>, extended: &'a ExtendedSplitTermSet) -> Self {
        PathKeyRanker {
            matcher,
            extended,
            node_threshold: DEFAULT_NODE_THRESHOLD,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Set the node alignment threshold.
    pub fn with_node_threshold(mut self, node_threshold: f64) -> Self {
        self.node_threshold = node_threshold;
        self
    }

    /// Set how many candidates are kept.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Key of the source path.
    pub fn source_key(&self) -> PathKey {
        PathKey::source(self.extended.len())
    }

    /// Key of one candidate path.
    ///
    /// Each node takes the letter of the first source node it matches, or a
    /// fresh symbol from `allocator`.
    pub fn candidate_key(&self, candidate: &CategoryPath, allocator: &mut SymbolAllocator) -> PathKey {
        let mut key = PathKey::default();
        for node in candidate.iter() {
            let aligned = self.extended.iter().position(|source_terms| {
                self.matcher
                    .matches(&[source_terms], node, self.node_threshold)
            });
            let symbol = match aligned {
                Some(index) => char::from_u32(FIRST_SYMBOL + index as u32)
                    .unwrap_or_else(|| allocator.next_symbol()),
                None => allocator.next_symbol(),
            };
            key.push(symbol);
        }
        key
    }

    /// Score every candidate and keep the best `top_k`, best first.
    ///
    /// Unmatched-node symbols are allocated across the whole batch, so the
    /// order of `candidates` is part of the input.
    pub fn rank_candidates<S: AsRef<str>>(&self, candidates: &[S]) -> Vec<RankedCandidate> {
        let source_key = self.source_key();
        let mut allocator = SymbolAllocator::new(self.extended.len());
        let mut best = TopK::new(self.top_k);

        for raw in candidates {
            let raw = raw.as_ref();
            let key = self.candidate_key(&split_path(raw), &mut allocator);
            let score = rank(self.matcher.edit_distance(), &source_key, &key);
            debug!(candidate = raw, key = %key, score, "ranked candidate");

            let candidate = RankedCandidate {
                path: raw.trim_end_matches(['\n', '\r']).to_string(),
                key,
                score,
            };
            best.offer(candidate, score);
        }

        best.into_sorted_vec()
            .into_iter()
            .map(|(candidate, _)| candidate)
            .collect()
    }
}
