//! Gloss-overlap sense disambiguation.

use tracing::trace;

use crate::analysis::TermSet;
use crate::lexicon::{LexicalOracle, SenseId};
use crate::util::similarity::lcs_ratio;

/// Picks the sense of a term whose neighborhood glosses overlap most with a
/// set of context terms.
#[derive(Debug, Clone)]
pub struct SenseDisambiguator<L> {
    lexicon: L,
}

impl<L: LexicalOracle> SenseDisambiguator<L> {
    /// Create a disambiguator over a lexical oracle.
    pub fn new(lexicon: L) -> Self {
        SenseDisambiguator { lexicon }
    }

    /// The underlying oracle.
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// Overlap score of one sense against the context.
    ///
    /// Sums `lcs_ratio(gloss(r), c)` over every sense `r` in the neighborhood
    /// and every context term `c`.
    pub fn score(&self, sense: SenseId, context: &TermSet) -> f64 {
        self.lexicon
            .neighborhood(sense)
            .into_iter()
            .map(|related| {
                let gloss = self.lexicon.gloss(related);
                context
                    .iter()
                    .map(|term| lcs_ratio(&gloss, term))
                    .sum::<f64>()
            })
            .sum()
    }

    /// Select the best sense of `term` together with its score.
    ///
    /// Only a strictly higher score replaces the current best, so ties keep
    /// the sense the oracle lists first, and a term whose senses all score
    /// zero has no sense.
    pub fn disambiguate_scored(&self, term: &str, context: &TermSet) -> Option<(SenseId, f64)> {
        let mut best: Option<(SenseId, f64)> = None;
        let mut best_score = 0.0;

        for sense in self.lexicon.synsets(term) {
            let score = self.score(sense, context);
            trace!(
                term,
                sense = %self.lexicon.sense_name(sense),
                score,
                "scored sense"
            );
            if score > best_score {
                best_score = score;
                best = Some((sense, score));
            }
        }

        best
    }

    /// Select the best sense of `term` for the given context.
    pub fn disambiguate(&self, term: &str, context: &TermSet) -> Option<SenseId> {
        self.disambiguate_scored(term, context)
            .map(|(sense, _)| sense)
    }
}
