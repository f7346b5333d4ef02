//! The lexical oracle interface.

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// Opaque handle to one sense (synset) of a lexical knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SenseId(pub u32);

impl fmt::Display for SenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sense#{}", self.0)
    }
}

/// Read-only access to a sense graph.
///
/// Every method must be pure. Enumeration order matters: `synsets` defines
/// which sense wins a disambiguation tie, so implementations should return
/// senses in a stable, documented order.
pub trait LexicalOracle {
    /// All senses the term belongs to, or an empty list for unknown terms.
    fn synsets(&self, term: &str) -> Vec<SenseId>;

    /// Synonym terms (lemmas) of a sense.
    fn lemmas(&self, sense: SenseId) -> Vec<String>;

    /// Natural-language definition of a sense.
    fn gloss(&self, sense: SenseId) -> String;

    /// More general senses.
    fn hypernyms(&self, sense: SenseId) -> Vec<SenseId>;

    /// More specific senses.
    fn hyponyms(&self, sense: SenseId) -> Vec<SenseId>;

    /// Senses that are parts of this one.
    fn part_meronyms(&self, sense: SenseId) -> Vec<SenseId>;

    /// Senses this one is a part of.
    fn part_holonyms(&self, sense: SenseId) -> Vec<SenseId>;

    /// Human-readable identifier, used for logging and reports.
    fn sense_name(&self, sense: SenseId) -> String {
        sense.to_string()
    }

    /// The sense itself followed by its hypernyms, hyponyms, part meronyms and
    /// part holonyms, each sense listed once in first-seen order.
    fn neighborhood(&self, sense: SenseId) -> Vec<SenseId> {
        let mut related = vec![sense];
        related.extend(self.hypernyms(sense));
        related.extend(self.hyponyms(sense));
        related.extend(self.part_meronyms(sense));
        related.extend(self.part_holonyms(sense));

        let mut seen = AHashSet::with_capacity(related.len());
        related.retain(|s| seen.insert(*s));
        related
    }
}

impl<T: LexicalOracle + ?Sized> LexicalOracle for &T {
    fn synsets(&self, term: &str) -> Vec<SenseId> {
        (**self).synsets(term)
    }

    fn lemmas(&self, sense: SenseId) -> Vec<String> {
        (**self).lemmas(sense)
    }

    fn gloss(&self, sense: SenseId) -> String {
        (**self).gloss(sense)
    }

    fn hypernyms(&self, sense: SenseId) -> Vec<SenseId> {
        (**self).hypernyms(sense)
    }

    fn hyponyms(&self, sense: SenseId) -> Vec<SenseId> {
        (**self).hyponyms(sense)
    }

    fn part_meronyms(&self, sense: SenseId) -> Vec<SenseId> {
        (**self).part_meronyms(sense)
    }

    fn part_holonyms(&self, sense: SenseId) -> Vec<SenseId> {
        (**self).part_holonyms(sense)
    }

    fn sense_name(&self, sense: SenseId) -> String {
        (**self).sense_name(sense)
    }

    fn neighborhood(&self, sense: SenseId) -> Vec<SenseId> {
        (**self).neighborhood(sense)
    }
}
