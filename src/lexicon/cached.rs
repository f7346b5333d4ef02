//! Memoizing wrapper around a lexical oracle.

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::lexicon::oracle::{LexicalOracle, SenseId};

/// Caches `synsets`, `gloss` and `neighborhood` lookups of another oracle.
///
/// Disambiguation asks for the same glosses once per context term and the
/// same synsets once per node, so a backend that is slow to query (a bundled
/// database, a network service) only answers each question once. The cache
/// lives as long as the wrapper.
#[derive(Debug)]
pub struct CachedLexicon<L> {
    inner: L,
    synsets: RwLock<AHashMap<String, Vec<SenseId>>>,
    glosses: RwLock<AHashMap<SenseId, String>>,
    neighborhoods: RwLock<AHashMap<SenseId, Vec<SenseId>>>,
}

impl<L: LexicalOracle> CachedLexicon<L> {
    /// Wrap an oracle.
    pub fn new(inner: L) -> Self {
        CachedLexicon {
            inner,
            synsets: RwLock::new(AHashMap::new()),
            glosses: RwLock::new(AHashMap::new()),
            neighborhoods: RwLock::new(AHashMap::new()),
        }
    }

    /// The wrapped oracle.
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Number of distinct terms whose synsets are cached.
    pub fn cached_terms(&self) -> usize {
        self.synsets.read().len()
    }

    /// Drop every cached answer.
    pub fn clear(&self) {
        self.synsets.write().clear();
        self.glosses.write().clear();
        self.neighborhoods.write().clear();
    }
}

impl<L: LexicalOracle> LexicalOracle for CachedLexicon<L> {
    fn synsets(&self, term: &str) -> Vec<SenseId> {
        if let Some(senses) = self.synsets.read().get(term) {
            return senses.clone();
        }
        let senses = self.inner.synsets(term);
        self.synsets.write().insert(term.to_string(), senses.clone());
        senses
    }

    fn lemmas(&self, sense: SenseId) -> Vec<String> {
        self.inner.lemmas(sense)
    }

    fn gloss(&self, sense: SenseId) -> String {
        if let Some(gloss) = self.glosses.read().get(&sense) {
            return gloss.clone();
        }
        let gloss = self.inner.gloss(sense);
        self.glosses.write().insert(sense, gloss.clone());
        gloss
    }

    fn hypernyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.inner.hypernyms(sense)
    }

    fn hyponyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.inner.hyponyms(sense)
    }

    fn part_meronyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.inner.part_meronyms(sense)
    }

    fn part_holonyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.inner.part_holonyms(sense)
    }

    fn sense_name(&self, sense: SenseId) -> String {
        self.inner.sense_name(sense)
    }

    fn neighborhood(&self, sense: SenseId) -> Vec<SenseId> {
        if let Some(related) = self.neighborhoods.read().get(&sense) {
            return related.clone();
        }
        let related = self.inner.neighborhood(sense);
        self.neighborhoods.write().insert(sense, related.clone());
        related
    }
}
