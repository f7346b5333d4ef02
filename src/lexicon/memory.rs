//! In-memory sense graph loaded from JSON.

use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TaxomapError};
use crate::lexicon::oracle::{LexicalOracle, SenseId};

/// One sense as it appears in a lexicon file.
///
/// Relations refer to other senses by `name`. Only one direction of each
/// relation needs to be listed: a hypernym link also registers the matching
/// hyponym link, and a part meronym link the matching part holonym link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenseEntry {
    /// Unique sense name, e.g. `"chair.n.01"`.
    pub name: String,
    /// Synonym terms of the sense.
    pub lemmas: Vec<String>,
    /// Definition text.
    pub gloss: String,
    #[serde(default)]
    pub hypernyms: Vec<String>,
    #[serde(default)]
    pub hyponyms: Vec<String>,
    #[serde(default)]
    pub part_meronyms: Vec<String>,
    #[serde(default)]
    pub part_holonyms: Vec<String>,
}

impl SenseEntry {
    /// Create an entry without relations.
    pub fn new<I, S>(name: &str, lemmas: I, gloss: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SenseEntry {
            name: name.to_string(),
            lemmas: lemmas.into_iter().map(Into::into).collect(),
            gloss: gloss.to_string(),
            hypernyms: Vec::new(),
            hyponyms: Vec::new(),
            part_meronyms: Vec::new(),
            part_holonyms: Vec::new(),
        }
    }

    /// Add a hypernym link.
    pub fn with_hypernym(mut self, name: &str) -> Self {
        self.hypernyms.push(name.to_string());
        self
    }

    /// Add a part meronym link.
    pub fn with_part_meronym(mut self, name: &str) -> Self {
        self.part_meronyms.push(name.to_string());
        self
    }
}

#[derive(Debug, Clone, Default)]
struct SenseRecord {
    name: String,
    lemmas: Vec<String>,
    gloss: String,
    hypernyms: Vec<SenseId>,
    hyponyms: Vec<SenseId>,
    part_meronyms: Vec<SenseId>,
    part_holonyms: Vec<SenseId>,
}

/// A WordNet-shaped lexicon held in memory.
///
/// Lookups are case-insensitive and treat spaces as underscores, the way
/// multi-word lemmas are stored (`"tv set"` finds the lemma `tv_set`). Senses
/// of a term are returned in file order, which is the tie-breaking order for
/// disambiguation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLexicon {
    senses: Vec<SenseRecord>,
    /// Normalized lemma -> senses containing it, in insertion order
    lemma_index: AHashMap<String, Vec<SenseId>>,
}

impl InMemoryLexicon {
    /// Create an empty lexicon. Every term is unknown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a lexicon from a JSON file holding an array of [`SenseEntry`].
    ///
    /// Example format:
    /// ```json
    /// [
    ///   {
    ///     "name": "chair.n.01",
    ///     "lemmas": ["chair"],
    ///     "gloss": "a seat for one person, with a support for the back",
    ///     "hypernyms": ["seat.n.03"]
    ///   }
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TaxomapError::lexicon(format!(
                "Failed to read lexicon file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_json(&content).map_err(|e| {
            TaxomapError::lexicon(format!(
                "Failed to load lexicon from '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse a lexicon from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        let entries: Vec<SenseEntry> = serde_json::from_str(content)?;
        Self::from_entries(entries)
    }

    /// Build a lexicon from sense entries.
    ///
    /// Fails on duplicate sense names, senses without lemmas, and relations
    /// naming a sense that is not defined.
    pub fn from_entries(entries: Vec<SenseEntry>) -> Result<Self> {
        let mut ids: AHashMap<String, SenseId> = AHashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if entry.lemmas.is_empty() {
                return Err(TaxomapError::lexicon(format!(
                    "Sense '{}' has no lemmas",
                    entry.name
                )));
            }
            let id = SenseId(u32::try_from(position).map_err(|_| {
                TaxomapError::lexicon("Lexicon holds more senses than can be addressed")
            })?);
            if ids.insert(entry.name.clone(), id).is_some() {
                return Err(TaxomapError::lexicon(format!(
                    "Duplicate sense name '{}'",
                    entry.name
                )));
            }
        }

        let resolve = |owner: &str, names: &[String]| -> Result<Vec<SenseId>> {
            names
                .iter()
                .map(|name| {
                    ids.get(name).copied().ok_or_else(|| {
                        TaxomapError::lexicon(format!(
                            "Sense '{owner}' refers to unknown sense '{name}'"
                        ))
                    })
                })
                .collect()
        };

        let mut senses = Vec::with_capacity(entries.len());
        for entry in &entries {
            senses.push(SenseRecord {
                name: entry.name.clone(),
                lemmas: entry.lemmas.clone(),
                gloss: entry.gloss.clone(),
                hypernyms: resolve(&entry.name, &entry.hypernyms)?,
                hyponyms: resolve(&entry.name, &entry.hyponyms)?,
                part_meronyms: resolve(&entry.name, &entry.part_meronyms)?,
                part_holonyms: resolve(&entry.name, &entry.part_holonyms)?,
            });
        }

        // Register the inverse direction of every link.
        for index in 0..senses.len() {
            let id = SenseId(index as u32);
            for hypernym in senses[index].hypernyms.clone() {
                push_unique(&mut senses[hypernym.0 as usize].hyponyms, id);
            }
            for hyponym in senses[index].hyponyms.clone() {
                push_unique(&mut senses[hyponym.0 as usize].hypernyms, id);
            }
            for meronym in senses[index].part_meronyms.clone() {
                push_unique(&mut senses[meronym.0 as usize].part_holonyms, id);
            }
            for holonym in senses[index].part_holonyms.clone() {
                push_unique(&mut senses[holonym.0 as usize].part_meronyms, id);
            }
        }

        let mut lemma_index: AHashMap<String, Vec<SenseId>> = AHashMap::new();
        for (index, sense) in senses.iter().enumerate() {
            for lemma in &sense.lemmas {
                let ids = lemma_index.entry(normalize_lookup(lemma)).or_default();
                push_unique(ids, SenseId(index as u32));
            }
        }

        Ok(InMemoryLexicon {
            senses,
            lemma_index,
        })
    }

    /// Number of senses in the lexicon.
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    /// Check if the lexicon holds no senses.
    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }

    /// Look a sense up by its name.
    pub fn sense_by_name(&self, name: &str) -> Option<SenseId> {
        self.senses
            .iter()
            .position(|sense| sense.name == name)
            .map(|index| SenseId(index as u32))
    }

    fn record(&self, sense: SenseId) -> Option<&SenseRecord> {
        self.senses.get(sense.0 as usize)
    }
}

impl LexicalOracle for InMemoryLexicon {
    fn synsets(&self, term: &str) -> Vec<SenseId> {
        self.lemma_index
            .get(&normalize_lookup(term))
            .cloned()
            .unwrap_or_default()
    }

    fn lemmas(&self, sense: SenseId) -> Vec<String> {
        self.record(sense)
            .map(|record| record.lemmas.clone())
            .unwrap_or_default()
    }

    fn gloss(&self, sense: SenseId) -> String {
        self.record(sense)
            .map(|record| record.gloss.clone())
            .unwrap_or_default()
    }

    fn hypernyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.record(sense)
            .map(|record| record.hypernyms.clone())
            .unwrap_or_default()
    }

    fn hyponyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.record(sense)
            .map(|record| record.hyponyms.clone())
            .unwrap_or_default()
    }

    fn part_meronyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.record(sense)
            .map(|record| record.part_meronyms.clone())
            .unwrap_or_default()
    }

    fn part_holonyms(&self, sense: SenseId) -> Vec<SenseId> {
        self.record(sense)
            .map(|record| record.part_holonyms.clone())
            .unwrap_or_default()
    }

    fn sense_name(&self, sense: SenseId) -> String {
        self.record(sense)
            .map(|record| record.name.clone())
            .unwrap_or_else(|| sense.to_string())
    }
}

fn normalize_lookup(term: &str) -> String {
    term.trim().to_lowercase().replace(' ', "_")
}

fn push_unique(ids: &mut Vec<SenseId>, id: SenseId) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}
