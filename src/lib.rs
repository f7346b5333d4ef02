//! # taxomap
//!
//! Maps a hierarchical source category path (e.g. `"Electronics/Audio & Video"`)
//! onto the best-matching paths of an independently authored target taxonomy.
//!
//! ## Pipeline
//!
//! - Term decomposition of paths into nodes and of nodes into composite terms
//! - Gloss-overlap sense disambiguation against a lexical knowledge base
//! - Fuzzy subsumption matching of enriched terms against target paths
//! - Path-key alignment and top-k ranking of candidates
//!
//! ## Example
//!
//! ```
//! use taxomap::lexicon::{InMemoryLexicon, SenseEntry};
//! use taxomap::mapper::{CategoryMapper, MapperConfig};
//!
//! let lexicon = InMemoryLexicon::from_entries(vec![SenseEntry::new(
//!     "television_receiver.n.01",
//!     ["television", "tv", "tv_set"],
//!     "an electronic device that receives television signals",
//! )])
//! .unwrap();
//!
//! let mapper = CategoryMapper::new(&lexicon, MapperConfig::default()).unwrap();
//! let report = mapper.map("Electronics/Television", &["Electronics/TV", "Furniture/Chair"]);
//!
//! assert_eq!(report.best[0].path, "Electronics/TV");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod lexicon;
pub mod mapper;
pub mod matcher;
pub mod ranking;
pub mod sense;
pub mod util;

pub mod prelude {
    pub use crate::analysis::{CategoryPath, TermSet, split_composite, split_path};
    pub use crate::error::{Result, TaxomapError};
    pub use crate::lexicon::{CachedLexicon, InMemoryLexicon, LexicalOracle, SenseEntry, SenseId};
    pub use crate::mapper::{CategoryMapper, MapperConfig, MappingReport};
    pub use crate::matcher::{FilterMode, SemanticMatcher};
    pub use crate::ranking::{PathKey, PathKeyRanker, RankedCandidate, SymbolAllocator};
    pub use crate::sense::{ExtendedSplitTermSet, ExtendedTermSetBuilder, SenseDisambiguator};
    pub use crate::util::levenshtein::{CachedEditDistance, ClassicEditDistance, EditDistance};
    pub use crate::util::similarity::ComponentMatch;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
