//! Structural alignment of candidate paths and top-k ranking.
//!
//! Every source node gets a letter (`a`, `b`, ...). A candidate path is
//! encoded as a key of the same alphabet: a candidate node that matches
//! source node `j` reuses its letter, any other node gets a fresh symbol.
//! Candidates are scored by how far their key is from the source key.

pub mod path_key;
pub mod ranker;

pub use path_key::{PathKey, SymbolAllocator, rank};
pub use ranker::{PathKeyRanker, RankedCandidate, TopK};
