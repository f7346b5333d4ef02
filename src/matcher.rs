//! Threshold-based fuzzy subsumption between term sets and target paths.

pub mod semantic;

pub use semantic::{FilterMode, SemanticMatcher};
