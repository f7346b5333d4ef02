//! Sense disambiguation and extended term set construction.
//!
//! Each source node is enriched with the synonyms of the lexical sense that
//! best fits its sibling nodes. A sense fits when the definitions around it
//! (its own gloss and the glosses of directly related senses) textually
//! overlap with the sibling context.

pub mod disambiguator;
pub mod extended;

pub use disambiguator::SenseDisambiguator;
pub use extended::{ExtendedSplitTermSet, ExtendedTermSetBuilder};
