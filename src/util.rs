//! Shared string utilities used by the matching stages.

pub mod levenshtein;
pub mod similarity;
