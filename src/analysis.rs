//! Term decomposition for category paths.
//!
//! A raw category path such as `"Electronics/Audio & Video"` is broken into
//! ordered nodes, and each node into a set of atomic composite terms. Every
//! downstream stage works on these lower-cased pieces.

pub mod decomposer;

pub use decomposer::{CategoryPath, TermSet, split_composite, split_path};
