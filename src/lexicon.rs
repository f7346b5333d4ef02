//! Read-only lexical knowledge base used for sense disambiguation.
//!
//! The matching engine only talks to the [`LexicalOracle`] trait. Two
//! implementations ship with the crate:
//!
//! - [`InMemoryLexicon`] - a WordNet-shaped sense graph loaded from JSON
//! - [`CachedLexicon`] - memoizes lookups of any other oracle
//!
//! # Examples
//!
//! ```
//! use taxomap::lexicon::{InMemoryLexicon, LexicalOracle, SenseEntry};
//!
//! let lexicon = InMemoryLexicon::from_entries(vec![
//!     SenseEntry::new("chair.n.01", ["chair"], "a seat for one person, with a support for the back"),
//! ])
//! .unwrap();
//!
//! assert_eq!(lexicon.synsets("Chair").len(), 1);
//! assert!(lexicon.synsets("sofa").is_empty());
//! ```

pub mod cached;
pub mod memory;
pub mod oracle;

pub use cached::CachedLexicon;
pub use memory::{InMemoryLexicon, SenseEntry};
pub use oracle::{LexicalOracle, SenseId};
