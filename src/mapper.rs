//! End-to-end mapping of a source category path onto a target taxonomy.
//!
//! [`CategoryMapper`] runs the three stages in order: it expands the source
//! path into an extended split term set, filters the target paths down to
//! candidates, and ranks the candidates by path-key alignment.

pub mod config;
pub mod pipeline;

pub use config::MapperConfig;
pub use pipeline::{CategoryMapper, MappingReport, read_targets};
