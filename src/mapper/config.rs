//! Configuration of a mapping run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TaxomapError};
use crate::matcher::FilterMode;
use crate::matcher::semantic::DEFAULT_CANDIDATE_THRESHOLD;
use crate::ranking::ranker::{DEFAULT_NODE_THRESHOLD, DEFAULT_TOP_K};
use crate::util::similarity::ComponentMatch;

/// Knobs of a mapping run. Missing fields in a config file take defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Similarity threshold for selecting candidate target paths (0.0 to 1.0).
    pub candidate_threshold: f64,
    /// Similarity threshold for aligning candidate nodes with source nodes.
    pub node_threshold: f64,
    /// Maximum number of ranked candidates returned.
    pub top_k: usize,
    /// How candidates are filtered against the extended split term set.
    pub filter_mode: FilterMode,
    /// How term containment is tested.
    pub component_match: ComponentMatch,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            candidate_threshold: DEFAULT_CANDIDATE_THRESHOLD,
            node_threshold: DEFAULT_NODE_THRESHOLD,
            top_k: DEFAULT_TOP_K,
            filter_mode: FilterMode::default(),
            component_match: ComponentMatch::default(),
        }
    }
}

impl MapperConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TaxomapError::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Parse a configuration from JSON and validate it.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: MapperConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that thresholds lie in `[0, 1]` and that `top_k` is positive.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("candidate_threshold", self.candidate_threshold),
            ("node_threshold", self.node_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TaxomapError::config(format!(
                    "{name} must be between 0.0 and 1.0, got {value}"
                )));
            }
        }
        if self.top_k == 0 {
            return Err(TaxomapError::config("top_k must be at least 1"));
        }
        Ok(())
    }
}
