//! The mapping pipeline.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::split_path;
use crate::error::{Result, TaxomapError};
use crate::lexicon::LexicalOracle;
use crate::mapper::config::MapperConfig;
use crate::matcher::SemanticMatcher;
use crate::ranking::{PathKeyRanker, RankedCandidate};
use crate::sense::{ExtendedSplitTermSet, ExtendedTermSetBuilder};
use crate::util::levenshtein::{ClassicEditDistance, EditDistance};

/// Everything a mapping run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingReport {
    /// The source path as given, without trailing newline.
    pub source: String,
    /// Lower-cased source nodes.
    pub source_nodes: Vec<String>,
    /// Extended split term set of the source path.
    pub extended: ExtendedSplitTermSet,
    /// Target paths that passed candidate filtering, in input order.
    pub candidates: Vec<String>,
    /// Best candidates, best first.
    pub best: Vec<RankedCandidate>,
}

/// Maps source category paths onto a target taxonomy.
#[derive(Debug, Clone)]
pub struct CategoryMapper<L, D = ClassicEditDistance> {
    builder: ExtendedTermSetBuilder<L>,
    matcher: SemanticMatcher<D>,
    config: MapperConfig,
}

impl<L: LexicalOracle> CategoryMapper<L> {
    /// Create a mapper with the classic edit distance.
    pub fn new(lexicon: L, config: MapperConfig) -> Result<Self> {
        Self::with_edit_distance(lexicon, ClassicEditDistance, config)
    }
}

impl<L: LexicalOracle, D: EditDistance> CategoryMapper<L, D> {
    /// Create a mapper over a custom edit distance oracle.
    pub fn with_edit_distance(lexicon: L, edit_distance: D, config: MapperConfig) -> Result<Self> {
        config.validate()?;
        let matcher = SemanticMatcher::with_edit_distance(edit_distance)
            .with_component_match(config.component_match)
            .with_filter_mode(config.filter_mode);

        Ok(CategoryMapper {
            builder: ExtendedTermSetBuilder::new(lexicon),
            matcher,
            config,
        })
    }

    /// The run configuration.
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// The matcher shared by filtering and ranking.
    pub fn matcher(&self) -> &SemanticMatcher<D> {
        &self.matcher
    }

    /// Build the extended split term set of a source path.
    pub fn expand(&self, source: &str) -> ExtendedSplitTermSet {
        self.builder.build(&split_path(source))
    }

    /// Filter target paths down to candidates.
    pub fn candidates<'a, S: AsRef<str>>(
        &self,
        extended: &ExtendedSplitTermSet,
        targets: &'a [S],
    ) -> Vec<&'a str> {
        self.matcher
            .candidates(extended, targets, self.config.candidate_threshold)
    }

    /// Rank candidate paths against the source's extended split term set.
    pub fn rank<S: AsRef<str>>(
        &self,
        extended: &ExtendedSplitTermSet,
        candidates: &[S],
    ) -> Vec<RankedCandidate> {
        PathKeyRanker::new(&self.matcher, extended)
            .with_node_threshold(self.config.node_threshold)
            .with_top_k(self.config.top_k)
            .rank_candidates(candidates)
    }

    /// Run the full pipeline for one source path.
    pub fn map<S: AsRef<str>>(&self, source: &str, targets: &[S]) -> MappingReport {
        let source_path = split_path(source);
        let extended = self.builder.build(&source_path);
        let candidates = self.candidates(&extended, targets);
        let best = self.rank(&extended, &candidates);

        info!(
            source = %source_path,
            targets = targets.len(),
            candidates = candidates.len(),
            best = best.len(),
            "mapped category"
        );

        MappingReport {
            source: source.trim_end_matches(['\n', '\r']).to_string(),
            source_nodes: source_path.nodes().to_vec(),
            extended,
            candidates: candidates
                .iter()
                .map(|c| c.trim_end_matches(['\n', '\r']).to_string())
                .collect(),
            best,
        }
    }
}

/// Read target category paths from a file, one per line, skipping blank lines.
pub fn read_targets<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => {
            TaxomapError::not_found(format!("target file '{}'", path.display()))
        }
        _ => TaxomapError::other(format!(
            "Failed to read target file '{}': {}",
            path.display(),
            e
        )),
    })?;

    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect())
}
