//! Command implementations for the taxomap CLI.

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::analysis::split_path;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TaxomapError};
use crate::lexicon::{CachedLexicon, InMemoryLexicon};
use crate::mapper::{CategoryMapper, MapperConfig, read_targets};
use crate::util::levenshtein::{CachedEditDistance, ClassicEditDistance};
use crate::util::similarity::ComponentMatch;

/// Execute a CLI command.
pub fn execute_command(args: TaxomapArgs) -> Result<()> {
    match &args.command {
        Command::Map(map_args) => map_category(map_args, &args),
        Command::Expand(expand_args) => expand_category(expand_args, &args),
    }
}

/// Map a source category onto the target file.
fn map_category(args: &MapArgs, cli_args: &TaxomapArgs) -> Result<()> {
    let start_time = Instant::now();
    check_source(&args.source)?;
    let config = resolve_config(args)?;
    debug!(?config, "resolved mapper configuration");

    let lexicon = load_lexicon(&args.lexicon)?;
    let targets = read_targets(&args.targets)?;
    info!(
        targets = targets.len(),
        file = %args.targets.display(),
        "loaded target categories"
    );

    let mapper = CategoryMapper::with_edit_distance(
        lexicon,
        CachedEditDistance::new(ClassicEditDistance),
        config,
    )?;
    let report = mapper.map(&args.source, &targets);
    info!(
        duration_ms = start_time.elapsed().as_millis() as u64,
        "mapping finished"
    );

    output_result("Mapping finished", &report, cli_args)
}

/// Print the extended split term set of a source category.
fn expand_category(args: &ExpandArgs, cli_args: &TaxomapArgs) -> Result<()> {
    check_source(&args.source)?;
    let lexicon = load_lexicon(&args.lexicon)?;
    let mapper = CategoryMapper::new(lexicon, MapperConfig::default())?;

    let nodes = split_path(&args.source);
    let extended = mapper.expand(&args.source);
    let result = ExpansionResult {
        source: args.source.trim_end_matches(['\n', '\r']).to_string(),
        nodes: nodes
            .iter()
            .zip(extended.iter())
            .map(|(node, terms)| ExpandedNode {
                node: node.to_string(),
                terms: terms.iter().cloned().collect(),
            })
            .collect(),
    };

    output_result("Extended split term set", &result, cli_args)
}

fn check_source(source: &str) -> Result<()> {
    if source.trim().is_empty() {
        return Err(TaxomapError::invalid_argument(
            "source category must not be empty",
        ));
    }
    Ok(())
}

/// Config file values first, then command line overrides.
fn resolve_config(args: &MapArgs) -> Result<MapperConfig> {
    let mut config = match &args.config {
        Some(path) => MapperConfig::from_file(path)?,
        None => MapperConfig::default(),
    };

    if let Some(threshold) = args.candidate_threshold {
        config.candidate_threshold = threshold;
    }
    if let Some(threshold) = args.node_threshold {
        config.node_threshold = threshold;
    }
    if let Some(top_k) = args.top_k {
        config.top_k = top_k;
    }
    if let Some(filter_mode) = args.filter_mode {
        config.filter_mode = filter_mode.into();
    }
    if args.word_boundary {
        config.component_match = ComponentMatch::WordBoundary;
    }

    config.validate()?;
    Ok(config)
}

fn load_lexicon(path: &Path) -> Result<CachedLexicon<InMemoryLexicon>> {
    let lexicon = InMemoryLexicon::load_from_file(path)?;
    info!(senses = lexicon.len(), file = %path.display(), "loaded lexicon");
    Ok(CachedLexicon::new(lexicon))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::matcher::FilterMode;

    fn map_args() -> MapArgs {
        MapArgs {
            source: "Electronics/Television".to_string(),
            targets: PathBuf::from("targets.txt"),
            lexicon: PathBuf::from("resources/lexicon/retail.json"),
            config: None,
            candidate_threshold: None,
            node_threshold: None,
            top_k: None,
            filter_mode: None,
            word_boundary: false,
        }
    }

    #[test]
    fn test_resolve_config_defaults() {
        assert_eq!(resolve_config(&map_args()).unwrap(), MapperConfig::default());
    }

    #[test]
    fn test_resolve_config_overrides() {
        let args = MapArgs {
            candidate_threshold: Some(0.8),
            node_threshold: Some(0.5),
            top_k: Some(1),
            filter_mode: Some(FilterModeArg::PerNode),
            word_boundary: true,
            ..map_args()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.candidate_threshold, 0.8);
        assert_eq!(config.node_threshold, 0.5);
        assert_eq!(config.top_k, 1);
        assert_eq!(config.filter_mode, FilterMode::PerNode);
        assert_eq!(config.component_match, ComponentMatch::WordBoundary);
    }

    #[test]
    fn test_resolve_config_rejects_bad_override() {
        let args = MapArgs {
            top_k: Some(0),
            ..map_args()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_resolve_config_accepts_large_top_k() {
        let args = MapArgs {
            top_k: Some(usize::MAX),
            ..map_args()
        };
        assert_eq!(resolve_config(&args).unwrap().top_k, usize::MAX);
    }

    #[test]
    fn test_blank_source_is_rejected() {
        assert!(check_source("Electronics/Television").is_ok());
        match check_source("  \n") {
            Err(TaxomapError::Other(msg)) => {
                assert_eq!(msg, "Invalid argument: source category must not be empty")
            }
            other => panic!("Expected invalid argument error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_lexicon() {
        let lexicon = load_lexicon(&map_args().lexicon).unwrap();
        assert!(!lexicon.inner().is_empty());
        assert!(load_lexicon(Path::new("missing.json")).is_err());
    }
}
