//! Command line argument parsing for the taxomap CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::matcher::FilterMode;

/// taxomap - map category paths onto a target taxonomy
#[derive(Parser, Debug, Clone)]
#[command(name = "taxomap")]
#[command(about = "Map a source category path onto the best matching paths of a target taxonomy")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TaxomapArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TaxomapArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Map a source category path onto the paths of a target file
    Map(MapArgs),

    /// Show the extended split term set of a source category path
    Expand(ExpandArgs),
}

/// Arguments for mapping a category
#[derive(Parser, Debug, Clone)]
pub struct MapArgs {
    /// Source category path, e.g. "Electronics/Audio & Video"
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// File with one target category path per line
    #[arg(value_name = "TARGETS_FILE")]
    pub targets: PathBuf,

    /// Lexicon file (JSON array of senses)
    #[arg(short, long, value_name = "LEXICON_FILE", env = "TAXOMAP_LEXICON")]
    pub lexicon: PathBuf,

    /// Mapper configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Threshold for selecting candidate target paths
    #[arg(long, value_name = "THRESHOLD")]
    pub candidate_threshold: Option<f64>,

    /// Threshold for aligning candidate nodes with source nodes
    #[arg(long, value_name = "THRESHOLD")]
    pub node_threshold: Option<f64>,

    /// Number of best candidates to report
    #[arg(short = 'k', long)]
    pub top_k: Option<usize>,

    /// How candidates are filtered
    #[arg(long, value_enum)]
    pub filter_mode: Option<FilterModeArg>,

    /// Only count containment on word boundaries
    #[arg(long)]
    pub word_boundary: bool,
}

/// Arguments for expanding a category
#[derive(Parser, Debug, Clone)]
pub struct ExpandArgs {
    /// Source category path
    #[arg(value_name = "SOURCE")]
    pub source: String,

    /// Lexicon file (JSON array of senses)
    #[arg(short, long, value_name = "LEXICON_FILE", env = "TAXOMAP_LEXICON")]
    pub lexicon: PathBuf,
}

/// Candidate filtering modes
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterModeArg {
    /// One source term anywhere must match the target path
    Flattened,
    /// Every source node must match the target path
    PerNode,
}

impl From<FilterModeArg> for FilterMode {
    fn from(mode: FilterModeArg) -> Self {
        match mode {
            FilterModeArg::Flattened => FilterMode::Flattened,
            FilterModeArg::PerNode => FilterMode::PerNode,
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_command() {
        let args = TaxomapArgs::try_parse_from([
            "taxomap",
            "map",
            "Electronics/Television",
            "targets.txt",
            "--lexicon",
            "lexicon.json",
            "-k",
            "5",
            "--filter-mode",
            "per-node",
            "--word-boundary",
        ])
        .unwrap();

        if let Command::Map(map_args) = args.command {
            assert_eq!(map_args.source, "Electronics/Television");
            assert_eq!(map_args.targets, PathBuf::from("targets.txt"));
            assert_eq!(map_args.lexicon, PathBuf::from("lexicon.json"));
            assert_eq!(map_args.top_k, Some(5));
            assert_eq!(map_args.filter_mode, Some(FilterModeArg::PerNode));
            assert!(map_args.word_boundary);
            assert!(map_args.config.is_none());
            assert!(map_args.candidate_threshold.is_none());
        } else {
            panic!("Expected Map command");
        }
    }

    #[test]
    fn test_expand_command() {
        let args = TaxomapArgs::try_parse_from([
            "taxomap",
            "expand",
            "Apparel & Clothing",
            "-l",
            "lexicon.json",
        ])
        .unwrap();

        if let Command::Expand(expand_args) = args.command {
            assert_eq!(expand_args.source, "Apparel & Clothing");
            assert_eq!(expand_args.lexicon, PathBuf::from("lexicon.json"));
        } else {
            panic!("Expected Expand command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        let args = TaxomapArgs::try_parse_from(["taxomap", "expand", "a", "-l", "x.json"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args =
            TaxomapArgs::try_parse_from(["taxomap", "-vv", "expand", "a", "-l", "x.json"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args =
            TaxomapArgs::try_parse_from(["taxomap", "--quiet", "expand", "a", "-l", "x.json"])
                .unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TaxomapArgs::try_parse_from(["taxomap", "--format", "json", "expand", "a", "-l", "x.json"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }

    #[test]
    fn test_filter_mode_conversion() {
        assert_eq!(FilterMode::from(FilterModeArg::Flattened), FilterMode::Flattened);
        assert_eq!(FilterMode::from(FilterModeArg::PerNode), FilterMode::PerNode);
    }
}
