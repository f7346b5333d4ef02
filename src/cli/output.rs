//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TaxomapArgs};
use crate::error::Result;
use crate::mapper::MappingReport;

/// Result structure for the expand command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpansionResult {
    pub source: String,
    pub nodes: Vec<ExpandedNode>,
}

/// One source node and its extended term set.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpandedNode {
    pub node: String,
    pub terms: Vec<String>,
}

/// Results that know how to print themselves for a terminal.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for MappingReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Source: {}", self.source)?;
        writeln!(out)?;
        writeln!(out, "Extended split term set:")?;
        for (node, terms) in self.source_nodes.iter().zip(self.extended.iter()) {
            let terms: Vec<&str> = terms.iter().map(String::as_str).collect();
            writeln!(out, "  {node}: {}", terms.join(", "))?;
        }
        writeln!(out)?;

        writeln!(out, "Candidates ({}):", self.candidates.len())?;
        for candidate in &self.candidates {
            writeln!(out, "  {candidate}")?;
        }
        writeln!(out)?;

        writeln!(out, "Best candidates:")?;
        if self.best.is_empty() {
            writeln!(out, "  (none)")?;
        }
        for (rank, candidate) in self.best.iter().enumerate() {
            writeln!(
                out,
                "  {}. {} [{}] {}",
                rank + 1,
                candidate.path,
                candidate.key,
                format_score(candidate.score)
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for ExpansionResult {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Source: {}", self.source)?;
        for node in &self.nodes {
            writeln!(out, "  {}: {}", node.node, node.terms.join(", "))?;
        }
        Ok(())
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize + HumanOutput>(
    message: &str,
    result: &T,
    args: &TaxomapArgs,
) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                writeln!(out, "{message}")?;
                writeln!(out)?;
            }
            result.write_human(&mut out)?;
        }
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

fn format_score(score: f64) -> String {
    format!("{score:.4}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::{PathKey, RankedCandidate};
    use crate::sense::ExtendedSplitTermSet;

    fn report() -> MappingReport {
        MappingReport {
            source: "Electronics/Television".to_string(),
            source_nodes: vec!["electronics".to_string(), "television".to_string()],
            extended: ExtendedSplitTermSet::new(vec![
                ["electronics".to_string()].into_iter().collect(),
                ["television".to_string(), "tv".to_string()].into_iter().collect(),
            ]),
            candidates: vec!["Electronics/TV".to_string()],
            best: vec![RankedCandidate {
                path: "Electronics/TV".to_string(),
                key: PathKey::from("ab"),
                score: 1.0,
            }],
        }
    }

    #[test]
    fn test_mapping_report_human() {
        let mut buffer = Vec::new();
        report().write_human(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.contains("  television: television, tv"));
        assert!(text.contains("Candidates (1):"));
        assert!(text.contains("  1. Electronics/TV [ab] 1.0000"));
    }

    #[test]
    fn test_empty_best_is_reported() {
        let mut report = report();
        report.best.clear();
        let mut buffer = Vec::new();
        report.write_human(&mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().contains("(none)"));
    }

    #[test]
    fn test_expansion_result_human() {
        let result = ExpansionResult {
            source: "Apparel & Clothing".to_string(),
            nodes: vec![ExpandedNode {
                node: "apparel & clothing".to_string(),
                terms: vec!["apparel".to_string(), "clothing".to_string()],
            }],
        };
        let mut buffer = Vec::new();
        result.write_human(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Source: Apparel & Clothing\n  apparel & clothing: apparel, clothing\n"
        );
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(0.25), "0.2500");
        assert_eq!(format_score(2.0 / 3.0), "0.6667");
    }
}
