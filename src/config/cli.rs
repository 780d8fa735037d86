//! CLI argument parsing using clap

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// paramdraw - Hyperparameter search candidate generator
#[derive(Parser, Debug)]
#[command(name = "paramdraw")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print diagnostic output to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draw values from a single log-uniform distribution
    Sample(SampleArgs),
    /// Generate candidates from a search space
    Search(SearchArgs),
}

/// Arguments for `paramdraw sample`
#[derive(Args, Debug, Clone)]
pub struct SampleArgs {
    /// Lower bound (must be positive)
    #[arg(long, allow_negative_numbers = true)]
    pub low: f64,

    /// Upper bound (must be greater than low)
    #[arg(long, allow_negative_numbers = true)]
    pub high: f64,

    /// Number of values to draw
    #[arg(short = 'n', long, default_value = "1")]
    pub count: usize,

    /// Random seed for reproducible output
    #[arg(long, env = "PARAMDRAW_SEED")]
    pub seed: Option<u64>,

    /// Draw real values instead of truncating to integers
    #[arg(long)]
    pub continuous: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for `paramdraw search`
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// TOML search-space file
    #[arg(value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Inline parameter, e.g. "max_leaf_nodes=log_uniform_int:2,256" (repeatable)
    #[arg(short = 'p', long = "param", value_name = "NAME=KIND:ARGS")]
    pub params: Vec<String>,

    /// Number of candidates to draw (overrides config)
    #[arg(long)]
    pub n_iter: Option<usize>,

    /// Random seed (overrides config)
    #[arg(long, env = "PARAMDRAW_SEED")]
    pub seed: Option<u64>,

    /// Candidate generation strategy (overrides config)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the JSON report to this file
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Validate the search space and exit without sampling
    #[arg(long)]
    pub dry_run: bool,
}

/// Candidate generation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Independent random draws
    Random,
    /// Every combination of discrete values
    Grid,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate argument combinations that clap can't express
    pub fn validate(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Sample(args) => {
                if args.count == 0 {
                    anyhow::bail!("count must be at least 1");
                }
            }
            Command::Search(args) => {
                if args.config.is_none() && args.params.is_empty() {
                    anyhow::bail!("must specify a CONFIG file or at least one --param");
                }
                if args.n_iter == Some(0) {
                    anyhow::bail!("n_iter must be at least 1");
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sample() {
        let cli = Cli::try_parse_from([
            "paramdraw", "sample", "--low", "2", "--high", "256", "-n", "5", "--seed", "0",
        ])
        .unwrap();

        match cli.command {
            Command::Sample(args) => {
                assert_eq!(args.low, 2.0);
                assert_eq!(args.high, 256.0);
                assert_eq!(args.count, 5);
                assert_eq!(args.seed, Some(0));
                assert!(!args.continuous);
                assert_eq!(args.format, OutputFormat::Text);
            }
            other => panic!("expected sample command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "paramdraw",
            "--debug",
            "search",
            "space.toml",
            "--param",
            "max_bins=log_uniform_int:2,255",
            "--strategy",
            "grid",
            "--format",
            "json",
        ])
        .unwrap();

        assert!(cli.debug);
        match cli.command {
            Command::Search(args) => {
                assert_eq!(args.config, Some(PathBuf::from("space.toml")));
                assert_eq!(args.params.len(), 1);
                assert_eq!(args.strategy, Some(StrategyArg::Grid));
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected search command, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_search_needs_params() {
        let cli = Cli::try_parse_from(["paramdraw", "search"]).unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_validate_zero_count() {
        let cli = Cli::try_parse_from(["paramdraw", "sample", "--low", "1", "--high", "2", "-n", "0"])
            .unwrap();
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_negative_bound_parses() {
        // Rejected later by the distribution, not by clap
        let cli = Cli::try_parse_from(["paramdraw", "sample", "--low", "-1", "--high", "2"]).unwrap();
        match cli.command {
            Command::Sample(args) => assert_eq!(args.low, -1.0),
            other => panic!("expected sample command, got {:?}", other),
        }
    }
}
