//! TOML search-space file parsing
//!
//! ```toml
//! n_iter = 20
//! seed = 0
//! strategy = "random"
//!
//! [params.max_leaf_nodes]
//! kind = "log_uniform_int"
//! low = 2
//! high = 256
//!
//! [params.learning_rate]
//! kind = "log_uniform"
//! low = 0.01
//! high = 10.0
//!
//! [params.loss]
//! kind = "choice"
//! values = ["log_loss", "exponential"]
//! ```

use super::*;
use crate::config::cli::SearchArgs;
use crate::config::cli_convert;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<SearchConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<SearchConfig> {
    let config: SearchConfig = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(args: &SearchArgs, mut config: SearchConfig) -> Result<SearchConfig> {
    if let Some(n_iter) = args.n_iter {
        config.n_iter = n_iter;
    }

    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    if let Some(strategy) = args.strategy {
        config.strategy = cli_convert::convert_strategy(strategy);
    }

    // Inline parameters add to (or replace) file parameters
    for param in &args.params {
        let (name, spec) = cli_convert::parse_param_spec(param)
            .with_context(|| format!("Invalid --param value: {}", param))?;
        config.params.insert(name, spec);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::StrategyArg;
    use std::io::Write;

    const BOOSTING_SPACE: &str = r#"
n_iter = 20
seed = 0

[params.max_leaf_nodes]
kind = "log_uniform_int"
low = 2
high = 256

[params.learning_rate]
kind = "log_uniform"
low = 0.01
high = 10.0

[params.loss]
kind = "choice"
values = ["log_loss", "exponential"]
"#;

    fn search_args() -> SearchArgs {
        SearchArgs {
            config: None,
            params: vec![],
            n_iter: None,
            seed: None,
            strategy: None,
            format: crate::config::cli::OutputFormat::Text,
            json_output: None,
            dry_run: false,
        }
    }

    #[test]
    fn test_parse_toml_string() {
        let config = parse_toml_string(BOOSTING_SPACE).unwrap();
        assert_eq!(config.n_iter, 20);
        assert_eq!(config.seed, Some(0));
        assert_eq!(config.strategy, SearchStrategy::Random);
        assert_eq!(config.params.len(), 3);
        assert_eq!(
            config.params["max_leaf_nodes"],
            ParamSpec::LogUniformInt { low: 2.0, high: 256.0 }
        );
        assert_eq!(
            config.params["loss"],
            ParamSpec::Choice {
                values: vec![
                    ParamValue::Str("log_loss".into()),
                    ParamValue::Str("exponential".into()),
                ]
            }
        );
    }

    #[test]
    fn test_parse_toml_defaults() {
        let config = parse_toml_string("[params.c]\nkind = \"choice\"\nvalues = [1, 10, 100]\n").unwrap();
        assert_eq!(config.n_iter, 10);
        assert_eq!(config.seed, None);
        assert_eq!(
            config.params["c"],
            ParamSpec::Choice {
                values: vec![ParamValue::Int(1), ParamValue::Int(10), ParamValue::Int(100)]
            }
        );
    }

    #[test]
    fn test_parse_toml_grid_strategy() {
        let config = parse_toml_string("strategy = \"grid\"\n").unwrap();
        assert_eq!(config.strategy, SearchStrategy::Grid);
    }

    #[test]
    fn test_parse_toml_unknown_kind() {
        let result = parse_toml_string("[params.x]\nkind = \"beta\"\nlow = 1\nhigh = 2\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BOOSTING_SPACE.as_bytes()).unwrap();

        let config = parse_toml_file(file.path()).unwrap();
        assert_eq!(config.params.len(), 3);
    }

    #[test]
    fn test_parse_toml_missing_file() {
        let err = parse_toml_file(Path::new("/nonexistent/space.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config file"));
    }

    #[test]
    fn test_merge_cli_overrides() {
        let config = parse_toml_string(BOOSTING_SPACE).unwrap();
        let mut args = search_args();
        args.n_iter = Some(5);
        args.seed = Some(99);
        args.strategy = Some(StrategyArg::Grid);
        args.params = vec!["max_bins=log_uniform_int:2,255".to_string()];

        let merged = merge_cli_with_config(&args, config).unwrap();
        assert_eq!(merged.n_iter, 5);
        assert_eq!(merged.seed, Some(99));
        assert_eq!(merged.strategy, SearchStrategy::Grid);
        assert_eq!(merged.params.len(), 4);
        assert_eq!(
            merged.params["max_bins"],
            ParamSpec::LogUniformInt { low: 2.0, high: 255.0 }
        );
    }

    #[test]
    fn test_merge_keeps_file_values() {
        let config = parse_toml_string(BOOSTING_SPACE).unwrap();
        let merged = merge_cli_with_config(&search_args(), config).unwrap();
        assert_eq!(merged.n_iter, 20);
        assert_eq!(merged.seed, Some(0));
    }

    #[test]
    fn test_merge_bad_param() {
        let mut args = search_args();
        args.params = vec!["nonsense".to_string()];
        assert!(merge_cli_with_config(&args, SearchConfig::default()).is_err());
    }
}
