//! CLI to Config conversion utilities

use crate::config::cli;
use crate::config::ParamSpec;
use crate::distribution::ParamValue;
use crate::search::SearchStrategy;
use anyhow::{Context, Result};

/// Convert CLI strategy to config strategy
pub fn convert_strategy(strategy: cli::StrategyArg) -> SearchStrategy {
    match strategy {
        cli::StrategyArg::Random => SearchStrategy::Random,
        cli::StrategyArg::Grid => SearchStrategy::Grid,
    }
}

/// Parse an inline parameter spec (e.g., "max_leaf_nodes=log_uniform_int:2,256")
///
/// Kinds: `log_uniform_int:LOW,HIGH`, `log_uniform:LOW,HIGH`,
/// `uniform:LOW,HIGH`, `int_range:LOW,HIGH`, `choice:V1,V2,...`.
pub fn parse_param_spec(s: &str) -> Result<(String, ParamSpec)> {
    let (name, rest) = s
        .split_once('=')
        .with_context(|| format!("Expected NAME=KIND:ARGS, got: {}", s))?;
    let name = name.trim();
    if name.is_empty() {
        anyhow::bail!("Parameter name is empty in: {}", s);
    }

    let (kind, args) = rest
        .split_once(':')
        .with_context(|| format!("Expected KIND:ARGS after '=', got: {}", rest))?;
    let args: Vec<&str> = args.split(',').map(str::trim).collect();

    let spec = match kind.trim().to_lowercase().as_str() {
        "log_uniform_int" | "loguniform_int" => {
            let (low, high) = parse_float_pair(&args)?;
            ParamSpec::LogUniformInt { low, high }
        }
        "log_uniform" | "loguniform" => {
            let (low, high) = parse_float_pair(&args)?;
            ParamSpec::LogUniform { low, high }
        }
        "uniform" => {
            let (low, high) = parse_float_pair(&args)?;
            ParamSpec::Uniform { low, high }
        }
        "int_range" | "randint" => {
            let (low, high) = parse_pair::<i64>(&args)?;
            ParamSpec::IntRange { low, high }
        }
        "choice" => ParamSpec::Choice {
            values: args.iter().filter(|a| !a.is_empty()).map(|a| parse_value(a)).collect(),
        },
        other => anyhow::bail!("Unknown distribution kind: {}", other),
    };

    Ok((name.to_string(), spec))
}

fn parse_float_pair(args: &[&str]) -> Result<(f64, f64)> {
    parse_pair::<f64>(args)
}

fn parse_pair<T>(args: &[&str]) -> Result<(T, T)>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args {
        [low, high] => {
            let low = low.parse().with_context(|| format!("Invalid low bound: {}", low))?;
            let high = high.parse().with_context(|| format!("Invalid high bound: {}", high))?;
            Ok((low, high))
        }
        _ => anyhow::bail!("Expected LOW,HIGH, got {} value(s)", args.len()),
    }
}

/// Parse a scalar into the narrowest matching value (int, float, bool, string)
pub fn parse_value(s: &str) -> ParamValue {
    if let Ok(v) = s.parse::<i64>() {
        ParamValue::Int(v)
    } else if let Ok(v) = s.parse::<f64>() {
        ParamValue::Float(v)
    } else if let Ok(v) = s.parse::<bool>() {
        ParamValue::Bool(v)
    } else {
        ParamValue::Str(s.to_string())
    }
}
