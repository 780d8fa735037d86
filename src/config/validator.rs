//! Configuration validation

use super::*;
use crate::search::SearchSpace;
use crate::search::ParameterGrid;
use anyhow::{Context, Result};

/// Largest grid the grid strategy will enumerate
pub const MAX_GRID_CANDIDATES: usize = 1_000_000;

/// Validate complete configuration
pub fn validate_config(config: &SearchConfig) -> Result<()> {
    if config.n_iter == 0 {
        anyhow::bail!("n_iter must be at least 1, got 0");
    }

    let space = build_search_space(config)?;

    if config.strategy == SearchStrategy::Grid {
        if let Some((name, dist)) = space.iter().find(|(_, d)| !d.is_discrete()) {
            anyhow::bail!(
                "grid strategy requires every parameter to be a choice list, but '{}' is {}",
                name,
                dist
            );
        }

        let grid = ParameterGrid::new(&space).context("Failed to build parameter grid")?;
        if grid.len() > MAX_GRID_CANDIDATES {
            anyhow::bail!(
                "grid has {} candidates, more than the limit of {}; use the random strategy instead",
                grid.len(),
                MAX_GRID_CANDIDATES
            );
        }
    }

    for (name, spec) in &config.params {
        if let Some(warning) = spec_warning(name, spec) {
            eprintln!("Warning: {}", warning);
        }
    }

    Ok(())
}

/// Build the search space a configuration describes
pub fn build_search_space(config: &SearchConfig) -> Result<SearchSpace> {
    if config.params.is_empty() {
        anyhow::bail!("search space has no parameters");
    }

    config
        .params
        .iter()
        .map(|(name, spec)| {
            spec.build()
                .with_context(|| format!("Invalid parameter '{}' ({})", name, spec))
                .map(|dist| (name.clone(), dist))
        })
        .collect()
}

/// Describe a spec that is valid but likely a mistake
fn spec_warning(name: &str, spec: &ParamSpec) -> Option<String> {
    match spec {
        ParamSpec::LogUniformInt { low, .. } if *low < 1.0 => Some(format!(
            "parameter '{}' has low bound {} < 1; truncated draws can be 0",
            name, low
        )),
        // Draws lie in [trunc(low), ceil(high) - 1]
        ParamSpec::LogUniformInt { low, high } if high.ceil() - 1.0 <= low.trunc() => Some(format!(
            "parameter '{}' range [{}, {}) contains a single integer",
            name, low, high
        )),
        ParamSpec::Choice { values } if values.len() == 1 => {
            Some(format!("parameter '{}' has a single choice", name))
        }
        _ => None,
    }
}
