//! Configuration module
//!
//! Handles CLI argument parsing, TOML search-space files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::distribution::{ParamDistribution, ParamValue};
use crate::random::RandomState;
use crate::search::SearchStrategy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Complete search configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Number of candidates to draw (randomized search only)
    #[serde(default = "default_n_iter")]
    pub n_iter: usize,
    /// Fixed seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Candidate generation strategy
    #[serde(default)]
    pub strategy: SearchStrategy,
    /// Parameter specifications keyed by name
    #[serde(default)]
    pub params: BTreeMap<String, ParamSpec>,
}

fn default_n_iter() -> usize {
    10
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            n_iter: default_n_iter(),
            seed: None,
            strategy: SearchStrategy::default(),
            params: BTreeMap::new(),
        }
    }
}

impl SearchConfig {
    pub fn random_state(&self) -> RandomState {
        RandomState::from(self.seed)
    }
}

/// Serialized form of a parameter distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParamSpec {
    LogUniformInt { low: f64, high: f64 },
    LogUniform { low: f64, high: f64 },
    Uniform { low: f64, high: f64 },
    IntRange { low: i64, high: i64 },
    Choice { values: Vec<ParamValue> },
}

impl ParamSpec {
    /// Build the distribution this spec describes
    pub fn build(&self) -> crate::error::Result<ParamDistribution> {
        match self {
            ParamSpec::LogUniformInt { low, high } => ParamDistribution::log_uniform_int(*low, *high),
            ParamSpec::LogUniform { low, high } => ParamDistribution::log_uniform(*low, *high),
            ParamSpec::Uniform { low, high } => ParamDistribution::uniform(*low, *high),
            ParamSpec::IntRange { low, high } => ParamDistribution::int_range(*low, *high),
            ParamSpec::Choice { values } => ParamDistribution::choice(values.iter().cloned()),
        }
    }
}

impl fmt::Display for ParamSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamSpec::LogUniformInt { low, high } => write!(f, "log_uniform_int({}, {})", low, high),
            ParamSpec::LogUniform { low, high } => write!(f, "log_uniform({}, {})", low, high),
            ParamSpec::Uniform { low, high } => write!(f, "uniform({}, {})", low, high),
            ParamSpec::IntRange { low, high } => write!(f, "int_range({}, {})", low, high),
            ParamSpec::Choice { values } => {
                let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
                write!(f, "choice[{}]", values.join(", "))
            }
        }
    }
}
