//! paramdraw - Hyperparameter search candidate generator
//!
//! paramdraw draws candidate hyperparameter settings for model tuning. Its
//! core is an integer log-uniform sampler: values are drawn uniformly on a
//! log scale and truncated to integers, which suits parameters such as leaf
//! counts or bin counts where multiplicative scale matters.
//!
//! # Architecture
//!
//! - **Distributions**: log-uniform (integer and real), uniform, integer range, choice
//! - **Random state**: seeded or entropy-backed xoshiro256++ per call
//! - **Search**: named search spaces, randomized sampling, exhaustive grids
//! - **Config**: TOML search-space files merged with CLI overrides
//! - **Output**: text tables and JSON reports

pub mod config;
pub mod distribution;
pub mod error;
pub mod output;
pub mod random;
pub mod search;

// Re-export commonly used types
pub use config::SearchConfig;
pub use distribution::{LogUniform, LogUniformInt, ParamDistribution, ParamValue};
pub use error::DistributionError;
pub use random::RandomState;
pub use search::{ParameterGrid, ParameterSampler, SearchSpace};

/// Result type used by the configuration and output layers
pub type Result<T> = anyhow::Result<T>;
