//! Hyperparameter search candidate generation
//!
//! A [`SearchSpace`] names the parameters to tune and the distribution each is
//! drawn from. Two strategies turn it into candidates:
//!
//! - **Randomized** ([`ParameterSampler`]): `n_iter` independent draws, the
//!   usual choice when some parameters are continuous or log-scaled
//! - **Grid** ([`ParameterGrid`]): every combination of finite value lists
//!
//! # Example
//!
//! ```
//! use paramdraw::distribution::ParamDistribution;
//! use paramdraw::random::RandomState;
//! use paramdraw::search::{ParameterSampler, SearchSpace};
//!
//! let space = SearchSpace::new()
//!     .with("learning_rate", ParamDistribution::log_uniform(0.01, 10.0).unwrap())
//!     .with("max_leaf_nodes", ParamDistribution::log_uniform_int(2.0, 256.0).unwrap());
//!
//! let sampler = ParameterSampler::new(space, 10, RandomState::Seed(0)).unwrap();
//! assert_eq!(sampler.candidates().len(), 10);
//! ```

pub mod grid;
pub mod sampler;
pub mod space;

pub use grid::ParameterGrid;
pub use sampler::ParameterSampler;
pub use space::{Candidate, SearchSpace};

use serde::{Deserialize, Serialize};
use std::fmt;

/// How candidates are generated from a search space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    #[default]
    Random,
    Grid,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Random => write!(f, "random"),
            SearchStrategy::Grid => write!(f, "grid"),
        }
    }
}
