//! Randomized candidate sampling
//!
//! Draws `n_iter` candidates from a search space. Parameters are drawn in
//! name order from a single generator built from the random state, so a
//! fixed seed reproduces the whole candidate list.
//!
//! When every parameter is a finite list the space is a grid, and candidates
//! are drawn without replacement from it instead: no candidate is repeated,
//! and asking for more candidates than the grid holds yields the whole grid
//! in random order.

use super::grid::ParameterGrid;
use super::space::{Candidate, SearchSpace};
use crate::error::{DistributionError, Result};
use crate::random::RandomState;
use rand::seq::index;

/// Randomized search candidate generator
#[derive(Debug, Clone)]
pub struct ParameterSampler {
    space: SearchSpace,
    n_iter: usize,
    state: RandomState,
}

impl ParameterSampler {
    pub fn new(space: SearchSpace, n_iter: usize, state: RandomState) -> Result<Self> {
        if space.is_empty() {
            return Err(DistributionError::EmptySpace);
        }
        if n_iter == 0 {
            return Err(DistributionError::EmptySample);
        }
        Ok(Self { space, n_iter, state })
    }

    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    pub fn state(&self) -> RandomState {
        self.state
    }

    /// Number of candidates [`candidates`](Self::candidates) will return
    pub fn len(&self) -> usize {
        if self.space.is_discrete() {
            match ParameterGrid::new(&self.space) {
                Ok(grid) => self.n_iter.min(grid.len()),
                Err(_) => self.n_iter,
            }
        } else {
            self.n_iter
        }
    }

    /// Always false; construction rejects `n_iter == 0`
    pub fn is_empty(&self) -> bool {
        self.n_iter == 0
    }

    /// Draw the candidate list
    pub fn candidates(&self) -> Vec<Candidate> {
        let mut rng = self.state.rng();

        if self.space.is_discrete() {
            if let Ok(grid) = ParameterGrid::new(&self.space) {
                let grid_size = grid.len();
                if self.n_iter > grid_size {
                    eprintln!(
                        "Warning: n_iter ({}) exceeds the {} candidates in the grid; using {}",
                        self.n_iter, grid_size, grid_size
                    );
                }
                let amount = self.n_iter.min(grid_size);
                return index::sample(&mut rng, grid_size, amount)
                    .into_iter()
                    .filter_map(|i| grid.get(i))
                    .collect();
            }
        }

        (0..self.n_iter)
            .map(|_| {
                self.space
                    .iter()
                    .map(|(name, dist)| (name.clone(), dist.sample(&mut rng)))
                    .collect::<Candidate>()
            })
            .collect()
    }
}
