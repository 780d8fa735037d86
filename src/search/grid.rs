//! Exhaustive parameter grid
//!
//! The grid is the cartesian product of every parameter's value list.
//! Candidates are numbered in mixed radix with parameters in name order and
//! the last name varying fastest, so enumeration order is deterministic.

use super::space::{Candidate, SearchSpace};
use crate::distribution::ParamValue;
use crate::error::{DistributionError, Result};

/// Cartesian product of discrete parameter lists
#[derive(Debug, Clone)]
pub struct ParameterGrid {
    params: Vec<(String, Vec<ParamValue>)>,
    len: usize,
}

impl ParameterGrid {
    /// Build a grid over `space`
    ///
    /// Every parameter must be discrete.
    pub fn new(space: &SearchSpace) -> Result<Self> {
        if space.is_empty() {
            return Err(DistributionError::EmptySpace);
        }

        let mut params = Vec::with_capacity(space.len());
        let mut len: usize = 1;
        for (name, dist) in space {
            let values = dist
                .discrete_values()
                .ok_or_else(|| DistributionError::NotDiscrete(name.clone()))?;
            len = len
                .checked_mul(values.len())
                .ok_or(DistributionError::GridTooLarge)?;
            params.push((name.clone(), values.to_vec()));
        }

        Ok(Self { params, len })
    }

    /// Number of candidates in the grid
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; lists are non-empty and the space has parameters
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Candidate at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<Candidate> {
        if index >= self.len {
            return None;
        }

        let mut rest = index;
        let mut candidate = Candidate::new();
        for (name, values) in self.params.iter().rev() {
            candidate.insert(name.clone(), values[rest % values.len()].clone());
            rest /= values.len();
        }
        Some(candidate)
    }

    /// All candidates in index order
    pub fn iter(&self) -> impl Iterator<Item = Candidate> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }
}
