//! Categorical choice over a fixed list of values

use super::value::ParamValue;
use crate::error::{DistributionError, Result};
use rand::Rng;
use rand_distr::Distribution;

/// Uniform choice among a non-empty list of values
///
/// The only discrete distribution: a search space made entirely of choices
/// is a finite grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    values: Vec<ParamValue>,
}

impl Choice {
    pub fn new<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        let values: Vec<ParamValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return Err(DistributionError::EmptyChoice);
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; construction rejects empty lists
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Distribution<ParamValue> for Choice {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ParamValue {
        self.values[rng.gen_range(0..self.values.len())].clone()
    }
}
