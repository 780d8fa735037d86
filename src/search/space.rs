//! Named search space

use crate::distribution::{ParamDistribution, ParamValue};
use std::collections::btree_map::{self, BTreeMap};

/// One assignment of a value to every parameter, keyed by name
pub type Candidate = BTreeMap<String, ParamValue>;

/// Parameter distributions keyed by name
///
/// Names iterate in sorted order, which fixes the order parameters are drawn
/// in and makes seeded sampling independent of insertion order.
#[derive(Debug, Clone, Default)]
pub struct SearchSpace {
    params: BTreeMap<String, ParamDistribution>,
}

impl SearchSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter, returning the previous distribution
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        dist: ParamDistribution,
    ) -> Option<ParamDistribution> {
        self.params.insert(name.into(), dist)
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, dist: ParamDistribution) -> Self {
        self.insert(name, dist);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ParamDistribution> {
        self.params.get(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// True when every parameter is a finite list
    pub fn is_discrete(&self) -> bool {
        self.params.values().all(ParamDistribution::is_discrete)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ParamDistribution> {
        self.params.iter()
    }
}

impl<'a> IntoIterator for &'a SearchSpace {
    type Item = (&'a String, &'a ParamDistribution);
    type IntoIter = btree_map::Iter<'a, String, ParamDistribution>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.iter()
    }
}

impl FromIterator<(String, ParamDistribution)> for SearchSpace {
    fn from_iter<T: IntoIterator<Item = (String, ParamDistribution)>>(iter: T) -> Self {
        Self {
            params: iter.into_iter().collect(),
        }
    }
}
