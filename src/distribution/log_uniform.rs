//! Log-uniform distributions
//!
//! A log-uniform (reciprocal) distribution over `[low, high)` has density
//! proportional to `1/x`, so every decade carries the same probability mass.
//! This suits parameters where multiplicative scale matters more than
//! additive distance: learning rates, regularization strengths, leaf counts,
//! bin counts.
//!
//! # Sampling
//!
//! 1. Draw `u` uniformly from `[ln(low), ln(high))`
//! 2. Exponentiate: `x = e^u`
//! 3. Clamp `x` into `[low, high)` to absorb rounding in `exp`
//! 4. ([`LogUniformInt`] only) truncate `x` toward zero
//!
//! Integer samples therefore lie in `[trunc(low), ceil(high) - 1]`; an
//! integral upper bound is never returned.
//!
//! # Example
//!
//! ```
//! use paramdraw::distribution::log_uniform::LogUniformInt;
//! use paramdraw::random::RandomState;
//!
//! let dist = LogUniformInt::new(2.0, 256.0).unwrap();
//! let leaves = dist.rvs(5, RandomState::Seed(0)).unwrap();
//! assert_eq!(leaves.len(), 5);
//! assert!(leaves.iter().all(|&k| (2..=255).contains(&k)));
//! ```

use crate::error::{DistributionError, Result};
use crate::random::RandomState;
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Continuous log-uniform distribution over `[low, high)`
#[derive(Debug, Clone, Copy)]
pub struct LogUniform {
    low: f64,
    high: f64,
    log_range: Uniform<f64>,
}

impl LogUniform {
    /// Create a log-uniform distribution
    ///
    /// Fails with [`DistributionError::InvalidRange`] unless both bounds are
    /// finite and `0 < low < high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        let invalid = DistributionError::InvalidRange { low, high };
        if !low.is_finite() || !high.is_finite() || low <= 0.0 || low >= high {
            return Err(invalid);
        }

        // Bounds a few ulps apart can collapse to the same logarithm
        let (log_low, log_high) = (low.ln(), high.ln());
        if log_low >= log_high {
            return Err(invalid);
        }

        Ok(Self {
            low,
            high,
            log_range: Uniform::new(log_low, log_high),
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Draw `n` values using a generator built from `state`
    pub fn rvs(&self, n: usize, state: RandomState) -> Result<Vec<f64>> {
        self.rvs_with(n, &mut state.rng())
    }

    /// Draw `n` values from a caller-owned generator
    pub fn rvs_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>> {
        if n == 0 {
            return Err(DistributionError::EmptySample);
        }
        Ok((0..n).map(|_| self.sample(rng)).collect())
    }

    #[inline]
    fn clamp_to_range(&self, x: f64) -> f64 {
        if x < self.low {
            self.low
        } else if x >= self.high {
            // Largest double strictly below `high`; `high` is positive and finite
            f64::from_bits(self.high.to_bits() - 1)
        } else {
            x
        }
    }
}

impl Distribution<f64> for LogUniform {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let u = self.log_range.sample(rng);
        self.clamp_to_range(u.exp())
    }
}

/// Integer log-uniform distribution
///
/// Wraps [`LogUniform`] and truncates each draw toward zero. Used for
/// integer hyperparameters searched on a multiplicative scale, such as
/// `max_leaf_nodes` or `max_bins`.
#[derive(Debug, Clone, Copy)]
pub struct LogUniformInt {
    inner: LogUniform,
}

impl LogUniformInt {
    /// Create an integer log-uniform distribution over `[low, high)`
    pub fn new(low: f64, high: f64) -> Result<Self> {
        Ok(Self {
            inner: LogUniform::new(low, high)?,
        })
    }

    pub fn low(&self) -> f64 {
        self.inner.low()
    }

    pub fn high(&self) -> f64 {
        self.inner.high()
    }

    /// Smallest value a draw can produce
    pub fn min_value(&self) -> i64 {
        self.inner.low().trunc() as i64
    }

    /// Largest value a draw can produce
    pub fn max_value(&self) -> i64 {
        self.inner.high().ceil() as i64 - 1
    }

    /// Draw a single value using a generator built from `state`
    pub fn rvs_one(&self, state: RandomState) -> i64 {
        self.sample(&mut state.rng())
    }

    /// Draw `n` values using a generator built from `state`
    pub fn rvs(&self, n: usize, state: RandomState) -> Result<Vec<i64>> {
        self.rvs_with(n, &mut state.rng())
    }

    /// Draw `n` values from a caller-owned generator
    pub fn rvs_with<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Result<Vec<i64>> {
        if n == 0 {
            return Err(DistributionError::EmptySample);
        }
        Ok((0..n).map(|_| self.sample(rng)).collect())
    }
}

impl Distribution<i64> for LogUniformInt {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        // `as` truncates toward zero; draws are positive so this is floor
        self.inner.sample(rng) as i64
    }
}
