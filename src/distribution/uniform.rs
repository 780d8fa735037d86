//! Uniform distributions
//!
//! [`UniformFloat`] draws reals from `[low, high)`; [`IntRange`] draws
//! integers from `[low, high)` with equal probability (randint semantics).
//!
//! # Example
//!
//! ```
//! use paramdraw::distribution::uniform::IntRange;
//! use paramdraw::random::RandomState;
//! use rand_distr::Distribution;
//!
//! let depth = IntRange::new(1, 11).unwrap();
//! let value = depth.sample(&mut RandomState::Seed(1).rng());
//! assert!((1..11).contains(&value));
//! ```

use crate::error::{DistributionError, Result};
use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// Uniform real distribution over `[low, high)`
#[derive(Debug, Clone, Copy)]
pub struct UniformFloat {
    low: f64,
    high: f64,
    range: Uniform<f64>,
}

impl UniformFloat {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        // Finite bounds can still have a width that overflows
        if !low.is_finite() || !high.is_finite() || low >= high || !(high - low).is_finite() {
            return Err(DistributionError::InvalidRange { low, high });
        }
        Ok(Self {
            low,
            high,
            range: Uniform::new(low, high),
        })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

impl Distribution<f64> for UniformFloat {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.range.sample(rng)
    }
}

/// Uniform integer distribution over `[low, high)`
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    low: i64,
    high: i64,
    range: Uniform<i64>,
}

impl IntRange {
    pub fn new(low: i64, high: i64) -> Result<Self> {
        if low >= high {
            return Err(DistributionError::InvalidRange {
                low: low as f64,
                high: high as f64,
            });
        }
        Ok(Self {
            low,
            high,
            range: Uniform::new(low, high),
        })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }
}

impl Distribution<i64> for IntRange {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        self.range.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomState;

    #[test]
    fn test_uniform_float_basic() {
        let dist = UniformFloat::new(0.0, 1.0).unwrap();
        let mut rng = RandomState::Seed(1).rng();

        for _ in 0..100 {
            let x = dist.sample(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_uniform_float_coverage() {
        let dist = UniformFloat::new(-5.0, 5.0).unwrap();
        let mut rng = RandomState::Seed(42).rng();
        let mut buckets = vec![0u32; 10];

        for _ in 0..10000 {
            let x = dist.sample(&mut rng);
            let bucket = (x + 5.0) as usize;
            buckets[bucket.min(9)] += 1;
        }

        // Each bucket should have roughly 1000 samples; allow 20% deviation
        for count in buckets {
            assert!(count > 800 && count < 1200, "Bucket count {} outside expected range", count);
        }
    }

    #[test]
    fn test_int_range_seeded() {
        let dist = IntRange::new(0, 1000).unwrap();
        let mut rng1 = RandomState::Seed(12345).rng();
        let mut rng2 = RandomState::Seed(12345).rng();

        // Same seed should produce same sequence
        for _ in 0..10 {
            assert_eq!(dist.sample(&mut rng1), dist.sample(&mut rng2));
        }
    }

    #[test]
    fn test_int_range_excludes_high() {
        let dist = IntRange::new(3, 5).unwrap();
        let mut rng = RandomState::Seed(9).rng();
        let mut seen = [false; 2];

        for _ in 0..200 {
            let v = dist.sample(&mut rng);
            assert!(v == 3 || v == 4);
            seen[(v - 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            UniformFloat::new(1.0, 1.0),
            Err(DistributionError::InvalidRange { .. })
        ));
        assert!(UniformFloat::new(f64::NEG_INFINITY, 0.0).is_err());
        assert!(matches!(
            UniformFloat::new(-1e308, 1e308),
            Err(DistributionError::InvalidRange { .. })
        ));
        assert!(matches!(
            IntRange::new(10, 2),
            Err(DistributionError::InvalidRange { .. })
        ));
    }
}
