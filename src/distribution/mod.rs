//! Parameter distributions
//!
//! This module provides the distributions a search space draws candidate
//! hyperparameter values from. Each concrete distribution implements
//! [`rand_distr::Distribution`] for its natural output type, so it can be
//! driven by any caller-owned generator; [`ParamDistribution`] wraps them
//! behind a single type that yields [`ParamValue`]s.
//!
//! # Distributions
//!
//! - **LogUniformInt**: integers on a log scale (leaf counts, bin counts)
//! - **LogUniform**: reals on a log scale (learning rates, regularization)
//! - **UniformFloat**: reals on a linear scale
//! - **IntRange**: integers on a linear scale
//! - **Choice**: a fixed list of values
//!
//! # Thread Safety
//!
//! Distributions are immutable after construction and hold no generator.
//! Callers supply randomness per call, so a distribution can be shared
//! freely between threads.
//!
//! # Example
//!
//! ```
//! use paramdraw::distribution::{ParamDistribution, ParamValue};
//! use paramdraw::random::RandomState;
//!
//! let dist = ParamDistribution::log_uniform_int(2.0, 256.0).unwrap();
//! let mut rng = RandomState::Seed(0).rng();
//! match dist.sample(&mut rng) {
//!     ParamValue::Int(k) => assert!((2..=255).contains(&k)),
//!     other => panic!("unexpected value {:?}", other),
//! }
//! ```

pub mod choice;
pub mod log_uniform;
pub mod uniform;
pub mod value;

pub use choice::Choice;
pub use log_uniform::{LogUniform, LogUniformInt};
pub use uniform::{IntRange, UniformFloat};
pub use value::ParamValue;

use crate::error::Result;
use rand::Rng;
use rand_distr::Distribution;
use std::fmt;

/// Any distribution a search space parameter can be drawn from
#[derive(Debug, Clone)]
pub enum ParamDistribution {
    LogUniformInt(LogUniformInt),
    LogUniform(LogUniform),
    Uniform(UniformFloat),
    IntRange(IntRange),
    Choice(Choice),
}

impl ParamDistribution {
    pub fn log_uniform_int(low: f64, high: f64) -> Result<Self> {
        Ok(Self::LogUniformInt(LogUniformInt::new(low, high)?))
    }

    pub fn log_uniform(low: f64, high: f64) -> Result<Self> {
        Ok(Self::LogUniform(LogUniform::new(low, high)?))
    }

    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        Ok(Self::Uniform(UniformFloat::new(low, high)?))
    }

    pub fn int_range(low: i64, high: i64) -> Result<Self> {
        Ok(Self::IntRange(IntRange::new(low, high)?))
    }

    pub fn choice<I, V>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<ParamValue>,
    {
        Ok(Self::Choice(Choice::new(values)?))
    }

    /// Draw one value
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ParamValue {
        match self {
            Self::LogUniformInt(d) => ParamValue::Int(d.sample(rng)),
            Self::LogUniform(d) => ParamValue::Float(d.sample(rng)),
            Self::Uniform(d) => ParamValue::Float(d.sample(rng)),
            Self::IntRange(d) => ParamValue::Int(d.sample(rng)),
            Self::Choice(d) => d.sample(rng),
        }
    }

    /// Whether the distribution is a finite list that a grid can enumerate
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Choice(_))
    }

    /// The value list of a discrete distribution
    pub fn discrete_values(&self) -> Option<&[ParamValue]> {
        match self {
            Self::Choice(c) => Some(c.values()),
            _ => None,
        }
    }
}

impl fmt::Display for ParamDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LogUniformInt(d) => write!(f, "log_uniform_int({}, {})", d.low(), d.high()),
            Self::LogUniform(d) => write!(f, "log_uniform({}, {})", d.low(), d.high()),
            Self::Uniform(d) => write!(f, "uniform({}, {})", d.low(), d.high()),
            Self::IntRange(d) => write!(f, "int_range({}, {})", d.low(), d.high()),
            Self::Choice(d) => {
                let values: Vec<String> = d.values().iter().map(|v| v.to_string()).collect();
                write!(f, "choice[{}]", values.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::RandomState;

    #[test]
    fn test_sample_value_types() {
        let mut rng = RandomState::Seed(11).rng();

        let int = ParamDistribution::log_uniform_int(1.0, 10.0).unwrap();
        assert!(matches!(int.sample(&mut rng), ParamValue::Int(_)));

        let float = ParamDistribution::log_uniform(1e-4, 1.0).unwrap();
        assert!(matches!(float.sample(&mut rng), ParamValue::Float(_)));

        let range = ParamDistribution::int_range(0, 3).unwrap();
        assert!(matches!(range.sample(&mut rng), ParamValue::Int(_)));

        let choice = ParamDistribution::choice(["a", "b"]).unwrap();
        assert!(matches!(choice.sample(&mut rng), ParamValue::Str(_)));
    }

    #[test]
    fn test_discrete() {
        let choice = ParamDistribution::choice([1i64, 2, 3]).unwrap();
        assert!(choice.is_discrete());
        assert_eq!(choice.discrete_values().map(|v| v.len()), Some(3));

        let cont = ParamDistribution::uniform(0.0, 1.0).unwrap();
        assert!(!cont.is_discrete());
        assert!(cont.discrete_values().is_none());
    }

    #[test]
    fn test_display() {
        let dist = ParamDistribution::log_uniform_int(2.0, 256.0).unwrap();
        assert_eq!(dist.to_string(), "log_uniform_int(2, 256)");

        let choice = ParamDistribution::choice([0.1, 1.0]).unwrap();
        assert_eq!(choice.to_string(), "choice[0.1, 1.0]");
    }
}
