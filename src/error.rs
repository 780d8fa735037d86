//! Distribution and search space error types

use thiserror::Error;

/// Errors raised while building distributions or drawing from them
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    #[error("Invalid range [{low}, {high}]: bounds must be finite, strictly increasing, and positive for log scale")]
    InvalidRange { low: f64, high: f64 },

    #[error("Sample count must be at least 1")]
    EmptySample,

    #[error("Choice list must contain at least one value")]
    EmptyChoice,

    #[error("Search space has no parameters")]
    EmptySpace,

    #[error("Parameter '{0}' is not discrete and cannot be enumerated in a grid")]
    NotDiscrete(String),

    #[error("Parameter grid has more than usize::MAX candidates")]
    GridTooLarge,
}

/// Result type for distribution operations
pub type Result<T> = std::result::Result<T, DistributionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_error_display() {
        let err = DistributionError::InvalidRange { low: 5.0, high: 5.0 };
        let msg = err.to_string();
        assert!(msg.contains("Invalid range"));
        assert!(msg.contains("[5, 5]"));

        let err = DistributionError::EmptySample;
        assert!(err.to_string().contains("at least 1"));

        let err = DistributionError::NotDiscrete("learning_rate".to_string());
        assert!(err.to_string().contains("learning_rate"));
    }
}
