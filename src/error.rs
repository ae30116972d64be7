//! Error types for run configuration.

use thiserror::Error;

/// Rejected run configuration. Numeric edge cases inside the estimators are
/// encoded in their return values and never surface here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimatorError {
    /// No trial counts were given.
    #[error("Trial list is empty")]
    EmptyTrialList,

    /// A trial count of zero has no defined hit ratio.
    #[error("Trial count at position {index} is zero")]
    ZeroTrials { index: usize },

    /// No estimation method was selected.
    #[error("No estimation methods selected")]
    NoMethods,
}

pub type Result<T> = std::result::Result<T, EstimatorError>;
