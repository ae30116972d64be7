use crate::error::{EstimatorError, Result};
use crate::monte_carlo::Method;
use crate::rng::DEFAULT_SEED;

/// Sample sizes run by default, smallest first.
pub const DEFAULT_TRIALS: [u32; 4] = [100, 1_000, 10_000, 100_000];

/// What to run: one engine seeded with `seed`, every method in `methods`
/// order, and for each method every count in `trials` order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: u32,
    pub trials: Vec<u32>,
    pub methods: Vec<Method>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            trials: DEFAULT_TRIALS.to_vec(),
            methods: Method::ALL.to_vec(),
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trials.is_empty() {
            return Err(EstimatorError::EmptyTrialList);
        }
        if let Some(index) = self.trials.iter().position(|&n| n == 0) {
            return Err(EstimatorError::ZeroTrials { index });
        }
        if self.methods.is_empty() {
            return Err(EstimatorError::NoMethods);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = RunConfig::default();
        assert_eq!(config.seed, 123_456_789);
        assert_eq!(config.trials, vec![100, 1_000, 10_000, 100_000]);
        assert_eq!(config.methods, vec![Method::Circle, Method::Coprime, Method::Buffon]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_bad_configs() {
        let empty = RunConfig { trials: vec![], ..RunConfig::default() };
        assert_eq!(empty.validate(), Err(EstimatorError::EmptyTrialList));

        let zero = RunConfig { trials: vec![10, 0, 5], ..RunConfig::default() };
        assert_eq!(zero.validate(), Err(EstimatorError::ZeroTrials { index: 1 }));

        let none = RunConfig { methods: vec![], ..RunConfig::default() };
        assert_eq!(none.validate(), Err(EstimatorError::NoMethods));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EstimatorError::ZeroTrials { index: 2 }.to_string(),
            "Trial count at position 2 is zero"
        );
    }
}
