use thiserror::Error;

/// Configuration for the gradient descent solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step_size: f64,
    max_iters: usize,
    tolerance: f64,
}

/// Errors that can occur when validating a gradient descent config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("step_size must be finite and positive")]
    StepSize,

    #[error("tolerance must be finite and non-negative")]
    Tolerance,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step_size: 1e-4,
            max_iters: 100_000,
            tolerance: 0.1,
        }
    }
}

impl Config {
    /// Creates a new config with a validated step size and tolerance.
    ///
    /// A `max_iters` of zero behaves like one: every run applies at least one
    /// update before testing for termination.
    ///
    /// # Errors
    ///
    /// Returns an error if the step size is not finite and positive, or if the
    /// tolerance is negative or non-finite.
    pub fn new(step_size: f64, max_iters: usize, tolerance: f64) -> Result<Self, ConfigError> {
        if !step_size.is_finite() || step_size <= 0.0 {
            return Err(ConfigError::StepSize);
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::Tolerance);
        }

        Ok(Self {
            step_size,
            max_iters,
            tolerance,
        })
    }

    /// Returns the fixed step size `γ`.
    #[must_use]
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Returns the maximum number of updates.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the objective value at or below which the run has converged.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }
}
