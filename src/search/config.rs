//! Tunable constants of the rediscover search.

/// Configuration of the neighborhood and the improvement loop.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Iteration cap of the improvement loop
    pub max_iterations: usize,
    /// Probability that a position is changed in a variant
    pub mutation_rate: f64,
    /// Probability that a changed position (other than the head) is redrawn from
    /// the nonzero pool instead of being jittered
    pub pool_rate: f64,
    /// The nonzero pool is `[-pool_bound, -1] ∪ [1, pool_bound]`
    pub pool_bound: i64,
    /// Jittered positions move by an offset in `[-jitter, jitter]`
    pub jitter: i64,
    /// Neighborhood regenerations per iteration before giving up on it
    pub max_retries: usize,
    /// Iterations between progress reports, zero disables them
    pub progress_interval: usize,
    /// Seed of the random source, `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            mutation_rate: 0.1,
            pool_rate: 0.01,
            pool_bound: 10,
            jitter: 4,
            max_retries: 1_000,
            progress_interval: 1_000,
            seed: None,
        }
    }
}

impl SearchConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_progress_interval(mut self, progress_interval: usize) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_iterations == 0 {
            return Err(ConfigError::NoIterations);
        }
        if self.max_retries == 0 {
            return Err(ConfigError::NoRetries);
        }
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("pool_rate", self.pool_rate)?;
        if self.pool_bound < 1 {
            return Err(ConfigError::InvalidPoolBound(self.pool_bound));
        }
        if self.jitter < 0 {
            return Err(ConfigError::NegativeJitter(self.jitter));
        }
        Ok(())
    }
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidProbability { name, value })
    }
}

/// Search configuration validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Iteration cap must be positive")]
    NoIterations,
    #[error("Retry cap must be positive")]
    NoRetries,
    #[error("{name} must be a probability in [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },
    #[error("Nonzero pool bound must be at least 1, got {0}")]
    InvalidPoolBound(i64),
    #[error("Jitter radius must not be negative, got {0}")]
    NegativeJitter(i64),
}
