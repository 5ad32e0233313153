//! Min-conflicts configuration.

use crate::error::{NQueensError, Result};

/// Configuration parameters for the min-conflicts engine.
///
/// # Examples
///
/// ```
/// use u_nqueens::csp::MinConflictsConfig;
///
/// let config = MinConflictsConfig::default()
///     .with_n(100)
///     .with_max_steps(10_000)
///     .with_seed(7);
/// assert_eq!(config.n, 100);
/// assert_eq!(config.max_steps, 10_000);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MinConflictsConfig {
    /// Board size. Must be at least 1.
    pub n: usize,
    /// Maximum number of repair steps. Zero skips the repair loop and
    /// always reports an exhausted search.
    pub max_steps: usize,
    /// Log progress while repairing.
    pub verbose: bool,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for MinConflictsConfig {
    fn default() -> Self {
        Self {
            n: 8,
            max_steps: 1_000_000,
            verbose: false,
            seed: None,
        }
    }
}

impl MinConflictsConfig {
    /// Sets the board size.
    pub fn with_n(mut self, n: usize) -> Self {
        self.n = n;
        self
    }

    /// Sets the repair step budget.
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    /// Enables or disables progress logging.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(NQueensError::InvalidConfig("n must be at least 1".into()));
        }
        Ok(())
    }
}
