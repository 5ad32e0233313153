//! Genetic engine configuration.
//!
//! [`GeneticConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{NQueensError, Result};

/// Configuration for the N-Queens genetic engine.
///
/// # Defaults
///
/// ```
/// use u_nqueens::ga::GeneticConfig;
///
/// let config = GeneticConfig::default();
/// assert_eq!(config.n_queens, 8);
/// assert_eq!(config.generation_size, 300);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_nqueens::ga::GeneticConfig;
///
/// let config = GeneticConfig::default()
///     .with_n_queens(6)
///     .with_generation_size(200)
///     .with_mutation_probability(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneticConfig {
    /// Board size N (number of queens). Must be at least 1.
    pub n_queens: usize,

    /// Generation counter ceiling. The loop stops once the counter,
    /// which starts at 1, reaches this value.
    pub max_generations: usize,

    /// Number of chromosomes per generation.
    ///
    /// The top half (integer division) survives unchanged into the next
    /// generation; the rest is bred by crossover.
    pub generation_size: usize,

    /// Probability of mutating a freshly bred child (0.0–1.0).
    pub mutation_probability: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            n_queens: 8,
            max_generations: 100_000,
            generation_size: 300,
            mutation_probability: 0.03,
            seed: None,
        }
    }
}

impl GeneticConfig {
    /// Sets the board size.
    pub fn with_n_queens(mut self, n: usize) -> Self {
        self.n_queens = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the generation (population) size.
    pub fn with_generation_size(mut self, n: usize) -> Self {
        self.generation_size = n;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of non-attacking queen pairs on a solved board: `N·(N−1)/2`.
    pub fn max_fitness(&self) -> i64 {
        let n = self.n_queens as i64;
        n * (n - 1) / 2
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.n_queens == 0 {
            return Err(NQueensError::InvalidConfig(
                "n_queens must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(NQueensError::InvalidConfig(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.generation_size == 0 {
            return Err(NQueensError::InvalidConfig(
                "generation_size must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(NQueensError::InvalidConfig(format!(
                "mutation_probability must be in [0, 1], got {}",
                self.mutation_probability
            )));
        }
        Ok(())
    }
}
