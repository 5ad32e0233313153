//! Genetic algorithm for N-Queens.
//!
//! Each candidate board is a [`Chromosome`]: one 1-based row per column,
//! duplicates allowed. Fitness counts non-attacking queen pairs, so a solved
//! board scores `N·(N−1)/2`.
//!
//! # Key Types
//!
//! - [`GeneticConfig`]: Board size, population size, mutation rate, budget
//! - [`GeneticEngine`]: Owns the population and runs the generation loop
//! - [`GeneticResult`]: Generation count, best chromosome, fitness curve
//!
//! # Generation step
//!
//! 1. Keep the fitter half of the population unchanged (elitism)
//! 2. Breed the rest by roulette selection and one-point crossover
//! 3. Mutate each child with the configured probability
//! 4. Stop breeding early once a child is a solved board
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
mod runner;
pub mod selection;

pub use chromosome::Chromosome;
pub use config::GeneticConfig;
pub use runner::{GeneticEngine, GeneticResult};
