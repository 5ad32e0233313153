//! N-Queens solvers built on two stochastic search strategies.
//!
//! - **Genetic Algorithm ([`ga`])**: A population of column→row gene
//!   vectors evolved with elitism, roulette selection, one-point crossover
//!   and point mutation. Fitness counts non-attacking queen pairs.
//! - **Min-Conflicts ([`csp`])**: The board as a constraint satisfaction
//!   problem, solved by greedy initialization followed by stochastic
//!   repair of conflicted columns.
//!
//! The engines share no board type: each owns its own encoding, state and
//! random source. Both take a seed for reproducible runs, or any
//! [`rand::Rng`] through `with_rng`.
//!
//! # Example
//!
//! ```
//! use u_nqueens::csp::{MinConflictsConfig, MinConflictsEngine};
//!
//! let config = MinConflictsConfig::default().with_n(8).with_max_steps(10_000).with_seed(3);
//! let result = MinConflictsEngine::new(config)?.run();
//! for line in &result.board {
//!     println!("{line}");
//! }
//! # Ok::<(), u_nqueens::NQueensError>(())
//! ```

pub mod csp;
mod error;
pub mod ga;
pub mod random;

pub use error::{NQueensError, Result};
