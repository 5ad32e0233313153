//! Min-conflicts local search for N-Queens.
//!
//! The board is modeled as a constraint satisfaction problem: one variable
//! per column, each taking a 0-based row from its domain, with every pair of
//! columns constrained by [`conflicts`]. The search starts from a greedy
//! assignment and repeatedly repairs a random conflicted column.
//!
//! # Key Components
//!
//! - [`conflicts`]: Pairwise attack predicate
//! - [`NQueensCsp`], [`Assignment`]: Variables, domains, adjacency, values
//! - [`MinConflictsEngine`]: Greedy initialization plus repair loop
//! - [`MinConflictsResult`], [`SearchStatus`]: Outcome, solved or exhausted

mod config;
mod conflict;
mod model;
mod runner;

pub use config::MinConflictsConfig;
pub use conflict::conflicts;
pub use model::{Assignment, NQueensCsp};
pub use runner::{MinConflictsEngine, MinConflictsResult, SearchStatus};
