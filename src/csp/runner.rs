//! Min-conflicts execution engine.
//!
//! # Algorithm
//!
//! 1. Greedily assign each column, in order, its least-conflicting row
//!    given the columns assigned before it
//! 2. At each step:
//!    a. Collect the conflicted columns; stop if there are none
//!    b. Pick one uniformly at random
//!    c. Move it to its least-conflicting row (random tie-break)
//! 3. Terminate after `max_steps` steps
//!
//! # Reference
//!
//! Minton, S., Johnston, M. D., Philips, A. B., Laird, P. (1992).
//! "Minimizing conflicts: a heuristic repair method for constraint
//! satisfaction and scheduling problems", *Artificial Intelligence* 58, 161-205.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use super::config::MinConflictsConfig;
use super::model::{Assignment, NQueensCsp};
use crate::error::Result;
use crate::random::rng_from_seed;

/// How a min-conflicts run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// No column is attacked.
    Solved,
    /// The step budget ran out with conflicts remaining.
    Exhausted,
}

/// Result of a min-conflicts run.
#[derive(Debug, Clone)]
pub struct MinConflictsResult {
    /// Whether the board was solved.
    pub status: SearchStatus,
    /// Steps taken. On success this counts the final, conflict-free check;
    /// on exhaustion it equals `max_steps`.
    pub steps: usize,
    /// Final row of each column (0-based).
    pub assignment: Vec<usize>,
    /// One line per column, `Q` at the assigned row and `x` elsewhere.
    pub board: Vec<String>,
    /// For each row, the 1-based column holding its queen. Present only
    /// when solved.
    pub queen_positions: Option<Vec<usize>>,
}

impl MinConflictsResult {
    /// Whether the board was solved.
    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }
}

/// Min-conflicts local search for N-Queens.
///
/// # Usage
///
/// ```
/// use u_nqueens::csp::{MinConflictsConfig, MinConflictsEngine};
///
/// let config = MinConflictsConfig::default().with_n(8).with_max_steps(10_000).with_seed(1);
/// let mut engine = MinConflictsEngine::new(config).unwrap();
/// let result = engine.run();
/// if let Some(positions) = &result.queen_positions {
///     assert_eq!(positions.len(), 8);
/// }
/// ```
pub struct MinConflictsEngine<R: Rng = StdRng> {
    config: MinConflictsConfig,
    rng: R,
}

impl MinConflictsEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`.
    pub fn new(config: MinConflictsConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> MinConflictsEngine<R> {
    /// Creates an engine drawing from the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: MinConflictsConfig, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The engine configuration.
    pub fn config(&self) -> &MinConflictsConfig {
        &self.config
    }

    /// Greedy initialization: every column, in order, takes its
    /// least-conflicting row against the columns already placed.
    pub fn initial_assignment(&mut self, csp: &mut NQueensCsp) -> Assignment {
        let mut assignment = Assignment::new(csp.len());
        for var in 0..csp.len() {
            let value = csp.min_conflicts_value(var, &assignment, &mut self.rng);
            assignment.set(var, value);
        }
        assignment
    }

    /// Builds a fresh model and runs the search on it.
    pub fn run(&mut self) -> MinConflictsResult {
        let n = self.config.n;
        let max_steps = self.config.max_steps;
        let mut csp = NQueensCsp::new(n);
        let mut assignment = self.initial_assignment(&mut csp);

        let mut status = SearchStatus::Exhausted;
        let mut steps = max_steps;
        for step in 0..max_steps {
            let conflicted = csp.conflicted_variables(&assignment);
            if conflicted.is_empty() {
                status = SearchStatus::Solved;
                steps = step + 1;
                break;
            }
            let var = conflicted[self.rng.random_range(0..conflicted.len())];
            let value = csp.min_conflicts_value(var, &assignment, &mut self.rng);
            assignment.set(var, value);
            if self.config.verbose {
                debug!("progress: {} / {max_steps}", step + 1);
            }
        }

        let values = assignment
            .to_values()
            .expect("initialization assigns every variable");
        let queen_positions = match status {
            SearchStatus::Solved => queens_by_row(&values),
            SearchStatus::Exhausted => None,
        };

        if self.config.verbose && status == SearchStatus::Solved {
            info!("min-conflicts solved n = {n} in {steps} steps");
        }
        debug!("min-conflicts run finished: n = {n}, status = {status:?}, steps = {steps}");

        MinConflictsResult {
            status,
            steps,
            board: render_board(&values),
            assignment: values,
            queen_positions,
        }
    }
}

/// Inverts column→row into row→(1-based) column.
///
/// Returns `None` unless `rows` is a permutation of `0..rows.len()`.
fn queens_by_row(rows: &[usize]) -> Option<Vec<usize>> {
    let n = rows.len();
    let mut columns = vec![None; n];
    for (var, &row) in rows.iter().enumerate() {
        let slot = columns.get_mut(row)?;
        if slot.is_some() {
            return None;
        }
        *slot = Some(var + 1);
    }
    columns.into_iter().collect()
}

fn render_board(rows: &[usize]) -> Vec<String> {
    let n = rows.len();
    rows.iter()
        .map(|&row| (0..n).map(|i| if i == row { 'Q' } else { 'x' }).collect())
        .collect()
}
