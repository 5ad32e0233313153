//! Error type shared by both solvers.

use thiserror::Error;

/// Errors raised by configuration checks and by the genetic engine's
/// selection step.
///
/// An exhausted search is *not* an error: both engines report it through
/// their result types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NQueensError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("chromosome must have at least one gene")]
    EmptyGenes,

    #[error("gene {value} at column {column} is outside 1..={n}")]
    GeneOutOfRange {
        column: usize,
        value: usize,
        n: usize,
    },

    #[error("cannot select a parent from an empty population")]
    EmptyPopulation,

    #[error("cannot select a parent: total selection weight is {total}")]
    DegenerateWeights { total: f64 },
}

pub type Result<T> = std::result::Result<T, NQueensError>;
