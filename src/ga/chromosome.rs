//! Chromosome encoding and fitness evaluation.
//!
//! A chromosome stores one queen per column: `genes[i]` is the 1-based row
//! of the queen in column `i`. Rows may repeat, which is how row collisions
//! are represented.

use std::fmt;

use rand::Rng;

use crate::error::{NQueensError, Result};

/// A candidate board for the genetic engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<usize>,
}

impl Chromosome {
    /// Creates a chromosome with `n` uniformly random genes in `[1, n]`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let genes = (0..n).map(|_| rng.random_range(1..=n)).collect();
        Self { genes }
    }

    /// Creates a chromosome from explicit genes.
    ///
    /// Every gene must lie in `[1, genes.len()]`.
    pub fn from_genes(genes: Vec<usize>) -> Result<Self> {
        let n = genes.len();
        if n == 0 {
            return Err(NQueensError::EmptyGenes);
        }
        if let Some((column, &value)) = genes
            .iter()
            .enumerate()
            .find(|&(_, &g)| g == 0 || g > n)
        {
            return Err(NQueensError::GeneOutOfRange { column, value, n });
        }
        Ok(Self { genes })
    }

    /// Wraps genes already known to lie in `[1, genes.len()]`.
    pub(crate) fn from_parts(genes: Vec<usize>) -> Self {
        debug_assert!(genes.iter().all(|&g| g >= 1 && g <= genes.len()));
        Self { genes }
    }

    /// The gene sequence, one 1-based row per column.
    pub fn genes(&self) -> &[usize] {
        &self.genes
    }

    /// Board size N.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Always `false` for chromosomes built through the public constructors
    /// with `n >= 1`.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// `N·(N−1)/2` for this chromosome's board size.
    pub fn max_fitness(&self) -> i64 {
        let n = self.genes.len() as i64;
        n * (n - 1) / 2
    }

    /// Replaces one uniformly random gene with a uniformly random row.
    pub fn mutate<R: Rng>(&mut self, rng: &mut R) {
        let n = self.genes.len();
        if n == 0 {
            return;
        }
        let position = rng.random_range(0..n);
        self.genes[position] = rng.random_range(1..=n);
    }

    /// Number of column pairs sharing a row.
    pub fn horizontal_collisions(&self) -> f64 {
        let n = self.genes.len();
        let mut counts = vec![0usize; n + 1];
        for &g in &self.genes {
            counts[g] += 1;
        }
        counts
            .iter()
            .map(|&c| c * c.saturating_sub(1) / 2)
            .sum::<usize>() as f64
    }

    /// Weighted diagonal collision score.
    ///
    /// Each diagonal bucket with `k > 1` queens contributes `k − 1`, divided
    /// by the length of that diagonal. Both diagonal families share the
    /// divisor of their bucket index.
    pub fn diagonal_collisions(&self) -> f64 {
        let n = self.genes.len();
        if n == 0 {
            return 0.0;
        }
        let mut left = vec![0usize; 2 * n];
        let mut right = vec![0usize; 2 * n];
        for (i, &g) in self.genes.iter().enumerate() {
            left[i + g - 1] += 1;
            right[n - i + g - 2] += 1;
        }

        let mut collisions = 0.0;
        for bucket in 0..2 * n - 1 {
            let counter = left[bucket].saturating_sub(1) + right[bucket].saturating_sub(1);
            let length = n - bucket.abs_diff(n - 1);
            collisions += counter as f64 / length as f64;
        }
        collisions
    }

    /// Fitness: `max_fitness` minus all collisions, truncated to an integer.
    pub fn fitness(&self, max_fitness: i64) -> i64 {
        let collisions = self.horizontal_collisions() + self.diagonal_collisions();
        (max_fitness as f64 - collisions) as i64
    }

    /// Selection weight `fitness / max_fitness`.
    ///
    /// A one-queen board has `max_fitness == 0` and is always solved; its
    /// weight is 1.
    pub fn probability(&self, max_fitness: i64) -> f64 {
        if max_fitness == 0 {
            return 1.0;
        }
        self.fitness(max_fitness) as f64 / max_fitness as f64
    }

    /// Whether no two queens attack each other.
    pub fn is_solution(&self) -> bool {
        let max = self.max_fitness();
        self.fitness(max) == max
    }

    /// Renders the board, one string per row, cells separated by spaces.
    ///
    /// Each occupied row shows a single `Q`, in the first column that holds
    /// it. Later columns repeating the same row are drawn as `x`.
    pub fn board(&self) -> Vec<String> {
        let n = self.genes.len();
        (1..=n)
            .map(|row| {
                let first = self.genes.iter().position(|&g| g == row);
                (0..n)
                    .map(|column| if Some(column) == first { "Q" } else { "x" })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Chromosome = {:?} Fitness = {}",
            self.genes,
            self.fitness(self.max_fitness())
        )
    }
}
