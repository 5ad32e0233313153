//! Fitness-proportionate parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel selection)

use rand::Rng;

use super::chromosome::Chromosome;
use crate::error::{NQueensError, Result};

/// Selection weight of every chromosome, in population order.
pub fn probabilities(population: &[Chromosome], max_fitness: i64) -> Vec<f64> {
    population
        .iter()
        .map(|c| c.probability(max_fitness))
        .collect()
}

/// Roulette wheel selection over precomputed weights.
///
/// Draws `r` in `[0, total)` and returns the first index whose cumulative
/// weight reaches `r`. Falls back to the last index if floating-point
/// rounding leaves the scan short.
///
/// # Errors
/// [`NQueensError::EmptyPopulation`] for an empty slice and
/// [`NQueensError::DegenerateWeights`] when the total weight is not a
/// positive finite number.
///
/// # Complexity
/// O(n) per selection (linear scan)
pub fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> Result<usize> {
    if weights.is_empty() {
        return Err(NQueensError::EmptyPopulation);
    }

    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return Err(NQueensError::DegenerateWeights { total });
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if cumulative + w >= threshold {
            return Ok(i);
        }
        cumulative += w;
    }

    Ok(weights.len() - 1) // floating-point fallback
}

/// Picks one parent index from `population`, weighted by
/// [`Chromosome::probability`].
pub fn random_pick<R: Rng>(
    population: &[Chromosome],
    max_fitness: i64,
    rng: &mut R,
) -> Result<usize> {
    roulette(&probabilities(population, max_fitness), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_roulette_favors_heavy_weight() {
        let weights = [0.1, 0.1, 0.7, 0.1];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[roulette(&weights, &mut rng).unwrap()] += 1;
        }
        assert!(
            counts[2] > 6000,
            "expected heavy weight to dominate, got {counts:?}"
        );
        assert!(counts.iter().all(|&c| c > 0), "counts: {counts:?}");
    }

    #[test]
    fn test_roulette_skips_zero_weight() {
        // A zero-weight member can only be hit by an exact zero draw.
        let weights = [0.0, 1.0, 0.0, 1.0];
        let mut rng = create_rng(3);
        let mut counts = [0u32; 4];
        for _ in 0..5000 {
            counts[roulette(&weights, &mut rng).unwrap()] += 1;
        }
        assert!(counts[2] == 0, "counts: {counts:?}");
        assert!(counts[1] > 2000 && counts[3] > 2000, "counts: {counts:?}");
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = create_rng(42);
        assert_eq!(roulette(&[0.5], &mut rng), Ok(0));
    }

    #[test]
    fn test_empty_population_is_error() {
        let mut rng = create_rng(42);
        assert_eq!(roulette(&[], &mut rng), Err(NQueensError::EmptyPopulation));
        assert_eq!(
            random_pick(&[], 6, &mut rng),
            Err(NQueensError::EmptyPopulation)
        );
    }

    #[test]
    fn test_all_zero_weights_is_error() {
        let mut rng = create_rng(42);
        assert_eq!(
            roulette(&[0.0, 0.0, 0.0], &mut rng),
            Err(NQueensError::DegenerateWeights { total: 0.0 })
        );
    }

    #[test]
    fn test_random_pick_on_unfit_population() {
        // Every queen in one row: fitness 0 for all members.
        let population = vec![Chromosome::from_genes(vec![2, 2, 2, 2]).unwrap(); 5];
        let mut rng = create_rng(1);
        assert!(matches!(
            random_pick(&population, 6, &mut rng),
            Err(NQueensError::DegenerateWeights { .. })
        ));
    }

    #[test]
    fn test_random_pick_prefers_fitter() {
        let population = vec![
            Chromosome::from_genes(vec![2, 2, 2, 2]).unwrap(), // fitness 0
            Chromosome::from_genes(vec![2, 4, 1, 3]).unwrap(), // fitness 6
        ];
        let mut rng = create_rng(11);
        for _ in 0..200 {
            assert_eq!(random_pick(&population, 6, &mut rng), Ok(1));
        }
    }
}
