//! Genetic engine generation loop.
//!
//! [`GeneticEngine`] owns the population and drives the evolutionary
//! process: scoring → elitism → roulette selection → one-point crossover →
//! mutation → repeat, until a solved board appears or the generation
//! ceiling is reached.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::Rng;

use super::chromosome::Chromosome;
use super::config::GeneticConfig;
use super::selection::{probabilities, roulette};
use crate::error::Result;
use crate::random::rng_from_seed;

/// Result of a genetic engine run.
#[derive(Debug, Clone)]
pub struct GeneticResult {
    /// Generation counter reached when the loop stopped (starts at 1).
    pub generations: usize,

    /// First maximum-fitness chromosome of the final population.
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: i64,

    /// Whether `best` is a solved board.
    pub solved: bool,

    /// Mean population fitness, one entry per completed generation plus
    /// one for the final population.
    pub mean_fitness_history: Vec<f64>,
}

/// Population-based N-Queens solver.
///
/// # Usage
///
/// ```
/// use u_nqueens::ga::{GeneticConfig, GeneticEngine};
///
/// let config = GeneticConfig::default()
///     .with_n_queens(4)
///     .with_generation_size(50)
///     .with_mutation_probability(0.1)
///     .with_max_generations(1000)
///     .with_seed(42);
/// let mut engine = GeneticEngine::new(config).unwrap();
/// let result = engine.run(false).unwrap();
/// assert!(result.best_fitness <= 6);
/// ```
pub struct GeneticEngine<R: Rng = StdRng> {
    config: GeneticConfig,
    max_fitness: i64,
    population: Vec<Chromosome>,
    mean_fitness_history: Vec<f64>,
    rng: R,
}

impl GeneticEngine<StdRng> {
    /// Creates an engine seeded from `config.seed`.
    pub fn new(config: GeneticConfig) -> Result<Self> {
        let rng = rng_from_seed(config.seed);
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GeneticEngine<R> {
    /// Creates an engine drawing from the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: GeneticConfig, mut rng: R) -> Result<Self> {
        config.validate()?;

        let population = (0..config.generation_size)
            .map(|_| Chromosome::random(config.n_queens, &mut rng))
            .collect();

        Ok(Self {
            max_fitness: config.max_fitness(),
            config,
            population,
            mean_fitness_history: Vec::new(),
            rng,
        })
    }

    /// The engine configuration.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Fitness of a solved board, `N·(N−1)/2`.
    pub fn max_fitness(&self) -> i64 {
        self.max_fitness
    }

    /// The current population.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Mean fitness recorded so far, in generation order.
    pub fn mean_fitness_history(&self) -> &[f64] {
        &self.mean_fitness_history
    }

    /// Single-point crossover: `x[..c] ++ y[c..]` with `c` uniform in
    /// `[0, N−1]`.
    pub fn reproduce(&mut self, x: &Chromosome, y: &Chromosome) -> Chromosome {
        let n = self.config.n_queens;
        let cut = self.rng.random_range(0..n);
        let mut genes = Vec::with_capacity(n);
        genes.extend_from_slice(&x.genes()[..cut]);
        genes.extend_from_slice(&y.genes()[cut..]);
        Chromosome::from_parts(genes)
    }

    /// Picks one parent from the current population by roulette wheel.
    pub fn random_pick(&mut self) -> Result<&Chromosome> {
        let weights = probabilities(&self.population, self.max_fitness);
        let idx = roulette(&weights, &mut self.rng)?;
        Ok(&self.population[idx])
    }

    /// Replaces the population with the next generation.
    ///
    /// The top half by probability survives unchanged. Children are bred
    /// from the old population until the configured size is reached, or
    /// until a child is a solved board, in which case the new population
    /// may be short.
    pub fn produce_children(&mut self) -> Result<()> {
        let weights = probabilities(&self.population, self.max_fitness);

        let mut ranked: Vec<usize> = (0..self.population.len()).collect();
        ranked.sort_by(|&a, &b| {
            weights[b]
                .partial_cmp(&weights[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let survivors = self.config.generation_size / 2;
        let mut next_gen: Vec<Chromosome> = ranked
            .iter()
            .take(survivors)
            .map(|&i| self.population[i].clone())
            .collect();

        let to_breed = self.config.generation_size.saturating_sub(next_gen.len());
        for _ in 0..to_breed {
            let x = roulette(&weights, &mut self.rng)?;
            let y = roulette(&weights, &mut self.rng)?;
            let (x, y) = (self.population[x].clone(), self.population[y].clone());

            let mut child = self.reproduce(&x, &y);
            if self.rng.random::<f64>() <= self.config.mutation_probability {
                child.mutate(&mut self.rng);
            }

            let solved = child.fitness(self.max_fitness) == self.max_fitness;
            next_gen.push(child);
            if solved {
                break;
            }
        }

        self.population = next_gen;
        Ok(())
    }

    /// Runs generations until a solved board appears or the generation
    /// counter reaches `max_generations`.
    ///
    /// With `verbose`, each generation is logged at `info` level and each
    /// chromosome at `debug` level.
    ///
    /// # Errors
    /// Propagates selection errors, which occur only when every chromosome
    /// has zero fitness (possible for boards with no solution, N = 2 or 3).
    pub fn run(&mut self, verbose: bool) -> Result<GeneticResult> {
        let mut generation = 1;
        let mut fitness = score_population(&self.population, self.max_fitness);

        while !fitness.contains(&self.max_fitness) && generation < self.config.max_generations {
            if verbose {
                info!(
                    "generation {generation}: max fitness {}, mean fitness {:.3}",
                    fitness.iter().max().copied().unwrap_or(0),
                    mean(&fitness)
                );
                for chromosome in &self.population {
                    debug!("{chromosome}");
                }
            }
            self.mean_fitness_history.push(mean(&fitness));
            self.produce_children()?;
            fitness = score_population(&self.population, self.max_fitness);
            generation += 1;
        }
        self.mean_fitness_history.push(mean(&fitness));

        let best_idx = first_max(&fitness);
        let best = self.population[best_idx].clone();
        let best_fitness = fitness[best_idx];

        debug!(
            "genetic run finished: n = {}, generations = {generation}, best fitness = {best_fitness}/{}",
            self.config.n_queens, self.max_fitness
        );

        Ok(GeneticResult {
            generations: generation,
            solved: best_fitness == self.max_fitness,
            best,
            best_fitness,
            mean_fitness_history: self.mean_fitness_history.clone(),
        })
    }
}

/// Fitness of every chromosome, in population order.
#[cfg(not(feature = "parallel"))]
fn score_population(population: &[Chromosome], max_fitness: i64) -> Vec<i64> {
    population.iter().map(|c| c.fitness(max_fitness)).collect()
}

/// Fitness of every chromosome, in population order.
#[cfg(feature = "parallel")]
fn score_population(population: &[Chromosome], max_fitness: i64) -> Vec<i64> {
    use rayon::prelude::*;
    population.par_iter().map(|c| c.fitness(max_fitness)).collect()
}

fn mean(fitness: &[i64]) -> f64 {
    if fitness.is_empty() {
        return 0.0;
    }
    fitness.iter().sum::<i64>() as f64 / fitness.len() as f64
}

/// Index of the first maximum.
fn first_max(fitness: &[i64]) -> usize {
    let mut best = 0;
    for (i, &f) in fitness.iter().enumerate() {
        if f > fitness[best] {
            best = i;
        }
    }
    best
}
