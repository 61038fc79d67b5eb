//! Diagnostics and statistics
//!
//! This module provides statistics collection for optimizer runs and the result type.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::population::individual::Individual;

/// Statistics for a single generation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Lowest fitness in this generation
    pub best_fitness: f64,
    /// Highest fitness in this generation
    pub worst_fitness: f64,
    /// Mean fitness
    pub mean_fitness: f64,
    /// Best fitness seen up to and including this generation
    pub best_so_far: f64,
}

impl GenerationStats {
    /// Compute statistics from one generation's fitness values
    pub fn from_fitness(generation: usize, fitness: &[f64], best_so_far: f64) -> Self {
        if fitness.is_empty() {
            return Self {
                generation,
                best_fitness: f64::INFINITY,
                worst_fitness: f64::NEG_INFINITY,
                mean_fitness: 0.0,
                best_so_far,
            };
        }

        let best = fitness.iter().copied().fold(f64::INFINITY, f64::min);
        let worst = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = fitness.iter().sum::<f64>() / fitness.len() as f64;

        Self {
            generation,
            best_fitness: best,
            worst_fitness: worst,
            mean_fitness: mean,
            best_so_far,
        }
    }
}

/// Statistics collector for an entire run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the history of per-generation best fitness
    pub fn best_fitness_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_fitness).collect()
    }

    /// Get the history of best-so-far fitness (non-increasing)
    pub fn best_so_far_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.best_so_far).collect()
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the run
    pub fn summary(&self) -> String {
        let final_best = self
            .generations
            .last()
            .map(|g| g.best_so_far)
            .unwrap_or(f64::INFINITY);

        format!(
            "Run Summary:\n\
             - Generations: {}\n\
             - Best fitness: {:.6}\n\
             - Runtime: {:.2}ms",
            self.num_generations(),
            final_best,
            self.total_runtime_ms
        )
    }
}

/// Best solution found by a run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BestResult {
    /// The best individual found
    pub individual: Individual,
    /// Its fitness
    pub fitness: f64,
    /// Generation in which it was first seen
    pub generation: usize,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl BestResult {
    /// Create a new result
    pub fn new(individual: Individual, fitness: f64, generation: usize) -> Self {
        Self {
            individual,
            fitness,
            generation,
            stats: EvolutionStats::new(),
        }
    }

    /// Add statistics to the result
    pub fn with_stats(mut self, stats: EvolutionStats) -> Self {
        self.stats = stats;
        self
    }

    /// One-line text for a result label
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "best x = {}, best y = {}, fitness = {}",
            self.individual.x, self.individual.y, self.fitness
        )
    }
}

pub mod prelude {
    pub use super::{BestResult, EvolutionStats, GenerationStats};
}
