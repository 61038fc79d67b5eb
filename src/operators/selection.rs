//! Selection operators
//!
//! This module provides the roulette-wheel and tournament parent selection operators.

use rand::seq::index;
use rand::Rng;
use rand_distr::{Distribution, WeightedIndex};
use tracing::warn;

use crate::config::SelectionMethod;
use crate::error::{OperatorError, OperatorResult};
use crate::operators::traits::{check_pool, SelectionOperator};
use crate::population::individual::Individual;

/// Number of competitors in a tournament
pub const TOURNAMENT_SIZE: usize = 3;

/// Tournament selection operator
///
/// Samples distinct individuals without replacement and keeps the one with the
/// lowest fitness.
#[derive(Clone, Debug)]
pub struct TournamentSelection {
    /// Tournament size (number of individuals competing)
    pub tournament_size: usize,
}

impl TournamentSelection {
    /// Create a new tournament selection with the given size
    pub fn new(tournament_size: usize) -> Self {
        assert!(tournament_size >= 1, "Tournament size must be at least 1");
        Self { tournament_size }
    }
}

impl Default for TournamentSelection {
    fn default() -> Self {
        Self::new(TOURNAMENT_SIZE)
    }
}

impl SelectionOperator for TournamentSelection {
    fn select<R: Rng>(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut R,
    ) -> OperatorResult<usize> {
        check_pool(population, fitness)?;
        if population.len() < self.tournament_size {
            return Err(OperatorError::InvalidConfiguration(format!(
                "tournament of {} needs at least as many individuals, got {}",
                self.tournament_size,
                population.len()
            )));
        }

        index::sample(rng, population.len(), self.tournament_size)
            .into_iter()
            .min_by(|&a, &b| {
                fitness[a]
                    .partial_cmp(&fitness[b])
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .ok_or_else(|| OperatorError::SelectionFailed("empty tournament".to_string()))
    }
}

/// Roulette wheel selection (fitness proportionate)
///
/// Selection probability is `fitness[i] / sum(fitness)` on the raw objective value.
/// Since the objective is minimized, worse individuals are the more likely picks;
/// this reproduces the legacy weighting and is pinned by tests.
#[derive(Clone, Debug, Default)]
pub struct RouletteSelection;

impl RouletteSelection {
    /// Create a new roulette selection
    pub fn new() -> Self {
        Self
    }
}

impl SelectionOperator for RouletteSelection {
    fn select<R: Rng>(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut R,
    ) -> OperatorResult<usize> {
        check_pool(population, fitness)?;

        if let Some(bad) = fitness.iter().find(|f| !f.is_finite() || **f < 0.0) {
            return Err(OperatorError::DegenerateState(format!(
                "roulette weight {} is not a finite non-negative value",
                bad
            )));
        }

        let total: f64 = fitness.iter().sum();
        if total == 0.0 || !total.is_finite() {
            warn!(total, "roulette wheel has no usable total fitness");
            return Err(OperatorError::DegenerateState(format!(
                "total fitness is {}, roulette probabilities are undefined",
                total
            )));
        }

        // Weights are finite, non-negative and sum to a positive value here
        let dist = WeightedIndex::new(fitness)
            .map_err(|e| OperatorError::DegenerateState(e.to_string()))?;
        Ok(dist.sample(rng))
    }
}

/// Selection strategy resolved from the configuration
#[derive(Clone, Debug)]
pub enum Selection {
    Roulette(RouletteSelection),
    Tournament(TournamentSelection),
}

impl From<SelectionMethod> for Selection {
    fn from(method: SelectionMethod) -> Self {
        match method {
            SelectionMethod::Roulette => Self::Roulette(RouletteSelection::new()),
            SelectionMethod::Tournament => Self::Tournament(TournamentSelection::default()),
        }
    }
}

impl SelectionOperator for Selection {
    fn select<R: Rng>(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut R,
    ) -> OperatorResult<usize> {
        match self {
            Self::Roulette(s) => s.select(population, fitness, rng),
            Self::Tournament(s) => s.select(population, fitness, rng),
        }
    }
}
