//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fitness::objective::QuarticObjective;
use crate::genome::gene::GeneDomain;
use crate::population::individual::Individual;

/// One generation's individuals, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    /// The individuals in this population
    individuals: Vec<Individual>,
}

impl Population {
    /// Create an empty population
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Create a random population
    pub fn random<R: Rng>(size: usize, domain: &GeneDomain, rng: &mut R) -> Self {
        let individuals = (0..size)
            .map(|_| Individual::random(domain, rng))
            .collect();
        Self { individuals }
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Fitness of every individual, in population order
    pub fn evaluate(&self, objective: &QuarticObjective) -> Vec<f64> {
        objective.evaluate_all(&self.individuals)
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}

/// Index of the first minimum fitness value
///
/// Ties resolve to the lowest index. NaN values never win.
pub fn argmin(fitness: &[f64]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &f) in fitness.iter().enumerate() {
        match best {
            None if !f.is_nan() => best = Some(i),
            Some(b) if f < fitness[b] => best = Some(i),
            _ => {}
        }
    }
    best
}
