//! Mutation operators
//!
//! This module provides the random-reset mutation used by the optimizer.

use rand::Rng;

use crate::genome::gene::GeneDomain;
use crate::operators::traits::MutationOperator;
use crate::population::individual::{Individual, GENE_COUNT};

/// Random-reset mutation
///
/// With probability `mutation_rate`, one gene chosen uniformly is replaced by a fresh
/// draw from the gene domain. At most one gene changes per individual.
#[derive(Clone, Debug)]
pub struct RandomResetMutation {
    /// Per-individual mutation probability
    pub mutation_rate: f64,
}

impl RandomResetMutation {
    /// Create a new random-reset mutation
    pub fn new(mutation_rate: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&mutation_rate),
            "Probability must be in [0, 1]"
        );
        Self { mutation_rate }
    }
}

impl MutationOperator for RandomResetMutation {
    fn mutate<R: Rng>(&self, genome: &mut Individual, domain: &GeneDomain, rng: &mut R) {
        if rng.gen::<f64>() < self.mutation_rate {
            let idx = rng.gen_range(0..GENE_COUNT);
            if let Some(gene) = genome.gene_mut(idx) {
                *gene = domain.sample(rng);
            }
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.mutation_rate
    }
}
