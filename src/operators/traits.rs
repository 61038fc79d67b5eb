//! Operator traits
//!
//! This module defines the core operator traits for the genetic algorithm.

use rand::Rng;

use crate::error::{OperatorError, OperatorResult};
use crate::genome::gene::GeneDomain;
use crate::population::individual::Individual;

/// Selection operator trait
///
/// Selects individuals from a population for reproduction.
pub trait SelectionOperator: Send + Sync {
    /// Select a single individual from the population
    ///
    /// `fitness` is parallel to `population`. Returns the index of the selected
    /// individual.
    fn select<R: Rng>(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut R,
    ) -> OperatorResult<usize>;

    /// Select a single individual and return it by value
    fn select_individual<R: Rng>(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut R,
    ) -> OperatorResult<Individual> {
        let idx = self.select(population, fitness, rng)?;
        population.get(idx).copied().ok_or_else(|| {
            OperatorError::SelectionFailed(format!(
                "index {} out of range for population of {}",
                idx,
                population.len()
            ))
        })
    }
}

/// Crossover operator trait
///
/// Combines genetic material from two parents into one child.
pub trait CrossoverOperator: Send + Sync {
    /// Produce a child; the parents are left untouched
    fn crossover<R: Rng>(&self, parent1: &Individual, parent2: &Individual, rng: &mut R)
        -> Individual;
}

/// Mutation operator trait
///
/// Applies random changes to a freshly built child.
pub trait MutationOperator: Send + Sync {
    /// Apply mutation to a genome in place, drawing new genes from `domain`
    fn mutate<R: Rng>(&self, genome: &mut Individual, domain: &GeneDomain, rng: &mut R);

    /// Get the per-individual mutation probability
    fn mutation_probability(&self) -> f64;
}

/// Shared precondition of every selection operator
pub(crate) fn check_pool(population: &[Individual], fitness: &[f64]) -> OperatorResult<()> {
    if population.is_empty() {
        return Err(OperatorError::SelectionFailed(
            "population cannot be empty".to_string(),
        ));
    }
    if population.len() != fitness.len() {
        return Err(OperatorError::SelectionFailed(format!(
            "population has {} individuals but {} fitness values",
            population.len(),
            fitness.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Mock selection operator for testing
    struct LastSelection;

    impl SelectionOperator for LastSelection {
        fn select<R: Rng>(
            &self,
            population: &[Individual],
            fitness: &[f64],
            _rng: &mut R,
        ) -> OperatorResult<usize> {
            check_pool(population, fitness)?;
            Ok(population.len() - 1)
        }
    }

    // Always returns an index past the end
    struct BrokenSelection;

    impl SelectionOperator for BrokenSelection {
        fn select<R: Rng>(
            &self,
            population: &[Individual],
            _fitness: &[f64],
            _rng: &mut R,
        ) -> OperatorResult<usize> {
            Ok(population.len())
        }
    }

    #[test]
    fn test_select_individual_by_value() {
        let mut rng = StdRng::seed_from_u64(0);
        let population = vec![Individual::new(1, 1), Individual::new(5, 5)];
        let chosen = LastSelection
            .select_individual(&population, &[1.0, 2.0], &mut rng)
            .unwrap();
        assert_eq!(chosen, Individual::new(5, 5));
    }

    #[test]
    fn test_select_individual_out_of_range() {
        let mut rng = StdRng::seed_from_u64(0);
        let population = vec![Individual::new(1, 1)];
        let err = BrokenSelection
            .select_individual(&population, &[1.0], &mut rng)
            .unwrap_err();
        assert!(matches!(err, OperatorError::SelectionFailed(_)));
    }

    #[test]
    fn test_check_pool_mismatch() {
        let population = vec![Individual::new(1, 1)];
        assert!(check_pool(&population, &[1.0, 2.0]).is_err());
        assert!(check_pool(&[], &[]).is_err());
        assert!(check_pool(&population, &[1.0]).is_ok());
    }
}
