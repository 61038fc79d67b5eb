//! Simple Genetic Algorithm
//!
//! This module implements the generational genetic algorithm: evaluate, record,
//! then replace the whole population with mutated crossover children of selected
//! parents. There is no elitism; the best individual survives only in the result.

use std::time::Instant;

use rand::Rng;
use tracing::{debug, info, trace, warn};

use crate::config::Configuration;
use crate::diagnostics::{BestResult, EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError, OperatorError, OperatorResult};
use crate::fitness::objective::QuarticObjective;
use crate::genome::gene::GeneDomain;
use crate::observer::{GenerationObserver, GenerationRecord};
use crate::operators::crossover::Crossover;
use crate::operators::mutation::RandomResetMutation;
use crate::operators::selection::Selection;
use crate::operators::traits::{CrossoverOperator, MutationOperator, SelectionOperator};
use crate::population::individual::Individual;
use crate::population::population::{argmin, Population};

/// Phases of a run, in the order they are entered
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Evaluating,
    Recording,
    Reproducing,
    Done,
}

/// Simple Genetic Algorithm
///
/// Built from a validated [`Configuration`]; the encoding and selection method are
/// resolved into concrete operators once, here.
#[derive(Clone, Debug)]
pub struct SimpleGA {
    config: Configuration,
    domain: GeneDomain,
    selection: Selection,
    crossover: Crossover,
    mutation: RandomResetMutation,
    objective: QuarticObjective,
}

impl SimpleGA {
    /// Validate the configuration and resolve the operators
    pub fn new(config: Configuration) -> EvoResult<Self> {
        config.validate()?;

        let domain = GeneDomain::from_config(&config)?;
        Ok(Self {
            selection: Selection::from(config.selection_method),
            crossover: Crossover::for_domain(&domain),
            mutation: RandomResetMutation::new(config.mutation_rate),
            objective: QuarticObjective,
            domain,
            config,
        })
    }

    /// The configuration this optimizer was built from
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The gene domain used for initialization and mutation
    pub fn domain(&self) -> &GeneDomain {
        &self.domain
    }

    /// Run the genetic algorithm from a random initial population
    pub fn run<R, O>(&self, rng: &mut R, observer: &mut O) -> EvoResult<BestResult>
    where
        R: Rng,
        O: GenerationObserver + ?Sized,
    {
        trace!(phase = ?Phase::Initializing);
        let population = Population::random(self.config.population_size, &self.domain, rng);
        self.evolve(population, rng, observer)
    }

    /// Run the genetic algorithm from a caller-supplied initial population
    ///
    /// The population must hold exactly `population_size` individuals.
    pub fn evolve<R, O>(
        &self,
        initial: Population,
        rng: &mut R,
        observer: &mut O,
    ) -> EvoResult<BestResult>
    where
        R: Rng,
        O: GenerationObserver + ?Sized,
    {
        if initial.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        if initial.len() != self.config.population_size {
            return Err(EvolutionError::Configuration(format!(
                "initial population has {} individuals, expected {}",
                initial.len(),
                self.config.population_size
            )));
        }

        info!(
            population_size = self.config.population_size,
            generations = self.config.generation_count,
            encoding = %self.config.encoding,
            selection = %self.config.selection_method,
            mutation_rate = self.config.mutation_rate,
            "starting run"
        );
        let start_time = Instant::now();

        let mut stats = EvolutionStats::new();
        let mut best: Option<(Individual, usize)> = None;
        let mut best_fitness = f64::INFINITY;
        let mut population = initial.into_individuals();

        for generation in 0..self.config.generation_count {
            trace!(generation, phase = ?Phase::Evaluating);
            let fitness = self.objective.evaluate_all(&population);

            if let Some(idx) = argmin(&fitness) {
                if fitness[idx] < best_fitness {
                    best_fitness = fitness[idx];
                    best = Some((population[idx], generation));
                    debug!(generation, best_fitness, best = %population[idx], "new best");
                }
            }

            let gen_stats = GenerationStats::from_fitness(generation, &fitness, best_fitness);
            debug!(
                generation,
                min = gen_stats.best_fitness,
                mean = gen_stats.mean_fitness,
                max = gen_stats.worst_fitness,
                "generation evaluated"
            );
            stats.record(gen_stats);

            trace!(generation, phase = ?Phase::Recording);
            let record = GenerationRecord {
                generation,
                population,
                fitness,
            };
            observer.on_generation(&record);

            trace!(generation, phase = ?Phase::Reproducing);
            population = self
                .reproduce(&record.population, &record.fitness, rng)
                .map_err(|e| {
                    warn!(generation, error = %e, "reproduction failed");
                    e
                })?;
        }

        trace!(phase = ?Phase::Done);
        stats.set_runtime(start_time.elapsed());

        let (individual, generation) = best.ok_or_else(|| {
            OperatorError::DegenerateState("no generation produced a comparable fitness".to_string())
        })?;
        info!(
            best = %individual,
            best_fitness,
            found_in = generation,
            runtime_ms = stats.total_runtime_ms,
            "run finished"
        );

        Ok(BestResult::new(individual, best_fitness, generation).with_stats(stats))
    }

    /// Build the next generation from the current one
    fn reproduce<R: Rng>(
        &self,
        population: &[Individual],
        fitness: &[f64],
        rng: &mut R,
    ) -> OperatorResult<Vec<Individual>> {
        (0..self.config.population_size)
            .map(|_| {
                let parent1 = self.selection.select_individual(population, fitness, rng)?;
                let parent2 = self.selection.select_individual(population, fitness, rng)?;

                let mut child = self.crossover.crossover(&parent1, &parent2, rng);
                self.mutation.mutate(&mut child, &self.domain, rng);
                Ok(child)
            })
            .collect()
    }
}

/// Run the optimizer with the thread-local random generator
pub fn run<O>(config: Configuration, observer: &mut O) -> EvoResult<BestResult>
where
    O: GenerationObserver + ?Sized,
{
    run_with_rng(config, &mut rand::thread_rng(), observer)
}

/// Run the optimizer with an injected random generator
pub fn run_with_rng<R, O>(
    config: Configuration,
    rng: &mut R,
    observer: &mut O,
) -> EvoResult<BestResult>
where
    R: Rng,
    O: GenerationObserver + ?Sized,
{
    SimpleGA::new(config)?.run(rng, observer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Encoding, SelectionMethod};
    use crate::genome::bounds::Bounds;
    use crate::observer::{NoopObserver, TraceRecorder};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn small_config() -> Configuration {
        Configuration::new()
            .with_population_size(10)
            .with_bounds(-10, 10)
            .with_generations(1)
            .with_mutation_rate(0.0)
            .with_encoding(Encoding::Integer)
            .with_selection(SelectionMethod::Tournament)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let err = SimpleGA::new(small_config().with_bounds(3, 3)).unwrap_err();
        assert!(err.is_configuration());

        let err = SimpleGA::new(small_config().with_generations(0)).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let first = run_with_rng(small_config(), &mut StdRng::seed_from_u64(42), &mut NoopObserver)
            .unwrap();
        let second =
            run_with_rng(small_config(), &mut StdRng::seed_from_u64(42), &mut NoopObserver)
                .unwrap();
        assert_eq!(first.individual, second.individual);
        assert_eq!(first.fitness, second.fitness);
        assert_eq!(first.generation, 0);
    }

    #[test]
    fn test_single_generation_best_is_generation_zero_minimum() {
        let mut recorder = TraceRecorder::new();
        let result =
            run_with_rng(small_config(), &mut StdRng::seed_from_u64(7), &mut recorder).unwrap();

        let records = recorder.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.len(), 10);
        assert_eq!(record.min_fitness(), Some(result.fitness));

        let idx = argmin(&record.fitness).unwrap();
        assert_eq!(record.population[idx], result.individual);
    }

    #[test]
    fn test_observer_sees_every_generation_in_order() {
        let config = small_config().with_generations(15).with_mutation_rate(0.2);
        let mut seen = Vec::new();
        let mut observer = |r: &GenerationRecord| {
            assert_eq!(r.population.len(), r.fitness.len());
            seen.push(r.generation);
        };
        run_with_rng(config, &mut StdRng::seed_from_u64(3), &mut observer).unwrap();
        assert_eq!(seen, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn test_best_so_far_never_regresses() {
        let config = Configuration::new().with_generations(40);
        let result =
            run_with_rng(config, &mut StdRng::seed_from_u64(11), &mut NoopObserver).unwrap();

        let history = result.stats.best_so_far_history();
        assert_eq!(history.len(), 40);
        for pair in history.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
        assert_eq!(*history.last().unwrap(), result.fitness);

        let per_generation = result.stats.best_fitness_history();
        let overall_min = per_generation.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(result.fitness, overall_min);
    }

    #[test]
    fn test_float_run_stays_in_bounds() {
        let config = Configuration::new()
            .with_population_size(30)
            .with_bounds(-5, 5)
            .with_generations(25)
            .with_mutation_rate(0.5)
            .with_encoding(Encoding::Float)
            .with_selection(SelectionMethod::Tournament);
        let mut recorder = TraceRecorder::new();
        let result =
            run_with_rng(config, &mut StdRng::seed_from_u64(5), &mut recorder).unwrap();

        let ga_domain = GeneDomain::Float(Bounds::new(-5.0, 5.0));
        assert!(result.individual.is_within(&ga_domain));
        for record in recorder.records() {
            assert!(record.population.iter().all(|ind| ind.is_within(&ga_domain)));
        }
    }

    #[test]
    fn test_tournament_run_approaches_optimum() {
        let config = Configuration::new()
            .with_population_size(60)
            .with_generations(60)
            .with_selection(SelectionMethod::Tournament);
        let result =
            run_with_rng(config, &mut StdRng::seed_from_u64(2024), &mut NoopObserver).unwrap();
        assert!(result.fitness <= 10.0, "fitness {}", result.fitness);
        assert!(result.fitness <= result.stats.best_fitness_history()[0]);
    }

    #[test]
    fn test_roulette_on_zero_fitness_population_is_degenerate() {
        let config = small_config().with_selection(SelectionMethod::Roulette);
        let ga = SimpleGA::new(config).unwrap();
        let initial: Population = (0..10).map(|_| Individual::new(2, 1)).collect();

        let mut recorder = TraceRecorder::new();
        let err = ga
            .evolve(initial, &mut StdRng::seed_from_u64(1), &mut recorder)
            .unwrap_err();
        assert!(err.is_degenerate());
        // The generation was recorded before reproduction failed
        assert_eq!(recorder.records().len(), 1);
        assert_eq!(recorder.records()[0].fitness, vec![0.0; 10]);
    }

    #[test]
    fn test_evolve_rejects_wrong_population_size() {
        let ga = SimpleGA::new(small_config()).unwrap();
        let initial: Population = (0..4).map(|i| Individual::new(i, i)).collect();
        let err = ga
            .evolve(initial, &mut StdRng::seed_from_u64(1), &mut NoopObserver)
            .unwrap_err();
        assert!(err.is_configuration());

        let err = ga
            .evolve(Population::new(), &mut StdRng::seed_from_u64(1), &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, EvolutionError::EmptyPopulation));
    }

    #[test]
    fn test_evolve_keeps_first_found_best_on_ties() {
        // Generation 0 already holds the optimum at index 0; later ties must not replace it
        let config = small_config().with_generations(5);
        let ga = SimpleGA::new(config).unwrap();
        let mut individuals = vec![Individual::new(2, 1)];
        individuals.extend((1..10).map(|i| Individual::new(-i, i)));

        let result = ga
            .evolve(
                Population::from_individuals(individuals),
                &mut StdRng::seed_from_u64(8),
                &mut NoopObserver,
            )
            .unwrap();
        assert_eq!(result.fitness, 0.0);
        assert_eq!(result.generation, 0);
        assert_eq!(result.individual, Individual::new(2, 1));
    }

    #[test]
    fn test_thread_rng_run() {
        let result = run(Configuration::new().with_generations(3), &mut NoopObserver).unwrap();
        assert!(result.fitness.is_finite());
        assert_eq!(result.stats.num_generations(), 3);
    }
}
