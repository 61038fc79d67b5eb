//! Per-generation observation
//!
//! The optimizer hands every evaluated generation to a [`GenerationObserver`] so a
//! front end can display progress. Observers see an immutable snapshot and cannot
//! influence the run.

use serde::{Deserialize, Serialize};

use crate::genome::gene::Gene;
use crate::population::individual::Individual;

/// Snapshot of one evaluated generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Zero-based generation index
    pub generation: usize,
    /// Individuals in population order
    pub population: Vec<Individual>,
    /// Fitness parallel to `population`
    pub fitness: Vec<f64>,
}

/// One display row of a generation table
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// One-based position in the population
    pub index: usize,
    pub fitness: f64,
    pub gene1: Gene,
    pub gene2: Gene,
}

impl GenerationRecord {
    /// Number of individuals in the snapshot
    pub fn len(&self) -> usize {
        self.population.len()
    }

    /// Check if the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    /// Lowest fitness in this generation
    pub fn min_fitness(&self) -> Option<f64> {
        self.fitness
            .iter()
            .copied()
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Display rows in individual-index order
    pub fn rows(&self) -> impl Iterator<Item = TableRow> + '_ {
        self.population
            .iter()
            .zip(&self.fitness)
            .enumerate()
            .map(|(i, (ind, &fitness))| TableRow {
                index: i + 1,
                fitness,
                gene1: ind.x,
                gene2: ind.y,
            })
    }
}

/// Receiver of per-generation snapshots
pub trait GenerationObserver {
    /// Called once per generation, after evaluation and before reproduction
    fn on_generation(&mut self, record: &GenerationRecord);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationRecord),
{
    fn on_generation(&mut self, record: &GenerationRecord) {
        self(record)
    }
}

/// Observer that ignores every record
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _record: &GenerationRecord) {}
}

/// Observer that keeps every record of a run
#[derive(Clone, Debug, Default)]
pub struct TraceRecorder {
    records: Vec<GenerationRecord>,
}

impl TraceRecorder {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded generations, oldest first
    pub fn records(&self) -> &[GenerationRecord] {
        &self.records
    }

    /// Take the recorded generations
    pub fn into_records(self) -> Vec<GenerationRecord> {
        self.records
    }

    /// Forget everything recorded so far, ready for the next run
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl GenerationObserver for TraceRecorder {
    fn on_generation(&mut self, record: &GenerationRecord) {
        self.records.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> GenerationRecord {
        GenerationRecord {
            generation: 0,
            population: vec![Individual::new(0, 0), Individual::new(2, 1)],
            fitness: vec![16.0, 0.0],
        }
    }

    #[test]
    fn test_rows_are_one_based() {
        let rows: Vec<TableRow> = record().rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].fitness, 16.0);
        assert_eq!(rows[1].index, 2);
        assert_eq!(rows[1].gene1, Gene::Integer(2));
        assert_eq!(rows[1].gene2, Gene::Integer(1));
    }

    #[test]
    fn test_min_fitness() {
        assert_eq!(record().min_fitness(), Some(0.0));
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |r: &GenerationRecord| seen.push(r.generation);
            observer.on_generation(&record());
            observer.on_generation(&record());
        }
        assert_eq!(seen, vec![0, 0]);
    }

    #[test]
    fn test_trace_recorder_clear() {
        let mut recorder = TraceRecorder::new();
        recorder.on_generation(&record());
        assert_eq!(recorder.records().len(), 1);
        recorder.clear();
        assert!(recorder.records().is_empty());
    }
}
