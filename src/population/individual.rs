//! Individual type
//!
//! This module provides the two-gene chromosome evolved by the optimizer.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::genome::gene::{Gene, GeneDomain};

/// Number of genes in a chromosome
pub const GENE_COUNT: usize = 2;

/// A candidate solution `(x, y)`
///
/// Individuals are plain values: children are built fresh and parents are never
/// modified by the operators.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    /// First gene
    pub x: Gene,
    /// Second gene
    pub y: Gene,
}

impl Individual {
    /// Create a new individual
    pub fn new(x: impl Into<Gene>, y: impl Into<Gene>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Build an individual from its genes in chromosome order
    pub fn from_genes(genes: [Gene; GENE_COUNT]) -> Self {
        let [x, y] = genes;
        Self { x, y }
    }

    /// Draw both genes independently from the domain
    pub fn random<R: Rng>(domain: &GeneDomain, rng: &mut R) -> Self {
        let x = domain.sample(rng);
        let y = domain.sample(rng);
        Self { x, y }
    }

    /// Genes in chromosome order
    pub fn genes(&self) -> [Gene; GENE_COUNT] {
        [self.x, self.y]
    }

    /// Gene at `index`, if any
    pub fn gene(&self, index: usize) -> Option<Gene> {
        match index {
            0 => Some(self.x),
            1 => Some(self.y),
            _ => None,
        }
    }

    /// Mutable gene at `index`, if any
    pub fn gene_mut(&mut self, index: usize) -> Option<&mut Gene> {
        match index {
            0 => Some(&mut self.x),
            1 => Some(&mut self.y),
            _ => None,
        }
    }

    /// Genes widened to real arithmetic
    pub fn to_f64(&self) -> (f64, f64) {
        (self.x.to_f64(), self.y.to_f64())
    }

    /// Check that every gene belongs to the domain
    pub fn is_within(&self, domain: &GeneDomain) -> bool {
        self.genes().iter().all(|g| domain.contains(*g))
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
