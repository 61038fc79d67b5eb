//! Crossover operators
//!
//! This module provides single-point crossover for integer genes and blend
//! crossover for real genes.

use rand::Rng;

use crate::genome::bounds::Bounds;
use crate::genome::gene::{Gene, GeneDomain};
use crate::operators::traits::CrossoverOperator;
use crate::population::individual::{Individual, GENE_COUNT};

/// Single-point crossover
///
/// The cut point is drawn uniformly from the interior indices `1..GENE_COUNT`;
/// genes before the cut come from the first parent and the rest from the second.
/// With a two-gene chromosome the only cut is 1, so the child is always
/// `(parent1.x, parent2.y)`.
#[derive(Clone, Debug, Default)]
pub struct SinglePointCrossover;

impl SinglePointCrossover {
    /// Create a new single-point crossover
    pub fn new() -> Self {
        Self
    }
}

impl CrossoverOperator for SinglePointCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual {
        let point = rng.gen_range(1..GENE_COUNT);
        let (head, tail) = (parent1.genes(), parent2.genes());

        let mut genes = tail;
        genes[..point].copy_from_slice(&head[..point]);
        Individual::from_genes(genes)
    }
}

/// Blend (arithmetic) crossover
///
/// Draws one `alpha` in `[0, 1)` per child and sets every gene to
/// `alpha * parent1 + (1 - alpha) * parent2`. Children are always real-valued.
#[derive(Clone, Debug, Default)]
pub struct BlendCrossover {
    /// Clamp applied to absorb rounding at the edges of the parents' hull
    pub bounds: Option<Bounds>,
}

impl BlendCrossover {
    /// Create a new unbounded blend crossover
    pub fn new() -> Self {
        Self { bounds: None }
    }

    /// Clamp children to the given bounds
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    fn blend(&self, alpha: f64, a: Gene, b: Gene) -> Gene {
        let v = alpha * a.to_f64() + (1.0 - alpha) * b.to_f64();
        Gene::Float(match self.bounds {
            Some(bounds) => bounds.clamp(v),
            None => v,
        })
    }
}

impl CrossoverOperator for BlendCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual {
        let alpha = rng.gen::<f64>();
        Individual {
            x: self.blend(alpha, parent1.x, parent2.x),
            y: self.blend(alpha, parent1.y, parent2.y),
        }
    }
}

/// Crossover resolved from the gene domain of a run
#[derive(Clone, Debug)]
pub enum Crossover {
    SinglePoint(SinglePointCrossover),
    Blend(BlendCrossover),
}

impl Crossover {
    /// Pick the crossover matching the domain's encoding
    pub fn for_domain(domain: &GeneDomain) -> Self {
        match domain {
            GeneDomain::Integer { .. } => Self::SinglePoint(SinglePointCrossover::new()),
            GeneDomain::Float(bounds) => Self::Blend(BlendCrossover::new().with_bounds(*bounds)),
        }
    }
}

impl CrossoverOperator for Crossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Individual,
        parent2: &Individual,
        rng: &mut R,
    ) -> Individual {
        match self {
            Self::SinglePoint(c) => c.crossover(parent1, parent2, rng),
            Self::Blend(c) => c.crossover(parent1, parent2, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_single_point_takes_x_from_first_y_from_second() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Individual::new(3, -7);
        let p2 = Individual::new(11, 5);
        for _ in 0..20 {
            let child = SinglePointCrossover::new().crossover(&p1, &p2, &mut rng);
            assert_eq!(child, Individual::new(3, 5));
        }
        // Parents untouched
        assert_eq!(p1, Individual::new(3, -7));
        assert_eq!(p2, Individual::new(11, 5));
    }

    #[test]
    fn test_blend_within_parent_hull() {
        let mut rng = StdRng::seed_from_u64(42);
        let p1 = Individual::new(-4.0, 10.0);
        let p2 = Individual::new(6.0, 2.0);
        for _ in 0..100 {
            let child = BlendCrossover::new().crossover(&p1, &p2, &mut rng);
            let (x, y) = child.to_f64();
            assert!((-4.0..=6.0).contains(&x));
            assert!((2.0..=10.0).contains(&y));
        }
    }

    #[test]
    fn test_blend_uses_one_alpha_for_both_genes() {
        let mut rng = StdRng::seed_from_u64(9);
        let p1 = Individual::new(1.0, 1.0);
        let p2 = Individual::new(0.0, 0.0);
        let child = BlendCrossover::new().crossover(&p1, &p2, &mut rng);
        let (x, y) = child.to_f64();
        assert_relative_eq!(x, y);
    }

    #[test]
    fn test_blend_widens_integer_parents() {
        let mut rng = StdRng::seed_from_u64(3);
        let p1 = Individual::new(4, 4);
        let p2 = Individual::new(4, 4);
        let child = BlendCrossover::new().crossover(&p1, &p2, &mut rng);
        assert_eq!(child.x, Gene::Float(4.0));
        assert_eq!(child.y, Gene::Float(4.0));
    }

    #[test]
    fn test_blend_clamps_to_bounds() {
        let crossover = BlendCrossover::new().with_bounds(Bounds::new(0.0, 1.0));
        assert_eq!(crossover.blend(0.5, Gene::Float(3.0), Gene::Float(3.0)), Gene::Float(1.0));
    }

    #[test]
    fn test_crossover_for_domain() {
        assert!(matches!(
            Crossover::for_domain(&GeneDomain::Integer { min: 0, max: 5 }),
            Crossover::SinglePoint(_)
        ));
        match Crossover::for_domain(&GeneDomain::Float(Bounds::new(-1.0, 1.0))) {
            Crossover::Blend(b) => assert_eq!(b.bounds, Some(Bounds::new(-1.0, 1.0))),
            other => panic!("unexpected crossover {:?}", other),
        }
    }
}
