//! Objective function
//!
//! f(x, y) = (x - 2)^4 + (x - 2y)^2, minimized. Global minimum 0 at (2, 1).

use crate::population::individual::Individual;

/// Objective value at a point, in real arithmetic
pub fn objective(x: f64, y: f64) -> f64 {
    (x - 2.0).powi(4) + (x - 2.0 * y).powi(2)
}

/// The fixed objective minimized by the optimizer
#[derive(Clone, Copy, Debug, Default)]
pub struct QuarticObjective;

impl QuarticObjective {
    /// Minimum attainable fitness
    pub const OPTIMAL_FITNESS: f64 = 0.0;

    /// Point at which the minimum is attained
    pub const OPTIMAL_SOLUTION: (f64, f64) = (2.0, 1.0);

    /// Fitness of one individual (lower is better)
    pub fn evaluate(&self, individual: &Individual) -> f64 {
        let (x, y) = individual.to_f64();
        objective(x, y)
    }

    /// Fitness of each individual, in the same order
    pub fn evaluate_all(&self, individuals: &[Individual]) -> Vec<f64> {
        individuals.iter().map(|ind| self.evaluate(ind)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_global_minimum() {
        let (x, y) = QuarticObjective::OPTIMAL_SOLUTION;
        assert_eq!(objective(x, y), QuarticObjective::OPTIMAL_FITNESS);
        assert_eq!(QuarticObjective.evaluate(&Individual::new(2, 1)), 0.0);
    }

    #[test]
    fn test_known_values() {
        // (0 - 2)^4 + (0 - 0)^2
        assert_relative_eq!(objective(0.0, 0.0), 16.0);
        // (3 - 2)^4 + (3 - 4)^2
        assert_relative_eq!(objective(3.0, 2.0), 2.0);
        // (-50 - 2)^4 + (-50 - 100)^2
        assert_relative_eq!(objective(-50.0, 50.0), 7_311_616.0 + 22_500.0);
    }

    #[test]
    fn test_integer_and_float_agree() {
        let int = QuarticObjective.evaluate(&Individual::new(-7, 4));
        let float = QuarticObjective.evaluate(&Individual::new(-7.0, 4.0));
        assert_eq!(int, float);
    }

    #[test]
    fn test_evaluate_all_preserves_order() {
        let pop = vec![
            Individual::new(2, 1),
            Individual::new(0, 0),
            Individual::new(3, 2),
        ];
        assert_eq!(QuarticObjective.evaluate_all(&pop), vec![0.0, 16.0, 2.0]);
    }

    #[test]
    fn test_large_genes_do_not_overflow() {
        let f = QuarticObjective.evaluate(&Individual::new(1_000_000, -1_000_000));
        assert!(f.is_finite());
        assert!(f > 0.0);
    }
}
