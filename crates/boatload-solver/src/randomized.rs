//! Random subset sampling.

use boatload_core::{Instance, Selection};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::traits::Solver;

/// Default number of sampled subsets per solve.
pub const DEFAULT_ITERATIONS: usize = 10_000;

/// Samples random subsets and keeps the best feasible one.
///
/// Each iteration includes every item independently with probability 1/2.
/// A sample replaces the best only when it fits and its total is strictly
/// larger. The empty selection is the initial best, so the result is always
/// feasible but carries no optimality guarantee.
///
/// The random source is a type parameter so tests can inject a seeded
/// generator.
///
/// # Example
///
/// ```
/// use boatload_core::Instance;
/// use boatload_solver::{RandomizedSolver, Solver};
///
/// let instance = Instance::new(vec![10, 20, 30], 40).unwrap();
/// let mut solver = RandomizedSolver::with_seed(1_000, 42);
/// let selection = solver.solve(&instance);
/// assert!(selection.total() <= 40);
/// ```
#[derive(Debug, Clone)]
pub struct RandomizedSolver<R: Rng = StdRng> {
    iterations: usize,
    rng: R,
    candidates: u64,
}

impl RandomizedSolver<StdRng> {
    /// Creates a solver seeded from OS entropy.
    pub fn new(iterations: usize) -> Self {
        Self::with_rng(iterations, StdRng::from_os_rng())
    }

    /// Creates a solver with a fixed seed for reproducible results.
    pub fn with_seed(iterations: usize, seed: u64) -> Self {
        Self::with_rng(iterations, StdRng::seed_from_u64(seed))
    }
}

impl Default for RandomizedSolver<StdRng> {
    fn default() -> Self {
        Self::new(DEFAULT_ITERATIONS)
    }
}

impl<R: Rng> RandomizedSolver<R> {
    pub const NAME: &'static str = "randomized";

    /// Creates a solver drawing from the given generator.
    pub fn with_rng(iterations: usize, rng: R) -> Self {
        Self {
            iterations,
            rng,
            candidates: 0,
        }
    }

    /// Returns the number of subsets sampled per solve.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl<R: Rng> Solver for RandomizedSolver<R> {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&mut self, instance: &Instance) -> Selection {
        let weights = instance.weights();
        let capacity = instance.capacity();
        let n = weights.len();

        let mut sample = vec![false; n];
        let mut best = vec![false; n];
        let mut best_total = 0u64;

        for _ in 0..self.iterations {
            let mut total = 0u64;
            for (slot, &weight) in sample.iter_mut().zip(weights) {
                *slot = self.rng.random_bool(0.5);
                if *slot {
                    total += weight;
                }
            }

            if total <= capacity && total > best_total {
                best_total = total;
                best.copy_from_slice(&sample);
            }
        }

        let items = weights
            .iter()
            .zip(&best)
            .filter_map(|(&weight, &taken)| taken.then_some(weight))
            .collect();
        self.candidates = self.iterations as u64;
        Selection::from_items(items)
    }

    fn last_candidates(&self) -> u64 {
        self.candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    #[test]
    fn test_zero_iterations_returns_empty() {
        let instance = Instance::new(vec![1, 2, 3], 6).unwrap();
        let selection = RandomizedSolver::with_seed(0, 7).solve(&instance);
        assert_eq!(selection, Selection::empty());
    }

    #[test]
    fn test_same_seed_same_result() {
        let instance = Instance::new(vec![17, 42, 5, 88, 23, 61, 34, 9], 120).unwrap();
        let a = RandomizedSolver::with_seed(50, 1234).solve(&instance);
        let b = RandomizedSolver::with_seed(50, 1234).solve(&instance);
        assert_eq!(a, b);
    }

    #[test]
    fn test_injected_rng() {
        let instance = Instance::new(vec![10, 20, 30], 40).unwrap();
        let mut solver = RandomizedSolver::with_rng(100, SmallRng::seed_from_u64(3));
        let selection = solver.solve(&instance);
        assert!(selection.is_feasible_for(&instance));
        assert!(selection.is_subset_of(instance.weights()));
    }

    #[test]
    fn test_iterations_accessor() {
        assert_eq!(RandomizedSolver::<StdRng>::default().iterations(), DEFAULT_ITERATIONS);
        assert_eq!(RandomizedSolver::with_seed(12, 0).iterations(), 12);
    }

    #[test]
    fn test_candidates_match_iterations() {
        let mut solver = RandomizedSolver::with_seed(37, 5);
        assert_eq!(solver.last_candidates(), 0);
        solver.solve(&Instance::new(vec![10, 20, 30], 40).unwrap());
        assert_eq!(solver.last_candidates(), 37);
    }
}
