//! Largest-first greedy filling.

use boatload_core::{Instance, Selection};
use crate::traits::Solver;

/// Adds items in descending weight order whenever they still fit.
///
/// Deterministic and `O(n log n)`. Not optimal in general: `[6, 5, 5]` with
/// capacity 10 yields `{6}` while `{5, 5}` reaches 10.
///
/// # Example
///
/// ```
/// use boatload_core::Instance;
/// use boatload_solver::{GreedySolver, Solver};
///
/// let instance = Instance::new(vec![6, 5, 5], 10).unwrap();
/// assert_eq!(GreedySolver::new().solve(&instance).total(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver {
    candidates: u64,
}

impl GreedySolver {
    pub const NAME: &'static str = "greedy";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for GreedySolver {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&mut self, instance: &Instance) -> Selection {
        let capacity = instance.capacity();
        let mut sorted = instance.weights().to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));

        let mut total = 0u64;
        let mut chosen = Vec::new();
        for weight in sorted {
            if total + weight <= capacity {
                chosen.push(weight);
                total += weight;
            }
        }

        self.candidates = instance.len() as u64;
        Selection::from_items(chosen)
    }

    fn last_candidates(&self) -> u64 {
        self.candidates
    }
}
