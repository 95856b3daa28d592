//! Exhaustive subset enumeration.

use boatload_core::{Instance, Selection};
use crate::traits::Solver;

/// Finds an optimal selection by trying every non-empty subset.
///
/// Subsets are visited by increasing size, then in lexicographic index
/// order. A later subset replaces the best only if its total is strictly
/// larger, so among tied optima the first one visited is returned.
///
/// Runs in `O(n * 2^n)` time.
///
/// # Example
///
/// ```
/// use boatload_core::Instance;
/// use boatload_solver::{ExactSolver, Solver};
///
/// let instance = Instance::new(vec![50, 50, 1], 51).unwrap();
/// let selection = ExactSolver::new().solve(&instance);
/// assert_eq!(selection.items(), &[1, 50]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver {
    candidates: u64,
}

impl ExactSolver {
    pub const NAME: &'static str = "exact";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Solver for ExactSolver {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn solve(&mut self, instance: &Instance) -> Selection {
        let weights = instance.weights();
        let capacity = instance.capacity();
        let n = weights.len();

        let mut best_total = 0u64;
        let mut best_indices: Vec<usize> = Vec::new();
        let mut candidates = 0u64;

        for size in 1..=n {
            let mut indices: Vec<usize> = (0..size).collect();
            loop {
                candidates += 1;
                let total: u64 = indices.iter().map(|&i| weights[i]).sum();
                if total <= capacity && total > best_total {
                    best_total = total;
                    best_indices.clone_from(&indices);
                }

                if !advance(&mut indices, n) {
                    break;
                }
            }
        }

        self.candidates = candidates;
        Selection::from_items(best_indices.iter().map(|&i| weights[i]).collect())
    }

    fn last_candidates(&self) -> u64 {
        self.candidates
    }
}

/// Moves `indices` to the next combination of `indices.len()` out of `n` in
/// lexicographic order. Returns false once the last combination was passed.
fn advance(indices: &mut [usize], n: usize) -> bool {
    let size = indices.len();
    let Some(pivot) = (0..size).rev().find(|&i| indices[i] != i + n - size) else {
        return false;
    };
    indices[pivot] += 1;
    for i in pivot + 1..size {
        indices[i] = indices[i - 1] + 1;
    }
    true
}
