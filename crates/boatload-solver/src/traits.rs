//! Solver trait.

use boatload_core::{Instance, Selection};

/// A strategy that picks a feasible subset of an instance's weights.
///
/// `solve` takes `&mut self` so that a solver may own mutable state such as
/// a random number generator. Implementations must not retain anything
/// between calls that changes the result for deterministic strategies.
pub trait Solver {
    /// Short lowercase identifier used in reports (e.g. `"exact"`).
    fn name(&self) -> &str;

    /// Solves the instance. The returned selection never exceeds capacity.
    fn solve(&mut self, instance: &Instance) -> Selection;

    /// Number of candidate subsets evaluated by the last `solve` call.
    ///
    /// Solvers do not log from inside `solve`; the caller reads this after
    /// the call so that reporting stays outside any measured region.
    fn last_candidates(&self) -> u64 {
        0
    }
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn solve(&mut self, instance: &Instance) -> Selection {
        (**self).solve(instance)
    }

    fn last_candidates(&self) -> u64 {
        (**self).last_candidates()
    }
}
