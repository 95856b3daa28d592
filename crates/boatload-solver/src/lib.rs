//! Boatload Solver
//!
//! Three strategies for picking items so that their total weight stays within
//! a capacity while being as large as possible:
//!
//! - [`ExactSolver`]: exhaustive enumeration of every subset; optimal and
//!   exponential
//! - [`RandomizedSolver`]: best of a fixed number of random subsets
//! - [`GreedySolver`]: largest items first, single deterministic pass
//!
//! All solvers implement [`Solver`] so the benchmark harness can drive them
//! uniformly.
//!
//! # Example
//!
//! ```
//! use boatload_core::Instance;
//! use boatload_solver::{ExactSolver, GreedySolver, Solver};
//!
//! let instance = Instance::new(vec![10, 20, 30], 40).unwrap();
//!
//! let exact = ExactSolver::new().solve(&instance);
//! let greedy = GreedySolver::new().solve(&instance);
//!
//! assert_eq!(exact.total(), 40);
//! assert_eq!(greedy.items(), &[10, 30]);
//! ```

pub mod exact;
pub mod greedy;
pub mod randomized;
pub mod traits;


pub use exact::ExactSolver;
pub use greedy::GreedySolver;
pub use randomized::{RandomizedSolver, DEFAULT_ITERATIONS};
pub use traits::Solver;
