//! Boatload - bounded subset selection, three ways.
//!
//! Re-exports the workspace crates behind one dependency and hosts the
//! command-line front end used by the `boatload` binary.
//!
//! # Example
//!
//! ```
//! use boatload::prelude::*;
//!
//! let instance = Instance::new(vec![50, 50, 1], 51).unwrap();
//! assert_eq!(ExactSolver::new().solve(&instance).total(), 51);
//! assert_eq!(GreedySolver::new().solve(&instance).total(), 51);
//! ```

pub mod cli;

pub use boatload_benchmark as benchmark;
pub use boatload_config as config;
pub use boatload_console as console;
pub use boatload_core as domain;
pub use boatload_solver as solver;

pub mod prelude {
    pub use boatload_benchmark::{Harness, ResultSet};
    pub use boatload_config::{BenchmarkConfig, ReportFormat};
    pub use boatload_core::{Instance, Selection};
    pub use boatload_solver::{ExactSolver, GreedySolver, RandomizedSolver, Solver};
}
