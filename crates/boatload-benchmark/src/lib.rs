//! Benchmarking harness for boatload.
//!
//! This crate drives the solvers over a sweep of instance sizes, measuring
//! wall-clock time and peak memory of every single solver call, and renders
//! the collected measurements.
//!
//! # Overview
//!
//! - [`InstanceGenerator`] draws random instances (seedable)
//! - [`Probe`] brackets one call with a timer and a peak-memory sampler
//! - [`TrackingAllocator`] is the counting global allocator the sampler reads
//! - [`Harness`] runs every registered solver on every generated instance
//! - [`ResultSet`] holds one series of [`MeasurementRecord`]s per solver
//! - [`report`] renders text, CSV, Markdown and JSON
//!
//! Peak memory is only observed when the final binary installs the
//! allocator:
//!
//! ```ignore
//! #[global_allocator]
//! static GLOBAL: boatload_benchmark::TrackingAllocator = boatload_benchmark::TrackingAllocator;
//! ```
//!
//! # Example
//!
//! ```
//! use boatload_benchmark::{report, Harness};
//! use boatload_config::{BenchmarkConfig, ReportFormat};
//!
//! let config = BenchmarkConfig::new()
//!     .with_sizes(2, 5)
//!     .with_iterations(100)
//!     .with_seed(7);
//!
//! let mut harness = Harness::new(config).unwrap();
//! let results = harness.run().unwrap();
//!
//! assert_eq!(results.solver_names(), vec!["exact", "randomized", "greedy"]);
//! let text = report::render(&results, ReportFormat::Text).unwrap();
//! assert!(text.starts_with("EXACT:\nn,time_seconds,memory_bytes\n2,"));
//! ```

mod error;
mod generator;
mod memory;
mod probe;
pub mod report;
mod result;
mod runner;

pub use error::BenchmarkError;
pub use generator::InstanceGenerator;
pub use memory::{current_bytes, is_tracking, peak_bytes, TrackingAllocator};
pub use probe::{measure, Probe, Sample};
pub use result::{MeasurementRecord, ResultSet, SolverSeries, Violation, ViolationKind};
pub use runner::{Harness, HarnessBuilder};
