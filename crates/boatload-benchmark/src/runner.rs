//! Benchmark runner.

use std::time::Instant;

use boatload_config::BenchmarkConfig;
use boatload_core::{Instance, Selection};
use boatload_solver::{ExactSolver, GreedySolver, RandomizedSolver, Solver};
use tracing::{debug, info, warn};

use crate::error::BenchmarkError;
use crate::generator::InstanceGenerator;
use crate::probe::Probe;
use crate::result::{MeasurementRecord, ResultSet, Violation, ViolationKind};

/// Sweeps instance sizes and measures every registered solver.
///
/// For each `n` in the configured range one instance is generated and handed
/// to each solver in registration order. Every call is bracketed by its own
/// [`Probe`], so a record reflects that call only.
///
/// After each size step the totals are checked: a total above capacity, or
/// an approximate total above the exact solver's, is logged and kept in
/// [`ResultSet::violations`].
pub struct Harness {
    config: BenchmarkConfig,
    solvers: Vec<Box<dyn Solver>>,
}

impl Harness {
    /// Creates a harness with the exact, randomized and greedy solvers.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::Config`] if the configuration is invalid.
    pub fn new(config: BenchmarkConfig) -> Result<Self, BenchmarkError> {
        HarnessBuilder::new(config).with_default_solvers().build()
    }

    /// Starts a builder with no solvers registered.
    pub fn builder(config: BenchmarkConfig) -> HarnessBuilder {
        HarnessBuilder::new(config)
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Returns registered solver names in order.
    pub fn solver_names(&self) -> Vec<&str> {
        self.solvers.iter().map(|s| s.name()).collect()
    }

    /// Runs the sweep and returns the collected measurements.
    ///
    /// # Errors
    ///
    /// Fails if an instance cannot be generated.
    pub fn run(&mut self) -> Result<ResultSet, BenchmarkError> {
        let started = Instant::now();
        let mut generator = InstanceGenerator::from_config(&self.config);
        let mut results = ResultSet::new();
        for solver in &self.solvers {
            results.register(solver.name());
        }

        info!(
            event = "benchmark_start",
            min_n = self.config.min_n as u64,
            max_n = self.config.max_n as u64,
            solvers = self.solvers.len() as u64,
        );

        for n in self.config.sizes() {
            let instance = generator.generate(n)?;
            info!(
                event = "size_step",
                n = n as u64,
                capacity = instance.capacity(),
                total_weight = instance.total_weight(),
            );

            let mut totals = Vec::with_capacity(self.solvers.len());
            for solver in &mut self.solvers {
                let record = run_one(solver.as_mut(), &instance);
                debug!(
                    event = "measurement",
                    solver = solver.name(),
                    n = n as u64,
                    elapsed_us = record.elapsed.as_micros() as u64,
                    peak_bytes = record.peak_memory_bytes,
                    total = record.total,
                    candidates = solver.last_candidates(),
                );
                totals.push(record.total);
                results.record(solver.name(), record);
            }

            for violation in check_totals(&self.solver_names(), &totals, &instance) {
                warn!(
                    event = "violation",
                    solver = violation.solver.as_str(),
                    n = violation.n as u64,
                    "{:?}",
                    violation.kind
                );
                results.add_violation(violation);
            }
        }

        info!(
            event = "benchmark_end",
            duration_ms = started.elapsed().as_millis() as u64,
        );
        Ok(results)
    }
}

/// Solves once inside a probe. The selection is released, and anything is
/// logged, only after the probe has finished.
fn run_one(solver: &mut dyn Solver, instance: &Instance) -> MeasurementRecord {
    let probe = Probe::start();
    let selection: Selection = solver.solve(instance);
    let sample = probe.finish();

    MeasurementRecord {
        n: instance.len(),
        elapsed: sample.elapsed,
        peak_memory_bytes: sample.peak_bytes,
        total: selection.total(),
        capacity: instance.capacity(),
    }
}

/// Compares the totals of one size step against capacity and, when an exact
/// solver is registered, against its optimum.
fn check_totals(names: &[&str], totals: &[u64], instance: &Instance) -> Vec<Violation> {
    let n = instance.len();
    let capacity = instance.capacity();
    let exact = names
        .iter()
        .position(|&name| name == ExactSolver::NAME)
        .map(|i| totals[i]);

    let mut violations = Vec::new();
    for (&name, &total) in names.iter().zip(totals) {
        if total > capacity {
            violations.push(Violation {
                n,
                solver: name.to_string(),
                kind: ViolationKind::ExceedsCapacity { total, capacity },
            });
        } else if let Some(exact) = exact.filter(|&exact| total > exact) {
            violations.push(Violation {
                n,
                solver: name.to_string(),
                kind: ViolationKind::BeatsExact { total, exact },
            });
        }
    }
    violations
}

/// Builder for creating a [`Harness`] with a custom solver line-up.
///
/// # Example
///
/// ```
/// use boatload_benchmark::Harness;
/// use boatload_config::BenchmarkConfig;
/// use boatload_solver::GreedySolver;
///
/// let config = BenchmarkConfig::new().with_sizes(1, 4).with_seed(3);
/// let mut harness = Harness::builder(config)
///     .with_solver(GreedySolver::new())
///     .build()
///     .unwrap();
///
/// let results = harness.run().unwrap();
/// assert_eq!(results.solver_names(), vec!["greedy"]);
/// assert_eq!(results.get("greedy").unwrap().records.len(), 3);
/// ```
pub struct HarnessBuilder {
    config: BenchmarkConfig,
    solvers: Vec<Box<dyn Solver>>,
}

impl HarnessBuilder {
    /// Creates a builder with no solvers.
    pub fn new(config: BenchmarkConfig) -> Self {
        Self {
            config,
            solvers: Vec::new(),
        }
    }

    /// Registers a solver. Solvers run and report in registration order.
    pub fn with_solver(mut self, solver: impl Solver + 'static) -> Self {
        self.solvers.push(Box::new(solver));
        self
    }

    /// Registers the exact, randomized and greedy solvers.
    ///
    /// With a configured seed the randomized solver is seeded from it, so the
    /// whole run is reproducible.
    pub fn with_default_solvers(self) -> Self {
        let randomized = match self.config.seed {
            Some(seed) => RandomizedSolver::with_seed(self.config.iterations, seed.wrapping_add(1)),
            None => RandomizedSolver::new(self.config.iterations),
        };
        self.with_solver(ExactSolver::new())
            .with_solver(randomized)
            .with_solver(GreedySolver::new())
    }

    /// Validates the configuration and builds the harness.
    pub fn build(self) -> Result<Harness, BenchmarkError> {
        self.config.validate()?;
        Ok(Harness {
            config: self.config,
            solvers: self.solvers,
        })
    }
}

#[cfg(test)]
mod tests;
