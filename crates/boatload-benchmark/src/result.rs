//! Benchmark result types.

use std::time::Duration;

use serde::{Serialize, Serializer};

/// One measurement of one solver on one instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeasurementRecord {
    /// Number of items in the instance.
    pub n: usize,
    /// Wall-clock time of the solver call.
    #[serde(rename = "time_seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Peak heap usage above the pre-call level, in bytes.
    #[serde(rename = "memory_bytes")]
    pub peak_memory_bytes: u64,
    /// Total weight of the returned selection.
    pub total: u64,
    /// Capacity of the instance.
    pub capacity: u64,
}

impl MeasurementRecord {
    /// Returns the elapsed time in seconds.
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

fn serialize_secs<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// All measurements of one solver, in increasing order of `n`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SolverSeries {
    pub solver: String,
    pub records: Vec<MeasurementRecord>,
}

impl SolverSeries {
    /// Creates an empty series.
    pub fn new(solver: impl Into<String>) -> Self {
        Self {
            solver: solver.into(),
            records: Vec::new(),
        }
    }

    /// Returns the average solve time.
    ///
    /// # Example
    ///
    /// ```
    /// use boatload_benchmark::{MeasurementRecord, SolverSeries};
    /// use std::time::Duration;
    ///
    /// let mut series = SolverSeries::new("greedy");
    /// for (n, ms) in [(4, 100), (5, 200)] {
    ///     series.records.push(MeasurementRecord {
    ///         n,
    ///         elapsed: Duration::from_millis(ms),
    ///         peak_memory_bytes: 0,
    ///         total: 0,
    ///         capacity: 0,
    ///     });
    /// }
    ///
    /// assert_eq!(series.mean_time(), Duration::from_millis(150));
    /// ```
    pub fn mean_time(&self) -> Duration {
        if self.records.is_empty() {
            return Duration::ZERO;
        }
        let total: Duration = self.records.iter().map(|r| r.elapsed).sum();
        total / self.records.len() as u32
    }

    /// Returns the largest peak memory across all records.
    pub fn max_peak_memory(&self) -> u64 {
        self.records
            .iter()
            .map(|r| r.peak_memory_bytes)
            .max()
            .unwrap_or(0)
    }

    /// Returns the sum of totals reached across all instances.
    pub fn total_reached(&self) -> u64 {
        self.records.iter().map(|r| r.total).sum()
    }
}

/// What went wrong in a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ViolationKind {
    /// The selection total exceeds the instance capacity.
    ExceedsCapacity { total: u64, capacity: u64 },
    /// An approximate solver beat the exact optimum.
    BeatsExact { total: u64, exact: u64 },
}

/// A broken solver invariant observed by the harness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub n: usize,
    pub solver: String,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

/// Measurements for every solver, in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSet {
    series: Vec<SolverSeries>,
    violations: Vec<Violation>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record to the named solver's series, creating the series
    /// on first use.
    ///
    /// # Example
    ///
    /// ```
    /// use boatload_benchmark::{MeasurementRecord, ResultSet};
    /// use std::time::Duration;
    ///
    /// let record = |n| MeasurementRecord {
    ///     n,
    ///     elapsed: Duration::ZERO,
    ///     peak_memory_bytes: 64,
    ///     total: 10,
    ///     capacity: 12,
    /// };
    ///
    /// let mut results = ResultSet::new();
    /// results.record("exact", record(4));
    /// results.record("greedy", record(4));
    /// results.record("exact", record(5));
    ///
    /// assert_eq!(results.solver_names(), vec!["exact", "greedy"]);
    /// assert_eq!(results.get("exact").unwrap().records.len(), 2);
    /// ```
    pub fn record(&mut self, solver: &str, record: MeasurementRecord) {
        match self.series.iter_mut().find(|s| s.solver == solver) {
            Some(series) => series.records.push(record),
            None => {
                let mut series = SolverSeries::new(solver);
                series.records.push(record);
                self.series.push(series);
            }
        }
    }

    /// Registers a solver with no records yet, fixing its report position.
    pub fn register(&mut self, solver: &str) {
        if self.get(solver).is_none() {
            self.series.push(SolverSeries::new(solver));
        }
    }

    /// Records a broken invariant.
    pub fn add_violation(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Returns all series in registration order.
    pub fn series(&self) -> &[SolverSeries] {
        &self.series
    }

    /// Returns the series of the named solver.
    pub fn get(&self, solver: &str) -> Option<&SolverSeries> {
        self.series.iter().find(|s| s.solver == solver)
    }

    /// Returns solver names in registration order.
    pub fn solver_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.solver.as_str()).collect()
    }

    /// Returns the invariant violations observed during the run.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns true if no solver has been registered.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(n: usize, micros: u64, bytes: u64, total: u64) -> MeasurementRecord {
        MeasurementRecord {
            n,
            elapsed: Duration::from_micros(micros),
            peak_memory_bytes: bytes,
            total,
            capacity: total,
        }
    }

    #[test]
    fn test_series_statistics() {
        let mut series = SolverSeries::new("exact");
        series.records.push(record(4, 10, 300, 40));
        series.records.push(record(5, 30, 100, 55));

        assert_eq!(series.mean_time(), Duration::from_micros(20));
        assert_eq!(series.max_peak_memory(), 300);
        assert_eq!(series.total_reached(), 95);
    }

    #[test]
    fn test_empty_series_statistics() {
        let series = SolverSeries::new("greedy");
        assert_eq!(series.mean_time(), Duration::ZERO);
        assert_eq!(series.max_peak_memory(), 0);
        assert_eq!(series.total_reached(), 0);
    }

    #[test]
    fn test_register_keeps_order() {
        let mut results = ResultSet::new();
        assert!(results.is_empty());
        results.register("b");
        results.register("a");
        results.register("b");
        results.record("a", record(1, 1, 1, 1));
        assert_eq!(results.solver_names(), vec!["b", "a"]);
        assert!(results.get("b").unwrap().records.is_empty());
        assert!(results.get("missing").is_none());
    }

    #[test]
    fn test_json_shape() {
        let mut results = ResultSet::new();
        results.record("exact", record(4, 1_500_000, 128, 40));
        results.add_violation(Violation {
            n: 4,
            solver: "greedy".into(),
            kind: ViolationKind::BeatsExact {
                total: 41,
                exact: 40,
            },
        });

        let json = serde_json::to_value(&results).unwrap();
        let first = &json["series"][0]["records"][0];
        assert_eq!(first["n"], 4);
        assert_eq!(first["time_seconds"], 1.5);
        assert_eq!(first["memory_bytes"], 128);
        assert_eq!(json["violations"][0]["kind"], "beats_exact");
        assert_eq!(json["violations"][0]["exact"], 40);
    }
}
