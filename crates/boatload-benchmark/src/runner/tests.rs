//! Tests for the benchmark runner.

use boatload_config::BenchmarkConfig;
use boatload_core::{Instance, Selection};
use boatload_solver::{ExactSolver, GreedySolver, Solver};

use super::*;

/// Returns every item regardless of capacity.
struct TakeAll;

impl Solver for TakeAll {
    fn name(&self) -> &str {
        "take_all"
    }

    fn solve(&mut self, instance: &Instance) -> Selection {
        Selection::from_items(instance.weights().to_vec())
    }
}

/// Counts calls and returns nothing.
#[derive(Default)]
struct Counting {
    sizes: std::rc::Rc<std::cell::RefCell<Vec<usize>>>,
}

impl Solver for Counting {
    fn name(&self) -> &str {
        "counting"
    }

    fn solve(&mut self, instance: &Instance) -> Selection {
        self.sizes.borrow_mut().push(instance.len());
        Selection::empty()
    }
}

fn small_config() -> BenchmarkConfig {
    BenchmarkConfig::new()
        .with_sizes(1, 6)
        .with_iterations(200)
        .with_seed(11)
}

#[test]
fn test_default_solvers_in_order() {
    let harness = Harness::new(small_config()).unwrap();
    assert_eq!(harness.solver_names(), vec!["exact", "randomized", "greedy"]);
    assert_eq!(harness.config().iterations, 200);
}

#[test]
fn test_one_record_per_size_per_solver() {
    let mut harness = Harness::new(small_config()).unwrap();
    let results = harness.run().unwrap();

    assert_eq!(results.series().len(), 3);
    for series in results.series() {
        let sizes: Vec<usize> = series.records.iter().map(|r| r.n).collect();
        assert_eq!(sizes, vec![1, 2, 3, 4, 5], "solver {}", series.solver);
        for record in &series.records {
            assert!(record.total <= record.capacity);
        }
    }
    assert!(results.violations().is_empty());
}

#[test]
fn test_exact_dominates_in_sweep() {
    let mut harness = Harness::new(small_config().with_sizes(4, 9)).unwrap();
    let results = harness.run().unwrap();

    let exact = results.get("exact").unwrap();
    for name in ["randomized", "greedy"] {
        let other = results.get(name).unwrap();
        for (e, o) in exact.records.iter().zip(&other.records) {
            assert_eq!(e.n, o.n);
            assert_eq!(e.capacity, o.capacity);
            assert!(e.total >= o.total, "{name} beat exact at n={}", e.n);
        }
    }
}

#[test]
fn test_seeded_runs_reach_same_totals() {
    let totals = |results: &ResultSet| -> Vec<u64> {
        results
            .series()
            .iter()
            .flat_map(|s| s.records.iter().map(|r| r.total))
            .collect()
    };

    let a = Harness::new(small_config()).unwrap().run().unwrap();
    let b = Harness::new(small_config()).unwrap().run().unwrap();
    assert_eq!(totals(&a), totals(&b));
}

#[test]
fn test_all_solvers_see_same_instance() {
    let first = Counting::default();
    let second = Counting::default();
    let first_sizes = first.sizes.clone();
    let second_sizes = second.sizes.clone();

    let mut harness = Harness::builder(small_config().with_sizes(2, 5))
        .with_solver(first)
        .with_solver(second)
        .build()
        .unwrap();
    let results = harness.run().unwrap();

    assert_eq!(*first_sizes.borrow(), vec![2, 3, 4]);
    assert_eq!(*second_sizes.borrow(), vec![2, 3, 4]);
    // Both solvers share a name, so their records land in one series.
    assert_eq!(results.get("counting").unwrap().records.len(), 6);
}

#[test]
fn test_empty_sweep() {
    let mut harness = Harness::new(small_config().with_sizes(3, 3)).unwrap();
    let results = harness.run().unwrap();
    assert_eq!(results.solver_names(), vec!["exact", "randomized", "greedy"]);
    assert!(results.series().iter().all(|s| s.records.is_empty()));
}

#[test]
fn test_invalid_config_rejected() {
    let err = Harness::new(small_config().with_sizes(5, 2)).err().unwrap();
    assert!(matches!(err, BenchmarkError::Config(_)));
}

#[test]
fn test_violations_recorded() {
    let mut harness = Harness::builder(small_config().with_sizes(3, 5))
        .with_solver(ExactSolver::new())
        .with_solver(TakeAll)
        .with_solver(GreedySolver::new())
        .build()
        .unwrap();
    let results = harness.run().unwrap();

    let violations = results.violations();
    assert_eq!(violations.len(), 2);
    for (violation, n) in violations.iter().zip([3, 4]) {
        assert_eq!(violation.n, n);
        assert_eq!(violation.solver, "take_all");
        assert!(matches!(
            violation.kind,
            ViolationKind::ExceedsCapacity { total, capacity } if total > capacity
        ));
    }
}

#[test]
fn test_check_totals_beats_exact() {
    let instance = Instance::new(vec![6, 5, 5], 10).unwrap();
    let violations = check_totals(&["greedy", "exact"], &[10, 6], &instance);
    assert_eq!(
        violations,
        vec![Violation {
            n: 3,
            solver: "greedy".into(),
            kind: ViolationKind::BeatsExact {
                total: 10,
                exact: 6
            },
        }]
    );
}

#[test]
fn test_check_totals_without_exact() {
    let instance = Instance::new(vec![6, 5, 5], 10).unwrap();
    assert!(check_totals(&["greedy", "randomized"], &[6, 10], &instance).is_empty());
}

#[test]
fn test_default_iteration_budgets_agree() {
    assert_eq!(
        boatload_config::DEFAULT_ITERATIONS,
        boatload_solver::DEFAULT_ITERATIONS
    );
    assert_eq!(
        Harness::new(BenchmarkConfig::default()).unwrap().config().iterations,
        boatload_solver::RandomizedSolver::<rand::rngs::StdRng>::default().iterations()
    );
}
