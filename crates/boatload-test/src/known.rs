//! Instances with hand-checked optima.

use boatload_core::Instance;

/// An instance together with facts about its solution.
#[derive(Debug, Clone)]
pub struct KnownInstance {
    pub name: &'static str,
    pub weights: Vec<u64>,
    pub capacity: u64,
    /// The best achievable total.
    pub optimum: u64,
    /// The total the largest-first greedy pass reaches.
    pub greedy_total: u64,
}

impl KnownInstance {
    /// Builds the validated instance.
    pub fn instance(&self) -> Instance {
        Instance::new(self.weights.clone(), self.capacity).expect("fixture weights are positive")
    }
}

/// `[10, 20, 30]` into 40: greedy takes 30 then 10 and matches the optimum.
pub fn three_items() -> KnownInstance {
    KnownInstance {
        name: "three_items",
        weights: vec![10, 20, 30],
        capacity: 40,
        optimum: 40,
        greedy_total: 40,
    }
}

/// `[50, 50, 1]` into 51: one heavy item plus the light one.
pub fn two_heavy_one_light() -> KnownInstance {
    KnownInstance {
        name: "two_heavy_one_light",
        weights: vec![50, 50, 1],
        capacity: 51,
        optimum: 51,
        greedy_total: 51,
    }
}

/// `[6, 5, 5]` into 10: greedy takes 6 and blocks both fives.
pub fn greedy_trap() -> KnownInstance {
    KnownInstance {
        name: "greedy_trap",
        weights: vec![6, 5, 5],
        capacity: 10,
        optimum: 10,
        greedy_total: 6,
    }
}

/// Every item is heavier than the capacity.
pub fn all_too_heavy() -> KnownInstance {
    KnownInstance {
        name: "all_too_heavy",
        weights: vec![15, 20, 11],
        capacity: 10,
        optimum: 0,
        greedy_total: 0,
    }
}

pub fn empty() -> KnownInstance {
    KnownInstance {
        name: "empty",
        weights: Vec::new(),
        capacity: 0,
        optimum: 0,
        greedy_total: 0,
    }
}

pub fn zero_capacity() -> KnownInstance {
    KnownInstance {
        name: "zero_capacity",
        weights: vec![1, 2, 3],
        capacity: 0,
        optimum: 0,
        greedy_total: 0,
    }
}

/// Capacity equals the total weight: everything fits.
pub fn everything_fits() -> KnownInstance {
    KnownInstance {
        name: "everything_fits",
        weights: vec![4, 1, 3, 2],
        capacity: 10,
        optimum: 10,
        greedy_total: 10,
    }
}

/// Greedy takes 9 and 8, leaving no room; 9 + 6 + 5 fills exactly.
pub fn greedy_gap() -> KnownInstance {
    KnownInstance {
        name: "greedy_gap",
        weights: vec![9, 8, 6, 5],
        capacity: 20,
        optimum: 20,
        greedy_total: 17,
    }
}

/// All fixtures.
pub fn all_known() -> Vec<KnownInstance> {
    vec![
        three_items(),
        two_heavy_one_light(),
        greedy_trap(),
        all_too_heavy(),
        empty(),
        zero_capacity(),
        everything_fits(),
        greedy_gap(),
    ]
}
