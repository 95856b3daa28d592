//! `proptest` strategies for random instances.

use boatload_core::Instance;
use proptest::prelude::*;

/// Random instances with up to `max_len` items weighing 1..=100 and a
/// capacity anywhere between 0 and the total weight.
pub fn instances(max_len: usize) -> impl Strategy<Value = Instance> {
    prop::collection::vec(1u64..=100, 0..=max_len).prop_flat_map(|weights| {
        let total: u64 = weights.iter().sum();
        (Just(weights), 0..=total).prop_map(|(weights, capacity)| {
            Instance::new(weights, capacity).expect("generated weights are positive")
        })
    })
}

/// Optimal total computed by subset-sum reachability, independent of the
/// enumeration used by the exact solver.
pub fn optimum(instance: &Instance) -> u64 {
    let capacity = instance.capacity().min(instance.total_weight()) as usize;
    let mut reachable = vec![false; capacity + 1];
    reachable[0] = true;
    for &weight in instance.weights() {
        let weight = weight as usize;
        if weight > capacity {
            continue;
        }
        for sum in (weight..=capacity).rev() {
            if reachable[sum - weight] {
                reachable[sum] = true;
            }
        }
    }
    reachable.iter().rposition(|&r| r).unwrap_or(0) as u64
}
