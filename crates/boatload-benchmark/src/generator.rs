//! Random instance generation.

use boatload_config::{BenchmarkConfig, WeightRange};
use boatload_core::{Instance, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws instances with uniform weights and a capacity proportional to the
/// total weight.
///
/// # Example
///
/// ```
/// use boatload_benchmark::InstanceGenerator;
/// use boatload_config::WeightRange;
///
/// let mut generator = InstanceGenerator::new(WeightRange { min: 10, max: 100 }, 50, Some(1));
/// let instance = generator.generate(6).unwrap();
/// assert_eq!(instance.len(), 6);
/// assert!(instance.weights().iter().all(|w| (10..=100).contains(w)));
/// assert_eq!(instance.capacity(), instance.total_weight() / 2);
/// ```
#[derive(Debug, Clone)]
pub struct InstanceGenerator {
    rng: ChaCha8Rng,
    weight_range: WeightRange,
    capacity_percent: u32,
}

impl InstanceGenerator {
    /// Creates a generator. Without a seed, the generator is seeded from the
    /// thread-local entropy source.
    pub fn new(weight_range: WeightRange, capacity_percent: u32, seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            weight_range,
            capacity_percent,
        }
    }

    /// Creates a generator from a benchmark configuration.
    pub fn from_config(config: &BenchmarkConfig) -> Self {
        Self::new(config.weight_range, config.capacity_percent, config.seed)
    }

    /// Generates an instance with `n` items.
    ///
    /// # Errors
    ///
    /// Fails only if the weight range admits zero or the weights overflow,
    /// both of which a validated configuration rules out.
    pub fn generate(&mut self, n: usize) -> Result<Instance> {
        let WeightRange { min, max } = self.weight_range;
        let weights: Vec<u64> = (0..n).map(|_| self.rng.random_range(min..=max)).collect();
        Instance::with_capacity_percent(weights, self.capacity_percent)
    }
}
