//! Problem instances.

use crate::error::{BoatloadError, Result};

/// A concrete `(weights, capacity)` pair to solve.
///
/// Weights are kept in the order they were supplied. Duplicates are allowed;
/// an item has no identity beyond its value and position.
///
/// # Example
///
/// ```
/// use boatload_core::Instance;
///
/// let instance = Instance::new(vec![10, 20, 30], 40).unwrap();
/// assert_eq!(instance.len(), 3);
/// assert_eq!(instance.total_weight(), 60);
/// assert_eq!(instance.capacity(), 40);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    weights: Vec<u64>,
    capacity: u64,
    total_weight: u64,
}

impl Instance {
    /// Creates an instance from item weights and a capacity.
    ///
    /// # Errors
    ///
    /// Returns [`BoatloadError::ZeroWeight`] if any weight is zero and
    /// [`BoatloadError::Overflow`] if the weights do not sum within `u64`.
    pub fn new(weights: impl Into<Vec<u64>>, capacity: u64) -> Result<Self> {
        let weights = weights.into();
        let total_weight = total_of(&weights)?;
        Ok(Self {
            weights,
            capacity,
            total_weight,
        })
    }

    /// Creates an instance whose capacity is `percent`% of the total weight,
    /// truncated to an integer.
    ///
    /// # Example
    ///
    /// ```
    /// use boatload_core::Instance;
    ///
    /// let instance = Instance::with_capacity_percent(vec![10, 20, 35], 50).unwrap();
    /// assert_eq!(instance.capacity(), 32);
    /// ```
    ///
    /// # Errors
    ///
    /// [`BoatloadError::ZeroWeight`] as for [`Instance::new`], and
    /// [`BoatloadError::Overflow`] if the weights or the scaled capacity do
    /// not fit in `u64`.
    pub fn with_capacity_percent(weights: impl Into<Vec<u64>>, percent: u32) -> Result<Self> {
        let weights = weights.into();
        let total_weight = total_of(&weights)?;
        let capacity = u64::try_from(u128::from(total_weight) * u128::from(percent) / 100)
            .map_err(|_| BoatloadError::Overflow)?;
        Ok(Self {
            weights,
            capacity,
            total_weight,
        })
    }

    /// Returns the item weights in their original order.
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Returns the capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the sum of all item weights.
    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }
}

fn total_of(weights: &[u64]) -> Result<u64> {
    weights
        .iter()
        .enumerate()
        .try_fold(0u64, |acc, (index, &weight)| {
            if weight == 0 {
                return Err(BoatloadError::ZeroWeight { index });
            }
            acc.checked_add(weight).ok_or(BoatloadError::Overflow)
        })
}
