//! Selected subsets.

use std::collections::HashMap;
use std::fmt;

use crate::instance::Instance;

/// A subset of an instance's weights together with its total.
///
/// Items are kept in non-decreasing order so that two selections holding the
/// same multiset compare equal and print identically.
///
/// # Example
///
/// ```
/// use boatload_core::Selection;
///
/// let selection = Selection::from_items(vec![30, 10]);
/// assert_eq!(selection.items(), &[10, 30]);
/// assert_eq!(selection.total(), 40);
/// assert_eq!(selection.to_string(), "{10, 30} = 40");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selection {
    items: Vec<u64>,
    total: u64,
}

impl Selection {
    /// The empty selection. Always feasible.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a selection from chosen weights in any order.
    pub fn from_items(mut items: Vec<u64>) -> Self {
        items.sort_unstable();
        let total = items.iter().sum();
        Self { items, total }
    }

    /// Returns the chosen weights in non-decreasing order.
    pub fn items(&self) -> &[u64] {
        &self.items
    }

    /// Returns the sum of the chosen weights.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the number of chosen items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing was chosen.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the total does not exceed the instance capacity.
    pub fn is_feasible_for(&self, instance: &Instance) -> bool {
        self.total <= instance.capacity()
    }

    /// Returns true if every chosen weight can be matched to a distinct
    /// weight of `weights` (multiset containment).
    ///
    /// # Example
    ///
    /// ```
    /// use boatload_core::Selection;
    ///
    /// let selection = Selection::from_items(vec![50, 1]);
    /// assert!(selection.is_subset_of(&[50, 50, 1]));
    /// assert!(!Selection::from_items(vec![1, 1]).is_subset_of(&[50, 50, 1]));
    /// ```
    pub fn is_subset_of(&self, weights: &[u64]) -> bool {
        let mut available: HashMap<u64, usize> = HashMap::new();
        for &weight in weights {
            *available.entry(weight).or_default() += 1;
        }
        self.items.iter().all(|item| match available.get_mut(item) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "}} = {}", self.total)
    }
}
