//! Knapsack problem definition.
//!
//! [`Problem`] is pure data: an ordered item list and a capacity. Bit `i`
//! of every candidate refers to `items()[i]`.

use crate::error::ConfigError;
use crate::fitness;

/// Largest item count [`Problem::exhaustive_optimum`] will enumerate.
pub const MAX_EXHAUSTIVE_ITEMS: usize = 20;

/// One item that may be put in the bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub weight: u64,
    pub value: u64,
}

impl Item {
    pub const fn new(weight: u64, value: u64) -> Self {
        Self { weight, value }
    }
}

/// An immutable 0/1 knapsack instance.
///
/// # Examples
///
/// ```
/// use knapsack_ga::problem::{Item, Problem};
///
/// let problem = Problem::new(vec![Item::new(3, 4), Item::new(5, 6)], 6).unwrap();
/// assert_eq!(problem.len(), 2);
/// assert_eq!(problem.capacity(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawProblem"))]
pub struct Problem {
    items: Vec<Item>,
    capacity: u64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawProblem {
    items: Vec<Item>,
    capacity: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawProblem> for Problem {
    type Error = ConfigError;

    fn try_from(raw: RawProblem) -> Result<Self, Self::Error> {
        Problem::new(raw.items, raw.capacity)
    }
}

impl Problem {
    /// Creates a problem. The item list must not be empty.
    pub fn new(items: Vec<Item>, capacity: u64) -> Result<Self, ConfigError> {
        if items.is_empty() {
            return Err(ConfigError::NoItems);
        }
        Ok(Self { items, capacity })
    }

    /// The four-box instance: weights `[7, 2, 1, 9]`, values `[5, 4, 7, 2]`,
    /// capacity 15. Its optimum is `[1, 1, 1, 0]` with value 16.
    pub fn reference() -> Self {
        Self {
            items: vec![
                Item::new(7, 5),
                Item::new(2, 4),
                Item::new(1, 7),
                Item::new(9, 2),
            ],
            capacity: 15,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items, which is also the bit length of every candidate.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Brute-force optimum over all `2^N` subsets.
    ///
    /// Returns `None` when the instance has more than
    /// [`MAX_EXHAUSTIVE_ITEMS`] items. On ties the subset enumerated first
    /// (lowest mask, bit `i` = item `i`) wins.
    pub fn exhaustive_optimum(&self) -> Option<(u64, Vec<bool>)> {
        let n = self.len();
        if n > MAX_EXHAUSTIVE_ITEMS {
            return None;
        }

        let mut best_fitness = 0;
        let mut best_bits = vec![false; n];
        let mut bits = vec![false; n];
        for mask in 0u32..(1u32 << n) {
            for (i, bit) in bits.iter_mut().enumerate() {
                *bit = mask & (1 << i) != 0;
            }
            let f = fitness::score(&bits, self);
            if f > best_fitness {
                best_fitness = f;
                best_bits.copy_from_slice(&bits);
            }
        }
        Some((best_fitness, best_bits))
    }
}
