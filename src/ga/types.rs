//! Candidate representation.
//!
//! A [`Candidate`] is a fixed-shape record: one bit per item plus the
//! fitness computed for the current generation.

use rand::Rng;
use std::fmt;

/// One solution to a knapsack instance.
///
/// `bits[i] == true` means item `i` is in the bag. `fitness` is 0 until
/// the candidate is evaluated, and candidates created for a new
/// generation always start at 0 so a score is never carried over.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    bits: Vec<bool>,
    fitness: u64,
}

impl Candidate {
    /// Creates an unevaluated candidate.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits, fitness: 0 }
    }

    /// Creates an unevaluated candidate with uniformly random bits.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::new((0..len).map(|_| rng.random_bool(0.5)).collect())
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn fitness(&self) -> u64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: u64) {
        self.fitness = fitness;
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Inverts bit `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Drops the score, keeping the bits.
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}

/// Formats a bit vector as `[1, 0, 1]`.
#[derive(Debug, Clone, Copy)]
pub struct Bits<'a>(pub &'a [bool]);

impl fmt::Display for Bits<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, &bit) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (fitness {})", Bits(&self.bits), self.fitness)
    }
}
