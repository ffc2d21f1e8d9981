//! Genetic Algorithm for 0/1 knapsack.
//!
//! Candidates are bit vectors, one bit per item. Each generation is
//! evaluated, bred and mutated in a fixed order by [`GaEngine`].
//!
//! # Key Types
//!
//! - [`Candidate`]: a bit vector with the fitness of the current generation
//! - [`GaConfig`]: population size, generation budget, operator settings
//! - [`Selection`]: tournament (supported) or roulette (fails closed)
//! - [`GaEngine`]: runs the generational loop; [`GaResult`] holds the outcome
//!
//! # Submodules
//!
//! - [`operators`]: midpoint crossover, single-flip mutation, elitism
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaEngine, GaResult};
pub use selection::Selection;
pub use types::{Bits, Candidate};
