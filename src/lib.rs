//! Genetic-algorithm search for 0/1 knapsack instances.
//!
//! A small, fully deterministic (given a seed) GA that looks for a
//! high-value subset of items under a weight capacity:
//!
//! - **Problem**: [`problem::Problem`] — the fixed item set and capacity.
//! - **Fitness**: [`fitness`] — total value of included items, forced to
//!   zero when the capacity is exceeded anywhere along the scan.
//! - **GA**: [`ga`] — tournament selection, half-split crossover, a single
//!   global bit-flip mutation per generation, and elitist reproduction,
//!   orchestrated by [`ga::GaEngine`].
//! - **Observer**: [`observer`] — the only I/O seam: per-bit tracing and
//!   the final best-solution report.
//! - **Batch**: [`batch`] — many independent seeded runs, optionally in
//!   parallel, for convergence statistics.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaEngine};
//! use knapsack_ga::observer::NullObserver;
//! use knapsack_ga::problem::Problem;
//!
//! let problem = Problem::reference();
//! let config = GaConfig::reference().with_generations(200).with_seed(7);
//!
//! let result = GaEngine::new(&problem, config)
//!     .and_then(|engine| engine.run(&mut NullObserver))
//!     .expect("reference configuration is valid");
//!
//! assert!(result.best_fitness <= 16);
//! ```

pub mod batch;
pub mod error;
pub mod fitness;
pub mod ga;
pub mod observer;
pub mod problem;
pub mod random;

pub use error::{ConfigError, Error, Result, SelectionError};
