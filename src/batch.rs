//! Many independent simulations of the same problem.
//!
//! Run `i` uses seed `base_seed + i` and owns its own [`GaEngine`], so
//! runs share nothing mutable. With the `parallel` feature the runs are
//! spread over rayon's thread pool; results are identical either way.

use crate::error::Result;
use crate::ga::{Candidate, GaConfig, GaEngine};
use crate::observer::NullObserver;
use crate::problem::Problem;
use log::info;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best candidates of a batch, in run order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BatchSummary {
    pub bests: Vec<Candidate>,
}

impl BatchSummary {
    pub fn runs(&self) -> usize {
        self.bests.len()
    }

    /// Runs whose best fitness reached `target`.
    pub fn hits(&self, target: u64) -> usize {
        self.bests.iter().filter(|c| c.fitness() >= target).count()
    }

    /// Fraction of runs that reached `target` (0.0 for an empty batch).
    pub fn hit_rate(&self, target: u64) -> f64 {
        if self.bests.is_empty() {
            return 0.0;
        }
        self.hits(target) as f64 / self.runs() as f64
    }

    /// The fittest best across runs; earliest run wins ties.
    pub fn best(&self) -> Option<&Candidate> {
        self.bests
            .iter()
            .reduce(|a, b| if b.fitness() > a.fitness() { b } else { a })
    }
}

/// Runs `runs` independent simulations and collects their bests.
///
/// Any `seed` in `config` is replaced by `base_seed + i`.
pub fn run_batch(
    problem: &Problem,
    config: &GaConfig,
    runs: usize,
    base_seed: u64,
) -> Result<BatchSummary> {
    config.validate(problem)?;

    let run_one = |i: usize| -> Result<Candidate> {
        let seed = base_seed.wrapping_add(i as u64);
        let engine = GaEngine::new(problem, config.clone().with_seed(seed))?;
        Ok(engine.run(&mut NullObserver)?.best)
    };

    #[cfg(feature = "parallel")]
    let bests = (0..runs)
        .into_par_iter()
        .map(run_one)
        .collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let bests = (0..runs).map(run_one).collect::<Result<Vec<_>>>()?;

    let summary = BatchSummary { bests };
    info!(
        "batch of {} runs done, best {}",
        summary.runs(),
        summary
            .best()
            .map_or_else(|| "none".to_string(), ToString::to_string)
    );
    Ok(summary)
}
