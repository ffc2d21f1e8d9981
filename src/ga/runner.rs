//! GA generational loop.
//!
//! [`GaEngine`] owns one simulation: its population, its best-ever
//! candidate and its RNG. Each generation runs to completion before the
//! next starts:
//!
//! 1. **Evaluate** every candidate and update the best-ever candidate if a
//!    fitness strictly exceeds it.
//! 2. **Breed**: `crossover_pairs` rounds of selection + crossover, then
//!    `elite_count` elites, concatenated in that order.
//! 3. **Mutate** the concatenated batch (at most one bit flips).
//! 4. **Replace** the population with the unscored batch.
//!
//! The run always uses the full generation budget.

use super::config::GaConfig;
use super::operators::{select_elites, single_flip_mutation, single_point_crossover};
use super::types::Candidate;
use crate::error::Result;
use crate::fitness;
use crate::observer::{NullObserver, Observer};
use crate::problem::Problem;
use crate::random::{create_rng, GaRng};
use log::{debug, trace};

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GaResult {
    /// The best candidate seen in any generation.
    pub best: Candidate,

    /// Same as `best.fitness()`.
    pub best_fitness: u64,

    /// Generations executed.
    pub generations: usize,

    /// Best-ever fitness after each generation's evaluation.
    pub fitness_history: Vec<u64>,

    /// The population produced by the last generation. It has not been
    /// evaluated, so every fitness is 0.
    pub final_population: Vec<Candidate>,
}

/// One independent GA simulation.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaEngine};
/// use knapsack_ga::observer::NullObserver;
/// use knapsack_ga::problem::Problem;
///
/// let problem = Problem::reference();
/// let mut engine = GaEngine::new(&problem, GaConfig::reference().with_seed(1)).unwrap();
/// engine.step().unwrap();
/// assert_eq!(engine.generation(), 1);
/// assert_eq!(engine.population().len(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct GaEngine<'p> {
    problem: &'p Problem,
    config: GaConfig,
    rng: GaRng,
    population: Vec<Candidate>,
    best: Candidate,
    generation: usize,
    fitness_history: Vec<u64>,
}

impl<'p> GaEngine<'p> {
    /// Validates `config` against `problem` and builds the initial
    /// population.
    pub fn new(problem: &'p Problem, config: GaConfig) -> Result<Self> {
        config.validate(problem)?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = create_rng(seed);

        let population: Vec<Candidate> = match &config.initial_population {
            Some(rows) => rows.iter().cloned().map(Candidate::new).collect(),
            None => (0..config.population_size)
                .map(|_| Candidate::random(problem.len(), &mut rng))
                .collect(),
        };
        let best = Candidate::new(population[0].bits().to_vec());

        debug!(
            "GA engine: {} items, capacity {}, population {}, generations {}, {} x2 children + {} elites, mutation p={}, selection {:?}, seed {}",
            problem.len(),
            problem.capacity(),
            config.population_size,
            config.generations,
            config.crossover_pairs,
            config.elite_count,
            config.mutation_probability,
            config.selection,
            seed,
        );

        Ok(Self {
            problem,
            fitness_history: Vec::with_capacity(config.generations),
            config,
            rng,
            population,
            best,
            generation: 0,
        })
    }

    pub fn problem(&self) -> &Problem {
        self.problem
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population. Between steps it is freshly bred and
    /// unscored.
    pub fn population(&self) -> &[Candidate] {
        &self.population
    }

    /// The best candidate seen so far.
    pub fn best(&self) -> &Candidate {
        &self.best
    }

    /// Completed generations.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn fitness_history(&self) -> &[u64] {
        &self.fitness_history
    }

    /// Runs one full generation without tracing.
    pub fn step(&mut self) -> Result<()> {
        self.advance(&mut NullObserver, false)
    }

    /// Runs the remaining generation budget and reports the best candidate
    /// to `observer`.
    pub fn run<O: Observer + ?Sized>(mut self, observer: &mut O) -> Result<GaResult> {
        let trace = observer.trace_enabled();
        while self.generation < self.config.generations {
            self.advance(observer, trace)?;
        }

        debug!(
            "finished {} generations, best {}",
            self.generation, self.best
        );
        observer.report_best(&self.best);

        Ok(GaResult {
            best_fitness: self.best.fitness(),
            best: self.best,
            generations: self.generation,
            fitness_history: self.fitness_history,
            final_population: self.population,
        })
    }

    fn advance<O: Observer + ?Sized>(&mut self, observer: &mut O, trace: bool) -> Result<()> {
        self.generation += 1;
        if trace {
            observer.on_generation_start(self.generation);
        }

        self.evaluate(observer, trace);
        self.fitness_history.push(self.best.fitness());

        let mut next = self.breed()?;

        if let Some((candidate, bit)) =
            single_flip_mutation(&mut next, self.config.mutation_probability, &mut self.rng)
        {
            trace!(
                "generation {}: mutation flipped bit {bit} of candidate {candidate}",
                self.generation
            );
        }

        self.population = next;
        Ok(())
    }

    fn evaluate<O: Observer + ?Sized>(&mut self, observer: &mut O, trace: bool) {
        let problem = self.problem;
        let generation = self.generation;
        let best = &mut self.best;

        for candidate in self.population.iter_mut() {
            let f = if trace {
                fitness::evaluate_traced(candidate, problem, |g| observer.on_gene(g))
            } else {
                fitness::evaluate(candidate, problem)
            };

            if f > best.fitness() {
                *best = candidate.clone();
                debug!("generation {generation}: new best {best}");
            }
            if trace {
                observer.on_candidate_done(candidate);
            }
        }
    }

    /// Builds the next generation: crossover children first, elites last.
    fn breed(&mut self) -> Result<Vec<Candidate>> {
        let mut next = Vec::with_capacity(self.config.population_size);

        for _ in 0..self.config.crossover_pairs {
            let (a, b) = self
                .config
                .selection
                .select_parents(&self.population, &mut self.rng)?;
            let (c1, c2) = single_point_crossover(a.bits(), b.bits());
            next.push(Candidate::new(c1));
            next.push(Candidate::new(c2));
        }

        next.extend(select_elites(&self.population, self.config.elite_count));

        debug_assert_eq!(next.len(), self.population.len());
        Ok(next)
    }
}

// ============================================================================
// Tests
// ============================================================================
