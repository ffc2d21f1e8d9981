//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of the generational loop. The
//! default is the reference configuration: 8 candidates, 10 000
//! generations, 2 tournament-crossover pairs, 4 elites, 2 % mutation.

use super::selection::Selection;
use crate::error::ConfigError;
use crate::problem::Problem;

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 8);
/// assert_eq!(config.generations, 10_000);
/// assert_eq!(config.elite_count, 4);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(12)
///     .with_crossover_pairs(3)
///     .with_elite_count(6)
///     .with_selection(Selection::Tournament(4))
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of candidates per generation. Constant for the whole run.
    pub population_size: usize,

    /// Number of generations to run. There is no early stopping.
    pub generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Selection + crossover rounds per generation, two children each.
    pub crossover_pairs: usize,

    /// Fittest candidates copied unchanged into the next generation.
    pub elite_count: usize,

    /// Probability (0.0–1.0) that one bit somewhere in the next
    /// generation is flipped. A single draw per generation.
    pub mutation_probability: f64,

    /// Random seed for reproducibility. `None` uses a random seed.
    pub seed: Option<u64>,

    /// Explicit starting bit vectors. `None` draws random ones.
    pub initial_population: Option<Vec<Vec<bool>>>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 8,
            generations: 10_000,
            selection: Selection::default(),
            crossover_pairs: 2,
            elite_count: 4,
            mutation_probability: 0.02,
            seed: None,
            initial_population: None,
        }
    }
}

impl GaConfig {
    /// The default configuration seeded with the eight hand-picked starting
    /// bit vectors used for [`Problem::reference`].
    pub fn reference() -> Self {
        let seeds = [
            "0101", "0001", "1111", "0111", "0011", "0000", "0110", "0001",
        ];
        let population = seeds
            .iter()
            .map(|s| s.bytes().map(|b| b == b'1').collect())
            .collect();
        Self::default().with_initial_population(population)
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the number of selection + crossover rounds per generation.
    pub fn with_crossover_pairs(mut self, n: usize) -> Self {
        self.crossover_pairs = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the mutation probability. Not clamped; [`validate`](Self::validate)
    /// rejects values outside `[0, 1]`.
    pub fn with_mutation_probability(mut self, p: f64) -> Self {
        self.mutation_probability = p;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the starting population.
    pub fn with_initial_population(mut self, population: Vec<Vec<bool>>) -> Self {
        self.initial_population = Some(population);
        self
    }

    /// Drops any explicit starting population so candidates are random.
    pub fn with_random_initial_population(mut self) -> Self {
        self.initial_population = None;
        self
    }

    /// Children produced by crossover each generation.
    pub fn offspring_count(&self) -> usize {
        self.crossover_pairs * 2
    }

    /// Validates the configuration against a problem.
    pub fn validate(&self, problem: &Problem) -> Result<(), ConfigError> {
        if problem.is_empty() {
            return Err(ConfigError::NoItems);
        }
        if self.population_size == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.generations == 0 {
            return Err(ConfigError::ZeroGenerations);
        }
        if self.offspring_count() + self.elite_count != self.population_size {
            return Err(ConfigError::PopulationMismatch {
                population: self.population_size,
                children: self.offspring_count(),
                elites: self.elite_count,
            });
        }
        if let Selection::Tournament(size) = self.selection {
            if self.crossover_pairs > 0
                && (size < 2 || size % 2 != 0 || size > self.population_size)
            {
                return Err(ConfigError::InvalidTournament {
                    size,
                    population: self.population_size,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        if let Some(population) = &self.initial_population {
            if population.len() != self.population_size {
                return Err(ConfigError::InitialPopulationSize {
                    expected: self.population_size,
                    actual: population.len(),
                });
            }
            if let Some((index, bits)) = population
                .iter()
                .enumerate()
                .find(|(_, bits)| bits.len() != problem.len())
            {
                return Err(ConfigError::BitLengthMismatch {
                    index,
                    expected: problem.len(),
                    actual: bits.len(),
                });
            }
        }
        Ok(())
    }
}
