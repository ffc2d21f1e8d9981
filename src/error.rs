//! Error types.
//!
//! Only configuration mistakes and unsupported selection strategies are
//! errors. An over-capacity candidate is a scoring outcome (fitness 0),
//! never an error.

/// A malformed problem or GA configuration, detected before the first
/// generation runs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("problem has no items")]
    NoItems,

    #[error("population_size must be at least 1")]
    EmptyPopulation,

    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error(
        "population size mismatch: {children} crossover children + {elites} elites != population of {population}"
    )]
    PopulationMismatch {
        population: usize,
        children: usize,
        elites: usize,
    },

    #[error(
        "tournament group size {size} is invalid for a population of {population}: expected an even size between 2 and the population size"
    )]
    InvalidTournament { size: usize, population: usize },

    #[error("mutation probability {0} is outside [0, 1]")]
    InvalidMutationProbability(f64),

    #[error("initial population has {actual} candidates, expected {expected}")]
    InitialPopulationSize { expected: usize, actual: usize },

    #[error("candidate {index} has {actual} bits, expected {expected} (one per item)")]
    BitLengthMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Parent selection failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("{strategy} selection is not supported")]
    Unsupported { strategy: &'static str },

    #[error("selection needs {required} candidates, population has {available}")]
    TooFewCandidates { required: usize, available: usize },
}

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("selection failed: {0}")]
    Selection(#[from] SelectionError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
