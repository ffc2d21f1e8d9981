//! knapsack-ga command line interface.
//!
//! Runs the GA on the reference four-box instance, or on a problem loaded
//! from JSON, and prints the best solution found.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use knapsack_ga::batch::run_batch;
use knapsack_ga::ga::{GaConfig, GaEngine, Selection};
use knapsack_ga::observer::{prompt_trace, ConsoleObserver};
use knapsack_ga::problem::Problem;
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "knapsack-ga")]
#[command(version)]
#[command(about = "Search a 0/1 knapsack instance with a genetic algorithm")]
struct Cli {
    /// JSON problem file: {"items": [{"weight": 7, "value": 5}, ...], "capacity": 15}.
    /// Defaults to the built-in four-box instance.
    #[arg(short, long)]
    problem: Option<PathBuf>,

    /// Number of generations
    #[arg(short, long, default_value = "10000")]
    generations: usize,

    /// Candidates per generation
    #[arg(long, default_value = "8")]
    population_size: usize,

    /// Selection + crossover rounds per generation (two children each)
    #[arg(long, default_value = "2")]
    crossover_pairs: usize,

    /// Fittest candidates carried over unchanged
    #[arg(long, default_value = "4")]
    elite_count: usize,

    /// Probability that one bit of the next generation is flipped
    #[arg(long, default_value = "0.02")]
    mutation_probability: f64,

    /// Parent selection strategy
    #[arg(long, value_enum, default_value = "tournament")]
    selection: SelectionArg,

    /// Tournament group size (even; split into two halves)
    #[arg(long, default_value = "4")]
    tournament_size: usize,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start from random bit vectors instead of the built-in seed population
    #[arg(long)]
    random_init: bool,

    /// Print per-bit evaluation traces
    #[arg(short, long, conflicts_with = "runs")]
    trace: bool,

    /// Ask whether to trace before starting (y/n)
    #[arg(long, conflicts_with_all = ["trace", "runs"])]
    ask: bool,

    /// Run this many independent simulations and report how many reached the optimum
    #[arg(long)]
    runs: Option<usize>,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum SelectionArg {
    Tournament,
    Roulette,
}

/// Builds the run configuration from the command line.
///
/// The built-in instance starts from its seeded population unless
/// `--random-init` is given or the population size differs from the
/// seeded one, in which case the start is random.
fn build_config(cli: &Cli, builtin: bool) -> GaConfig {
    let seeded = GaConfig::reference();
    let base = if !builtin || cli.random_init {
        GaConfig::default()
    } else if cli.population_size != seeded.population_size {
        info!(
            "population size {} differs from the {} seeded candidates, starting from random bit vectors",
            cli.population_size, seeded.population_size
        );
        GaConfig::default()
    } else {
        seeded
    };

    let selection = match cli.selection {
        SelectionArg::Tournament => Selection::Tournament(cli.tournament_size),
        SelectionArg::Roulette => Selection::Roulette,
    };
    let config = base
        .with_generations(cli.generations)
        .with_population_size(cli.population_size)
        .with_crossover_pairs(cli.crossover_pairs)
        .with_elite_count(cli.elite_count)
        .with_mutation_probability(cli.mutation_probability)
        .with_selection(selection);
    match cli.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let (problem, builtin) = match &cli.problem {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading problem file {}", path.display()))?;
            let problem: Problem = serde_json::from_str(&text)
                .with_context(|| format!("parsing problem file {}", path.display()))?;
            (problem, false)
        }
        None => (Problem::reference(), true),
    };

    let config = build_config(&cli, builtin);

    if let Some(runs) = cli.runs {
        let base_seed = cli.seed.unwrap_or_else(rand::random);
        let summary = run_batch(&problem, &config, runs, base_seed)
            .context("invalid GA configuration")?;
        match problem.exhaustive_optimum() {
            Some((optimum, bits)) => {
                let hits = summary.hits(optimum);
                println!(
                    "Optimum {} {}: reached in {hits}/{} runs ({:.1}%)",
                    optimum,
                    knapsack_ga::ga::Bits(&bits),
                    summary.runs(),
                    summary.hit_rate(optimum) * 100.0
                );
            }
            None => info!("instance too large to verify the optimum exhaustively"),
        }
        if let Some(best) = summary.best() {
            println!("Best solution: {best}");
        }
        return Ok(());
    }

    let trace = if cli.ask {
        prompt_trace(io::stdin().lock(), io::stdout()).context("reading trace answer")?
    } else {
        cli.trace
    };

    let engine = GaEngine::new(&problem, config).context("invalid GA configuration")?;
    engine.run(&mut ConsoleObserver::stdout(trace))?;
    Ok(())
}
