//! Parent selection.
//!
//! Tournament selection draws a group of distinct candidates without
//! replacement, splits the draw order into two halves and keeps the winner
//! of each half. Within a half the current holder is replaced unless it is
//! *strictly* fitter than the next drawn candidate, so ties go to the
//! later draw. With the default group of 4 this is two head-to-head pairs:
//! `(draw 1, draw 2)` and `(draw 3, draw 4)`.
//!
//! Roulette-wheel selection is a recognised strategy that is not
//! implemented; it fails with [`SelectionError::Unsupported`].
//!
//! # References
//!
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::Candidate;
use crate::error::SelectionError;
use rand::seq::index;
use rand::Rng;

/// Selection strategy for choosing a pair of parents.
///
/// Higher fitness is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw `k` distinct candidates (`k` even), return the winner of the
    /// first half and the winner of the second half.
    Tournament(usize),

    /// Fitness-proportionate selection. Not supported.
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(4)
    }
}

impl Selection {
    pub fn name(&self) -> &'static str {
        match self {
            Selection::Tournament(_) => "tournament",
            Selection::Roulette => "roulette",
        }
    }

    /// Selects two parent indices from a scored population.
    pub fn select_parent_indices<R: Rng>(
        &self,
        population: &[Candidate],
        rng: &mut R,
    ) -> Result<(usize, usize), SelectionError> {
        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => Err(SelectionError::Unsupported {
                strategy: self.name(),
            }),
        }
    }

    /// Selects two parents from a scored population.
    pub fn select_parents<'a, R: Rng>(
        &self,
        population: &'a [Candidate],
        rng: &mut R,
    ) -> Result<(&'a Candidate, &'a Candidate), SelectionError> {
        let (a, b) = self.select_parent_indices(population, rng)?;
        Ok((&population[a], &population[b]))
    }
}

fn tournament<R: Rng>(
    population: &[Candidate],
    k: usize,
    rng: &mut R,
) -> Result<(usize, usize), SelectionError> {
    let required = k.max(2);
    if population.len() < required {
        return Err(SelectionError::TooFewCandidates {
            required,
            available: population.len(),
        });
    }

    let draw = index::sample(rng, population.len(), required).into_vec();
    let (first, second) = draw.split_at(required / 2);
    Ok((
        half_winner(population, first),
        half_winner(population, second),
    ))
}

/// Later draws win ties.
fn half_winner(population: &[Candidate], draws: &[usize]) -> usize {
    draws
        .iter()
        .copied()
        .reduce(|held, next| {
            if population[held].fitness() > population[next].fitness() {
                held
            } else {
                next
            }
        })
        .expect("tournament half is never empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn make_population(fitnesses: &[u64]) -> Vec<Candidate> {
        fitnesses
            .iter()
            .map(|&f| {
                let mut c = Candidate::new(vec![false; 4]);
                c.set_fitness(f);
                c
            })
            .collect()
    }

    #[test]
    fn test_half_winner_strictly_greater() {
        let pop = make_population(&[5, 3, 7, 7]);
        assert_eq!(half_winner(&pop, &[0, 1]), 0);
        assert_eq!(half_winner(&pop, &[1, 0]), 0);
        // tie goes to the second draw
        assert_eq!(half_winner(&pop, &[2, 3]), 3);
        assert_eq!(half_winner(&pop, &[3, 2]), 2);
    }

    #[test]
    fn test_tournament_parents_come_from_disjoint_halves() {
        let pop = make_population(&[1, 2, 3, 4, 5, 6, 7, 8]);
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (a, b) = Selection::Tournament(4)
                .select_parent_indices(&pop, &mut rng)
                .unwrap();
            assert_ne!(a, b, "parents are drawn without replacement");
        }
    }

    #[test]
    fn test_tournament_never_picks_global_worst() {
        // The worst candidate loses every pairing it appears in.
        let pop = make_population(&[0, 5, 6, 7, 8, 9, 10, 11]);
        let mut rng = create_rng(7);
        for _ in 0..1000 {
            let (a, b) = Selection::Tournament(4)
                .select_parent_indices(&pop, &mut rng)
                .unwrap();
            assert_ne!(a, 0);
            assert_ne!(b, 0);
        }
    }

    #[test]
    fn test_tournament_favors_fitter() {
        let pop = make_population(&[1, 1, 1, 1, 1, 1, 1, 50]);
        let mut rng = create_rng(3);
        let n = 4000;
        let wins = (0..n)
            .filter(|_| {
                let (a, b) = Selection::Tournament(4)
                    .select_parent_indices(&pop, &mut rng)
                    .unwrap();
                a == 7 || b == 7
            })
            .count();
        // index 7 is in the draw half the time and always wins its pair
        assert!(
            wins > n * 4 / 10 && wins < n * 6 / 10,
            "expected ~50% of draws to include the best, got {wins}/{n}"
        );
    }

    #[test]
    fn test_tournament_full_population_equal_fitness() {
        // With k == n and all ties, each half is won by its last draw.
        let pop = make_population(&[3, 3, 3, 3]);
        let mut rng = create_rng(11);
        let (a, b) = Selection::Tournament(4)
            .select_parent_indices(&pop, &mut rng)
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_tournament_too_few_candidates() {
        let pop = make_population(&[1, 2, 3]);
        let mut rng = create_rng(42);
        assert_eq!(
            Selection::Tournament(4).select_parents(&pop, &mut rng),
            Err(SelectionError::TooFewCandidates {
                required: 4,
                available: 3
            })
        );
    }

    #[test]
    fn test_roulette_fails_closed() {
        let pop = make_population(&[1, 2, 3, 4]);
        let mut rng = create_rng(42);
        assert_eq!(
            Selection::Roulette.select_parents(&pop, &mut rng),
            Err(SelectionError::Unsupported {
                strategy: "roulette"
            })
        );
    }

    #[test]
    fn test_default_is_tournament_of_four() {
        assert_eq!(Selection::default(), Selection::Tournament(4));
    }
}
