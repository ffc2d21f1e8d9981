//! Bit-vector genetic operators.
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: fixed split at `len / 2`, two children
//!
//! # Mutation
//!
//! - [`single_flip_mutation`]: at most one bit flipped across a whole batch
//!
//! # Reproduction
//!
//! - [`select_elites`]: fittest candidates carried forward unchanged

use super::types::Candidate;
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover at the midpoint (`len / 2`, rounded down).
///
/// `child1 = a[..split] ++ b[split..]`, `child2 = b[..split] ++ a[split..]`.
///
/// # Panics
/// Panics if the parents have different lengths.
pub fn single_point_crossover(a: &[bool], b: &[bool]) -> (Vec<bool>, Vec<bool>) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    let split = a.len() / 2;

    let child1 = a[..split].iter().chain(&b[split..]).copied().collect();
    let child2 = b[..split].iter().chain(&a[split..]).copied().collect();
    (child1, child2)
}

// ============================================================================
// Mutation
// ============================================================================

/// Global single-bit mutation over a batch.
///
/// One draw decides, with probability `probability`, whether the batch
/// mutates at all. If it does, one candidate and one bit within it are
/// chosen uniformly and that bit is flipped. Returns the
/// `(candidate, bit)` site that was flipped, if any.
///
/// # Panics
/// Panics if `probability` is outside `[0, 1]`.
pub fn single_flip_mutation<R: Rng>(
    batch: &mut [Candidate],
    probability: f64,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if !rng.random_bool(probability) || batch.is_empty() {
        return None;
    }
    let candidate = rng.random_range(0..batch.len());
    let len = batch[candidate].len();
    if len == 0 {
        return None;
    }
    let bit = rng.random_range(0..len);
    batch[candidate].flip(bit);
    Some((candidate, bit))
}

// ============================================================================
// Reproduction
// ============================================================================

/// Returns the `count` fittest candidates, best first, with scores reset.
///
/// The sort is stable, so equal fitness keeps population order.
pub fn select_elites(population: &[Candidate], count: usize) -> Vec<Candidate> {
    let mut ranked: Vec<&Candidate> = population.iter().collect();
    ranked.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
    ranked
        .into_iter()
        .take(count)
        .map(|c| Candidate::new(c.bits().to_vec()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    fn scored(s: &str, fitness: u64) -> Candidate {
        let mut c = Candidate::new(bits(s));
        c.set_fitness(fitness);
        c
    }

    fn hamming(a: &[Candidate], b: &[Candidate]) -> usize {
        a.iter()
            .zip(b)
            .map(|(x, y)| x.bits().iter().zip(y.bits()).filter(|(p, q)| p != q).count())
            .sum()
    }

    // ---- Crossover ----

    #[test]
    fn test_crossover_reference_parents() {
        let (c1, c2) = single_point_crossover(&bits("0101"), &bits("1111"));
        assert_eq!(c1, bits("0111"));
        assert_eq!(c2, bits("1101"));
    }

    #[test]
    fn test_crossover_odd_length() {
        // split = 5 / 2 = 2
        let (c1, c2) = single_point_crossover(&bits("00000"), &bits("11111"));
        assert_eq!(c1, bits("00111"));
        assert_eq!(c2, bits("11000"));
    }

    #[test]
    fn test_crossover_single_bit() {
        // split = 0: children swap wholesale
        let (c1, c2) = single_point_crossover(&bits("1"), &bits("0"));
        assert_eq!(c1, bits("0"));
        assert_eq!(c2, bits("1"));
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch_panics() {
        single_point_crossover(&bits("01"), &bits("011"));
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_never_fires_at_zero() {
        let mut rng = create_rng(42);
        let mut batch: Vec<Candidate> = (0..8).map(|_| Candidate::new(bits("0101"))).collect();
        let before = batch.clone();
        for _ in 0..1000 {
            assert!(single_flip_mutation(&mut batch, 0.0, &mut rng).is_none());
        }
        assert_eq!(batch, before);
    }

    #[test]
    fn test_mutation_always_fires_at_one() {
        let mut rng = create_rng(42);
        let mut batch: Vec<Candidate> = (0..8).map(|_| Candidate::new(bits("0101"))).collect();
        let before = batch.clone();
        let (c, b) = single_flip_mutation(&mut batch, 1.0, &mut rng).unwrap();
        assert!(c < 8 && b < 4);
        assert_eq!(batch[c].bits()[b], !before[c].bits()[b]);
        assert_eq!(hamming(&before, &batch), 1);
    }

    #[test]
    fn test_mutation_rate_roughly_matches() {
        let mut rng = create_rng(5);
        let mut batch: Vec<Candidate> = (0..8).map(|_| Candidate::new(bits("0000"))).collect();
        let n = 20_000;
        let fired = (0..n)
            .filter(|_| single_flip_mutation(&mut batch, 0.02, &mut rng).is_some())
            .count();
        // expected 400
        assert!(fired > 300 && fired < 500, "fired {fired}/{n}");
    }

    #[test]
    fn test_mutation_empty_batch() {
        let mut rng = create_rng(42);
        let mut batch: Vec<Candidate> = vec![];
        assert!(single_flip_mutation(&mut batch, 1.0, &mut rng).is_none());
    }

    // ---- Reproduction ----

    #[test]
    fn test_elites_descending_with_stable_ties() {
        let population = vec![
            scored("0101", 6),
            scored("0001", 2),
            scored("1111", 0),
            scored("0111", 13),
            scored("0011", 9),
            scored("0000", 0),
            scored("0110", 11),
            scored("1001", 9),
        ];
        let elites = select_elites(&population, 4);
        let got: Vec<Vec<bool>> = elites.iter().map(|c| c.bits().to_vec()).collect();
        assert_eq!(
            got,
            vec![bits("0111"), bits("0110"), bits("0011"), bits("1001")]
        );
        assert!(elites.iter().all(|c| c.fitness() == 0));
    }

    #[test]
    fn test_elites_count_larger_than_population() {
        let population = vec![scored("01", 1), scored("10", 2)];
        let elites = select_elites(&population, 5);
        assert_eq!(elites.len(), 2);
        assert_eq!(elites[0].bits(), &[true, false]);
    }

    proptest! {
        #[test]
        fn prop_crossover_preserves_genes(
            pair in (1usize..16).prop_flat_map(|n| (
                prop::collection::vec(any::<bool>(), n),
                prop::collection::vec(any::<bool>(), n),
            ))
        ) {
            let (a, b) = pair;
            let (c1, c2) = single_point_crossover(&a, &b);
            let split = a.len() / 2;
            prop_assert_eq!(c1.len(), a.len());
            prop_assert_eq!(c2.len(), a.len());
            prop_assert_eq!(&c1[..split], &a[..split]);
            prop_assert_eq!(&c1[split..], &b[split..]);
            prop_assert_eq!(&c2[..split], &b[..split]);
            prop_assert_eq!(&c2[split..], &a[split..]);
        }

        #[test]
        fn prop_mutation_flips_at_most_one_bit(
            rows in prop::collection::vec(prop::collection::vec(any::<bool>(), 4), 1..12),
            probability in 0.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let mut batch: Vec<Candidate> = rows.into_iter().map(Candidate::new).collect();
            let before = batch.clone();
            let mut rng = create_rng(seed);
            let site = single_flip_mutation(&mut batch, probability, &mut rng);
            let distance = hamming(&before, &batch);
            prop_assert!(distance <= 1);
            prop_assert_eq!(distance == 1, site.is_some());
        }
    }
}
