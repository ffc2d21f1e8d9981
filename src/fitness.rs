//! Fitness evaluation over the capacity-constrained domain.
//!
//! Items are scanned by index. Each included item adds its weight and its
//! value to running totals. Once the running weight exceeds the capacity
//! the candidate is infeasible and its fitness is exactly 0 from that
//! point on; weight never decreases, so one violation anywhere zeroes the
//! whole candidate.

use crate::ga::Candidate;
use crate::problem::Problem;

/// Diagnostic snapshot after one bit has been inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneTrace<'a> {
    pub index: usize,
    pub bit: bool,
    pub weight: u64,
    pub value: u64,
    /// Running fitness after this bit (0 once over capacity).
    pub fitness: u64,
    /// Running total weight after this bit.
    pub total_weight: u64,
    pub bits: &'a [bool],
}

/// Scores a bit vector.
///
/// # Panics
/// Panics in debug builds if `bits.len() != problem.len()`.
pub fn score(bits: &[bool], problem: &Problem) -> u64 {
    score_traced(bits, problem, |_| {})
}

/// Scores a bit vector, reporting every inspected bit to `on_gene`.
pub fn score_traced<F>(bits: &[bool], problem: &Problem, mut on_gene: F) -> u64
where
    F: FnMut(&GeneTrace<'_>),
{
    debug_assert_eq!(bits.len(), problem.len(), "bit length must match item count");

    let capacity = problem.capacity();
    let mut total_weight = 0u64;
    let mut total_value = 0u64;
    let mut over_capacity = false;

    for (index, (&bit, item)) in bits.iter().zip(problem.items()).enumerate() {
        if bit {
            total_weight = total_weight.saturating_add(item.weight);
            total_value = total_value.saturating_add(item.value);
        }
        if total_weight > capacity {
            over_capacity = true;
        }
        let fitness = if over_capacity { 0 } else { total_value };

        on_gene(&GeneTrace {
            index,
            bit,
            weight: item.weight,
            value: item.value,
            fitness,
            total_weight,
            bits,
        });
    }

    if over_capacity {
        0
    } else {
        total_value
    }
}

/// Scores a candidate and stores the result on it.
pub fn evaluate(candidate: &mut Candidate, problem: &Problem) -> u64 {
    let f = score(candidate.bits(), problem);
    candidate.set_fitness(f);
    f
}

/// Scores a candidate, reporting every inspected bit, and stores the result.
pub fn evaluate_traced<F>(candidate: &mut Candidate, problem: &Problem, on_gene: F) -> u64
where
    F: FnMut(&GeneTrace<'_>),
{
    let f = score_traced(candidate.bits(), problem, on_gene);
    candidate.set_fitness(f);
    f
}

/// Total weight of the included items.
pub fn total_weight(bits: &[bool], problem: &Problem) -> u64 {
    bits.iter()
        .zip(problem.items())
        .filter(|(bit, _)| **bit)
        .fold(0u64, |acc, (_, item)| acc.saturating_add(item.weight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Item;
    use proptest::prelude::*;

    fn bits(s: &str) -> Vec<bool> {
        s.chars().map(|c| c == '1').collect()
    }

    #[test]
    fn test_feasible_candidate() {
        let p = Problem::reference();
        assert_eq!(score(&bits("1110"), &p), 16);
        assert_eq!(score(&bits("0110"), &p), 11);
        assert_eq!(score(&bits("0000"), &p), 0);
    }

    #[test]
    fn test_over_capacity_is_zero() {
        let p = Problem::reference();
        // 7 + 2 + 9 = 18 > 15
        assert_eq!(score(&bits("1101"), &p), 0);
        assert_eq!(score(&bits("1111"), &p), 0);
    }

    #[test]
    fn test_exact_capacity_is_feasible() {
        let p = Problem::new(vec![Item::new(5, 1), Item::new(10, 2)], 15).unwrap();
        assert_eq!(score(&[true, true], &p), 3);
    }

    #[test]
    fn test_evaluate_writes_back() {
        let p = Problem::reference();
        let mut c = Candidate::new(bits("0111"));
        assert_eq!(c.fitness(), 0);
        assert_eq!(evaluate(&mut c, &p), 13);
        assert_eq!(c.fitness(), 13);
    }

    #[test]
    fn test_evaluate_traced_writes_back() {
        let p = Problem::reference();
        let mut c = Candidate::new(bits("1110"));
        let mut genes = 0;
        assert_eq!(evaluate_traced(&mut c, &p, |_| genes += 1), 16);
        assert_eq!(c.fitness(), 16);
        assert_eq!(genes, 4);
    }

    #[test]
    fn test_trace_reports_every_bit() {
        let p = Problem::reference();
        let b = bits("1101");
        let mut seen = Vec::new();
        let f = score_traced(&b, &p, |g| seen.push((g.index, g.bit, g.fitness, g.total_weight)));

        assert_eq!(f, 0);
        assert_eq!(
            seen,
            vec![
                (0, true, 5, 7),
                (1, true, 9, 9),
                (2, false, 9, 9),
                (3, true, 0, 18),
            ]
        );
    }

    #[test]
    fn test_total_weight() {
        let p = Problem::reference();
        assert_eq!(total_weight(&bits("1110"), &p), 10);
        assert_eq!(total_weight(&bits("1101"), &p), 18);
    }

    proptest! {
        #[test]
        fn prop_over_capacity_scores_zero(
            items in prop::collection::vec((0u64..50, 0u64..50), 1..12),
            capacity in 0u64..200,
            seed_bits in prop::collection::vec(any::<bool>(), 12),
        ) {
            let items: Vec<Item> = items.into_iter().map(|(w, v)| Item::new(w, v)).collect();
            let p = Problem::new(items, capacity).unwrap();
            let b = &seed_bits[..p.len()];

            let f = score(b, &p);
            if total_weight(b, &p) > capacity {
                prop_assert_eq!(f, 0);
            } else {
                let value: u64 = b.iter().zip(p.items()).filter(|(x, _)| **x).map(|(_, it)| it.value).sum();
                prop_assert_eq!(f, value);
            }
        }
    }
}
