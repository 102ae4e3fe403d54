//! The per-test-case array transformer.
//!
//! For each position i, the value map collects every (index, source) pair
//! seen so far, keyed by the element value. The entry under the largest
//! key is scanned for the pair whose distance-indexed lookup in the
//! opposite sequence is largest, and the winner selects two exponents of
//! two whose modular sum is the result.

use std::collections::BTreeMap;

use crate::modnum::{add_mod, pow_mod, M};

/// Which of the two parallel sequences a stored index came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    A,
    B,
}

/// Computes `result[0..n]` for equal-length sequences `a` and `b`.
///
/// Every output lies in `[0, M)`. The value map only ever grows, so after
/// position i it holds at most `2 * (i + 1)` pairs.
pub fn transform(a: &[u64], b: &[u64]) -> Vec<u64> {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();

    let mut seen: BTreeMap<u64, Vec<(usize, Source)>> = BTreeMap::new();
    let mut result = vec![0u64; n];

    for i in 0..n {
        seen.entry(a[i]).or_default().push((i, Source::A));
        seen.entry(b[i]).or_default().push((i, Source::B));

        // non-empty: position i was just inserted
        let (_, candidates) = seen.last_key_value().unwrap();

        // (comparison value, distance index, tag); replaced only on a
        // strictly larger comparison value, so the first insertion wins ties
        let mut best: Option<(u64, usize, Source)> = None;
        for &(j, tag) in candidates {
            let d = i.abs_diff(j);
            let comparison = match tag {
                Source::A => b[d],
                Source::B => a[d],
            };
            if best.map_or(true, |(mx, _, _)| comparison > mx) {
                best = Some((comparison, d, tag));
            }
        }

        if let Some((_, ix, ar)) = best {
            result[i] = match ar {
                Source::A => add_mod(pow_mod(2, b[ix], M), pow_mod(2, a[ix.abs_diff(i)], M), M),
                Source::B => add_mod(pow_mod(2, a[ix], M), pow_mod(2, b[ix.abs_diff(i)], M), M),
            };
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn single_zero_pair() {
        // max key 0 holds [(0, A), (0, B)]; both compare equal, so the
        // earlier (A) wins: 2^0 + 2^0 = 2
        assert_eq!(transform(&[0], &[0]), vec![2]);
    }

    #[test]
    fn two_element_trace() {
        // i = 0: max key 3 -> (0, B), ix = 0 -> 2^1 + 2^3 = 10
        // i = 1: max key 5 -> (1, A), d = 0, ix = 0 -> 2^b[0] + 2^a[1] = 8 + 32 = 40
        assert_eq!(transform(&[1, 5], &[3, 2]), vec![10, 40]);
    }

    #[test]
    fn opposite_sequence_wins() {
        // i = 1: max key 3 comes from b, so the comparison indexes into a
        assert_eq!(transform(&[2, 1], &[1, 3]), vec![6, 12]);
    }

    #[test]
    fn first_insertion_wins_ties() {
        // at i = 1 both stored copies of key 5 compare equal (b is all
        // zeros); the older index 0 is kept, giving distance index 1
        assert_eq!(transform(&[5, 5], &[0, 0]), vec![33, 33]);
    }

    #[test]
    fn empty_input() {
        assert_eq!(transform(&[], &[]), Vec::<u64>::new());
    }

    fn seq_pair() -> impl Strategy<Value = (Vec<u64>, Vec<u64>)> {
        (1usize..40).prop_flat_map(|n| {
            (
                prop::collection::vec(0u64..=1_000_000_000_000_000_000, n),
                prop::collection::vec(0u64..=1_000_000_000_000_000_000, n),
            )
        })
    }

    proptest! {
        #[test]
        fn length_and_bounds((a, b) in seq_pair()) {
            let result = transform(&a, &b);
            prop_assert_eq!(result.len(), a.len());
            prop_assert!(result.iter().all(|&x| x < M));
        }

        #[test]
        fn deterministic((a, b) in seq_pair()) {
            prop_assert_eq!(transform(&a, &b), transform(&a, &b));
        }
    }
}
