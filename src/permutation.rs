//! Random permutations of `0..size`, used as sort input.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The values `0..size` in an order drawn from `rng`.
pub fn shuffled<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Vec<i64> {
    let mut values: Vec<i64> = (0..size as i64).collect();
    values.shuffle(rng);
    return values;
}

/// Reproducible permutation: the same `(size, seed)` always gives the same order.
pub fn seeded(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    return shuffled(size, &mut rng);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_each_value_once() {
        let mut values = seeded(100, 7);
        values.sort();
        assert_eq!(values, (0..100).collect::<Vec<i64>>());
    }

    #[test]
    fn seed_is_reproducible() {
        assert_eq!(seeded(32, 1357), seeded(32, 1357));
        assert_ne!(seeded(32, 1), seeded(32, 2));
    }

    #[test]
    fn empty_and_single() {
        assert!(seeded(0, 0).is_empty());
        assert_eq!(seeded(1, 0), vec![0]);
    }
}
