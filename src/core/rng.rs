//! Deterministic die-roll randomness with forking for independent games.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Each simulated game gets an independent branch, so a
//!   batch of games is reproducible and order-insensitive
//!
//! ## Usage
//!
//! ```
//! use snakes_ladders::core::DiceRng;
//!
//! let mut rng = DiceRng::new(42);
//!
//! // Fork for an independent game
//! let mut game_rng = rng.fork();
//!
//! // Original and fork produce different sequences
//! assert_ne!(
//!     rng.choose(&[1, 2, 3, 4, 5, 6]),
//!     game_rng.choose(&[7, 8, 9, 10, 11, 12]),
//! );
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG behind every die roll.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Forking yields an independent but reproducible stream per game.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl DiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. The
    /// engine forks once per simulated game, which keeps multi-game runs
    /// reproducible regardless of how games are ordered or parallelized.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a random element from a slice, uniformly.
    ///
    /// This models one toss of a fair die over a square's candidate
    /// destinations. Returns `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIPS: [u32; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn test_determinism() {
        let mut rng1 = DiceRng::new(42);
        let mut rng2 = DiceRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.choose(&PIPS), rng2.choose(&PIPS));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = DiceRng::new(1);
        let mut rng2 = DiceRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| *rng1.choose(&PIPS).unwrap()).collect();
        let seq2: Vec<_> = (0..20).map(|_| *rng2.choose(&PIPS).unwrap()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = DiceRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..20).map(|_| *rng.choose(&PIPS).unwrap()).collect();
        let seq2: Vec<_> = (0..20).map(|_| *forked.choose(&PIPS).unwrap()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = DiceRng::new(42);
        let mut rng2 = DiceRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed, forked2.seed);
    }

    #[test]
    fn test_choose_covers_all_candidates() {
        let mut rng = DiceRng::new(7);
        let mut seen = [false; 6];

        for _ in 0..500 {
            let value = *rng.choose(&PIPS).unwrap();
            seen[(value - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_choose_empty() {
        let mut rng = DiceRng::new(42);
        let empty: Vec<u32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
