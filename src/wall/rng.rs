//! Deterministic random number generation for wall shuffling.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same shuffles
//! - **Forkable**: Independent streams for batches of dealt hands
//!
//! ```
//! use mahjong_tenpai::wall::WallRng;
//!
//! let mut a: Vec<u8> = (0..34).collect();
//! let mut b = a.clone();
//! WallRng::new(7).shuffle(&mut a);
//! WallRng::new(7).shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 generator used to shuffle walls.
#[derive(Clone, Debug)]
pub struct WallRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl WallRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork an independent, deterministic stream.
    ///
    /// The n-th fork of a given seed always yields the same stream, no
    /// matter how much the parent has shuffled in between.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut WallRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..50).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = WallRng::new(42);
        let mut rng2 = WallRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = WallRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(shuffled(&mut rng), shuffled(&mut forked));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = WallRng::new(42);
        let mut rng2 = WallRng::new(42);

        assert_eq!(rng1.fork().seed(), rng2.fork().seed());
        assert_ne!(rng1.fork().seed(), rng1.fork().seed());
    }

    #[test]
    fn test_fork_ignores_parent_draws() {
        let mut quiet = WallRng::new(5);
        let mut busy = WallRng::new(5);
        shuffled(&mut busy);

        assert_eq!(shuffled(&mut quiet.fork()), shuffled(&mut busy.fork()));
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = WallRng::new(42);
        let mut data = shuffled(&mut rng);

        assert_ne!(data, (0..50).collect::<Vec<_>>());
        data.sort();
        assert_eq!(data, (0..50).collect::<Vec<_>>());
    }
}
