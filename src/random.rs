//! Injected randomness.
//!
//! The annealing loop needs exactly two distributions: a uniform index over
//! `[0, n)` for move proposal and a uniform real over `[0, 1)` for the
//! Metropolis draw. [`RandomSource`] names both on top of [`rand::RngCore`],
//! so the engine stays deterministic given a fixed stream and every `rand`
//! helper (e.g. `SliceRandom::shuffle`) still applies.
//!
//! `rand`'s own generators use the default methods. Tests can override
//! `index` and `unit` to script exact draws.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, RngCore, SeedableRng};

/// Produces successive pseudo-random values for the annealing engine.
pub trait RandomSource: RngCore {
    /// Uniform index in `[0, upper)`. `upper` must be non-zero.
    fn index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    /// Uniform real in `[0, 1)`.
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl RandomSource for StdRng {}

impl RandomSource for ThreadRng {}

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
