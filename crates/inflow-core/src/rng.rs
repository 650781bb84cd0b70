//! Seeded Random Stream
//!
//! Every random decision in a run is drawn from an explicitly owned [`SimRng`].
//! Nothing reads ambient or global random state, so independent simulations in
//! one process stay reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded random number generator threaded through generation, population and propagation
#[derive(Debug, Clone)]
pub struct SimRng(pub SmallRng);

impl SimRng {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }

    /// Uniform draw from [0, 1)
    pub fn uniform(&mut self) -> f64 {
        self.0.gen::<f64>()
    }

    /// One Bernoulli trial: a single uniform draw compared against `p`
    pub fn bernoulli(&mut self, p: f64) -> bool {
        self.uniform() < p
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
