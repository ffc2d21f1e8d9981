//! The single pseudo-random source shared by every stochastic operator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// RNG type driving tournament draws, mutation decisions and random
/// initialization. ChaCha output is stable across platforms and releases,
/// so a seed reproduces a run bit-for-bit.
pub type GaRng = ChaCha8Rng;

/// Creates a seeded RNG.
pub fn create_rng(seed: u64) -> GaRng {
    ChaCha8Rng::seed_from_u64(seed)
}
