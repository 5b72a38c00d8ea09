//! Seedable random source for the board.
//!
//! The board takes any `rand::RngCore`; these helpers build the default PCG
//! generator so a seed fully determines spawns and shuffles.

use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Default generator type used by [`crate::Board`].
pub type BoardRng = Pcg64;

/// Deterministic generator for a seed.
pub fn seeded_rng(seed: u64) -> BoardRng {
    Pcg64::seed_from_u64(seed)
}

/// Generator seeded from OS entropy.
pub fn entropy_rng() -> BoardRng {
    Pcg64::from_entropy()
}
