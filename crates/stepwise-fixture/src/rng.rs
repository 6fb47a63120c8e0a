//! Per-fixture RNG seeding with ChaCha8.
//!
//! Each fixture kind gets its own ChaCha8Rng seeded from
//! `(seed + stream)`. Same seed -> same fixture, always.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Stream ids, one per fixture kind.
pub mod stream {
    pub const ARRAY: u64 = 0;
    pub const TREE: u64 = 1;
    pub const GRAPH: u64 = 2;
    pub const WEIGHTED_GRAPH: u64 = 3;
    pub const COLORING_GRAPH: u64 = 4;
    pub const CITIES: u64 = 5;
}

/// Create a deterministic RNG for a seed and fixture stream.
pub fn fixture_rng(seed: u64, stream: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed.wrapping_add(stream))
}
