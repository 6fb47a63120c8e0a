use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;

pub fn random_array<R: Rng>(rng: &mut R, len: usize, values: RangeInclusive<i64>) -> Vec<i64> {
    (0..len).map(|_| rng.gen_range(values.clone())).collect()
}

/// `count` distinct values from `1..=99` in random order.
pub fn random_unique_values<R: Rng>(rng: &mut R, count: usize) -> Vec<i64> {
    let mut pool: Vec<i64> = (1..=99).collect();
    pool.shuffle(rng);
    pool.truncate(count.min(pool.len()));
    pool
}
