//! The seeded random source shared by every generation step.
//!
//! A single `ChaCha8Rng` is created from the configured seed and passed by
//! `&mut` through payer-pool construction, record generation and corruption.
//! Output is only reproducible while every step consumes draws in the same
//! order, so helpers here never draw more than once per call.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator type used for a whole dataset run.
pub type SynthRng = ChaCha8Rng;

/// Make the run generator from the configured seed.
pub fn seeded_rng(seed: u64) -> SynthRng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Uniformly pick one element.
///
/// # Panics
///
/// Panics if `items` is empty. Profile lists are validated before generation.
pub(crate) fn pick<'a, T, R: Rng>(items: &'a [T], rng: &mut R) -> &'a T {
    &items[rng.random_range(0..items.len())]
}

/// Bernoulli trial against a uniform `[0, 1)` draw.
pub(crate) fn chance<R: Rng>(rng: &mut R, probability: f64) -> bool {
    rng.random::<f64>() < probability
}
