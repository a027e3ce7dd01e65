//! Random sampling helpers shared by the field builder and frame synthesizer.
//!
//! Every stochastic function in the crate takes a `&mut Sampler`, so seeding
//! one sampler is enough to make a whole build reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded source of uniform randomness.
///
/// ```ignore
/// let mut sampler = Sampler::seeded(7);
/// let t = sampler.random_range(0.0, TAU);
/// let size = sampler.random_int(1, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: SmallRng,
}

impl Sampler {
    /// Create a sampler with a fixed seed. Same seed, same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Create a sampler seeded from the wall clock.
    ///
    /// Different each program execution.
    pub fn from_clock() -> Self {
        Self::seeded(clock_seed())
    }

    /// Uniform f32 in `[min, max)`.
    ///
    /// Returns `min` when the range is empty.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..max)
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    #[inline]
    pub fn random_int(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    /// Uniform f32 in `(0, 1]`. Safe to pass to `ln`.
    #[inline]
    pub fn random_open_unit(&mut self) -> f32 {
        1.0 - self.rng.gen::<f32>()
    }

    /// Pick one element uniformly at random.
    ///
    /// Returns `None` for an empty slice.
    #[inline]
    pub fn random_choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        Some(&items[self.rng.gen_range(0..items.len())])
    }
}

fn clock_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}
