//! Deterministic map-generation RNG.
//!
//! Every random decision made while building a map (hospital placement, road
//! endpoints, road lengths, bridges) draws from one `MapRng`.  The same seed
//! always yields the same map, which keeps tests reproducible.
//!
//! Per-session generators are derived with [`MapRng::child`]:
//!
//!   seed = parent_draw XOR (offset * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive offsets uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seeded RNG used by the map generator.
///
/// Used only in single-threaded contexts; give each session its own child.
pub struct MapRng(SmallRng);

impl MapRng {
    pub fn new(seed: u64) -> Self {
        MapRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from OS entropy.  Maps are then not reproducible.
    pub fn from_entropy() -> Self {
        MapRng(SmallRng::from_entropy())
    }

    /// Derive a child `MapRng` with a different seed offset, used to give
    /// each session an independent stream from one root seed.
    pub fn child(&mut self, offset: u64) -> MapRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        MapRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` helpers such as
    /// `rand::seq::index::sample`.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
