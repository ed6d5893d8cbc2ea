//! # Maze Seeds
//!
//! Every random decision in generation and layout flows from a `MazeSeed`.
//! Given the same seed, a maze and its scattered objects come out
//! **exactly** the same on any platform.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Sub-stream for the maze carving itself.
pub const STREAM_CARVE: u64 = 0x4d41_5a45;
/// Sub-stream for light placement.
pub const STREAM_LIGHTS: u64 = 0x4c49_4748;
/// Sub-stream for pickup placement.
pub const STREAM_PICKUPS: u64 = 0x5049_434b;

/// Seed for deterministic generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MazeSeed(u64);

impl MazeSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Draws a fresh seed from the operating system.
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives an independent sub-seed for a specific purpose.
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }

    /// Random stream for one purpose.
    #[must_use]
    pub fn rng(self, purpose: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.derive(purpose).value())
    }
}

impl Default for MazeSeed {
    fn default() -> Self {
        Self(0xDEAD_BEEF_CAFE_BABE)
    }
}
