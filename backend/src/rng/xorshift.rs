//! xorshift64* random number generator
//!
//! Fast 64-bit PRNG. Same seed → same sequence, which is what makes a seeded
//! run replayable tick for tick.

use super::RandomSource;
use serde::{Deserialize, Serialize};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use mlfq_simulator_core_rs::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(12345);
/// let burst = rng.range_inclusive(5, 50);
/// assert!((5..=50).contains(&burst));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit, never zero)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is replaced by 1 (xorshift requirement).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create an RNG with a seed drawn from the thread-local OS-seeded RNG
    ///
    /// Used when a run is not configured with an explicit seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Generate next random u64 value
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Current internal state
    pub fn get_state(&self) -> u64 {
        self.state
    }
}

impl RandomSource for RngManager {
    fn next_f64(&mut self) -> f64 {
        let value = self.next_u64();
        // Top 53 bits scaled to [0.0, 1.0)
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// # Panics
    /// Panics if `min > max`
    fn range_inclusive(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "min must not exceed max");

        let span = (max - min) as u64 + 1;
        min + (self.next_u64() % span) as usize
    }
}
