//! Random number generation
//!
//! Every draw the engine makes goes through the [`RandomSource`] trait so the
//! arrival process can be replayed exactly:
//! - [`RngManager`]: xorshift64* generator, explicitly seeded or seeded through `rand`
//! - [`SequenceRandom`]: a scripted source returning pre-recorded draws

mod sequence;
mod xorshift;

pub use sequence::SequenceRandom;
pub use xorshift::RngManager;

/// Source of uniform draws consumed by the arrival generator
pub trait RandomSource: std::fmt::Debug {
    /// Uniform value in `[0.0, 1.0)`
    fn next_f64(&mut self) -> f64;

    /// Uniform integer in `[min, max]` (both inclusive)
    fn range_inclusive(&mut self, min: usize, max: usize) -> usize;
}
