//! Python bindings
//!
//! Exposes the scheduler to a Python presentation layer. The binding only
//! converts values; every scheduling decision stays in the Rust engine.

pub mod scheduler;
pub mod types;
