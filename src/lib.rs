//! Estimates π with three Monte Carlo experiments sharing one xorshift
//! generator: points in a quarter circle, coprime integer pairs, and
//! Buffon's needle.
//!
//! The generator is threaded by `&mut` through every estimator in call
//! order, so the same seed and the same sequence of calls always produce
//! the same counts.

pub mod buffon;
pub mod circle;
pub mod config;
pub mod coprime;
pub mod error;
pub mod format;
pub mod monte_carlo;
pub mod rng;

pub use config::{RunConfig, DEFAULT_TRIALS};
pub use error::{EstimatorError, Result};
pub use monte_carlo::{run, Estimate, Method, Report};
pub use rng::{XorShift32, DEFAULT_SEED};
