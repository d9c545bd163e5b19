//! Core signal processing types and traits.
//!
//! This module provides the fundamental abstractions shared by every
//! generator in the library:
//! - `Signal` trait for all signal sources
//! - `UniformSource` trait for injectable uniform randomness

mod random;
mod signal;

pub use random::UniformSource;
pub use signal::Signal;
