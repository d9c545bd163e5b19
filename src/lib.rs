//! Gendyn - dynamic stochastic synthesis for Rust
//!
//! This library implements the GENDYN method: a breakpoint-interpolation
//! oscillator whose breakpoint amplitudes and durations are continuously
//! perturbed by configurable probability distributions, producing an
//! evolving, non-periodic waveform.
//!
//! # Examples
//!
//! ```
//! use gendyn::{GendynEngine, ParameterId, ParameterSet};
//!
//! let mut engine = GendynEngine::new();
//! engine.configure(44100.0);
//!
//! let params = ParameterSet::default()
//!     .with(ParameterId::AmpDistribution, 3.0)
//!     .with(ParameterId::ControlPoints, 16.0);
//!
//! let mut block = [0.0; 128];
//! engine.render(&mut block, &params);
//! ```

pub mod core;
pub mod error;
#[cfg(feature = "wav-export")]
pub mod export;
#[cfg(feature = "synth")]
pub mod synthesis;

// Re-export commonly used types at the crate root
pub use crate::core::{Signal, UniformSource};
pub use error::GendynError;
#[cfg(feature = "synth")]
pub use synthesis::{
    AutomationRate, BreakpointMemory, Distribution, FrequencyScale, GendynEngine,
    ParameterDescriptor, ParameterId, ParameterSet, SharedParameters, mirror,
};
