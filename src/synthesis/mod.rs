//! Dynamic stochastic synthesis components.
//!
//! This module provides the GENDYN oscillator and its building blocks:
//! - `GendynEngine`, the per-sample synthesis engine
//! - `Distribution`, the seven perturbation distributions
//! - `mirror`, boundary reflection for breakpoint values
//! - `BreakpointMemory`, the fixed-capacity breakpoint tables
//! - `ParameterSet` and friends, the k-rate control snapshot
//! - `SharedParameters`, lock-free cells for cross-thread control
//! - `FrequencyScale`, log-scale mapping for frequency controls
//!
//! All synthesis components require the `synth` feature to be enabled.

mod control;
mod distribution;
mod engine;
mod memory;
pub mod mirror;
mod params;
mod scale;

pub use control::SharedParameters;
pub use distribution::{Distribution, MAX_SHAPE, MIN_SHAPE};
pub use engine::{DEFAULT_SAMPLE_RATE, GendynEngine};
pub use memory::{BreakpointMemory, DEFAULT_CAPACITY};
pub use params::{AutomationRate, ParameterDescriptor, ParameterId, ParameterSet};
pub use scale::FrequencyScale;
