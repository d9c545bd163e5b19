//! Dynamic stochastic synthesis engine.
//!
//! # Design Overview
//!
//! `GendynEngine` is a breakpoint-interpolation oscillator. It cycles
//! through the first `active_count` slots of a [`BreakpointMemory`]; every
//! time a segment completes it perturbs the next slot's amplitude and
//! duration with the selected [`Distribution`]s, folds them back into range
//! and derives the next segment's speed from the duration.
//!
//! ## Per-sample loop
//!
//! 1. When `phase >= 1.0` the segment is complete: subtract exactly one
//!    (the fractional overshoot carries into the next segment), advance the
//!    memory index and perturb that slot.
//! 2. Interpolate `(1 - phase) * current + phase * next` and clip to
//!    `[-1.0, 1.0]`.
//! 3. Advance `phase` by the segment frequency.
//!
//! The segment frequency is
//! `(min_freq + (max_freq - min_freq) * duration) / sample_rate * active_count`,
//! so one traversal of every active breakpoint spans one cycle at a
//! frequency between `min_freq` and `max_freq`.
//!
//! ## Real-time contract
//!
//! `render` and `next_sample` never allocate, lock, log or fail. Parameters
//! are read once per block; out-of-range values are clamped or fall back
//! instead of being reported.

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::distribution::Distribution;
use super::memory::{BreakpointMemory, DEFAULT_CAPACITY};
use super::params::ParameterSet;
use crate::core::{Signal, UniformSource};

/// Sample rate assumed until [`GendynEngine::configure`] is called.
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Segment frequency before the first breakpoint update.
const INITIAL_SEGMENT_FREQUENCY: f64 = 100.0;

/// A GENDYN oscillator with `N` breakpoint slots.
///
/// # Type Parameters
///
/// * `R` - Uniform random source (any `rand::Rng`, or a fixed sequence in tests)
/// * `N` - Breakpoint memory capacity (default 32)
///
/// # Examples
///
/// ```
/// use gendyn::{GendynEngine, ParameterSet};
///
/// let mut engine = GendynEngine::new();
/// engine.configure(48000.0);
///
/// let mut block = [0.0; 128];
/// engine.render(&mut block, &ParameterSet::default());
/// assert!(block.iter().all(|s| (-1.0..=1.0).contains(s)));
/// ```
pub struct GendynEngine<R: UniformSource = StdRng, const N: usize = DEFAULT_CAPACITY> {
    rng: R,
    memory: BreakpointMemory<N>,

    /// Sanitized snapshot for the current block
    parameters: ParameterSet,
    amp_distribution: Distribution,
    dur_distribution: Distribution,
    active_count: usize,

    /// Position within the current segment
    phase: f64,
    current_amp: f64,
    next_amp: f64,
    duration: f64,
    /// Phase increment per sample
    segment_freq: f64,
    memory_index: usize,

    sample_rate: f64,
    freq_mul: f64,
}

impl GendynEngine {
    /// Creates an engine with 32 breakpoints and an entropy-seeded `StdRng`.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl Default for GendynEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: UniformSource, const N: usize> GendynEngine<R, N> {
    const NON_EMPTY: () = assert!(N > 0, "breakpoint memory needs at least one slot");

    /// Creates an engine drawing from `rng`, seeding the breakpoint memory
    /// from it.
    ///
    /// # Examples
    ///
    /// ```
    /// use gendyn::GendynEngine;
    /// use rand::SeedableRng;
    ///
    /// let rng = rand::rngs::StdRng::seed_from_u64(42);
    /// let engine: GendynEngine<_, 16> = GendynEngine::with_rng(rng);
    /// assert_eq!(engine.memory().capacity(), 16);
    /// ```
    pub fn with_rng(mut rng: R) -> Self {
        let memory = BreakpointMemory::seeded(&mut rng);
        Self::with_memory(rng, memory)
    }

    /// Creates an engine with explicit initial breakpoint memory.
    pub fn with_memory(rng: R, memory: BreakpointMemory<N>) -> Self {
        let () = Self::NON_EMPTY;
        tracing::debug!(capacity = N, "created gendyn engine");

        let parameters = ParameterSet::default();
        Self {
            rng,
            memory,
            amp_distribution: parameters.amp_distribution(),
            dur_distribution: parameters.dur_distribution(),
            active_count: parameters.active_count(N),
            parameters,
            phase: 1.0,
            current_amp: 0.0,
            next_amp: 0.0,
            duration: 0.0,
            segment_freq: INITIAL_SEGMENT_FREQUENCY,
            memory_index: 0,
            sample_rate: DEFAULT_SAMPLE_RATE,
            freq_mul: 1.0 / DEFAULT_SAMPLE_RATE,
        }
    }

    /// Sets the host sample rate.
    ///
    /// Call before the first block and again whenever the rate changes.
    /// Non-positive or non-finite rates are ignored.
    pub fn configure(&mut self, sample_rate: f64) {
        if sample_rate.is_finite() && sample_rate > 0.0 {
            self.sample_rate = sample_rate;
            self.freq_mul = 1.0 / sample_rate;
        }
    }

    /// Installs the parameter snapshot used by subsequent samples.
    pub fn set_parameters(&mut self, parameters: &ParameterSet) {
        self.parameters = parameters.sanitized();
        self.amp_distribution = self.parameters.amp_distribution();
        self.dur_distribution = self.parameters.dur_distribution();
        self.active_count = self.parameters.active_count(N);
        // same successor as (index + 1) % active_count on the next segment
        self.memory_index %= self.active_count;
    }

    /// Fills `buffer` with one block of audio using `parameters` for every
    /// sample of the block.
    pub fn render(&mut self, buffer: &mut [f64], parameters: &ParameterSet) {
        self.set_parameters(parameters);
        self.process(buffer);
    }

    /// Like [`GendynEngine::render`] for hosts with `f32` buffers.
    pub fn render_f32(&mut self, buffer: &mut [f32], parameters: &ParameterSet) {
        self.set_parameters(parameters);
        for sample in buffer.iter_mut() {
            *sample = self.next_sample() as f32;
        }
    }

    /// Moves to the next breakpoint and perturbs it.
    #[inline]
    fn advance_breakpoint(&mut self) {
        self.memory_index = (self.memory_index + 1) % self.active_count;
        self.current_amp = self.next_amp;

        let params = &self.parameters;
        let amp_offset = params.amp_scale
            * self
                .amp_distribution
                .sample(params.amp_shape, self.rng.next_uniform());
        self.next_amp = self.memory.perturb_amplitude(self.memory_index, amp_offset);

        let dur_offset = params.dur_scale
            * self
                .dur_distribution
                .sample(params.dur_shape, self.rng.next_uniform());
        self.duration = self.memory.perturb_duration(self.memory_index, dur_offset);

        let span = params.max_frequency - params.min_frequency;
        let freq = (params.min_frequency + span * self.duration)
            * self.freq_mul
            * self.active_count as f64;
        self.segment_freq = if freq.is_finite() { freq.max(0.0) } else { 0.0 };
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn memory(&self) -> &BreakpointMemory<N> {
        &self.memory
    }

    /// The sanitized snapshot in effect.
    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Phase increment per sample of the current segment.
    pub fn segment_frequency(&self) -> f64 {
        self.segment_freq
    }

    /// The slot most recently perturbed.
    pub fn memory_index(&self) -> usize {
        self.memory_index
    }

    /// Number of slots cycled through under the current snapshot.
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Amplitudes at the start and end of the current segment.
    pub fn segment_amplitudes(&self) -> (f64, f64) {
        (self.current_amp, self.next_amp)
    }
}

impl<R: UniformSource, const N: usize> Signal for GendynEngine<R, N> {
    #[inline]
    fn next_sample(&mut self) -> f64 {
        if self.phase >= 1.0 {
            self.phase -= 1.0;
            self.advance_breakpoint();
        }

        let z = (1.0 - self.phase) * self.current_amp + self.phase * self.next_amp;
        // brute clip
        let output = z.clamp(-1.0, 1.0);

        self.phase += self.segment_freq;
        output
    }
}
