//! Fixed-capacity breakpoint memory.

use super::mirror::{mirror_amplitude, mirror_duration};
use crate::core::UniformSource;

/// Default number of breakpoint slots.
pub const DEFAULT_CAPACITY: usize = 32;

/// Two parallel tables holding the most recent amplitude and duration of
/// every breakpoint slot.
///
/// The capacity `N` is fixed at compile time so the tables live inline and
/// never allocate. Amplitudes always lie in `[-1.0, 1.0]` and durations in
/// `[0.0, 1.0]`: every write goes through the reflection functions.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakpointMemory<const N: usize = DEFAULT_CAPACITY> {
    amplitudes: [f64; N],
    durations: [f64; N],
}

impl<const N: usize> BreakpointMemory<N> {
    /// Seeds every slot with independent uniform draws: amplitudes in
    /// `[-1.0, 1.0)`, durations in `[0.0, 1.0)`.
    pub fn seeded<R: UniformSource + ?Sized>(source: &mut R) -> Self {
        let mut amplitudes = [0.0; N];
        let mut durations = [0.0; N];
        for (amp, dur) in amplitudes.iter_mut().zip(durations.iter_mut()) {
            *amp = 2.0 * source.next_uniform() - 1.0;
            *dur = source.next_uniform();
        }
        Self {
            amplitudes,
            durations,
        }
    }

    /// Builds a memory from explicit tables, folding every value into range.
    pub fn from_tables(amplitudes: [f64; N], durations: [f64; N]) -> Self {
        Self {
            amplitudes: amplitudes.map(mirror_amplitude),
            durations: durations.map(mirror_duration),
        }
    }

    /// Total number of slots.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// The amplitude table.
    pub fn amplitudes(&self) -> &[f64; N] {
        &self.amplitudes
    }

    /// The duration table.
    pub fn durations(&self) -> &[f64; N] {
        &self.durations
    }

    /// Perturbs the amplitude at `index` by `offset`, reflects it into
    /// range, stores it and returns the stored value.
    #[inline]
    pub fn perturb_amplitude(&mut self, index: usize, offset: f64) -> f64 {
        let value = mirror_amplitude(self.amplitudes[index] + offset);
        self.amplitudes[index] = value;
        value
    }

    /// Perturbs the duration at `index` by `offset`, reflects it into range,
    /// stores it and returns the stored value.
    #[inline]
    pub fn perturb_duration(&mut self, index: usize, offset: f64) -> f64 {
        let value = mirror_duration(self.durations[index] + offset);
        self.durations[index] = value;
        value
    }
}
