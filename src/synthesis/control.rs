//! Lock-free parameter cells shared between a control thread and the audio
//! thread.

use std::sync::atomic::{AtomicU64, Ordering};

use super::params::{ParameterId, ParameterSet};

/// Nine atomic parameter cells, one per control.
///
/// A single control thread writes with [`SharedParameters::store`]; the audio
/// thread reads a whole block's worth of values with
/// [`SharedParameters::snapshot`]. Values are `f64` bit patterns in
/// `AtomicU64`s, so neither side ever blocks. A snapshot may mix values from
/// two consecutive writes; each individual control is always consistent.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use gendyn::{ParameterId, SharedParameters};
///
/// let shared = Arc::new(SharedParameters::default());
/// let ui = Arc::clone(&shared);
/// ui.store(ParameterId::AmpScale, 0.25);
///
/// assert_eq!(shared.snapshot().amp_scale, 0.25);
/// ```
#[derive(Debug)]
pub struct SharedParameters {
    cells: [AtomicU64; 9],
}

impl Default for SharedParameters {
    fn default() -> Self {
        Self::new(ParameterSet::default())
    }
}

impl SharedParameters {
    /// Creates cells holding `initial` as given.
    pub fn new(initial: ParameterSet) -> Self {
        Self {
            cells: ParameterId::ALL.map(|id| AtomicU64::new(initial.get(id).to_bits())),
        }
    }

    /// Stores a control, clamped into its nominal range.
    pub fn store(&self, id: ParameterId, value: f64) {
        let value = id.descriptor().clamp(value);
        self.cells[id.index()].store(value.to_bits(), Ordering::Release);
    }

    /// Loads a single control.
    pub fn load(&self, id: ParameterId) -> f64 {
        f64::from_bits(self.cells[id.index()].load(Ordering::Acquire))
    }

    /// Reads every control into a snapshot for the next block.
    pub fn snapshot(&self) -> ParameterSet {
        ParameterSet {
            amp_distribution: self.load(ParameterId::AmpDistribution),
            dur_distribution: self.load(ParameterId::DurDistribution),
            amp_shape: self.load(ParameterId::AmpShape),
            dur_shape: self.load(ParameterId::DurShape),
            min_frequency: self.load(ParameterId::MinFrequency),
            max_frequency: self.load(ParameterId::MaxFrequency),
            amp_scale: self.load(ParameterId::AmpScale),
            dur_scale: self.load(ParameterId::DurScale),
            control_points: self.load(ParameterId::ControlPoints),
        }
    }
}
