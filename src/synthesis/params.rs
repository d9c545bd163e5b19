//! Synthesis parameters.
//!
//! The engine reads a [`ParameterSet`] snapshot once per block ("k-rate").
//! Each control is described by a [`ParameterDescriptor`] carrying its
//! identifier, default and nominal range.

use std::fmt;
use std::str::FromStr;

use super::distribution::{Distribution, MAX_SHAPE, MIN_SHAPE};
use crate::error::GendynError;

/// How often a parameter is sampled by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutomationRate {
    /// Once per rendered block.
    KRate,
}

/// Static description of a synthesis control.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDescriptor {
    pub name: &'static str,
    pub default: f64,
    pub min: f64,
    pub max: f64,
    pub rate: AutomationRate,
}

impl ParameterDescriptor {
    /// Clamps `value` into the nominal range.
    ///
    /// Non-finite values are replaced by the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_finite() {
            value.clamp(self.min, self.max)
        } else {
            self.default
        }
    }
}

/// Identifies one of the nine synthesis controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterId {
    AmpDistribution,
    DurDistribution,
    AmpShape,
    DurShape,
    MinFrequency,
    MaxFrequency,
    AmpScale,
    DurScale,
    ControlPoints,
}

impl ParameterId {
    pub const ALL: [ParameterId; 9] = [
        ParameterId::AmpDistribution,
        ParameterId::DurDistribution,
        ParameterId::AmpShape,
        ParameterId::DurShape,
        ParameterId::MinFrequency,
        ParameterId::MaxFrequency,
        ParameterId::AmpScale,
        ParameterId::DurScale,
        ParameterId::ControlPoints,
    ];

    /// Position of this control in [`ParameterId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The descriptor for this control.
    pub const fn descriptor(self) -> ParameterDescriptor {
        const fn k(name: &'static str, default: f64, min: f64, max: f64) -> ParameterDescriptor {
            ParameterDescriptor {
                name,
                default,
                min,
                max,
                rate: AutomationRate::KRate,
            }
        }

        match self {
            ParameterId::AmpDistribution => k("ampDist", 1.0, 0.0, 6.0),
            ParameterId::DurDistribution => k("durDist", 1.0, 0.0, 6.0),
            ParameterId::AmpShape => k("adparam", 0.9, MIN_SHAPE, MAX_SHAPE),
            ParameterId::DurShape => k("ddparam", 0.9, MIN_SHAPE, MAX_SHAPE),
            ParameterId::MinFrequency => k("minfreq", 20.0, 1.0, 20000.0),
            ParameterId::MaxFrequency => k("maxfreq", 1000.0, 1.0, 20000.0),
            ParameterId::AmpScale => k("ampscale", 0.5, 0.0, 1.0),
            ParameterId::DurScale => k("durscale", 0.5, 0.0, 1.0),
            ParameterId::ControlPoints => k("knum", 12.0, 1.0, 32.0),
        }
    }

    /// The control's identifier as used by the control layer.
    pub const fn name(self) -> &'static str {
        self.descriptor().name
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ParameterId {
    type Err = GendynError;

    /// Looks a control up by its identifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use gendyn::ParameterId;
    ///
    /// let id: ParameterId = "knum".parse().unwrap();
    /// assert_eq!(id, ParameterId::ControlPoints);
    /// assert!("volume".parse::<ParameterId>().is_err());
    /// ```
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        ParameterId::ALL
            .into_iter()
            .find(|id| id.name() == name)
            .ok_or_else(|| GendynError::UnknownParameter(name.to_string()))
    }
}

/// A snapshot of every synthesis control, read once per block.
///
/// Fields are public so a host can build any snapshot directly; the engine
/// tolerates out-of-range values (shapes, counts and kinds are clamped or
/// fall back). [`ParameterSet::set`] applies the nominal ranges instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    /// Amplitude distribution selector (0..=6).
    pub amp_distribution: f64,
    /// Duration distribution selector (0..=6).
    pub dur_distribution: f64,
    /// Amplitude distribution shape.
    pub amp_shape: f64,
    /// Duration distribution shape.
    pub dur_shape: f64,
    /// Lowest segment-cycle frequency in Hz.
    pub min_frequency: f64,
    /// Highest segment-cycle frequency in Hz.
    pub max_frequency: f64,
    /// Amplitude perturbation scale.
    pub amp_scale: f64,
    /// Duration perturbation scale.
    pub dur_scale: f64,
    /// Requested number of active breakpoints.
    pub control_points: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            amp_distribution: ParameterId::AmpDistribution.descriptor().default,
            dur_distribution: ParameterId::DurDistribution.descriptor().default,
            amp_shape: ParameterId::AmpShape.descriptor().default,
            dur_shape: ParameterId::DurShape.descriptor().default,
            min_frequency: ParameterId::MinFrequency.descriptor().default,
            max_frequency: ParameterId::MaxFrequency.descriptor().default,
            amp_scale: ParameterId::AmpScale.descriptor().default,
            dur_scale: ParameterId::DurScale.descriptor().default,
            control_points: ParameterId::ControlPoints.descriptor().default,
        }
    }
}

impl ParameterSet {
    fn slot_mut(&mut self, id: ParameterId) -> &mut f64 {
        match id {
            ParameterId::AmpDistribution => &mut self.amp_distribution,
            ParameterId::DurDistribution => &mut self.dur_distribution,
            ParameterId::AmpShape => &mut self.amp_shape,
            ParameterId::DurShape => &mut self.dur_shape,
            ParameterId::MinFrequency => &mut self.min_frequency,
            ParameterId::MaxFrequency => &mut self.max_frequency,
            ParameterId::AmpScale => &mut self.amp_scale,
            ParameterId::DurScale => &mut self.dur_scale,
            ParameterId::ControlPoints => &mut self.control_points,
        }
    }

    /// Reads a control.
    pub fn get(&self, id: ParameterId) -> f64 {
        match id {
            ParameterId::AmpDistribution => self.amp_distribution,
            ParameterId::DurDistribution => self.dur_distribution,
            ParameterId::AmpShape => self.amp_shape,
            ParameterId::DurShape => self.dur_shape,
            ParameterId::MinFrequency => self.min_frequency,
            ParameterId::MaxFrequency => self.max_frequency,
            ParameterId::AmpScale => self.amp_scale,
            ParameterId::DurScale => self.dur_scale,
            ParameterId::ControlPoints => self.control_points,
        }
    }

    /// Writes a control, clamped into its nominal range.
    ///
    /// # Examples
    ///
    /// ```
    /// use gendyn::{ParameterId, ParameterSet};
    ///
    /// let mut params = ParameterSet::default();
    /// params.set(ParameterId::MaxFrequency, 50000.0);
    /// assert_eq!(params.max_frequency, 20000.0);
    /// ```
    pub fn set(&mut self, id: ParameterId, value: f64) {
        *self.slot_mut(id) = id.descriptor().clamp(value);
    }

    /// Builder-style [`ParameterSet::set`].
    pub fn with(mut self, id: ParameterId, value: f64) -> Self {
        self.set(id, value);
        self
    }

    /// The amplitude distribution, with out-of-range selectors mapped to
    /// [`Distribution::Linear`].
    pub fn amp_distribution(&self) -> Distribution {
        Distribution::from_selector(self.amp_distribution)
    }

    /// The duration distribution, with out-of-range selectors mapped to
    /// [`Distribution::Linear`].
    pub fn dur_distribution(&self) -> Distribution {
        Distribution::from_selector(self.dur_distribution)
    }

    /// Resolves the requested control-point count against a memory
    /// capacity. Counts outside `[1, capacity]` use the full capacity.
    pub fn active_count(&self, capacity: usize) -> usize {
        let requested = if self.control_points.is_finite() {
            self.control_points.floor()
        } else {
            0.0
        };
        if requested < 1.0 || requested > capacity as f64 {
            capacity
        } else {
            requested as usize
        }
    }

    /// Replaces non-finite fields with their defaults and bounds the
    /// frequency range to `[0, max]` of its descriptor, so every derived
    /// quantity stays finite and non-negative.
    pub fn sanitized(&self) -> Self {
        let mut out = *self;
        for id in ParameterId::ALL {
            let slot = out.slot_mut(id);
            if !slot.is_finite() {
                *slot = id.descriptor().default;
            }
        }
        for id in [ParameterId::MinFrequency, ParameterId::MaxFrequency] {
            let max = id.descriptor().max;
            let slot = out.slot_mut(id);
            *slot = slot.clamp(0.0, max);
        }
        out
    }
}
