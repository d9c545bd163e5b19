//! Logarithmic mapping between a normalized control position and a
//! frequency, as used by frequency-range handles.

/// Log-scale frequency range for position-based controls.
///
/// Position `0.0` maps to `min` and `1.0` to `max`, with equal ratios
/// between equal steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyScale {
    min: f64,
    max: f64,
}

impl Default for FrequencyScale {
    fn default() -> Self {
        Self::new(20.0, 5000.0)
    }
}

impl FrequencyScale {
    /// Creates a scale spanning `min..=max` Hz.
    ///
    /// Limits are ordered and floored at 1 Hz so the logarithms stay finite.
    pub fn new(min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: min.max(1.0),
            max: max.max(1.0),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Maps a position in `[0.0, 1.0]` to a frequency rounded to whole Hz.
    ///
    /// # Examples
    ///
    /// ```
    /// use gendyn::FrequencyScale;
    ///
    /// let scale = FrequencyScale::default();
    /// assert_eq!(scale.position_to_frequency(0.0), 20.0);
    /// assert_eq!(scale.position_to_frequency(1.0), 5000.0);
    /// ```
    pub fn position_to_frequency(&self, position: f64) -> f64 {
        let position = position.clamp(0.0, 1.0);
        let min_log = self.min.ln();
        let max_log = self.max.ln();
        (position * (max_log - min_log) + min_log).exp().round()
    }

    /// Maps a frequency to its position in `[0.0, 1.0]`.
    pub fn frequency_to_position(&self, frequency: f64) -> f64 {
        let min_log = self.min.ln();
        let max_log = self.max.ln();
        if max_log == min_log {
            return 0.0;
        }
        ((frequency.max(self.min).ln() - min_log) / (max_log - min_log)).clamp(0.0, 1.0)
    }

    /// Moves `frequency` by `delta` in position units and maps it back.
    pub fn nudge(&self, frequency: f64, delta: f64) -> f64 {
        self.position_to_frequency(self.frequency_to_position(frequency) + delta)
    }

    /// Nudges the low end of a `min..max` range, keeping it at least 1 Hz
    /// below `max` and no lower than the scale's own minimum.
    pub fn nudge_min(&self, min: f64, max: f64, delta: f64) -> f64 {
        self.nudge(min, delta).min(max - 1.0).max(self.min)
    }

    /// Nudges the high end of a `min..max` range, keeping it at least 1 Hz
    /// above `min` and no higher than the scale's own maximum.
    pub fn nudge_max(&self, min: f64, max: f64, delta: f64) -> f64 {
        self.nudge(max, delta).min(self.max).max(min + 1.0)
    }
}
