//! Core signal processing trait.
//!
//! This module provides the fundamental `Signal` trait that represents
//! any audio signal source that can generate samples.

/// Common interface for all signal sources.
///
/// This trait defines the core functionality for anything that can generate
/// audio samples. It provides two operations:
/// - Single sample generation via `next_sample()`
/// - Batch processing via `process()`
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;

    /// Generates multiple samples into a buffer.
    ///
    /// Default implementation calls `next_sample()` for each element.
    /// Implementors may override this for more efficient batch processing.
    ///
    /// # Arguments
    ///
    /// * `buffer` - Mutable slice to fill with samples
    fn process(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ramp {
        value: f64,
    }

    impl Signal for Ramp {
        fn next_sample(&mut self) -> f64 {
            self.value += 0.25;
            self.value
        }
    }

    #[test]
    fn test_default_process_calls_next_sample_in_order() {
        let mut ramp = Ramp { value: 0.0 };
        let mut buffer = [0.0; 4];
        ramp.process(&mut buffer);
        assert_eq!(buffer, [0.25, 0.5, 0.75, 1.0]);
    }
}
