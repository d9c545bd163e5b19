//! Injectable source of uniform random numbers.

use rand::Rng;

/// A source of uniformly distributed samples in `[0.0, 1.0)`.
///
/// Stochastic generators draw their randomness through this trait instead of
/// calling a global generator, so a test can substitute a fixed sequence
/// without touching the synthesis code. Every `rand::Rng` is a
/// `UniformSource`.
///
/// # Examples
///
/// ```
/// use gendyn::UniformSource;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let u = rng.next_uniform();
/// assert!((0.0..1.0).contains(&u));
/// ```
pub trait UniformSource {
    /// Returns the next sample, in `[0.0, 1.0)`.
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng + ?Sized> UniformSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}
