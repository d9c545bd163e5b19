//! Perturbation distributions for dynamic stochastic synthesis.
//!
//! Each distribution is a closed-form remapping of a uniform sample
//! `u ∈ [0, 1)` into a shaped value in roughly `[-1, 1]`. The shape
//! parameter `a` controls the steepness of the curve and is clamped to
//! `[0.0001, 1.0]` before use. The exact transcendental expressions matter:
//! the timbre of the synthesis follows their curvature.

use std::f64::consts::PI;

/// Smallest accepted shape parameter.
pub const MIN_SHAPE: f64 = 0.0001;
/// Largest accepted shape parameter.
pub const MAX_SHAPE: f64 = 1.0;

/// The probability distribution used to perturb a breakpoint.
///
/// Kinds are numbered 0 through 6 to match the control layer's integer
/// selector; see [`Distribution::from_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Distribution {
    /// Identity remap, `2u - 1`.
    #[default]
    Linear,
    /// Tangent-shaped distribution with heavy tails.
    Cauchy,
    /// Inverse logistic curve.
    Logistic,
    /// Log-tangent curve (hyperbolic cosine family).
    HyperbolicCosine,
    /// Sine-shaped remap concentrating values near the edges.
    Arcsine,
    /// Logarithmic curve concentrating values near one edge.
    Exponential,
    /// Constant `2a - 1`.
    ///
    /// This kind ignores the uniform sample entirely, so perturbations with
    /// it are not stochastic: every draw shifts the breakpoint by the same
    /// amount.
    Sinus,
}

impl Distribution {
    /// All kinds, in selector order.
    pub const ALL: [Distribution; 7] = [
        Distribution::Linear,
        Distribution::Cauchy,
        Distribution::Logistic,
        Distribution::HyperbolicCosine,
        Distribution::Arcsine,
        Distribution::Exponential,
        Distribution::Sinus,
    ];

    /// Maps an integer selector to a distribution.
    ///
    /// Any selector outside `0..=6` falls back to [`Distribution::Linear`].
    ///
    /// # Examples
    ///
    /// ```
    /// use gendyn::Distribution;
    ///
    /// assert_eq!(Distribution::from_index(1), Distribution::Cauchy);
    /// assert_eq!(Distribution::from_index(42), Distribution::Linear);
    /// assert_eq!(Distribution::from_index(-1), Distribution::Linear);
    /// ```
    pub fn from_index(index: i64) -> Self {
        match index {
            1 => Distribution::Cauchy,
            2 => Distribution::Logistic,
            3 => Distribution::HyperbolicCosine,
            4 => Distribution::Arcsine,
            5 => Distribution::Exponential,
            6 => Distribution::Sinus,
            _ => Distribution::Linear,
        }
    }

    /// Maps a continuous selector (as delivered by a parameter cell) to a
    /// distribution by flooring it first. Non-finite selectors map to
    /// [`Distribution::Linear`].
    pub fn from_selector(selector: f64) -> Self {
        if selector.is_finite() {
            Self::from_index(selector.floor() as i64)
        } else {
            Distribution::Linear
        }
    }

    /// The integer selector of this kind.
    pub fn index(self) -> i64 {
        match self {
            Distribution::Linear => 0,
            Distribution::Cauchy => 1,
            Distribution::Logistic => 2,
            Distribution::HyperbolicCosine => 3,
            Distribution::Arcsine => 4,
            Distribution::Exponential => 5,
            Distribution::Sinus => 6,
        }
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        match self {
            Distribution::Linear => "linear",
            Distribution::Cauchy => "cauchy",
            Distribution::Logistic => "logistic",
            Distribution::HyperbolicCosine => "hyperbcos",
            Distribution::Arcsine => "arcsine",
            Distribution::Exponential => "expon",
            Distribution::Sinus => "sinus",
        }
    }

    /// Remaps a uniform sample through this distribution.
    ///
    /// # Arguments
    ///
    /// * `shape` - Shape parameter, clamped to `[0.0001, 1.0]`
    /// * `uniform` - Uniform sample in `[0.0, 1.0)`
    ///
    /// # Returns
    ///
    /// A shaped value in roughly `[-1.0, 1.0]`
    ///
    /// # Examples
    ///
    /// ```
    /// use gendyn::Distribution;
    ///
    /// assert_eq!(Distribution::Linear.sample(0.5, 0.75), 0.5);
    /// // The sinus kind only looks at the shape.
    /// assert_eq!(Distribution::Sinus.sample(0.75, 0.1), 0.5);
    /// ```
    #[inline]
    pub fn sample(self, shape: f64, uniform: f64) -> f64 {
        // max/min rather than clamp: a NaN shape collapses to MIN_SHAPE
        let a = shape.max(MIN_SHAPE).min(MAX_SHAPE);
        let f = uniform;

        match self {
            Distribution::Linear => 2.0 * f - 1.0,
            Distribution::Cauchy => {
                let c = (10.0 * a).atan();
                (1.0 / a) * (c * (2.0 * f - 1.0)).tan() * 0.1
            }
            Distribution::Logistic => {
                let c = 0.5 + 0.499 * a;
                let c = ((1.0 - c) / c).ln();
                let f = (f - 0.5) * 0.998 * a + 0.5;
                ((1.0 - f) / f).ln() / c
            }
            Distribution::HyperbolicCosine => {
                let c = (1.5692255 * a).tan();
                let temp = (1.5692255 * a * f).tan() / c;
                let temp = (temp * 0.999 + 0.001).ln() * -0.1447648;
                2.0 * temp - 1.0
            }
            Distribution::Arcsine => {
                let c = (1.5707963 * a).sin();
                (PI * (f - 0.5) * a).sin() / c
            }
            Distribution::Exponential => {
                let c = (1.0 - 0.999 * a).ln();
                let temp = (1.0 - f * 0.999 * a).ln() / c;
                2.0 * temp - 1.0
            }
            Distribution::Sinus => 2.0 * a - 1.0,
        }
    }
}
