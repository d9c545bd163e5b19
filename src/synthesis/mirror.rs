//! Boundary reflection ("mirroring") for breakpoint values.
//!
//! Perturbed breakpoints that leave their interval are folded back into it
//! instead of being clamped, so the random walk keeps a continuous
//! trajectory rather than sticking to the boundary.

/// Folds an amplitude into `[-1.0, 1.0]` using period-4 reflection.
///
/// Values already in range are returned unchanged. Non-finite values map
/// to `0.0`.
///
/// # Examples
///
/// ```
/// use gendyn::mirror::mirror_amplitude;
///
/// assert_eq!(mirror_amplitude(0.5), 0.5);
/// assert_eq!(mirror_amplitude(1.25), 0.75);
/// assert_eq!(mirror_amplitude(-1.25), -0.75);
/// ```
#[inline]
pub fn mirror_amplitude(value: f64) -> f64 {
    if (-1.0..=1.0).contains(&value) {
        return value;
    }
    if !value.is_finite() {
        return 0.0;
    }

    let folded = value.rem_euclid(4.0);
    if folded > 1.0 && folded < 3.0 {
        2.0 - folded
    } else if folded > 1.0 {
        folded - 4.0
    } else {
        folded
    }
}

/// Folds a duration into `[0.0, 1.0]` using period-2 reflection.
///
/// Values already in range are returned unchanged. Non-finite values map
/// to `0.0`.
///
/// # Examples
///
/// ```
/// use gendyn::mirror::mirror_duration;
///
/// assert_eq!(mirror_duration(0.5), 0.5);
/// assert_eq!(mirror_duration(1.25), 0.75);
/// assert_eq!(mirror_duration(-0.25), 0.25);
/// ```
#[inline]
pub fn mirror_duration(value: f64) -> f64 {
    if (0.0..=1.0).contains(&value) {
        return value;
    }
    if !value.is_finite() {
        return 0.0;
    }

    let folded = value.rem_euclid(2.0);
    // rounding in rem_euclid must not leak out of [0, 1]
    let reflected = if folded > 1.0 { 2.0 - folded } else { folded };
    reflected.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Single-shift reflection: shift negatives by one period, then take `%`.
    /// Only valid for amplitudes >= -5.
    fn shift_fold_amplitude(mut v: f64) -> f64 {
        if v > 1.0 || v < -1.0 {
            if v < 0.0 {
                v += 4.0;
            }
            v %= 4.0;
            if v > 1.0 && v < 3.0 {
                v = 2.0 - v;
            } else if v > 1.0 {
                v -= 4.0;
            }
        }
        v
    }

    /// Single-shift duration reflection. Only valid for durations in [-1, 2).
    fn shift_fold_duration(mut v: f64) -> f64 {
        if v > 1.0 || v < 0.0 {
            if v < 0.0 {
                v += 2.0;
            }
            v %= 2.0;
            v = 2.0 - v;
        }
        v
    }

    #[test]
    fn test_in_range_values_unchanged() {
        for v in [-1.0, -0.3, 0.0, 0.7, 1.0] {
            assert_eq!(mirror_amplitude(v), v);
        }
        for v in [0.0, 0.3, 1.0] {
            assert_eq!(mirror_duration(v), v);
        }
    }

    #[test]
    fn test_amplitude_reflects_at_edges() {
        assert!((mirror_amplitude(1.5) - 0.5).abs() < 1e-12);
        assert!((mirror_amplitude(-1.5) + 0.5).abs() < 1e-12);
        assert!((mirror_amplitude(2.5) + 0.5).abs() < 1e-12);
        assert!((mirror_amplitude(3.5) + 0.5).abs() < 1e-12);
        assert!((mirror_amplitude(4.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_duration_reflects_at_edges() {
        assert!((mirror_duration(1.5) - 0.5).abs() < 1e-12);
        assert!((mirror_duration(-0.5) - 0.5).abs() < 1e-12);
        assert!((mirror_duration(2.5) - 0.5).abs() < 1e-12);
        assert!((mirror_duration(-1.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_matches_single_shift_fold_within_its_domain() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..10000 {
            let amp = rng.gen_range(-5.0..5.0);
            assert!((mirror_amplitude(amp) - shift_fold_amplitude(amp)).abs() < 1e-12);

            let dur = rng.gen_range(-1.0..2.0);
            assert!((mirror_duration(dur) - shift_fold_duration(dur)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_adversarial_candidates_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10000 {
            let magnitude = 10f64.powf(rng.gen_range(0.0..12.0));
            let candidate = if rng.gen_bool(0.5) { -magnitude } else { magnitude };

            let amp = mirror_amplitude(candidate);
            assert!((-1.0..=1.0).contains(&amp), "{} -> {}", candidate, amp);

            let dur = mirror_duration(candidate);
            assert!((0.0..=1.0).contains(&dur), "{} -> {}", candidate, dur);
        }
    }

    #[test]
    fn test_tiny_negative_duration() {
        let dur = mirror_duration(-1e-300);
        assert!((0.0..=1.0).contains(&dur));
    }

    #[test]
    fn test_non_finite_maps_to_zero() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(mirror_amplitude(v), 0.0);
            assert_eq!(mirror_duration(v), 0.0);
        }
    }

    #[test]
    fn test_reflection_is_continuous_across_boundary() {
        let inside = mirror_amplitude(1.0 - 1e-9);
        let outside = mirror_amplitude(1.0 + 1e-9);
        assert!((inside - outside).abs() < 1e-8);

        let inside = mirror_duration(1e-9);
        let outside = mirror_duration(-1e-9);
        assert!((inside - outside).abs() < 1e-8);
    }
}
