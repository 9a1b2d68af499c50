//! Small numeric helpers shared by the curve and color code.

use num_traits::Float;

/// Linear interpolation between `min` and `max`.
///
/// `t` is not clamped.
#[inline]
pub fn lerp<S: Float>(t: S, min: S, max: S) -> S {
    min + (max - min) * t
}

/// Inverse of `lerp`: where `value` sits between `min` and `max`.
#[inline]
pub fn inverse_lerp<S: Float>(value: S, min: S, max: S) -> S {
    if max == min {
        return S::zero();
    }
    (value - min) / (max - min)
}

#[inline]
pub fn clamp<S: Float>(value: S, min: S, max: S) -> S {
    max.min(min.max(value))
}

/// Triangular interpolation.
///
/// Two linear pieces joined at `peak`: the value goes from `min` to `peak`
/// and then from `peak` to `max`. The position of the peak along `t` is
/// proportional to the distances `|peak - min|` and `|peak - max|`.
pub fn tri_lerp<S: Float>(t: S, min: S, max: S, peak: S) -> S {
    let rise = (peak - min).abs();
    let fall = (peak - max).abs();
    if rise + fall == S::zero() {
        return peak;
    }

    let x = rise / (rise + fall);
    if t <= x && x > S::zero() {
        min - (min - peak) * (t / x)
    } else {
        peak - (peak - max) * ((t - x) / (S::one() - x))
    }
}

#[inline]
pub fn min_max<S: Float>(a: S, b: S) -> (S, S) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[inline]
pub fn to_radians<S: Float>(degrees: S) -> S {
    degrees.to_radians()
}

#[inline]
pub fn to_degrees<S: Float>(radians: S) -> S {
    radians.to_degrees()
}

#[test]
fn tri_lerp_reaches_the_peak() {
    // |peak - min| = 10, |peak - max| = 30, so the peak sits at t = 0.25.
    assert!((tri_lerp(0.0, 0.0, 40.0, 10.0) - 0.0).abs() < 1e-12);
    assert!((tri_lerp(0.125, 0.0, 40.0, 10.0) - 5.0).abs() < 1e-12);
    assert!((tri_lerp(0.25, 0.0, 40.0, 10.0) - 10.0).abs() < 1e-12);
    assert!((tri_lerp(0.625, 0.0, 40.0, 10.0) - 25.0).abs() < 1e-12);
    assert!((tri_lerp(1.0, 0.0, 40.0, 10.0) - 40.0).abs() < 1e-12);

    // A peak below both ends.
    assert!((tri_lerp(0.5, 10.0, 10.0, 0.0) - 0.0).abs() < 1e-12);
    assert!((tri_lerp(0.75, 10.0, 10.0, 0.0) - 5.0).abs() < 1e-12);
}

#[test]
fn tri_lerp_degenerate_peaks() {
    // Peak equal to the start: only the falling piece remains.
    assert!((tri_lerp(0.5, 0.0, 10.0, 0.0) - 5.0).abs() < 1e-12);
    // Peak equal to the end: only the rising piece remains.
    assert!((tri_lerp(0.5, 0.0, 10.0, 10.0) - 5.0).abs() < 1e-12);
    // Everything equal.
    assert_eq!(tri_lerp(0.3, 2.0, 2.0, 2.0), 2.0);
}

#[test]
fn lerp_and_clamp() {
    assert_eq!(lerp(0.5, 10.0, 20.0), 15.0);
    assert_eq!(lerp(2.0, 0.0, 1.0), 2.0);
    assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
    assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
    assert_eq!(inverse_lerp(15.0, 10.0, 20.0), 0.5);
    assert_eq!(min_max(3.0, 1.0), (1.0, 3.0));
}
