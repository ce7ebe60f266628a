//! Small interpolation and range-mapping helpers.

use num_traits::Float;

use crate::scalar::Scalar;

/// Linear interpolation between `start` and `stop` by `amount`.
///
/// `amount` is not clamped; values outside `[0, 1]` extrapolate.
#[inline]
#[must_use]
pub fn lerp<F: Float>(start: F, stop: F, amount: F) -> F {
    start + (stop - start) * amount
}

/// Inverse of [`lerp`]: where `amount` sits in `[start, stop]`, as a factor.
///
/// A zero-width range divides by zero and follows IEEE semantics
/// (infinity or NaN).
#[inline]
#[must_use]
pub fn norm<F: Float>(amount: F, start: F, stop: F) -> F {
    (amount - start) / (stop - start)
}

/// Restricts `value` to the closed range `[min, max]`.
#[inline]
#[must_use]
pub fn clamp<T: Scalar>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Remaps `value` from the range `[min1, max1]` to `[min2, max2]`.
#[inline]
#[must_use]
pub fn map<F: Float>(value: F, min1: F, max1: F, min2: F, max2: F) -> F {
    min2 + (max2 - min2) * ((value - min1) / (max1 - min1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert!((lerp(2.0, 6.0, 0.0) - 2.0).abs() < f64::EPSILON);
        assert!((lerp(2.0, 6.0, 1.0) - 6.0).abs() < f64::EPSILON);
        assert!((lerp(2.0, 6.0, 0.5) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn lerp_extrapolates() {
        assert!((lerp(0.0, 10.0, 1.5) - 15.0).abs() < f64::EPSILON);
        assert!((lerp(0.0, 10.0, -0.5) + 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn norm_is_inverse_of_lerp() {
        let amount = lerp(3.0, 7.0, 0.25);
        assert!((norm(amount, 3.0, 7.0) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn norm_of_zero_width_range() {
        assert!(norm(1.0, 2.0, 2.0).is_infinite());
        assert!(norm(2.0, 2.0, 2.0).is_nan());
    }

    #[test]
    fn clamp_works_for_integers_and_floats() {
        assert_eq!(clamp(5_i32, 0, 3), 3);
        assert_eq!(clamp(-1_i32, 0, 3), 0);
        assert_eq!(clamp(2_i32, 0, 3), 2);
        assert!((clamp(0.5_f64, 0.0, 1.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn map_between_ranges() {
        let mapped = map(5.0, 0.0, 10.0, 100.0, 200.0);
        assert!((mapped - 150.0).abs() < 1e-12);
    }
}
