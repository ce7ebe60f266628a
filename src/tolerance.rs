use crate::scalar::Scalar;

/// Approximate equality within a caller-supplied absolute tolerance.
///
/// Exact floating-point equality is unreliable after arithmetic, so every
/// geometric type also offers this comparison. Each corresponding scalar
/// component must differ by no more than `tolerance`; the difference is
/// computed in the promoted floating-point type, so integer operands far
/// apart never wrap. Composite types delegate to their fields. There is no
/// relative-tolerance mode — callers needing one must pre-scale their
/// values.
///
/// The comparison is reflexive (for non-NaN values), symmetric, and
/// monotonic in the tolerance: if two values are equal within `t`, they are
/// equal within every `t' >= t`.
pub trait ToleranceEq {
    /// Scalar type of the tolerance bound.
    type Tolerance: Scalar;

    /// Returns `true` iff every component of `self` and `other` differs by
    /// no more than `tolerance`.
    fn eq_within(&self, other: &Self, tolerance: Self::Tolerance) -> bool;
}

impl<T: Scalar> ToleranceEq for T {
    type Tolerance = T;

    #[inline]
    fn eq_within(&self, other: &Self, tolerance: T) -> bool {
        self.abs_diff(*other) <= tolerance.to_float()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_within_tolerance() {
        assert!(1.0_f64.eq_within(&1.05, 0.1));
        assert!(1.05_f64.eq_within(&1.0, 0.1));
        assert!(!1.0_f64.eq_within(&1.2, 0.1));
    }

    #[test]
    fn zero_tolerance_is_exact_equality() {
        assert!(3_i32.eq_within(&3, 0));
        assert!(!3_i32.eq_within(&4, 0));
    }

    #[test]
    fn monotonic_in_tolerance() {
        let (a, b) = (2.0_f64, 2.3_f64);
        assert!(a.eq_within(&b, 0.3));
        assert!(a.eq_within(&b, 0.5));
        assert!(a.eq_within(&b, 10.0));
    }

    #[test]
    fn unsigned_operands_never_underflow() {
        assert!(3_u8.eq_within(&5, 2));
        assert!(!250_u8.eq_within(&2, 10));
    }

    #[test]
    fn signed_extremes_never_wrap() {
        assert!(!(-128_i8).eq_within(&127, 1));
        assert!(!(-128_i8).eq_within(&127, 127));
        assert!((-128_i8).eq_within(&-120, 10));
    }

    #[test]
    fn nan_is_never_within_tolerance() {
        assert!(!f64::NAN.eq_within(&f64::NAN, 1.0));
        assert!(!1.0_f64.eq_within(&f64::NAN, 1.0));
    }
}
