use std::fmt;

use num_traits::{Float, FloatConst, Num, NumAssign, NumCast};

/// A numeric element type usable inside the geometric primitives.
///
/// Implemented for the primitive integers (`i8` through `i64`, `u8` through
/// `u64`) and floats (`f32`, `f64`). The trait is deliberately not blanket
/// implemented; the promotion tables below enumerate exactly this set.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Num
    + NumCast
    + NumAssign
    + Promote<Self, Output = Self>
    + FloatPromote
    + 'static
{
    /// Absolute difference, computed in the promoted floating-point type so
    /// unsigned operands cannot underflow and signed extremes cannot wrap.
    ///
    /// A NaN operand yields NaN, so tolerance comparisons built on this
    /// reject NaN components.
    #[inline]
    #[must_use]
    fn abs_diff(self, other: Self) -> FloatOf<Self> {
        let a = self.to_float();
        let b = other.to_float();
        if a > b {
            a - b
        } else {
            b - a
        }
    }
}

/// Binary numeric promotion: the result type of an arithmetic operation
/// between `Self` and `U`.
///
/// The mapping is commutative (`Promoted<T, U>` = `Promoted<U, T>`),
/// idempotent (`Promoted<T, T>` = `T`), and monotonic in precision:
///
/// - two integers promote to the wider of the two; equal widths with mixed
///   signedness promote to the unsigned type of that width,
/// - any pair involving a float promotes to a float at least as wide as the
///   widest operand, and never narrower than `f32`.
pub trait Promote<U = Self> {
    /// The common promoted type.
    type Output: Scalar;

    /// Widens `self` to the promoted type. Total; never fails.
    #[must_use]
    fn promote(self) -> Self::Output;
}

/// Unary promotion to a floating-point type suitable for derived quantities
/// such as magnitudes, distances, areas, and angles.
///
/// Every integer maps to `f64` so that products of large components neither
/// overflow nor truncate; floats map to themselves.
pub trait FloatPromote {
    /// The promoted floating-point type.
    type Float: Scalar + Float + FloatConst + FloatPromote<Float = Self::Float>;

    /// Converts `self` to the promoted float type. Total; never fails.
    #[must_use]
    fn to_float(self) -> Self::Float;
}

/// Scalars that already are floating point, i.e. their own float promotion.
///
/// Blanket-implemented; in practice this means `f32` and `f64`. Operations
/// that only make sense on floats (in-place normalization, interpolation)
/// are bounded on this trait.
pub trait FloatScalar: Scalar + Float + FloatConst + FloatPromote<Float = Self> {}

impl<F> FloatScalar for F where F: Scalar + Float + FloatConst + FloatPromote<Float = Self> {}

/// The result type of an arithmetic operation between `T` and `U`.
pub type Promoted<T, U = T> = <T as Promote<U>>::Output;

/// The floating-point type derived quantities of `T` are expressed in.
pub type FloatOf<T> = <T as FloatPromote>::Float;

macro_rules! impl_scalar {
    ($($t:ty => $f:ty),* $(,)?) => {$(
        impl Scalar for $t {}

        impl FloatPromote for $t {
            type Float = $f;

            #[inline]
            #[allow(clippy::cast_precision_loss)]
            fn to_float(self) -> $f {
                self as $f
            }
        }
    )*};
}

impl_scalar!(
    i8 => f64,
    i16 => f64,
    i32 => f64,
    i64 => f64,
    u8 => f64,
    u16 => f64,
    u32 => f64,
    u64 => f64,
    f32 => f32,
    f64 => f64,
);

macro_rules! impl_promote {
    ($t:ty => { $($u:ty => $o:ty),* $(,)? }) => {$(
        impl Promote<$u> for $t {
            type Output = $o;

            #[inline]
            #[allow(
                clippy::cast_sign_loss,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss
            )]
            fn promote(self) -> $o {
                self as $o
            }
        }
    )*};
}

impl_promote!(i8 => {
    i8 => i8, i16 => i16, i32 => i32, i64 => i64,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64,
    f32 => f32, f64 => f64,
});

impl_promote!(i16 => {
    i8 => i16, i16 => i16, i32 => i32, i64 => i64,
    u8 => i16, u16 => u16, u32 => u32, u64 => u64,
    f32 => f32, f64 => f64,
});

impl_promote!(i32 => {
    i8 => i32, i16 => i32, i32 => i32, i64 => i64,
    u8 => i32, u16 => i32, u32 => u32, u64 => u64,
    f32 => f32, f64 => f64,
});

impl_promote!(i64 => {
    i8 => i64, i16 => i64, i32 => i64, i64 => i64,
    u8 => i64, u16 => i64, u32 => i64, u64 => u64,
    f32 => f64, f64 => f64,
});

impl_promote!(u8 => {
    i8 => u8, i16 => i16, i32 => i32, i64 => i64,
    u8 => u8, u16 => u16, u32 => u32, u64 => u64,
    f32 => f32, f64 => f64,
});

impl_promote!(u16 => {
    i8 => u16, i16 => u16, i32 => i32, i64 => i64,
    u8 => u16, u16 => u16, u32 => u32, u64 => u64,
    f32 => f32, f64 => f64,
});

impl_promote!(u32 => {
    i8 => u32, i16 => u32, i32 => u32, i64 => i64,
    u8 => u32, u16 => u32, u32 => u32, u64 => u64,
    f32 => f32, f64 => f64,
});

impl_promote!(u64 => {
    i8 => u64, i16 => u64, i32 => u64, i64 => u64,
    u8 => u64, u16 => u64, u32 => u64, u64 => u64,
    f32 => f64, f64 => f64,
});

impl_promote!(f32 => {
    i8 => f32, i16 => f32, i32 => f32, i64 => f64,
    u8 => f32, u16 => f32, u32 => f32, u64 => f64,
    f32 => f32, f64 => f64,
});

impl_promote!(f64 => {
    i8 => f64, i16 => f64, i32 => f64, i64 => f64,
    u8 => f64, u16 => f64, u32 => f64, u64 => f64,
    f32 => f64, f64 => f64,
});

#[cfg(test)]
mod tests {
    use super::*;
    use std::any::TypeId;

    macro_rules! check_pairs {
        ($t:ty; $($u:ty),+) => {$(
            assert_eq!(
                TypeId::of::<Promoted<$t, $u>>(),
                TypeId::of::<Promoted<$u, $t>>(),
                "promotion of {} and {} is not commutative",
                stringify!($t),
                stringify!($u),
            );
        )+};
    }

    macro_rules! check_all_pairs {
        ($($t:ty),+) => {$(
            check_pairs!($t; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
        )+};
    }

    #[test]
    fn promotion_is_commutative() {
        check_all_pairs!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
    }

    macro_rules! check_idempotent {
        ($($t:ty),+) => {$(
            assert_eq!(
                TypeId::of::<Promoted<$t>>(),
                TypeId::of::<$t>(),
                "promotion of {} with itself is not idempotent",
                stringify!($t),
            );
        )+};
    }

    #[test]
    fn promotion_is_idempotent() {
        check_idempotent!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
    }

    #[test]
    fn integers_promote_to_the_wider_type() {
        assert_eq!(TypeId::of::<Promoted<i8, i64>>(), TypeId::of::<i64>());
        assert_eq!(TypeId::of::<Promoted<u8, i32>>(), TypeId::of::<i32>());
        assert_eq!(TypeId::of::<Promoted<i32, u32>>(), TypeId::of::<u32>());
    }

    #[test]
    fn floats_dominate_integers() {
        assert_eq!(TypeId::of::<Promoted<i32, f32>>(), TypeId::of::<f32>());
        assert_eq!(TypeId::of::<Promoted<i64, f32>>(), TypeId::of::<f64>());
        assert_eq!(TypeId::of::<Promoted<f32, f64>>(), TypeId::of::<f64>());
    }

    #[test]
    fn promote_widens_values() {
        let wide: Promoted<i32, f32> = Promote::<f32>::promote(3_i32);
        assert!((wide - 3.0).abs() < f32::EPSILON);

        let wide: Promoted<i16, i64> = Promote::<i64>::promote(-7_i16);
        assert_eq!(wide, -7_i64);
    }

    #[test]
    fn unary_promotion_reaches_a_float() {
        assert_eq!(TypeId::of::<FloatOf<i32>>(), TypeId::of::<f64>());
        assert_eq!(TypeId::of::<FloatOf<u64>>(), TypeId::of::<f64>());
        assert_eq!(TypeId::of::<FloatOf<f32>>(), TypeId::of::<f32>());
        assert!((3_i32.to_float() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn abs_diff_never_underflows() {
        assert!((Scalar::abs_diff(2_u8, 250) - 248.0).abs() < f64::EPSILON);
        assert!((Scalar::abs_diff(250_u8, 2) - 248.0).abs() < f64::EPSILON);
        assert!((Scalar::abs_diff(1.5_f64, 1.25) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn abs_diff_spans_the_signed_range() {
        assert!((Scalar::abs_diff(-128_i8, 127) - 255.0).abs() < f64::EPSILON);
        assert!((Scalar::abs_diff(127_i8, -128) - 255.0).abs() < f64::EPSILON);
    }
}
