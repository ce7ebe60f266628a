//! Numeric constants, generic over the floating-point type.

use num_traits::{Float, FloatConst};

/// Euler's number.
#[must_use]
pub fn e<F: Float + FloatConst>() -> F {
    F::E()
}

/// The ratio of a circle's circumference to its diameter.
#[must_use]
pub fn pi<F: Float + FloatConst>() -> F {
    F::PI()
}

/// `pi / 2`.
#[must_use]
pub fn half_pi<F: Float + FloatConst>() -> F {
    F::FRAC_PI_2()
}

/// `pi / 3`.
#[must_use]
pub fn third_pi<F: Float + FloatConst>() -> F {
    F::FRAC_PI_3()
}

/// `pi / 4`.
#[must_use]
pub fn quarter_pi<F: Float + FloatConst>() -> F {
    F::FRAC_PI_4()
}

/// `2 * pi`.
#[must_use]
pub fn two_pi<F: Float + FloatConst>() -> F {
    F::TAU()
}

/// The circle constant, `2 * pi`.
#[must_use]
pub fn tau<F: Float + FloatConst>() -> F {
    F::TAU()
}

/// Radians per degree.
#[must_use]
pub fn degree<F: Float + FloatConst>() -> F {
    F::one().to_radians()
}

/// Degrees per radian.
#[must_use]
pub fn radian<F: Float + FloatConst>() -> F {
    F::one().to_degrees()
}
