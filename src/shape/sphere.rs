use std::fmt;

use num_traits::{FloatConst, One};

use crate::scalar::{FloatOf, FloatScalar, Scalar};
use crate::tolerance::ToleranceEq;
use crate::vector::Vector3;

/// A sphere given by center and radius.
///
/// A negative radius is a legal intermediate; [`Sphere::canonicalize`]
/// folds it back to the canonical non-negative form, which describes the
/// same set of points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sphere<T> {
    pub center: Vector3<T>,
    pub radius: T,
}

impl<T: Scalar> Sphere<T> {
    /// Creates a sphere from its center and radius.
    #[inline]
    pub const fn new(center: Vector3<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Overwrites center and radius.
    #[inline]
    pub fn set(&mut self, center: Vector3<T>, radius: T) {
        self.center = center;
        self.radius = radius;
    }

    /// Resets to a zero sphere at the origin.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when the radius is exactly zero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.radius == T::zero()
    }

    /// Twice the radius.
    #[inline]
    #[must_use]
    pub fn diameter(&self) -> FloatOf<T> {
        let radius = self.radius.to_float();
        radius + radius
    }

    /// Length of a great circle, `τ · r`.
    #[inline]
    #[must_use]
    pub fn circumference(&self) -> FloatOf<T> {
        FloatOf::<T>::TAU() * self.radius.to_float()
    }

    /// Surface area, `4 · π · r²`.
    #[inline]
    #[must_use]
    pub fn area(&self) -> FloatOf<T> {
        let radius = self.radius.to_float();
        let two = FloatOf::<T>::one() + FloatOf::<T>::one();
        two * two * FloatOf::<T>::PI() * radius * radius
    }

    /// Enclosed volume, `4/3 · π · r³`.
    #[inline]
    #[must_use]
    pub fn volume(&self) -> FloatOf<T> {
        let radius = self.radius.to_float();
        let one = FloatOf::<T>::one();
        let three = one + one + one;
        let four = three + one;
        four / three * FloatOf::<T>::PI() * radius * radius * radius
    }

    /// Returns `true` when the radius is non-negative.
    #[inline]
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.radius >= T::zero()
    }

    /// Folds a negative radius to its non-negative equivalent in place.
    #[inline]
    pub fn canonicalize(&mut self) {
        if self.radius < T::zero() {
            self.radius = T::zero() - self.radius;
        }
    }

    /// A canonical copy. Idempotent.
    #[inline]
    #[must_use]
    pub fn canonicalized(mut self) -> Self {
        self.canonicalize();
        self
    }

    /// Returns `true` when `point` lies inside or on the sphere.
    #[must_use]
    pub fn contains(&self, point: Vector3<T>) -> bool {
        let radius = self.radius.to_float();
        self.center.distance_squared(point) <= radius * radius
    }
}

impl<F: FloatScalar> Sphere<F> {
    /// The sphere whose diameter is the segment `a -> b`.
    #[must_use]
    pub fn from_diameter(a: Vector3<F>, b: Vector3<F>) -> Self {
        let two = F::one() + F::one();
        let center = (a + b) / two;
        Self::new(center, center.distance(a))
    }
}

impl<T: Scalar> ToleranceEq for Sphere<T> {
    type Tolerance = T;

    #[inline]
    fn eq_within(&self, other: &Self, tolerance: T) -> bool {
        self.center.eq_within(&other.center, tolerance)
            && Scalar::abs_diff(self.radius, other.radius) <= tolerance.to_float()
    }
}

impl<T: Scalar> fmt::Display for Sphere<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {} )", self.center, self.radius)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{PI, TAU};

    #[test]
    fn measurements() {
        let sphere = Sphere::new(Vector3::new(0_i32, 0, 0), 2);
        assert_abs_diff_eq!(sphere.diameter(), 4.0);
        assert_abs_diff_eq!(sphere.circumference(), 2.0 * TAU);
        assert_abs_diff_eq!(sphere.area(), 16.0 * PI);
        assert_abs_diff_eq!(sphere.volume(), 32.0 * PI / 3.0);
    }

    #[test]
    fn containment_is_closed() {
        let sphere = Sphere::new(Vector3::new(0, 0, 0), 3);
        assert!(sphere.contains(Vector3::new(1, 2, 2)));
        assert!(!sphere.contains(Vector3::new(2, 2, 2)));
        assert!(sphere.contains(Vector3::new(3, 0, 0)));
    }

    #[test]
    fn canonicalization_folds_negative_radius() {
        let sphere = Sphere::new(Vector3::new(1, 2, 3), -4);
        let canonical = sphere.canonicalized();
        assert_eq!(canonical, Sphere::new(Vector3::new(1, 2, 3), 4));
        assert!(canonical.is_canonical());
        assert_eq!(canonical.canonicalized(), canonical);
    }

    #[test]
    fn from_diameter() {
        let sphere = Sphere::from_diameter(
            Vector3::new(-1.0, 0.0, 0.0),
            Vector3::new(1.0, 0.0, 0.0),
        );
        assert!(sphere.center.eq_within(&Vector3::default(), 1e-12));
        assert_abs_diff_eq!(sphere.radius, 1.0);
    }

    #[test]
    fn tolerance_equality_covers_radius() {
        let a = Sphere::new(Vector3::new(0.0, 0.0, 0.0), 1.0);
        let b = Sphere::new(Vector3::new(0.0, 0.01, 0.0), 1.02);
        assert!(a.eq_within(&b, 0.05));
        assert!(!a.eq_within(&b, 0.015));
    }

    #[test]
    fn display_format() {
        let sphere = Sphere::new(Vector3::new(1, 2, 3), 4);
        assert_eq!(sphere.to_string(), "( ( 1, 2, 3 ), 4 )");
    }
}
