use std::fmt;

use num_traits::FloatConst;

use crate::error::{FiguraError, Result};
use crate::scalar::{FloatOf, FloatScalar, Scalar};
use crate::tolerance::ToleranceEq;
use crate::vector::Vector2;

/// A circle given by center and radius.
///
/// A negative radius is a legal intermediate; [`Circle2::canonicalize`]
/// folds it back to the canonical non-negative form, which describes the
/// same set of points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Circle2<T> {
    pub center: Vector2<T>,
    pub radius: T,
}

impl<T: Scalar> Circle2<T> {
    /// Creates a circle from its center and radius.
    #[inline]
    pub const fn new(center: Vector2<T>, radius: T) -> Self {
        Self { center, radius }
    }

    /// Overwrites center and radius.
    #[inline]
    pub fn set(&mut self, center: Vector2<T>, radius: T) {
        self.center = center;
        self.radius = radius;
    }

    /// Resets to a zero circle at the origin.
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

    /// Perimeter length, `τ · r`.
    #[inline]
    #[must_use]
    pub fn circumference(&self) -> FloatOf<T> {
        FloatOf::<T>::TAU() * self.radius.to_float()
    }

    /// Enclosed area, `π · r²`.
    #[inline]
    #[must_use]
    pub fn area(&self) -> FloatOf<T> {
        let radius = self.radius.to_float();
        FloatOf::<T>::PI() * radius * radius
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

    /// Returns `true` when `point` lies inside or on the circle.
    #[must_use]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        let radius = self.radius.to_float();
        self.center.distance_squared(point) <= radius * radius
    }
}

impl<F: FloatScalar> Circle2<F> {
    /// The circle whose diameter is the segment `a -> b`.
    #[must_use]
    pub fn from_diameter(a: Vector2<F>, b: Vector2<F>) -> Self {
        let two = F::one() + F::one();
        let center = (a + b) / two;
        Self::new(center, center.distance(a))
    }

    /// The circle passing through three points.
    ///
    /// # Errors
    ///
    /// Returns [`FiguraError::Degenerate`] when the points are collinear
    /// (including repeated points), which admits no circumscribed circle.
    pub fn circumscribed(a: Vector2<F>, b: Vector2<F>, c: Vector2<F>) -> Result<Self> {
        let two = F::one() + F::one();
        let d = two * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        if d.is_zero() {
            return Err(FiguraError::Degenerate(
                "collinear points admit no circumscribed circle".into(),
            ));
        }
        let a2 = a.magnitude_squared();
        let b2 = b.magnitude_squared();
        let c2 = c.magnitude_squared();
        let center = Vector2::new(
            (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
            (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
        );
        Ok(Self::new(center, center.distance(a)))
    }
}

impl<T: Scalar> ToleranceEq for Circle2<T> {
    type Tolerance = T;

    #[inline]
    fn eq_within(&self, other: &Self, tolerance: T) -> bool {
        self.center.eq_within(&other.center, tolerance)
            && Scalar::abs_diff(self.radius, other.radius) <= tolerance.to_float()
    }
}

impl<T: Scalar> fmt::Display for Circle2<T> {
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
        let circle = Circle2::new(Vector2::new(0_i32, 0), 2);
        assert_abs_diff_eq!(circle.diameter(), 4.0);
        assert_abs_diff_eq!(circle.circumference(), 2.0 * TAU);
        assert_abs_diff_eq!(circle.area(), 4.0 * PI);
    }

    #[test]
    fn containment_is_closed() {
        let circle = Circle2::new(Vector2::new(0, 0), 5);
        assert!(circle.contains(Vector2::new(3, 4)));
        assert!(!circle.contains(Vector2::new(3, 5)));
        assert!(circle.contains(Vector2::new(5, 0)));
    }

    #[test]
    fn canonicalization_folds_negative_radius() {
        let circle = Circle2::new(Vector2::new(1, 2), -3);
        let canonical = circle.canonicalized();
        assert_eq!(canonical, Circle2::new(Vector2::new(1, 2), 3));
        assert!(canonical.is_canonical());
        assert_eq!(canonical.canonicalized(), canonical);
    }

    #[test]
    fn negative_radius_contains_like_canonical() {
        let circle = Circle2::new(Vector2::new(0, 0), -5);
        assert_eq!(
            circle.contains(Vector2::new(3, 4)),
            circle.canonicalized().contains(Vector2::new(3, 4))
        );
    }

    #[test]
    fn from_diameter() {
        let circle = Circle2::from_diameter(Vector2::new(-1.0, 0.0), Vector2::new(1.0, 0.0));
        assert!(circle.center.eq_within(&Vector2::default(), 1e-12));
        assert_abs_diff_eq!(circle.radius, 1.0);
    }

    #[test]
    fn circumscribed_right_triangle() {
        // The hypotenuse of a right triangle is a diameter.
        let circle = Circle2::circumscribed(
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(0.0, 3.0),
        )
        .unwrap();
        assert!(circle.center.eq_within(&Vector2::new(2.0, 1.5), 1e-12));
        assert_abs_diff_eq!(circle.radius, 2.5);
    }

    #[test]
    fn circumscribed_rejects_collinear_points() {
        let result = Circle2::circumscribed(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(2.0, 2.0),
        );
        assert!(matches!(result, Err(FiguraError::Degenerate(_))));
    }

    #[test]
    fn tolerance_equality_covers_radius() {
        let a = Circle2::new(Vector2::new(0.0, 0.0), 1.0);
        let b = Circle2::new(Vector2::new(0.0, 0.01), 1.02);
        assert!(a.eq_within(&b, 0.05));
        assert!(!a.eq_within(&b, 0.015));
    }

    #[test]
    fn display_format() {
        let circle = Circle2::new(Vector2::new(1, 2), 3);
        assert_eq!(circle.to_string(), "( ( 1, 2 ), 3 )");
    }
}
