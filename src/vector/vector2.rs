use num_traits::Float;

use crate::scalar::{FloatOf, FloatPromote, FloatScalar, Promote, Promoted, Scalar};

use super::{impl_vector_common, Vector3};

/// A 2D vector (or point) with generic scalar components.
///
/// Comparison operators are lexicographic over `(x, y)`; `Eq`, `Ord`, and
/// `Hash` are available whenever the element type supports them, so integer
/// vectors can serve as keys in hash-based containers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl_vector_common!(Vector2, 2, "( {}, {} )", 0 => x, 1 => y);

impl<T: Scalar> Vector2<T> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Overwrites both components.
    #[inline]
    pub fn set(&mut self, x: T, y: T) {
        self.x = x;
        self.y = y;
    }

    /// Appends a z component, producing a 3D vector.
    #[inline]
    #[must_use]
    pub fn extend(self, z: T) -> Vector3<T> {
        Vector3::new(self.x, self.y, z)
    }

    /// The components in `[x, y]` order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> FloatOf<T> {
        self.magnitude_squared().sqrt()
    }

    /// Squared Euclidean length; cheaper than [`magnitude`](Self::magnitude)
    /// when only comparisons are needed.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> FloatOf<T> {
        let v = self.to_float();
        v.x * v.x + v.y * v.y
    }

    /// The angle of the vector from the positive x axis, in radians.
    #[inline]
    #[must_use]
    pub fn heading(self) -> FloatOf<T> {
        let v = self.to_float();
        v.y.atan2(v.x)
    }

    /// Distance to `other`.
    ///
    /// Computed in floating point, so unsigned operands never underflow.
    #[inline]
    #[must_use]
    pub fn distance<U>(self, other: Vector2<U>) -> FloatOf<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_squared<U>(self, other: Vector2<U>) -> FloatOf<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        let a = self.cast_promoted::<U>().to_float();
        let b = Vector2::new(
            Promote::<T>::promote(other.x),
            Promote::<T>::promote(other.y),
        )
        .to_float();
        (a - b).magnitude_squared()
    }

    /// Dot product, in the promoted scalar type.
    #[inline]
    #[must_use]
    pub fn dot<U>(self, other: Vector2<U>) -> Promoted<T, U>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        Promote::<U>::promote(self.x) * Promote::<T>::promote(other.x)
            + Promote::<U>::promote(self.y) * Promote::<T>::promote(other.y)
    }

    /// 2D cross product (the z component of the 3D cross product).
    #[inline]
    #[must_use]
    pub fn cross<U>(self, other: Vector2<U>) -> Promoted<T, U>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        Promote::<U>::promote(self.x) * Promote::<T>::promote(other.y)
            - Promote::<U>::promote(self.y) * Promote::<T>::promote(other.x)
    }

    /// Signed angle from `self` to `other`, in radians.
    #[inline]
    #[must_use]
    pub fn angle<U>(self, other: Vector2<U>) -> FloatOf<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        self.cross(other).to_float().atan2(self.dot(other).to_float())
    }

    /// A unit-length copy, promoted to floating point. The zero vector is
    /// returned unchanged.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Vector2<FloatOf<T>> {
        let mut v = self.to_float();
        v.normalize();
        v
    }

    /// A copy clamped to at most `max` length, promoted to floating point.
    #[inline]
    #[must_use]
    pub fn limited(self, max: FloatOf<T>) -> Vector2<FloatOf<T>> {
        let mut v = self.to_float();
        v.limit(max);
        v
    }

    /// Interprets `self` as polar `(radius, angle)` and converts to
    /// cartesian coordinates.
    #[inline]
    #[must_use]
    pub fn cartesian(self) -> Vector2<FloatOf<T>> {
        let v = self.to_float();
        Vector2::new(v.x * v.y.cos(), v.x * v.y.sin())
    }

    /// Converts cartesian coordinates to polar `(radius, angle)`.
    #[inline]
    #[must_use]
    pub fn polar(self) -> Vector2<FloatOf<T>> {
        Vector2::new(self.magnitude(), self.heading())
    }

    fn cast_promoted<U>(self) -> Vector2<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar,
    {
        Vector2::new(Promote::<U>::promote(self.x), Promote::<U>::promote(self.y))
    }
}

impl<F: FloatScalar> Vector2<F> {
    /// A unit vector pointing at `angle` radians from the positive x axis.
    #[inline]
    #[must_use]
    pub fn from_heading(angle: F) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    /// Scales the vector to unit length in place. The zero vector is left
    /// unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if !magnitude.is_zero() {
            *self /= magnitude;
        }
    }

    /// Clamps the vector to at most `max` length in place.
    #[inline]
    pub fn limit(&mut self, max: F) {
        if self.magnitude_squared() > max * max {
            self.normalize();
            *self *= max;
        }
    }

    /// Linear interpolation towards `other` by `amount` (not clamped).
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, amount: F) -> Self {
        self + (other - self) * amount
    }
}

impl<T: Scalar + std::ops::Neg<Output = T>> Vector2<T> {
    /// Negates both components in place.
    #[inline]
    pub fn invert(&mut self) {
        *self = -*self;
    }

    /// A negated copy.
    #[inline]
    #[must_use]
    pub fn inverted(self) -> Self {
        -self
    }
}

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    #[inline]
    fn from(values: [T; 2]) -> Self {
        Self::new(values[0], values[1])
    }
}

impl<T: Scalar> From<(T, T)> for Vector2<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<Vector2<T>> for [T; 2] {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        vector.to_array()
    }
}
