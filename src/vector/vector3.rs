use num_traits::Float;

use crate::scalar::{FloatOf, FloatPromote, FloatScalar, Promote, Promoted, Scalar};

use super::{impl_vector_common, Vector2, Vector4};

/// A 3D vector (or point) with generic scalar components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl_vector_common!(Vector3, 3, "( {}, {}, {} )", 0 => x, 1 => y, 2 => z);

impl<T: Scalar> Vector3<T> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Overwrites all three components.
    #[inline]
    pub fn set(&mut self, x: T, y: T, z: T) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Appends a w component, producing a 4D vector.
    #[inline]
    #[must_use]
    pub fn extend(self, w: T) -> Vector4<T> {
        Vector4::new(self.x, self.y, self.z, w)
    }

    /// Drops the z component.
    #[inline]
    #[must_use]
    pub fn truncate(self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// The components in `[x, y, z]` order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> FloatOf<T> {
        self.magnitude_squared().sqrt()
    }

    /// Squared Euclidean length.
    #[inline]
    #[must_use]
    pub fn magnitude_squared(self) -> FloatOf<T> {
        let v = self.to_float();
        v.x * v.x + v.y * v.y + v.z * v.z
    }

    /// Distance to `other`.
    ///
    /// Computed in floating point, so unsigned operands never underflow.
    #[inline]
    #[must_use]
    pub fn distance<U>(self, other: Vector3<U>) -> FloatOf<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_squared<U>(self, other: Vector3<U>) -> FloatOf<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        let a = self.cast_promoted::<U>().to_float();
        let b = Vector3::new(
            Promote::<T>::promote(other.x),
            Promote::<T>::promote(other.y),
            Promote::<T>::promote(other.z),
        )
        .to_float();
        (a - b).magnitude_squared()
    }

    /// Dot product, in the promoted scalar type.
    #[inline]
    #[must_use]
    pub fn dot<U>(self, other: Vector3<U>) -> Promoted<T, U>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        Promote::<U>::promote(self.x) * Promote::<T>::promote(other.x)
            + Promote::<U>::promote(self.y) * Promote::<T>::promote(other.y)
            + Promote::<U>::promote(self.z) * Promote::<T>::promote(other.z)
    }

    /// Cross product.
    #[inline]
    #[must_use]
    pub fn cross<U>(self, other: Vector3<U>) -> Vector3<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        let a = self.cast_promoted::<U>();
        let b = Vector3::new(
            Promote::<T>::promote(other.x),
            Promote::<T>::promote(other.y),
            Promote::<T>::promote(other.z),
        );
        Vector3::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Unsigned angle between `self` and `other`, in radians.
    #[inline]
    #[must_use]
    pub fn angle<U>(self, other: Vector3<U>) -> FloatOf<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        self.cross(other)
            .magnitude()
            .atan2(self.dot(other).to_float())
    }

    /// A unit-length copy, promoted to floating point. The zero vector is
    /// returned unchanged.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Vector3<FloatOf<T>> {
        let mut v = self.to_float();
        v.normalize();
        v
    }

    /// A copy clamped to at most `max` length, promoted to floating point.
    #[inline]
    #[must_use]
    pub fn limited(self, max: FloatOf<T>) -> Vector3<FloatOf<T>> {
        let mut v = self.to_float();
        v.limit(max);
        v
    }

    fn cast_promoted<U>(self) -> Vector3<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar,
    {
        Vector3::new(
            Promote::<U>::promote(self.x),
            Promote::<U>::promote(self.y),
            Promote::<U>::promote(self.z),
        )
    }
}

impl<F: FloatScalar> Vector3<F> {
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

impl<T: Scalar + std::ops::Neg<Output = T>> Vector3<T> {
    /// Negates all components in place.
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

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    #[inline]
    fn from(values: [T; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}

impl<T: Scalar> From<(T, T, T)> for Vector3<T> {
    #[inline]
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        vector.to_array()
    }
}
