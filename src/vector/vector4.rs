use num_traits::Float;

use crate::scalar::{FloatOf, FloatScalar, Promote, Promoted, Scalar};

use super::{impl_vector_common, Vector3};

/// A 4D vector with generic scalar components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl_vector_common!(Vector4, 4, "( {}, {}, {}, {} )", 0 => x, 1 => y, 2 => z, 3 => w);

impl<T: Scalar> Vector4<T> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Overwrites all four components.
    #[inline]
    pub fn set(&mut self, x: T, y: T, z: T, w: T) {
        self.x = x;
        self.y = y;
        self.z = z;
        self.w = w;
    }

    /// Drops the w component.
    #[inline]
    #[must_use]
    pub fn truncate(self) -> Vector3<T> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// The components in `[x, y, z, w]` order.
    #[inline]
    #[must_use]
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
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
        v.x * v.x + v.y * v.y + v.z * v.z + v.w * v.w
    }

    /// Distance to `other`.
    ///
    /// Computed in floating point, so unsigned operands never underflow.
    #[inline]
    #[must_use]
    pub fn distance<U>(self, other: Vector4<U>) -> FloatOf<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        self.distance_squared(other).sqrt()
    }

    /// Squared distance to `other`.
    #[inline]
    #[must_use]
    pub fn distance_squared<U>(self, other: Vector4<U>) -> FloatOf<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        let a = self.cast_promoted::<U>().to_float();
        let b = Vector4::new(
            Promote::<T>::promote(other.x),
            Promote::<T>::promote(other.y),
            Promote::<T>::promote(other.z),
            Promote::<T>::promote(other.w),
        )
        .to_float();
        (a - b).magnitude_squared()
    }

    /// Dot product, in the promoted scalar type.
    #[inline]
    #[must_use]
    pub fn dot<U>(self, other: Vector4<U>) -> Promoted<T, U>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        Promote::<U>::promote(self.x) * Promote::<T>::promote(other.x)
            + Promote::<U>::promote(self.y) * Promote::<T>::promote(other.y)
            + Promote::<U>::promote(self.z) * Promote::<T>::promote(other.z)
            + Promote::<U>::promote(self.w) * Promote::<T>::promote(other.w)
    }

    /// A unit-length copy, promoted to floating point. The zero vector is
    /// returned unchanged.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Vector4<FloatOf<T>> {
        let mut v = self.to_float();
        v.normalize();
        v
    }

    fn cast_promoted<U>(self) -> Vector4<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar,
    {
        Vector4::new(
            Promote::<U>::promote(self.x),
            Promote::<U>::promote(self.y),
            Promote::<U>::promote(self.z),
            Promote::<U>::promote(self.w),
        )
    }
}

impl<F: FloatScalar> Vector4<F> {
    /// Scales the vector to unit length in place. The zero vector is left
    /// unchanged.
    #[inline]
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if !magnitude.is_zero() {
            *self /= magnitude;
        }
    }

    /// Linear interpolation towards `other` by `amount` (not clamped).
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, amount: F) -> Self {
        self + (other - self) * amount
    }
}

impl<T: Scalar + std::ops::Neg<Output = T>> Vector4<T> {
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

impl<T: Scalar> From<[T; 4]> for Vector4<T> {
    #[inline]
    fn from(values: [T; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Vector4<T> {
    #[inline]
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Scalar> From<Vector4<T>> for [T; 4] {
    #[inline]
    fn from(vector: Vector4<T>) -> Self {
        vector.to_array()
    }
}
