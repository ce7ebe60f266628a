//! Conversions between the vector types and `nalgebra` vectors and points.
//!
//! The foreign-to-local direction uses `From`; the coherence rules do not
//! permit the generic reverse impl, so the local-to-foreign direction is
//! provided as inherent `to_nalgebra*` methods.

use crate::scalar::Scalar;
use crate::vector::{Vector2, Vector3, Vector4};

impl<T: Scalar + nalgebra::Scalar> From<nalgebra::Vector2<T>> for Vector2<T> {
    #[inline]
    fn from(vector: nalgebra::Vector2<T>) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl<T: Scalar + nalgebra::Scalar> From<nalgebra::Point2<T>> for Vector2<T> {
    #[inline]
    fn from(point: nalgebra::Point2<T>) -> Self {
        Self::new(point.x, point.y)
    }
}

impl<T: Scalar + nalgebra::Scalar> From<nalgebra::Vector3<T>> for Vector3<T> {
    #[inline]
    fn from(vector: nalgebra::Vector3<T>) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl<T: Scalar + nalgebra::Scalar> From<nalgebra::Point3<T>> for Vector3<T> {
    #[inline]
    fn from(point: nalgebra::Point3<T>) -> Self {
        Self::new(point.x, point.y, point.z)
    }
}

impl<T: Scalar + nalgebra::Scalar> From<nalgebra::Vector4<T>> for Vector4<T> {
    #[inline]
    fn from(vector: nalgebra::Vector4<T>) -> Self {
        Self::new(vector.x, vector.y, vector.z, vector.w)
    }
}

impl<T: Scalar + nalgebra::Scalar> Vector2<T> {
    #[inline]
    #[must_use]
    pub fn to_nalgebra(self) -> nalgebra::Vector2<T> {
        nalgebra::Vector2::new(self.x, self.y)
    }

    #[inline]
    #[must_use]
    pub fn to_nalgebra_point(self) -> nalgebra::Point2<T> {
        nalgebra::Point2::new(self.x, self.y)
    }
}

impl<T: Scalar + nalgebra::Scalar> Vector3<T> {
    #[inline]
    #[must_use]
    pub fn to_nalgebra(self) -> nalgebra::Vector3<T> {
        nalgebra::Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    #[must_use]
    pub fn to_nalgebra_point(self) -> nalgebra::Point3<T> {
        nalgebra::Point3::new(self.x, self.y, self.z)
    }
}

impl<T: Scalar + nalgebra::Scalar> Vector4<T> {
    #[inline]
    #[must_use]
    pub fn to_nalgebra(self) -> nalgebra::Vector4<T> {
        nalgebra::Vector4::new(self.x, self.y, self.z, self.w)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn vector2_round_trip() {
        let original = Vector2::new(1.5_f64, -2.5);
        assert_eq!(Vector2::from(original.to_nalgebra()), original);
    }

    #[test]
    fn vector3_round_trip() {
        let original = Vector3::new(1_i32, 2, 3);
        assert_eq!(Vector3::from(original.to_nalgebra()), original);
    }

    #[test]
    fn vector4_round_trip() {
        let original = Vector4::new(1.0_f32, 2.0, 3.0, 4.0);
        assert_eq!(Vector4::from(original.to_nalgebra()), original);
    }

    #[test]
    fn point_conversions() {
        let point = nalgebra::Point2::new(3.0_f64, 4.0);
        let vector: Vector2<f64> = point.into();
        assert_eq!(vector.to_nalgebra_point(), point);
    }
}
