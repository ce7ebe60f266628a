use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::One;

use crate::scalar::{FloatOf, Scalar};
use crate::tolerance::ToleranceEq;
use crate::vector::Vector3;

/// A 3D line segment between two endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line3<T> {
    pub a: Vector3<T>,
    pub b: Vector3<T>,
}

impl<T: Scalar> Line3<T> {
    /// Creates a segment from its endpoints.
    #[inline]
    pub const fn new(a: Vector3<T>, b: Vector3<T>) -> Self {
        Self { a, b }
    }

    /// Overwrites both endpoints.
    #[inline]
    pub fn set(&mut self, a: Vector3<T>, b: Vector3<T>) {
        self.a = a;
        self.b = b;
    }

    /// Resets both endpoints to the origin.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checked endpoint access: 0 is `a`, 1 is `b`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Vector3<T>> {
        match index {
            0 => Some(&self.a),
            1 => Some(&self.b),
            _ => None,
        }
    }

    /// Returns `true` when the endpoints coincide exactly.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a == self.b
    }

    /// Unit vector from `a` towards `b`.
    ///
    /// A degenerate segment has no direction; the zero vector is returned.
    #[inline]
    #[must_use]
    pub fn direction(&self) -> Vector3<FloatOf<T>> {
        (self.b.to_float() - self.a.to_float()).normalized()
    }

    /// The midpoint of the segment.
    #[inline]
    #[must_use]
    pub fn mid(&self) -> Vector3<FloatOf<T>> {
        let two = FloatOf::<T>::one() + FloatOf::<T>::one();
        (self.a.to_float() + self.b.to_float()) / two
    }

    /// Length of the segment.
    #[inline]
    #[must_use]
    pub fn length(&self) -> FloatOf<T> {
        self.a.distance(self.b)
    }

    /// Squared length of the segment.
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> FloatOf<T> {
        self.a.distance_squared(self.b)
    }

    /// Projects `point` onto the infinite carrier line.
    ///
    /// A degenerate segment projects every point onto `a`.
    #[must_use]
    pub fn project(&self, point: Vector3<T>) -> Vector3<FloatOf<T>> {
        let origin = self.a.to_float();
        let direction = self.direction();
        let offset = point.to_float() - origin;
        origin + direction * offset.dot(direction)
    }
}

impl<T: Scalar> Index<usize> for Line3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn index(&self, index: usize) -> &Vector3<T> {
        match index {
            0 => &self.a,
            1 => &self.b,
            _ => panic!("index {index} is out of range for 2 endpoints"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Line3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector3<T> {
        match index {
            0 => &mut self.a,
            1 => &mut self.b,
            _ => panic!("index {index} is out of range for 2 endpoints"),
        }
    }
}

impl<T: Scalar> ToleranceEq for Line3<T> {
    type Tolerance = T;

    #[inline]
    fn eq_within(&self, other: &Self, tolerance: T) -> bool {
        self.a.eq_within(&other.a, tolerance) && self.b.eq_within(&other.b, tolerance)
    }
}

impl<T: Scalar> fmt::Display for Line3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {} )", self.a, self.b)
    }
}
