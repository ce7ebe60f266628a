use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::One;

use crate::scalar::{FloatOf, Scalar};
use crate::tolerance::ToleranceEq;
use crate::vector::Vector3;

/// A triangle in 3D space, given by its three vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triangle3<T> {
    pub a: Vector3<T>,
    pub b: Vector3<T>,
    pub c: Vector3<T>,
}

impl<T: Scalar> Triangle3<T> {
    /// Creates a triangle from its vertices.
    #[inline]
    pub const fn new(a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) -> Self {
        Self { a, b, c }
    }

    /// Overwrites all three vertices.
    #[inline]
    pub fn set(&mut self, a: Vector3<T>, b: Vector3<T>, c: Vector3<T>) {
        self.a = a;
        self.b = b;
        self.c = c;
    }

    /// Resets all vertices to the origin.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Checked vertex access: 0 is `a`, 1 is `b`, 2 is `c`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Vector3<T>> {
        match index {
            0 => Some(&self.a),
            1 => Some(&self.b),
            2 => Some(&self.c),
            _ => None,
        }
    }

    /// Returns `true` when all vertices coincide exactly.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.a == self.b && self.b == self.c
    }

    /// Unsigned area, half the magnitude of the edge cross product.
    ///
    /// There is no signed variant: a 3D triangle has no intrinsic winding
    /// without a reference normal.
    #[must_use]
    pub fn area(&self) -> FloatOf<T> {
        let ab = self.b.to_float() - self.a.to_float();
        let ac = self.c.to_float() - self.a.to_float();
        let two = FloatOf::<T>::one() + FloatOf::<T>::one();
        ab.cross(ac).magnitude() / two
    }

    /// Unit normal of the triangle's plane, following the right-hand rule
    /// over `a -> b -> c`.
    ///
    /// Degenerate (collinear) vertices span no plane; the zero vector is
    /// returned.
    #[must_use]
    pub fn normal(&self) -> Vector3<FloatOf<T>> {
        let ab = self.b.to_float() - self.a.to_float();
        let ac = self.c.to_float() - self.a.to_float();
        ab.cross(ac).normalized()
    }

    /// Sum of the three side lengths.
    #[inline]
    #[must_use]
    pub fn perimeter(&self) -> FloatOf<T> {
        self.a.distance(self.b) + self.b.distance(self.c) + self.c.distance(self.a)
    }

    /// The centroid, the mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Vector3<FloatOf<T>> {
        let one = FloatOf::<T>::one();
        let three = one + one + one;
        (self.a.to_float() + self.b.to_float() + self.c.to_float()) / three
    }
}

impl<T: Scalar> Index<usize> for Triangle3<T> {
    type Output = Vector3<T>;

    #[inline]
    fn index(&self, index: usize) -> &Vector3<T> {
        match index {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            _ => panic!("index {index} is out of range for 3 vertices"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Triangle3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector3<T> {
        match index {
            0 => &mut self.a,
            1 => &mut self.b,
            2 => &mut self.c,
            _ => panic!("index {index} is out of range for 3 vertices"),
        }
    }
}

impl<T: Scalar> ToleranceEq for Triangle3<T> {
    type Tolerance = T;

    #[inline]
    fn eq_within(&self, other: &Self, tolerance: T) -> bool {
        self.a.eq_within(&other.a, tolerance)
            && self.b.eq_within(&other.b, tolerance)
            && self.c.eq_within(&other.c, tolerance)
    }
}

impl<T: Scalar> fmt::Display for Triangle3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {} )", self.a, self.b, self.c)
    }
}
