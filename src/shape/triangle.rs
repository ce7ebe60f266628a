use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{Float, One};

use crate::scalar::{FloatOf, Scalar};
use crate::tolerance::ToleranceEq;
use crate::vector::Vector2;

/// A 2D triangle given by its three vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triangle2<T> {
    pub a: Vector2<T>,
    pub b: Vector2<T>,
    pub c: Vector2<T>,
}

impl<T: Scalar> Triangle2<T> {
    /// Creates a triangle from its vertices.
    #[inline]
    pub const fn new(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> Self {
        Self { a, b, c }
    }

    /// Creates a triangle from vertex coordinates.
    #[inline]
    pub const fn from_coords(x1: T, y1: T, x2: T, y2: T, x3: T, y3: T) -> Self {
        Self::new(
            Vector2::new(x1, y1),
            Vector2::new(x2, y2),
            Vector2::new(x3, y3),
        )
    }

    /// Overwrites all three vertices.
    #[inline]
    pub fn set(&mut self, a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) {
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
    pub fn get(&self, index: usize) -> Option<&Vector2<T>> {
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

    /// Unsigned area.
    #[inline]
    #[must_use]
    pub fn area(&self) -> FloatOf<T> {
        self.signed_area().abs()
    }

    /// Signed area: positive when the vertices wind counterclockwise.
    #[must_use]
    pub fn signed_area(&self) -> FloatOf<T> {
        let ab = self.b.to_float() - self.a.to_float();
        let ac = self.c.to_float() - self.a.to_float();
        let two = FloatOf::<T>::one() + FloatOf::<T>::one();
        ab.cross(ac) / two
    }

    /// Sum of the three side lengths.
    #[inline]
    #[must_use]
    pub fn perimeter(&self) -> FloatOf<T> {
        self.a.distance(self.b) + self.b.distance(self.c) + self.c.distance(self.a)
    }

    /// The centroid, the mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> Vector2<FloatOf<T>> {
        let one = FloatOf::<T>::one();
        let three = one + one + one;
        (self.a.to_float() + self.b.to_float() + self.c.to_float()) / three
    }
}

impl<T: Scalar> Index<usize> for Triangle2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Vector2<T> {
        match index {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            _ => panic!("index {index} is out of range for 3 vertices"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Triangle2<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector2<T> {
        match index {
            0 => &mut self.a,
            1 => &mut self.b,
            2 => &mut self.c,
            _ => panic!("index {index} is out of range for 3 vertices"),
        }
    }
}

impl<T: Scalar> ToleranceEq for Triangle2<T> {
    type Tolerance = T;

    #[inline]
    fn eq_within(&self, other: &Self, tolerance: T) -> bool {
        self.a.eq_within(&other.a, tolerance)
            && self.b.eq_within(&other.b, tolerance)
            && self.c.eq_within(&other.c, tolerance)
    }
}

impl<T: Scalar> fmt::Display for Triangle2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {}, {} )", self.a, self.b, self.c)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn right_triangle_area_and_perimeter() {
        let triangle = Triangle2::from_coords(0, 0, 4, 0, 0, 3);
        assert_abs_diff_eq!(triangle.area(), 6.0);
        assert_abs_diff_eq!(triangle.perimeter(), 12.0);
    }

    #[test]
    fn unsigned_vertices_measure_the_same() {
        let triangle = Triangle2::from_coords(0_u32, 0, 4, 0, 0, 3);
        assert_abs_diff_eq!(triangle.area(), 6.0);
        assert_abs_diff_eq!(triangle.perimeter(), 12.0);
    }

    #[test]
    fn signed_area_tracks_winding() {
        let ccw = Triangle2::from_coords(0.0, 0.0, 4.0, 0.0, 0.0, 3.0);
        let cw = Triangle2::from_coords(0.0, 0.0, 0.0, 3.0, 4.0, 0.0);
        assert_abs_diff_eq!(ccw.signed_area(), 6.0);
        assert_abs_diff_eq!(cw.signed_area(), -6.0);
    }

    #[test]
    fn collinear_vertices_have_zero_area() {
        let triangle = Triangle2::from_coords(0, 0, 1, 1, 2, 2);
        assert_abs_diff_eq!(triangle.area(), 0.0);
    }

    #[test]
    fn centroid() {
        let triangle = Triangle2::from_coords(0, 0, 3, 0, 0, 3);
        assert!(triangle
            .centroid()
            .eq_within(&Vector2::new(1.0, 1.0), 1e-12));
    }

    #[test]
    fn empty_detection() {
        assert!(Triangle2::from_coords(1, 1, 1, 1, 1, 1).is_empty());
        assert!(!Triangle2::from_coords(1, 1, 1, 1, 2, 1).is_empty());
    }

    #[test]
    fn vertex_indexing() {
        let mut triangle = Triangle2::from_coords(1, 2, 3, 4, 5, 6);
        assert_eq!(triangle[2], Vector2::new(5, 6));
        triangle[0] = Vector2::new(0, 0);
        assert_eq!(triangle.a, Vector2::default());
        assert_eq!(triangle.get(3), None);
    }

    #[test]
    fn tolerance_equality() {
        let a = Triangle2::from_coords(0.0, 0.0, 1.0, 0.0, 0.0, 1.0);
        let b = Triangle2::from_coords(0.01, 0.0, 1.0, 0.01, 0.0, 0.99);
        assert!(a.eq_within(&b, 0.05));
        assert!(!a.eq_within(&b, 0.001));
    }

    #[test]
    fn display_format() {
        let triangle = Triangle2::from_coords(1, 2, 3, 4, 5, 6);
        assert_eq!(
            triangle.to_string(),
            "( ( 1, 2 ), ( 3, 4 ), ( 5, 6 ) )"
        );
    }
}
