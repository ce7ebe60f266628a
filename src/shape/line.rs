use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::axis::Side;
use crate::scalar::{FloatOf, Scalar};
use crate::tolerance::ToleranceEq;
use crate::vector::Vector2;

/// A 2D line segment between two endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Line2<T> {
    pub a: Vector2<T>,
    pub b: Vector2<T>,
}

impl<T: Scalar> Line2<T> {
    /// Creates a segment from its endpoints.
    #[inline]
    pub const fn new(a: Vector2<T>, b: Vector2<T>) -> Self {
        Self { a, b }
    }

    /// Creates a segment from endpoint coordinates.
    #[inline]
    pub const fn from_coords(x1: T, y1: T, x2: T, y2: T) -> Self {
        Self::new(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    /// Overwrites both endpoints.
    #[inline]
    pub fn set(&mut self, a: Vector2<T>, b: Vector2<T>) {
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
    pub fn get(&self, index: usize) -> Option<&Vector2<T>> {
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
    pub fn direction(&self) -> Vector2<FloatOf<T>> {
        (self.b.to_float() - self.a.to_float()).normalized()
    }

    /// Unit normal, the direction rotated a quarter turn counterclockwise.
    #[inline]
    #[must_use]
    pub fn normal(&self) -> Vector2<FloatOf<T>> {
        let direction = self.direction();
        Vector2::new(-direction.y, direction.x)
    }

    /// The midpoint of the segment.
    #[inline]
    #[must_use]
    pub fn mid(&self) -> Vector2<FloatOf<T>> {
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

    /// The intersection point of two segments.
    ///
    /// Returns `None` when the segments are parallel (including collinear
    /// overlap) or do not reach each other. Endpoint touches count as
    /// intersections.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Vector2<FloatOf<T>>> {
        let origin = self.a.to_float();
        let r = self.b.to_float() - origin;
        let other_origin = other.a.to_float();
        let s = other.b.to_float() - other_origin;

        let denominator = r.cross(s);
        if denominator.is_zero() {
            return None;
        }

        let offset = other_origin - origin;
        let t = offset.cross(s) / denominator;
        let u = offset.cross(r) / denominator;
        let zero = FloatOf::<T>::zero();
        let one = FloatOf::<T>::one();
        if t < zero || t > one || u < zero || u > one {
            return None;
        }
        Some(origin + r * t)
    }

    /// Projects `point` onto the infinite carrier line.
    ///
    /// A degenerate segment projects every point onto `a`.
    #[must_use]
    pub fn project(&self, point: Vector2<T>) -> Vector2<FloatOf<T>> {
        let origin = self.a.to_float();
        let direction = self.direction();
        let offset = point.to_float() - origin;
        origin + direction * offset.dot(direction)
    }

    /// Classifies which side of the directed line `a -> b` the point is on.
    ///
    /// `Side::Left` is the counterclockwise side (positive cross product).
    #[must_use]
    pub fn side(&self, point: Vector2<T>) -> Side {
        let edge = self.b.to_float() - self.a.to_float();
        let towards = point.to_float() - self.a.to_float();
        let cross = edge.cross(towards);
        let zero = FloatOf::<T>::zero();
        if cross > zero {
            Side::Left
        } else if cross < zero {
            Side::Right
        } else {
            Side::Coincident
        }
    }
}

impl<T: Scalar> Index<usize> for Line2<T> {
    type Output = Vector2<T>;

    #[inline]
    fn index(&self, index: usize) -> &Vector2<T> {
        match index {
            0 => &self.a,
            1 => &self.b,
            _ => panic!("index {index} is out of range for 2 endpoints"),
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Line2<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Vector2<T> {
        match index {
            0 => &mut self.a,
            1 => &mut self.b,
            _ => panic!("index {index} is out of range for 2 endpoints"),
        }
    }
}

impl<T: Scalar> ToleranceEq for Line2<T> {
    type Tolerance = T;

    #[inline]
    fn eq_within(&self, other: &Self, tolerance: T) -> bool {
        self.a.eq_within(&other.a, tolerance) && self.b.eq_within(&other.b, tolerance)
    }
}

impl<T: Scalar> fmt::Display for Line2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {} )", self.a, self.b)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn length_of_3_4_5() {
        let line = Line2::from_coords(0, 0, 3, 4);
        assert_abs_diff_eq!(line.length(), 5.0);
        assert_abs_diff_eq!(line.length_squared(), 25.0);
    }

    #[test]
    fn length_of_unsigned_segment() {
        let line = Line2::from_coords(0_u32, 0, 3, 4);
        assert_abs_diff_eq!(line.length(), 5.0);
        assert_abs_diff_eq!(Line2::from_coords(3_u32, 4, 0, 0).length(), 5.0);
    }

    #[test]
    fn direction_and_normal_are_perpendicular_units() {
        let line = Line2::from_coords(0.0, 0.0, 10.0, 0.0);
        assert_eq!(line.direction(), Vector2::new(1.0, 0.0));
        assert_eq!(line.normal(), Vector2::new(0.0, 1.0));
        assert_abs_diff_eq!(line.direction().dot(line.normal()), 0.0);
    }

    #[test]
    fn degenerate_segment_has_zero_direction() {
        let line = Line2::from_coords(2.0, 2.0, 2.0, 2.0);
        assert!(line.is_empty());
        assert_eq!(line.direction(), Vector2::default());
        assert_abs_diff_eq!(line.length(), 0.0);
    }

    #[test]
    fn midpoint() {
        let line = Line2::from_coords(0, 0, 4, 6);
        assert_eq!(line.mid(), Vector2::new(2.0, 3.0));
    }

    #[test]
    fn crossing_segments_intersect() {
        let horizontal = Line2::from_coords(-1.0, 0.0, 1.0, 0.0);
        let vertical = Line2::from_coords(0.0, -1.0, 0.0, 1.0);
        let point = horizontal.intersection(&vertical).unwrap();
        assert!(point.eq_within(&Vector2::default(), 1e-12));
    }

    #[test]
    fn parallel_segments_do_not_intersect() {
        let a = Line2::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Line2::from_coords(0.0, 1.0, 1.0, 1.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn disjoint_segments_on_crossing_lines() {
        let a = Line2::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Line2::from_coords(5.0, -1.0, 5.0, 1.0);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn endpoint_touch_counts() {
        let a = Line2::from_coords(0.0, 0.0, 1.0, 0.0);
        let b = Line2::from_coords(1.0, 0.0, 1.0, 1.0);
        let point = a.intersection(&b).unwrap();
        assert!(point.eq_within(&Vector2::new(1.0, 0.0), 1e-12));
    }

    #[test]
    fn projection_onto_carrier_line() {
        let line = Line2::from_coords(0.0, 0.0, 10.0, 0.0);
        let projected = line.project(Vector2::new(3.0, 7.0));
        assert!(projected.eq_within(&Vector2::new(3.0, 0.0), 1e-12));

        // Beyond the segment: the carrier line is infinite.
        let projected = line.project(Vector2::new(20.0, 1.0));
        assert!(projected.eq_within(&Vector2::new(20.0, 0.0), 1e-12));
    }

    #[test]
    fn side_classification() {
        let line = Line2::from_coords(0, 0, 10, 0);
        assert_eq!(line.side(Vector2::new(5, 1)), Side::Left);
        assert_eq!(line.side(Vector2::new(5, -1)), Side::Right);
        assert_eq!(line.side(Vector2::new(5, 0)), Side::Coincident);
    }

    #[test]
    fn endpoint_indexing() {
        let mut line = Line2::from_coords(1, 2, 3, 4);
        assert_eq!(line[0], Vector2::new(1, 2));
        line[1] = Vector2::new(9, 9);
        assert_eq!(line.b, Vector2::new(9, 9));
        assert_eq!(line.get(2), None);
    }

    #[test]
    fn display_format() {
        let line = Line2::from_coords(1, 2, 3, 4);
        assert_eq!(line.to_string(), "( ( 1, 2 ), ( 3, 4 ) )");
    }
}
