use crate::scalar::{FloatOf, Scalar};
use crate::vector::{impl_vector_common, Vector2};

use super::{impl_size_vector_ops, Size3};

/// A 2D extent, width by height.
///
/// Sizes share the vectors' arithmetic and comparison surface but carry
/// different meaning: negative extents are legal intermediates (see
/// [`Rect::canonicalize`](crate::shape::Rect::canonicalize)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size2<T> {
    pub width: T,
    pub height: T,
}

impl_vector_common!(Size2, 2, "( {}, {} )", 0 => width, 1 => height);
impl_size_vector_ops!(Size2, Vector2, width => x, height => y);

impl<T: Scalar> Size2<T> {
    /// Creates a size from its extents.
    #[inline]
    pub const fn new(width: T, height: T) -> Self {
        Self { width, height }
    }

    /// Overwrites both extents.
    #[inline]
    pub fn set(&mut self, width: T, height: T) {
        self.width = width;
        self.height = height;
    }

    /// Appends a depth extent, producing a 3D size.
    #[inline]
    #[must_use]
    pub fn extend(self, depth: T) -> Size3<T> {
        Size3::new(self.width, self.height, depth)
    }

    /// Reinterprets the size as a vector.
    #[inline]
    #[must_use]
    pub fn to_vector(self) -> Vector2<T> {
        Vector2::new(self.width, self.height)
    }

    /// Signed area, `width * height`.
    #[inline]
    #[must_use]
    pub fn area(self) -> FloatOf<T> {
        self.width.to_float() * self.height.to_float()
    }

    /// Width-to-height ratio.
    ///
    /// A zero height follows IEEE division semantics: the result is
    /// infinite (or NaN when the width is zero too).
    #[inline]
    #[must_use]
    pub fn aspect(self) -> FloatOf<T> {
        self.width.to_float() / self.height.to_float()
    }

    /// Length of the diagonal.
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> FloatOf<T> {
        self.to_vector().magnitude()
    }
}

impl<T: Scalar> From<Vector2<T>> for Size2<T> {
    #[inline]
    fn from(vector: Vector2<T>) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl<T: Scalar> From<Size2<T>> for Vector2<T> {
    #[inline]
    fn from(size: Size2<T>) -> Self {
        size.to_vector()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tolerance::ToleranceEq;
    use approx::assert_abs_diff_eq;

    #[test]
    fn area_promotes_integers() {
        let size = Size2::new(40_000_i32, 40_000);
        assert_abs_diff_eq!(size.area(), 1.6e9);
    }

    #[test]
    fn aspect_ratio() {
        assert_abs_diff_eq!(Size2::new(16.0, 9.0).aspect(), 16.0 / 9.0);
    }

    #[test]
    fn aspect_of_zero_height_follows_ieee() {
        assert!(Size2::new(1.0_f64, 0.0).aspect().is_infinite());
        assert!(Size2::new(0.0_f64, 0.0).aspect().is_nan());
        assert!(Size2::new(1_i32, 0).aspect().is_infinite());
    }

    #[test]
    fn diagonal() {
        assert_abs_diff_eq!(Size2::new(3_i32, 4).diagonal(), 5.0);
    }

    #[test]
    fn arithmetic_with_vectors() {
        let size = Size2::new(10, 20) + Vector2::new(1, 2);
        assert_eq!(size, Size2::new(11, 22));

        let scaled: Size2<f64> = Size2::new(10_i32, 20) * Vector2::new(0.5_f64, 2.0);
        assert_abs_diff_eq!(scaled.width, 5.0);
        assert_abs_diff_eq!(scaled.height, 40.0);
    }

    #[test]
    fn scalar_arithmetic() {
        assert_eq!(Size2::new(2, 3) * 2, Size2::new(4, 6));
        assert_eq!(2 * Size2::new(2, 3), Size2::new(4, 6));
    }

    #[test]
    fn extend_appends_depth() {
        assert_eq!(Size2::new(3, 4).extend(5), Size3::new(3, 4, 5));
    }

    #[test]
    fn empty_detection() {
        assert!(Size2::new(0, 0).is_empty());
        assert!(!Size2::new(0, 1).is_empty());
    }

    #[test]
    fn tolerance_equality() {
        assert!(Size2::new(1.0, 2.0).eq_within(&Size2::new(1.01, 1.99), 0.05));
        assert!(!Size2::new(1.0, 2.0).eq_within(&Size2::new(1.1, 2.0), 0.05));
    }

    #[test]
    fn vector_conversion_round_trip() {
        let size = Size2::new(3, 4);
        let vector: Vector2<i32> = size.into();
        assert_eq!(Size2::from(vector), size);
    }

    #[test]
    fn display_format() {
        assert_eq!(Size2::new(3, 4).to_string(), "( 3, 4 )");
    }
}
