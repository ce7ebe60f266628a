use crate::scalar::{FloatOf, Scalar};
use crate::vector::{impl_vector_common, Vector3};

use super::{impl_size_vector_ops, Size2};

/// A 3D extent, width by height by depth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Size3<T> {
    pub width: T,
    pub height: T,
    pub depth: T,
}

impl_vector_common!(Size3, 3, "( {}, {}, {} )", 0 => width, 1 => height, 2 => depth);
impl_size_vector_ops!(Size3, Vector3, width => x, height => y, depth => z);

impl<T: Scalar> Size3<T> {
    /// Creates a size from its extents.
    #[inline]
    pub const fn new(width: T, height: T, depth: T) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Overwrites all three extents.
    #[inline]
    pub fn set(&mut self, width: T, height: T, depth: T) {
        self.width = width;
        self.height = height;
        self.depth = depth;
    }

    /// Drops the depth extent.
    #[inline]
    #[must_use]
    pub fn truncate(self) -> Size2<T> {
        Size2::new(self.width, self.height)
    }

    /// Reinterprets the size as a vector.
    #[inline]
    #[must_use]
    pub fn to_vector(self) -> Vector3<T> {
        Vector3::new(self.width, self.height, self.depth)
    }

    /// Signed volume, `width * height * depth`.
    #[inline]
    #[must_use]
    pub fn volume(self) -> FloatOf<T> {
        self.width.to_float() * self.height.to_float() * self.depth.to_float()
    }

    /// Width-to-height ratio; IEEE division semantics for a zero height.
    #[inline]
    #[must_use]
    pub fn aspect_xy(self) -> FloatOf<T> {
        self.width.to_float() / self.height.to_float()
    }

    /// Height-to-depth ratio; IEEE division semantics for a zero depth.
    #[inline]
    #[must_use]
    pub fn aspect_yz(self) -> FloatOf<T> {
        self.height.to_float() / self.depth.to_float()
    }

    /// Depth-to-width ratio; IEEE division semantics for a zero width.
    #[inline]
    #[must_use]
    pub fn aspect_zx(self) -> FloatOf<T> {
        self.depth.to_float() / self.width.to_float()
    }

    /// Length of the space diagonal.
    #[inline]
    #[must_use]
    pub fn diagonal(self) -> FloatOf<T> {
        self.to_vector().magnitude()
    }
}

impl<T: Scalar> From<Vector3<T>> for Size3<T> {
    #[inline]
    fn from(vector: Vector3<T>) -> Self {
        Self::new(vector.x, vector.y, vector.z)
    }
}

impl<T: Scalar> From<Size3<T>> for Vector3<T> {
    #[inline]
    fn from(size: Size3<T>) -> Self {
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
    fn volume_promotes_integers() {
        let size = Size3::new(2_000_i32, 2_000, 2_000);
        assert_abs_diff_eq!(size.volume(), 8.0e9);
    }

    #[test]
    fn aspect_ratios() {
        let size = Size3::new(16.0, 9.0, 3.0);
        assert_abs_diff_eq!(size.aspect_xy(), 16.0 / 9.0);
        assert_abs_diff_eq!(size.aspect_yz(), 3.0);
        assert_abs_diff_eq!(size.aspect_zx(), 3.0 / 16.0);
    }

    #[test]
    fn aspect_of_zero_extent_follows_ieee() {
        assert!(Size3::new(1.0_f64, 0.0, 1.0).aspect_xy().is_infinite());
        assert!(Size3::new(0.0_f64, 1.0, 0.0).aspect_yz().is_infinite());
    }

    #[test]
    fn space_diagonal() {
        assert_abs_diff_eq!(Size3::new(2_i32, 3, 6).diagonal(), 7.0);
    }

    #[test]
    fn truncate_drops_depth() {
        assert_eq!(Size3::new(3, 4, 5).truncate(), Size2::new(3, 4));
    }

    #[test]
    fn arithmetic_with_vectors() {
        let size = Size3::new(10, 20, 30) + Vector3::new(1, 2, 3);
        assert_eq!(size, Size3::new(11, 22, 33));

        let scaled: Size3<f64> = Size3::new(10_i32, 20, 30) * Vector3::new(0.5_f64, 2.0, 1.0);
        assert_abs_diff_eq!(scaled.depth, 30.0);
    }

    #[test]
    fn scalar_arithmetic() {
        assert_eq!(Size3::new(1, 2, 3) * 2, Size3::new(2, 4, 6));
        assert_eq!(2 * Size3::new(1, 2, 3), Size3::new(2, 4, 6));
    }

    #[test]
    fn empty_detection() {
        assert!(Size3::new(0, 0, 0).is_empty());
        assert!(!Size3::new(0, 0, 1).is_empty());
    }

    #[test]
    fn tolerance_equality() {
        let a = Size3::new(1.0, 2.0, 3.0);
        let b = Size3::new(1.01, 1.99, 3.02);
        assert!(a.eq_within(&b, 0.05));
        assert!(!a.eq_within(&b, 0.005));
    }

    #[test]
    fn display_format() {
        assert_eq!(Size3::new(3, 4, 5).to_string(), "( 3, 4, 5 )");
    }
}
