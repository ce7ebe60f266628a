use std::fmt;

use num_traits::One;

use crate::scalar::{FloatOf, Promote, Promoted, Scalar};
use crate::size::Size2;
use crate::tolerance::ToleranceEq;
use crate::vector::Vector2;

use super::Line2;

/// An axis-aligned rectangle, origin plus size, in y-down coordinates.
///
/// Negative extents are legal intermediates: such a rectangle describes
/// the same region as its canonical form, where the origin is the
/// minimum corner and both extents are non-negative. All accessors
/// (`min_x`, `corners`, `contains`, ...) account for negative extents;
/// [`Rect::canonicalize`] folds them away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rect<T> {
    pub origin: Vector2<T>,
    pub size: Size2<T>,
}

impl<T: Scalar> Rect<T> {
    /// Creates a rectangle from origin coordinates and extents.
    #[inline]
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Self {
            origin: Vector2::new(x, y),
            size: Size2::new(width, height),
        }
    }

    /// Creates a rectangle from an origin point and a size.
    #[inline]
    pub const fn from_origin_size(origin: Vector2<T>, size: Size2<T>) -> Self {
        Self { origin, size }
    }

    /// The canonical rectangle spanned by two opposite corners, in any
    /// order.
    #[must_use]
    pub fn from_points(a: Vector2<T>, b: Vector2<T>) -> Self {
        let min_x = if a.x < b.x { a.x } else { b.x };
        let max_x = if a.x < b.x { b.x } else { a.x };
        let min_y = if a.y < b.y { a.y } else { b.y };
        let max_y = if a.y < b.y { b.y } else { a.y };
        Self {
            origin: Vector2::new(min_x, min_y),
            size: Size2::new(max_x - min_x, max_y - min_y),
        }
    }

    /// Overwrites origin and size.
    #[inline]
    pub fn set(&mut self, origin: Vector2<T>, size: Size2<T>) {
        self.origin = origin;
        self.size = size;
    }

    /// Resets to a zero rectangle at the origin.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[inline]
    pub fn x(&self) -> T {
        self.origin.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.origin.y
    }

    #[inline]
    pub fn width(&self) -> T {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> T {
        self.size.height
    }

    /// Returns `true` when both extents are exactly zero.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Signed area of the extents.
    #[inline]
    #[must_use]
    pub fn area(&self) -> FloatOf<T> {
        self.size.area()
    }

    /// Width-to-height ratio; see [`Size2::aspect`] for the zero-height
    /// behavior.
    #[inline]
    #[must_use]
    pub fn aspect(&self) -> FloatOf<T> {
        self.size.aspect()
    }

    /// Length of the diagonal.
    #[inline]
    #[must_use]
    pub fn diagonal(&self) -> FloatOf<T> {
        self.size.diagonal()
    }

    /// Perimeter length, `2·(|width| + |height|)`.
    #[must_use]
    pub fn circumference(&self) -> FloatOf<T> {
        let width = Scalar::abs_diff(self.size.width, T::zero());
        let height = Scalar::abs_diff(self.size.height, T::zero());
        let two = FloatOf::<T>::one() + FloatOf::<T>::one();
        two * (width + height)
    }

    /// The center point.
    #[must_use]
    pub fn centroid(&self) -> Vector2<FloatOf<T>> {
        let two = FloatOf::<T>::one() + FloatOf::<T>::one();
        self.origin.to_float() + self.size.to_vector().to_float() / two
    }

    /// Smallest x coordinate covered by the rectangle.
    #[inline]
    #[must_use]
    pub fn min_x(&self) -> T {
        if self.size.width < T::zero() {
            self.origin.x + self.size.width
        } else {
            self.origin.x
        }
    }

    /// Largest x coordinate covered by the rectangle.
    #[inline]
    #[must_use]
    pub fn max_x(&self) -> T {
        if self.size.width < T::zero() {
            self.origin.x
        } else {
            self.origin.x + self.size.width
        }
    }

    /// Smallest y coordinate covered by the rectangle.
    #[inline]
    #[must_use]
    pub fn min_y(&self) -> T {
        if self.size.height < T::zero() {
            self.origin.y + self.size.height
        } else {
            self.origin.y
        }
    }

    /// Largest y coordinate covered by the rectangle.
    #[inline]
    #[must_use]
    pub fn max_y(&self) -> T {
        if self.size.height < T::zero() {
            self.origin.y
        } else {
            self.origin.y + self.size.height
        }
    }

    /// Left edge coordinate; alias for [`Rect::min_x`].
    #[inline]
    #[must_use]
    pub fn left(&self) -> T {
        self.min_x()
    }

    /// Right edge coordinate; alias for [`Rect::max_x`].
    #[inline]
    #[must_use]
    pub fn right(&self) -> T {
        self.max_x()
    }

    /// Top edge coordinate. Y grows downward, so this is [`Rect::min_y`].
    #[inline]
    #[must_use]
    pub fn top(&self) -> T {
        self.min_y()
    }

    /// Bottom edge coordinate. Y grows downward, so this is [`Rect::max_y`].
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> T {
        self.max_y()
    }

    #[inline]
    #[must_use]
    pub fn top_left(&self) -> Vector2<T> {
        Vector2::new(self.min_x(), self.min_y())
    }

    #[inline]
    #[must_use]
    pub fn top_right(&self) -> Vector2<T> {
        Vector2::new(self.max_x(), self.min_y())
    }

    #[inline]
    #[must_use]
    pub fn bottom_left(&self) -> Vector2<T> {
        Vector2::new(self.min_x(), self.max_y())
    }

    #[inline]
    #[must_use]
    pub fn bottom_right(&self) -> Vector2<T> {
        Vector2::new(self.max_x(), self.max_y())
    }

    #[inline]
    #[must_use]
    pub fn left_edge(&self) -> Line2<T> {
        Line2::new(self.top_left(), self.bottom_left())
    }

    #[inline]
    #[must_use]
    pub fn right_edge(&self) -> Line2<T> {
        Line2::new(self.top_right(), self.bottom_right())
    }

    #[inline]
    #[must_use]
    pub fn top_edge(&self) -> Line2<T> {
        Line2::new(self.top_left(), self.top_right())
    }

    #[inline]
    #[must_use]
    pub fn bottom_edge(&self) -> Line2<T> {
        Line2::new(self.bottom_left(), self.bottom_right())
    }

    /// Returns `true` when both extents are non-negative.
    #[inline]
    #[must_use]
    pub fn is_canonical(&self) -> bool {
        self.size.width >= T::zero() && self.size.height >= T::zero()
    }

    /// Moves the origin to the minimum corner and folds negative extents
    /// in place. The covered region is unchanged.
    pub fn canonicalize(&mut self) {
        if self.size.width < T::zero() {
            self.origin.x += self.size.width;
            self.size.width = T::zero() - self.size.width;
        }
        if self.size.height < T::zero() {
            self.origin.y += self.size.height;
            self.size.height = T::zero() - self.size.height;
        }
    }

    /// A canonical copy. Idempotent.
    #[inline]
    #[must_use]
    pub fn canonicalized(mut self) -> Self {
        self.canonicalize();
        self
    }

    /// Returns `true` when `point` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        !(point.x < self.min_x()
            || self.max_x() < point.x
            || point.y < self.min_y()
            || self.max_y() < point.y)
    }

    /// Shifts the origin in place.
    #[inline]
    pub fn translate(&mut self, offset: Vector2<T>) {
        self.origin += offset;
    }

    /// A shifted copy, in the promoted scalar type.
    #[must_use]
    pub fn translated<U>(self, offset: Vector2<U>) -> Rect<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        Rect {
            origin: self.origin + offset,
            size: Size2::new(
                Promote::<U>::promote(self.size.width),
                Promote::<U>::promote(self.size.height),
            ),
        }
    }

    /// Scales the extents in place. The origin is unchanged.
    #[inline]
    pub fn scale(&mut self, factor: T) {
        self.size *= factor;
    }

    /// A copy with scaled extents, in the promoted scalar type. The
    /// origin is unchanged.
    #[must_use]
    pub fn scaled<U>(self, factor: U) -> Rect<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        Rect {
            origin: Vector2::new(
                Promote::<U>::promote(self.origin.x),
                Promote::<U>::promote(self.origin.y),
            ),
            size: self.size * factor,
        }
    }

    /// A copy with per-axis scaled extents, in the promoted scalar type.
    #[must_use]
    pub fn scaled_by<U>(self, factor: Vector2<U>) -> Rect<Promoted<T, U>>
    where
        T: Promote<U>,
        U: Scalar + Promote<T, Output = Promoted<T, U>>,
    {
        Rect {
            origin: Vector2::new(
                Promote::<U>::promote(self.origin.x),
                Promote::<U>::promote(self.origin.y),
            ),
            size: self.size * factor,
        }
    }

    /// Numeric cast of origin and size; see [`Vector2::cast`].
    #[must_use]
    pub fn cast<U: Scalar>(self) -> Option<Rect<U>> {
        Some(Rect {
            origin: self.origin.cast()?,
            size: self.size.cast()?,
        })
    }
}

impl<T: Scalar> ToleranceEq for Rect<T> {
    type Tolerance = T;

    #[inline]
    fn eq_within(&self, other: &Self, tolerance: T) -> bool {
        self.origin.eq_within(&other.origin, tolerance)
            && self.size.eq_within(&other.size, tolerance)
    }
}

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "( {}, {} )", self.origin, self.size)
    }
}
