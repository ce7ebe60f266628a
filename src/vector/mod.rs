//! Generic fixed-dimension vectors.
//!
//! The arithmetic surface is identical across dimensions and is generated by
//! the macros below: elementwise and scalar operators accept mixed scalar
//! types and produce a [`Promoted`](crate::scalar::Promoted)-typed result,
//! while the in-place forms require matching types.

mod vector2;
mod vector3;
mod vector4;

pub use vector2::Vector2;
pub use vector3::Vector3;
pub use vector4::Vector4;

/// Elementwise binary operator with scalar promotion.
macro_rules! impl_vector_binop {
    ($name:ident, $trait:ident :: $method:ident, $op:tt, $($f:ident),+) => {
        impl<T, U> ::std::ops::$trait<$name<U>> for $name<T>
        where
            T: $crate::scalar::Scalar + $crate::scalar::Promote<U>,
            U: $crate::scalar::Scalar
                + $crate::scalar::Promote<T, Output = $crate::scalar::Promoted<T, U>>,
        {
            type Output = $name<$crate::scalar::Promoted<T, U>>;

            #[inline]
            fn $method(self, rhs: $name<U>) -> Self::Output {
                $name {
                    $($f: $crate::scalar::Promote::<U>::promote(self.$f)
                        $op $crate::scalar::Promote::<T>::promote(rhs.$f)),+
                }
            }
        }
    };
}

/// Broadcast binary operator against a scalar right-hand side.
macro_rules! impl_scalar_binop {
    ($name:ident, $trait:ident :: $method:ident, $op:tt, $($f:ident),+) => {
        impl<T, U> ::std::ops::$trait<U> for $name<T>
        where
            T: $crate::scalar::Scalar + $crate::scalar::Promote<U>,
            U: $crate::scalar::Scalar
                + $crate::scalar::Promote<T, Output = $crate::scalar::Promoted<T, U>>,
        {
            type Output = $name<$crate::scalar::Promoted<T, U>>;

            #[inline]
            fn $method(self, rhs: U) -> Self::Output {
                $name {
                    $($f: $crate::scalar::Promote::<U>::promote(self.$f)
                        $op $crate::scalar::Promote::<T>::promote(rhs)),+
                }
            }
        }
    };
}

/// In-place operators for a matching element type, elementwise and scalar.
macro_rules! impl_vector_assign {
    ($name:ident, $trait:ident :: $method:ident, $op:tt, $($f:ident),+) => {
        impl<T: $crate::scalar::Scalar> ::std::ops::$trait for $name<T> {
            #[inline]
            fn $method(&mut self, rhs: Self) {
                $(self.$f $op rhs.$f;)+
            }
        }

        impl<T: $crate::scalar::Scalar> ::std::ops::$trait<T> for $name<T> {
            #[inline]
            fn $method(&mut self, rhs: T) {
                $(self.$f $op rhs;)+
            }
        }
    };
}

/// `scalar * vector` for each supported scalar type, delegating to the
/// commutative `vector * scalar` form.
macro_rules! impl_left_scalar_mul {
    ($name:ident for $($s:ty),+ $(,)?) => {$(
        impl<T> ::std::ops::Mul<$name<T>> for $s
        where
            T: $crate::scalar::Scalar + $crate::scalar::Promote<$s>,
            $s: $crate::scalar::Promote<T, Output = $crate::scalar::Promoted<T, $s>>,
        {
            type Output = $name<$crate::scalar::Promoted<T, $s>>;

            #[inline]
            fn mul(self, rhs: $name<T>) -> Self::Output {
                rhs * self
            }
        }
    )+};
}

/// Everything every vector-like aggregate shares: element access, display,
/// tolerance comparison, and the full operator surface.
macro_rules! impl_vector_common {
    ($name:ident, $dim:literal, $fmt:literal, $($idx:tt => $f:ident),+ $(,)?) => {
        impl<T: $crate::scalar::Scalar> $name<T> {
            /// Fills every component with the same value.
            #[inline]
            #[must_use]
            pub fn splat(value: T) -> Self {
                Self { $($f: value),+ }
            }

            /// Resets every component to zero.
            #[inline]
            pub fn reset(&mut self) {
                *self = Self::default();
            }

            /// Checked component access.
            #[inline]
            #[must_use]
            pub fn get(&self, index: usize) -> Option<&T> {
                match index {
                    $($idx => Some(&self.$f),)+
                    _ => None,
                }
            }

            /// Checked mutable component access.
            #[inline]
            #[must_use]
            pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
                match index {
                    $($idx => Some(&mut self.$f),)+
                    _ => None,
                }
            }

            /// Converts every component to its promoted floating-point type.
            #[inline]
            #[must_use]
            pub fn to_float(self) -> $name<$crate::scalar::FloatOf<T>> {
                $name { $($f: $crate::scalar::FloatPromote::to_float(self.$f)),+ }
            }

            /// Converts the element type, returning `None` when any component
            /// does not fit the target type.
            #[inline]
            #[must_use]
            pub fn cast<U: $crate::scalar::Scalar>(self) -> Option<$name<U>> {
                Some($name { $($f: ::num_traits::cast(self.$f)?),+ })
            }

            /// Returns `true` when every component is zero.
            #[inline]
            #[must_use]
            pub fn is_empty(&self) -> bool {
                $(::num_traits::Zero::is_zero(&self.$f))&&+
            }
        }

        impl<T: $crate::scalar::Scalar> ::std::ops::Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                match index {
                    $($idx => &self.$f,)+
                    _ => panic!("index {index} is out of range for {} components", $dim),
                }
            }
        }

        impl<T: $crate::scalar::Scalar> ::std::ops::IndexMut<usize> for $name<T> {
            #[inline]
            fn index_mut(&mut self, index: usize) -> &mut T {
                match index {
                    $($idx => &mut self.$f,)+
                    _ => panic!("index {index} is out of range for {} components", $dim),
                }
            }
        }

        impl<T: $crate::scalar::Scalar> ::std::ops::Index<$crate::axis::Axis> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, axis: $crate::axis::Axis) -> &T {
                &self[axis.index()]
            }
        }

        impl<T: $crate::scalar::Scalar> ::std::ops::IndexMut<$crate::axis::Axis> for $name<T> {
            #[inline]
            fn index_mut(&mut self, axis: $crate::axis::Axis) -> &mut T {
                &mut self[axis.index()]
            }
        }

        impl<T: $crate::scalar::Scalar> ::std::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, $fmt, $(self.$f),+)
            }
        }

        impl<T: $crate::scalar::Scalar> $crate::tolerance::ToleranceEq for $name<T> {
            type Tolerance = T;

            #[inline]
            fn eq_within(&self, other: &Self, tolerance: T) -> bool {
                $($crate::scalar::Scalar::abs_diff(self.$f, other.$f)
                    <= $crate::scalar::FloatPromote::to_float(tolerance))&&+
            }
        }

        impl<T> ::std::ops::Neg for $name<T>
        where
            T: $crate::scalar::Scalar + ::std::ops::Neg<Output = T>,
        {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $name { $($f: -self.$f),+ }
            }
        }

        $crate::vector::impl_vector_binop!($name, Add::add, +, $($f),+);
        $crate::vector::impl_vector_binop!($name, Sub::sub, -, $($f),+);
        $crate::vector::impl_vector_binop!($name, Mul::mul, *, $($f),+);
        $crate::vector::impl_vector_binop!($name, Div::div, /, $($f),+);

        $crate::vector::impl_scalar_binop!($name, Add::add, +, $($f),+);
        $crate::vector::impl_scalar_binop!($name, Sub::sub, -, $($f),+);
        $crate::vector::impl_scalar_binop!($name, Mul::mul, *, $($f),+);
        $crate::vector::impl_scalar_binop!($name, Div::div, /, $($f),+);

        $crate::vector::impl_vector_assign!($name, AddAssign::add_assign, +=, $($f),+);
        $crate::vector::impl_vector_assign!($name, SubAssign::sub_assign, -=, $($f),+);
        $crate::vector::impl_vector_assign!($name, MulAssign::mul_assign, *=, $($f),+);
        $crate::vector::impl_vector_assign!($name, DivAssign::div_assign, /=, $($f),+);

        $crate::vector::impl_left_scalar_mul!(
            $name for i8, i16, i32, i64, u8, u16, u32, u64, f32, f64
        );
    };
}

pub(crate) use {
    impl_left_scalar_mul, impl_scalar_binop, impl_vector_assign, impl_vector_binop,
    impl_vector_common,
};
