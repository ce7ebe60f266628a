//! Extent aggregates (width/height, width/height/depth) sharing the
//! vectors' arithmetic and comparison surface.

mod size2;
mod size3;

pub use size2::Size2;
pub use size3::Size3;

/// Elementwise arithmetic against the matching vector type, pairing each
/// extent with the vector component at the same position.
macro_rules! impl_size_vector_ops {
    ($size:ident, $vector:ident, $($f:ident => $c:ident),+ $(,)?) => {
        impl<T, U> ::std::ops::Add<$vector<U>> for $size<T>
        where
            T: $crate::scalar::Scalar + $crate::scalar::Promote<U>,
            U: $crate::scalar::Scalar
                + $crate::scalar::Promote<T, Output = $crate::scalar::Promoted<T, U>>,
        {
            type Output = $size<$crate::scalar::Promoted<T, U>>;

            #[inline]
            fn add(self, rhs: $vector<U>) -> Self::Output {
                $size {
                    $($f: $crate::scalar::Promote::<U>::promote(self.$f)
                        + $crate::scalar::Promote::<T>::promote(rhs.$c)),+
                }
            }
        }

        impl<T, U> ::std::ops::Sub<$vector<U>> for $size<T>
        where
            T: $crate::scalar::Scalar + $crate::scalar::Promote<U>,
            U: $crate::scalar::Scalar
                + $crate::scalar::Promote<T, Output = $crate::scalar::Promoted<T, U>>,
        {
            type Output = $size<$crate::scalar::Promoted<T, U>>;

            #[inline]
            fn sub(self, rhs: $vector<U>) -> Self::Output {
                $size {
                    $($f: $crate::scalar::Promote::<U>::promote(self.$f)
                        - $crate::scalar::Promote::<T>::promote(rhs.$c)),+
                }
            }
        }

        impl<T, U> ::std::ops::Mul<$vector<U>> for $size<T>
        where
            T: $crate::scalar::Scalar + $crate::scalar::Promote<U>,
            U: $crate::scalar::Scalar
                + $crate::scalar::Promote<T, Output = $crate::scalar::Promoted<T, U>>,
        {
            type Output = $size<$crate::scalar::Promoted<T, U>>;

            #[inline]
            fn mul(self, rhs: $vector<U>) -> Self::Output {
                $size {
                    $($f: $crate::scalar::Promote::<U>::promote(self.$f)
                        * $crate::scalar::Promote::<T>::promote(rhs.$c)),+
                }
            }
        }

        impl<T, U> ::std::ops::Div<$vector<U>> for $size<T>
        where
            T: $crate::scalar::Scalar + $crate::scalar::Promote<U>,
            U: $crate::scalar::Scalar
                + $crate::scalar::Promote<T, Output = $crate::scalar::Promoted<T, U>>,
        {
            type Output = $size<$crate::scalar::Promoted<T, U>>;

            #[inline]
            fn div(self, rhs: $vector<U>) -> Self::Output {
                $size {
                    $($f: $crate::scalar::Promote::<U>::promote(self.$f)
                        / $crate::scalar::Promote::<T>::promote(rhs.$c)),+
                }
            }
        }
    };
}

pub(crate) use impl_size_vector_ops;
