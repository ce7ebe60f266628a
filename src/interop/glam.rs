//! Lossless conversions between the vector types and their `glam`
//! equivalents, per scalar width.

use crate::vector::{Vector2, Vector3, Vector4};

macro_rules! impl_glam_vector {
    ($($local:ident <$t:ty> <=> $foreign:ident { $($f:ident),+ };)+) => {$(
        impl From<glam::$foreign> for $local<$t> {
            #[inline]
            fn from(vector: glam::$foreign) -> Self {
                Self { $($f: vector.$f),+ }
            }
        }

        impl From<$local<$t>> for glam::$foreign {
            #[inline]
            fn from(vector: $local<$t>) -> Self {
                Self::new($(vector.$f),+)
            }
        }
    )+};
}

impl_glam_vector! {
    Vector2<f32> <=> Vec2 { x, y };
    Vector2<f64> <=> DVec2 { x, y };
    Vector2<i32> <=> IVec2 { x, y };
    Vector2<u32> <=> UVec2 { x, y };
    Vector3<f32> <=> Vec3 { x, y, z };
    Vector3<f64> <=> DVec3 { x, y, z };
    Vector3<i32> <=> IVec3 { x, y, z };
    Vector3<u32> <=> UVec3 { x, y, z };
    Vector4<f32> <=> Vec4 { x, y, z, w };
    Vector4<f64> <=> DVec4 { x, y, z, w };
    Vector4<i32> <=> IVec4 { x, y, z, w };
    Vector4<u32> <=> UVec4 { x, y, z, w };
}
