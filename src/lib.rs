pub mod axis;
pub mod constants;
pub mod error;
pub mod functions;
pub mod interop;
pub mod scalar;
pub mod shape;
pub mod size;
pub mod tolerance;
pub mod vector;

pub use axis::{Axis, Side};
pub use error::{FiguraError, Result};
pub use scalar::{FloatOf, FloatPromote, FloatScalar, Promote, Promoted, Scalar};
pub use shape::{Circle2, Line2, Line3, Rect, Sphere, Triangle2, Triangle3};
pub use size::{Size2, Size3};
pub use tolerance::ToleranceEq;
pub use vector::{Vector2, Vector3, Vector4};
