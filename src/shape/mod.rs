//! Shapes built from the vector and size primitives.

mod circle;
mod line;
mod line3;
mod rect;
mod sphere;
mod triangle;
mod triangle3;

pub use circle::Circle2;
pub use line::Line2;
pub use line3::Line3;
pub use rect::Rect;
pub use sphere::Sphere;
pub use triangle::Triangle2;
pub use triangle3::Triangle3;
