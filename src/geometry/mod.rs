mod aabb;
mod circle;
mod path;
mod point;
mod segment;
mod vector;

pub use aabb::Aabb;
pub use circle::Circle;
pub use path::{Path, Polygon};
pub use point::Point;
pub use segment::Segment;
pub use vector::Vector;

/// An enclosed area on the plane.
pub trait Shape {
    /// Returns whether the point lies on or inside the shape.
    fn contains(&self, p: Point) -> bool;

    /// Returns the enclosed area.
    fn area(&self) -> f64;

    /// Returns the length of the boundary.
    fn perimeter(&self) -> f64;
}
