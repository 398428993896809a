use crate::math::Point2;

use super::{Segment, Vector};

/// A point on the 2D plane.
///
/// Stored in PostgreSQL as the `point` type. Points are immutable; use
/// [`Point::values`] to read the coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(Point2);

impl Point {
    /// Creates a point at the given coordinates.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Point2::new(x, y))
    }

    /// The zero point `(0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self(Point2::origin())
    }

    /// Returns the X coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Returns the Y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Returns the coordinates as `(x, y)`.
    #[must_use]
    pub fn values(&self) -> (f64, f64) {
        (self.0.x, self.0.y)
    }

    /// Returns the underlying nalgebra point.
    #[must_use]
    pub fn as_point2(&self) -> &Point2 {
        &self.0
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: Point) -> f64 {
        nalgebra::distance(&self.0, &other.0)
    }

    /// Displacement from this point to `other`.
    #[must_use]
    pub fn vector_to(&self, other: Point) -> Vector {
        Vector::from(other.0 - self.0)
    }

    /// Returns this point moved by `v`.
    #[must_use]
    pub fn translate(&self, v: Vector) -> Point {
        Self(self.0 + *v.as_vector2())
    }

    /// Segment from this point to the point reached by moving along `v`.
    #[must_use]
    pub fn segment_to(&self, v: Vector) -> Segment {
        Segment::new(*self, self.translate(v))
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self(p)
    }
}
