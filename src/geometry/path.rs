use super::Point;

/// An open or closed sequence of points, stored in PostgreSQL as the `path`
/// type.
///
/// Only a container for now: there are no geometric operations, and the
/// wire encoding reports it as unimplemented.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    points: Vec<Point>,
    closed: bool,
}

impl Path {
    /// Creates a path through `points`, joined back to the start if `closed`.
    #[must_use]
    pub fn new(points: Vec<Point>, closed: bool) -> Self {
        Self { points, closed }
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns whether the last point joins back to the first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

/// A closed path, stored in PostgreSQL as the `polygon` type.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(Path);

impl Polygon {
    /// Creates a polygon with the given vertices.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self(Path::new(points, true))
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        self.0.points()
    }
}
