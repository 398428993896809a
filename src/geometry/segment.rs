use super::{Aabb, Point};

/// A line segment between two ordered endpoints.
///
/// Stored in PostgreSQL as the `lseg` type. Endpoint order is kept as given
/// and takes part in equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
}

impl Segment {
    /// Creates a segment connecting `start` to `end`.
    #[must_use]
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Returns the first endpoint.
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// Returns the second endpoint.
    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Returns `(start, end)`.
    #[must_use]
    pub fn endpoints(&self) -> (Point, Point) {
        (self.start, self.end)
    }

    /// Length of the segment.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Returns the box whose opposite corners are the endpoints.
    #[must_use]
    pub fn as_box(&self) -> Aabb {
        Aabb::new(self.start, self.end)
    }

    /// Returns the segment with its endpoints exchanged.
    #[must_use]
    pub fn flip(&self) -> Segment {
        Self::new(self.end, self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector;
    use approx::assert_relative_eq;

    #[test]
    fn magnitude() {
        let p1 = Point::new(-3.0, 4.0);
        let p2 = Point::new(-4.0, 3.0);
        assert_relative_eq!(Segment::new(Point::origin(), p1).magnitude(), 5.0);
        assert_relative_eq!(Segment::new(p1, p2).magnitude(), 2.0_f64.sqrt());
    }

    #[test]
    fn flip_reverses_order() {
        let p1 = Point::new(-3.0, 4.0);
        let p2 = Point::new(-4.0, 3.0);
        let s = Segment::new(p2, p1);
        assert_eq!(s.flip(), Segment::new(p1, p2));
        assert_ne!(s.flip(), s);
        assert_eq!(s.flip().flip(), s);
    }

    #[test]
    fn built_from_point_and_vector() {
        let p1 = Point::new(-3.0, 4.0);
        let s = p1.segment_to(Vector::new(-1.0, -1.0));
        assert_eq!(s, Segment::new(p1, Point::new(-4.0, 3.0)));
    }

    #[test]
    fn as_box() {
        let p1 = Point::new(-3.0, 4.0);
        let s = Segment::new(Point::origin(), p1);
        assert_eq!(s.as_box(), Aabb::new(Point::origin(), p1));
        assert_eq!(s.flip().as_box(), s.as_box());
    }
}
