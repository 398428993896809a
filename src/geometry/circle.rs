use std::f64::consts::PI;

use super::{Aabb, Point, Shape};

/// A circle on the 2D plane, stored in PostgreSQL as the `circle` type.
///
/// The radius is not validated. A negative radius contains no points, while
/// [`Shape::area`] stays non-negative because it squares the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f64,
}

impl Circle {
    /// Creates a circle centered on `center` with the given radius.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns `(center_x, center_y, radius)`.
    #[must_use]
    pub fn values(&self) -> (f64, f64, f64) {
        let (x, y) = self.center.values();
        (x, y, self.radius)
    }

    /// Returns the box which exactly encloses the circle.
    ///
    /// The box shares the circle's center and touches it at the midpoint of
    /// each side.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        let (x, y) = self.center.values();
        let r = self.radius;
        Aabb::new(Point::new(x - r, y - r), Point::new(x + r, y + r))
    }
}

impl Shape for Circle {
    fn contains(&self, p: Point) -> bool {
        self.center.distance_to(p) <= self.radius
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}
