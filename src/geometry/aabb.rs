use crate::math::sort_pair;

use super::{Point, Shape};

/// An axis-aligned box, stored in PostgreSQL as the `box` type.
///
/// Construction normalizes the two given corners so that `min` holds the
/// smallest X and Y and `max` the largest. Boxes built from either pair of
/// opposite corners, in either order, compare equal. A NaN coordinate is
/// kept rather than dropped, so it carries through to area and perimeter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min: Point,
    max: Point,
}

impl Aabb {
    /// Creates a box from two diagonally opposite corners.
    #[must_use]
    pub fn new(p1: Point, p2: Point) -> Self {
        let (x1, y1) = p1.values();
        let (x2, y2) = p2.values();
        let (xmin, xmax) = sort_pair(x1, x2);
        let (ymin, ymax) = sort_pair(y1, y2);
        Self {
            min: Point::new(xmin, ymin),
            max: Point::new(xmax, ymax),
        }
    }

    /// Lower-left corner.
    #[must_use]
    pub fn min(&self) -> Point {
        self.min
    }

    /// Upper-right corner.
    #[must_use]
    pub fn max(&self) -> Point {
        self.max
    }

    /// Returns `(min, max)`.
    #[must_use]
    pub fn corners(&self) -> (Point, Point) {
        (self.min, self.max)
    }

    /// Returns the extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x() - self.min.x()
    }

    /// Returns the extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y() - self.min.y()
    }
}

impl Shape for Aabb {
    fn contains(&self, p: Point) -> bool {
        let (x, y) = p.values();
        x >= self.min.x() && x <= self.max.x() && y >= self.min.y() && y <= self.max.y()
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    fn perimeter(&self) -> f64 {
        2.0 * self.width() + 2.0 * self.height()
    }
}
