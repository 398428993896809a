use std::iter::Sum;
use std::ops::{Add, Neg};

use crate::math::Vector2;

use super::{Point, Segment};

/// A displacement on the 2D plane.
///
/// Stored in PostgreSQL as the `point` type, but a distinct type from
/// [`Point`]: there is no conversion between the two, so a vector never
/// compares equal to a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector(Vector2);

impl Vector {
    /// Creates a vector with the given components.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self(Vector2::new(x, y))
    }

    /// The zero vector `[0, 0]`.
    #[must_use]
    pub fn zero() -> Self {
        Self(Vector2::zeros())
    }

    /// The X basis vector `[1, 0]`.
    #[must_use]
    pub fn basis_x() -> Self {
        Self(Vector2::x())
    }

    /// The Y basis vector `[0, 1]`.
    #[must_use]
    pub fn basis_y() -> Self {
        Self(Vector2::y())
    }

    /// Returns the X component.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    /// Returns the Y component.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    /// Returns the components as `(x, y)`.
    #[must_use]
    pub fn values(&self) -> (f64, f64) {
        (self.0.x, self.0.y)
    }

    /// Returns the underlying nalgebra vector.
    #[must_use]
    pub fn as_vector2(&self) -> &Vector2 {
        &self.0
    }

    /// Length of the vector.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.0.norm()
    }

    /// Returns a vector with the same angle and a magnitude of 1.
    ///
    /// The magnitude must be non-zero; the zero vector yields NaN components.
    #[must_use]
    pub fn unit(&self) -> Vector {
        Self(self.0.normalize())
    }

    /// Returns the vector scaled by `n`. Negative factors reverse it.
    #[must_use]
    pub fn scale(&self, n: f64) -> Vector {
        Self(self.0 * n)
    }

    /// Angle from the positive X axis, in `(-pi, pi]`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.0.y.atan2(self.0.x)
    }

    /// Returns the sum of this vector and every vector in `others`.
    #[must_use]
    pub fn plus(&self, others: &[Vector]) -> Vector {
        others.iter().fold(*self, |acc, v| acc + *v)
    }

    /// Dot product with `other`.
    #[must_use]
    pub fn dot(&self, other: Vector) -> f64 {
        self.0.dot(&other.0)
    }

    /// Z component of the cross product with `other`.
    ///
    /// Both inputs lie in the XY plane, so the full cross product points
    /// along Z and only its signed length is meaningful.
    #[must_use]
    pub fn cross_z(&self, other: Vector) -> f64 {
        self.0.perp(&other.0)
    }

    /// Segment from the origin to the tip of this vector.
    #[must_use]
    pub fn as_segment(&self) -> Segment {
        Point::origin().segment_to(*self)
    }
}

impl From<Vector2> for Vector {
    fn from(v: Vector2) -> Self {
        Self(v)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Self(self.0 + rhs.0)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Self(-self.0)
    }
}

impl Sum for Vector {
    fn sum<I: Iterator<Item = Vector>>(iter: I) -> Vector {
        iter.fold(Vector::zero(), Add::add)
    }
}
