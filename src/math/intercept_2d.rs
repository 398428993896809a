use crate::geometry::{Point, Vector};

use super::sort_pair;

/// Computes the interception times of two moving points.
///
/// Points starting at `s1` and `s2` move with constant velocities `v1` and
/// `v2`. Interception means being exactly `radius` apart; use a radius of
/// zero for a true intersection. Returns the two times `(earlier, later)`,
/// which may lie in the past or the future. A tangent approach returns the
/// same time twice.
///
/// Identical velocities give one of two degenerate answers: `(NaN, NaN)` if
/// the points are never in range, `(-inf, +inf)` if they are always in range.
/// `(NaN, NaN)` is also returned when the closest approach stays outside
/// `radius`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn time_intercept(s1: Point, s2: Point, v1: Vector, v2: Vector, radius: f64) -> (f64, f64) {
    let (s1x, s1y) = s1.values();
    let (s2x, s2y) = s2.values();
    let (v1x, v1y) = v1.values();
    let (v2x, v2y) = v2.values();

    // |(s2 + t*v2) - (s1 + t*v1)|^2 = a*t^2 + b*t + c, expanded term by term.
    let a = v2y * v2y - 2.0 * v1y * v2y + v2x * v2x - 2.0 * v1x * v2x + v1y * v1y + v1x * v1x;
    let b = (2.0 * s2y - 2.0 * s1y) * v2y
        + (2.0 * s2x - 2.0 * s1x) * v2x
        + (2.0 * s1y - 2.0 * s2y) * v1y
        + (2.0 * s1x - 2.0 * s2x) * v1x;
    let c = s2y * s2y - 2.0 * s1y * s2y + s2x * s2x - 2.0 * s1x * s2x + s1y * s1y + s1x * s1x;

    if a == 0.0 {
        // Same velocity: the separation never changes.
        let distance = s1.distance_to(s2);
        if distance <= radius {
            tracing::debug!(distance, radius, "equal velocities, always within range");
            return (f64::NEG_INFINITY, f64::INFINITY);
        }
        tracing::debug!(distance, radius, "equal velocities, never within range");
        return (f64::NAN, f64::NAN);
    }

    let discriminant = b * b - 4.0 * a * (c - radius * radius);
    if discriminant < 0.0 {
        tracing::debug!(discriminant, radius, "closest approach is out of range");
        return (f64::NAN, f64::NAN);
    }

    let root = discriminant.sqrt();
    sort_pair((-b + root) / (2.0 * a), (-b - root) / (2.0 * a))
}
