pub mod intercept_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Returns the pair in ascending order.
///
/// NaN compares false, so a NaN first argument is returned second.
#[must_use]
pub fn sort_pair(n: f64, m: f64) -> (f64, f64) {
    if n <= m {
        (n, m)
    } else {
        (m, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_pair_orders_ascending() {
        assert_eq!(sort_pair(1.0, 2.0), (1.0, 2.0));
        assert_eq!(sort_pair(2.0, 1.0), (1.0, 2.0));
        assert_eq!(sort_pair(-3.0, -3.0), (-3.0, -3.0));
    }

    #[test]
    fn sort_pair_infinities() {
        assert_eq!(
            sort_pair(f64::INFINITY, f64::NEG_INFINITY),
            (f64::NEG_INFINITY, f64::INFINITY)
        );
    }
}
