use gridway_core::Point;

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_distance() {
        let a = Point::new(0, 0);
        assert_eq!(euclidean(a, a), 0.0);
        assert_eq!(euclidean(a, Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(3, 4), a), 5.0);
        assert_eq!(euclidean(a, Point::new(-3, -4)), 5.0);
        assert!((euclidean(a, Point::new(1, 1)) - std::f64::consts::SQRT_2).abs() < 1e-12);
    }
}
