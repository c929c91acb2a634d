//! Geometric utilities for landmark measurements.

use nalgebra::Vector2;

use crate::types::Point2D;

/// Norm products below this are treated as zero-length vectors
const DEGENERATE_NORM: f64 = 1e-12;

/// Angle between two vectors in radians, `0.0` when either is degenerate
pub fn angle_between(v1: &Vector2<f64>, v2: &Vector2<f64>) -> f64 {
    let norms = v1.norm() * v2.norm();
    if norms < DEGENERATE_NORM {
        return 0.0;
    }

    let cosine = v1.dot(v2) / norms;
    if !cosine.is_finite() {
        return 0.0;
    }

    cosine.clamp(-1.0, 1.0).acos()
}

/// Angle at `vertex` formed by `a` and `c`, in degrees within [0, 180].
///
/// Coincident points yield `0.0` rather than an error; downstream
/// thresholds read that as a fully closed angle.
pub fn joint_angle(a: Point2D, vertex: Point2D, c: Point2D) -> f64 {
    let ba = a.vector_from(&vertex);
    let bc = c.vector_from(&vertex);
    angle_between(&ba, &bc).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_right_angle() {
        let angle = joint_angle(p(1.0, 0.0), p(0.0, 0.0), p(0.0, 1.0));
        assert!((angle - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_straight_line() {
        let angle = joint_angle(p(0.5, 0.2), p(0.5, 0.4), p(0.5, 0.8));
        assert!((angle - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_coincident_points_return_zero() {
        let q = p(0.3, 0.7);
        assert_eq!(joint_angle(q, q, q), 0.0);
        assert_eq!(joint_angle(q, q, p(0.9, 0.1)), 0.0);
    }

    #[test]
    fn test_non_finite_input_returns_zero() {
        let angle = joint_angle(p(f64::NAN, 0.0), p(0.0, 0.0), p(1.0, 1.0));
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_range_and_symmetry() {
        let triples = [
            (p(0.1, 0.9), p(0.5, 0.5), p(0.9, 0.8)),
            (p(0.2, 0.2), p(0.4, 0.6), p(0.45, 0.1)),
            (p(0.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)),
            (p(0.33, 0.71), p(0.12, 0.05), p(0.98, 0.4)),
            (p(0.5, 0.1), p(0.5, 0.5), p(0.5, 0.9)),
        ];

        for (a, b, c) in triples {
            let forward = joint_angle(a, b, c);
            let backward = joint_angle(c, b, a);
            assert!((0.0..=180.0).contains(&forward), "angle {} out of range", forward);
            assert!((forward - backward).abs() < 1e-9);
        }
    }

    #[test]
    fn test_angle_between_radians() {
        let v1 = Vector2::new(1.0, 0.0);
        let v2 = Vector2::new(-1.0, 0.0);
        assert!((angle_between(&v1, &v2) - std::f64::consts::PI).abs() < 1e-12);
        assert_eq!(angle_between(&v1, &Vector2::zeros()), 0.0);
    }
}
