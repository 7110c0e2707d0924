//! Test support library
//! Provides 2D distance helpers for the thread-profile tests.

use helical_thread::ThreadProfile;
use helical_thread::float_types::Real;
use nalgebra::Point2;

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// `a` is within `eps` of `b`, or greater than it.
pub fn approx_eq_or_gt(a: Real, b: Real, eps: Real) -> bool {
    approx_eq(a, b, eps) || a > b
}

/// Perpendicular distance from `p` to the infinite line through `a` and `b`.
pub fn perpendicular_distance(p: Point2<Real>, a: Point2<Real>, b: Point2<Real>) -> Real {
    let dir = b - a;
    (dir.x * (a.y - p.y) - (a.x - p.x) * dir.y).abs() / dir.norm()
}

/// Resolves a profile to 2D vertices in the radius-axial plane, with the
/// axial coordinate shifted by `dy` to place the tooth against a
/// neighbouring turn.
pub fn outline(profile: &ThreadProfile, dy: Real) -> Vec<Point2<Real>> {
    profile
        .points()
        .iter()
        .map(|hl| {
            let p = hl.point2();
            Point2::new(p.x, p.y + dy)
        })
        .collect()
}

/// Shifts every vertex of `points` up by `dy`.
pub fn shifted(points: &[Point2<Real>], dy: Real) -> Vec<Point2<Real>> {
    points.iter().map(|p| Point2::new(p.x, p.y + dy)).collect()
}
