//! Point sanitization
//!
//! The rendering surface and the per-frame depth range are undefined on
//! non-finite input, so every payload is filtered before it becomes a frame.

use crate::point::Point3f;

/// Check that all three coordinates of a point are finite.
pub fn is_finite(point: &Point3f) -> bool {
    point.x.is_finite() && point.y.is_finite() && point.z.is_finite()
}

/// Drop every point with a NaN or infinite coordinate, preserving the order
/// of the survivors. Pure function, no shared state.
pub fn filter_finite(points: &[Point3f]) -> Vec<Point3f> {
    points.iter().copied().filter(is_finite).collect()
}
