//! Depth-based point coloring

use cloudreel_core::{ColorSample, Frame};

/// Compute one color per point from the frame's own depth range, in point
/// order.
///
/// Higher z within the frame maps to red, lower z to blue:
/// `(r, g, b) = (t, 0, 1 - t)` with `t = (z - z_min) / (z_max - z_min)`
/// clamped to `[0, 1]`. When the frame is empty, the range endpoints are not
/// finite, or `z_max <= z_min`, the range width collapses to 1.0, so a
/// single-point frame colors as `t = 0`.
///
/// The range is recomputed per frame rather than across the whole video, so
/// coloring stays meaningful when frames occupy very different depth bands.
pub fn depth_colors(frame: &Frame) -> Vec<ColorSample> {
    let (z_min, z_max) = frame.iter().fold(
        (f32::INFINITY, f32::NEG_INFINITY),
        |(lo, hi), p| (lo.min(p.z), hi.max(p.z)),
    );

    let range = if z_min.is_finite() && z_max.is_finite() && z_max > z_min {
        z_max - z_min
    } else {
        1.0
    };

    frame
        .iter()
        .map(|p| {
            let t = ((p.z - z_min) / range).clamp(0.0, 1.0);
            ColorSample::new(t, 0.0, 1.0 - t)
        })
        .collect()
}
