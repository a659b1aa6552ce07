//! Rendering surface abstraction
//!
//! The window/context layer lives outside this workspace; the scheduler only
//! sees this trait. The surface is a single shared mutable resource: it is
//! passed to the scheduler by exclusive reference, and event polling and
//! render submission must happen on the thread that owns it.

use cloudreel_core::{ColorSample, Point3f};

/// External display/window abstraction that receives point and color buffers
/// and reports cancellation via event polling.
pub trait RenderSurface {
    /// Clear the current point and color buffers.
    fn clear(&mut self);

    /// Replace the surface's point buffer.
    fn set_points(&mut self, points: &[Point3f]);

    /// Replace the surface's color buffer, one color per point.
    fn set_colors(&mut self, colors: &[ColorSample]);

    /// Reset the camera/viewpoint to frame the current geometry.
    fn reset_viewpoint(&mut self);

    /// Pump surface events. Returns `false` when the surface was closed or
    /// playback was cancelled.
    fn poll_events(&mut self) -> bool;

    /// Request a render of the current buffers.
    fn render(&mut self);
}
