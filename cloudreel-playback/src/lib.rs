//! Playback for cloudreel frame videos
//!
//! This crate turns a decoded [`FrameVideo`] into an indefinitely looping,
//! time-paced animation on an external rendering surface:
//! - the [`RenderSurface`] trait the window layer implements
//! - per-frame depth-gradient coloring
//! - the cooperative playback scheduler

pub mod surface;
pub mod color;
pub mod scheduler;

pub use surface::*;
pub use color::*;
pub use scheduler::*;

use cloudreel_core::FrameVideo;

/// Play a frame video on a surface with the default pacing, blocking until
/// the surface reports cancellation.
pub fn playback<S: RenderSurface>(video: &FrameVideo, surface: &mut S) {
    PlaybackScheduler::new().run(video, surface);
}
