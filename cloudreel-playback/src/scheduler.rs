//! Playback scheduling
//!
//! Single-threaded cooperative loop: the decoded video is walked front to
//! back, wrapping indefinitely, and the only exit is the surface reporting
//! cancellation from its event poll. The container format carries no timing
//! metadata, so pacing is a fixed inter-frame interval rather than per-frame
//! timestamps.

use crate::color::depth_colors;
use crate::surface::RenderSurface;
use cloudreel_core::FrameVideo;
use std::time::Duration;

/// Default pause between frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlaybackState {
    /// Before any frame has been shown; the surface viewpoint is reset once
    /// on leaving this state.
    AwaitingFirstFrame,
    Playing,
}

/// Drives an unbounded loop over a frame video, pushing each frame to a
/// rendering surface at a fixed cadence.
#[derive(Debug, Clone)]
pub struct PlaybackScheduler {
    interval: Duration,
}

impl PlaybackScheduler {
    /// Create a scheduler with the default 250 ms inter-frame interval.
    pub fn new() -> Self {
        Self {
            interval: FRAME_INTERVAL,
        }
    }

    /// Override the inter-frame interval.
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }

    /// Play `video` on `surface` until the surface's event poll reports
    /// cancellation.
    ///
    /// The video loops indefinitely; there is no frame-count-based exit.
    /// An empty video returns immediately without touching the surface
    /// (callers should reject empty videos up front, but the scheduler must
    /// not spin on one). Cancellation is normal termination, not an error.
    pub fn run<S: RenderSurface>(&self, video: &FrameVideo, surface: &mut S) {
        if video.is_empty() {
            log::warn!("playback requested for an empty video");
            return;
        }

        log::info!("starting playback of {} frames", video.len());
        let mut state = PlaybackState::AwaitingFirstFrame;

        'playback: loop {
            for frame in video {
                surface.clear();
                let colors = depth_colors(frame);
                surface.set_points(&frame.points);
                surface.set_colors(&colors);

                if state == PlaybackState::AwaitingFirstFrame {
                    surface.reset_viewpoint();
                    state = PlaybackState::Playing;
                }

                if !surface.poll_events() {
                    log::info!("surface cancelled, stopping playback");
                    break 'playback;
                }

                surface.render();
                std::thread::sleep(self.interval);
            }
        }
    }
}

impl Default for PlaybackScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudreel_core::{ColorSample, Frame, Point3f};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        SetPoints(usize),
        SetColors(Vec<ColorSample>),
        ResetViewpoint,
        PollEvents,
        Render,
    }

    /// Surface double that records every call and cancels after a scripted
    /// number of polls.
    struct RecordingSurface {
        calls: Vec<Call>,
        polls_before_cancel: usize,
    }

    impl RecordingSurface {
        fn cancel_after(polls: usize) -> Self {
            Self {
                calls: Vec::new(),
                polls_before_cancel: polls,
            }
        }

        fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
            self.calls.iter().filter(|c| matches(c)).count()
        }
    }

    impl RenderSurface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }

        fn set_points(&mut self, points: &[Point3f]) {
            self.calls.push(Call::SetPoints(points.len()));
        }

        fn set_colors(&mut self, colors: &[ColorSample]) {
            self.calls.push(Call::SetColors(colors.to_vec()));
        }

        fn reset_viewpoint(&mut self) {
            self.calls.push(Call::ResetViewpoint);
        }

        fn poll_events(&mut self) -> bool {
            self.calls.push(Call::PollEvents);
            if self.polls_before_cancel == 0 {
                return false;
            }
            self.polls_before_cancel -= 1;
            true
        }

        fn render(&mut self) {
            self.calls.push(Call::Render);
        }
    }

    fn scheduler() -> PlaybackScheduler {
        PlaybackScheduler::with_interval(Duration::ZERO)
    }

    fn two_frame_video() -> FrameVideo {
        FrameVideo::from_frames(vec![
            Frame::from_points(vec![Point3f::new(0.0, 0.0, 0.0)]),
            Frame::from_points(vec![
                Point3f::new(0.0, 0.0, 1.0),
                Point3f::new(0.0, 0.0, 2.0),
            ]),
        ])
    }

    #[test]
    fn empty_video_touches_no_surface_method() {
        let mut surface = RecordingSurface::cancel_after(100);
        scheduler().run(&FrameVideo::default(), &mut surface);

        assert!(surface.calls.is_empty());
    }

    #[test]
    fn cancellation_stops_within_the_current_iteration() {
        let mut surface = RecordingSurface::cancel_after(0);
        scheduler().run(&two_frame_video(), &mut surface);

        // First frame is fully pushed, then the failing poll ends the run
        // before render and before the second frame.
        assert_eq!(surface.count(|c| matches!(c, Call::PollEvents)), 1);
        assert_eq!(surface.count(|c| matches!(c, Call::Render)), 0);
        assert_eq!(surface.count(|c| matches!(c, Call::Clear)), 1);
    }

    #[test]
    fn viewpoint_resets_once_across_loop_wraps() {
        // 5 polls over a 2-frame video spans more than two outer iterations.
        let mut surface = RecordingSurface::cancel_after(5);
        scheduler().run(&two_frame_video(), &mut surface);

        assert_eq!(surface.count(|c| matches!(c, Call::ResetViewpoint)), 1);
        assert_eq!(surface.calls[3], Call::ResetViewpoint);
        assert_eq!(surface.count(|c| matches!(c, Call::Render)), 5);
    }

    #[test]
    fn video_wraps_back_to_the_first_frame() {
        let mut surface = RecordingSurface::cancel_after(3);
        scheduler().run(&two_frame_video(), &mut surface);

        let sizes: Vec<usize> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::SetPoints(n) => Some(*n),
                _ => None,
            })
            .collect();
        assert_eq!(sizes, vec![1, 2, 1, 2]);
    }

    #[test]
    fn each_frame_gets_its_own_depth_colors() {
        let mut surface = RecordingSurface::cancel_after(1);
        scheduler().run(&two_frame_video(), &mut surface);

        let colors: Vec<&Vec<ColorSample>> = surface
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::SetColors(colors) => Some(colors),
                _ => None,
            })
            .collect();

        assert_eq!(colors[0], &vec![ColorSample::new(0.0, 0.0, 1.0)]);
        assert_eq!(
            colors[1],
            &vec![
                ColorSample::new(0.0, 0.0, 1.0),
                ColorSample::new(1.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn buffers_are_cleared_before_every_frame() {
        let mut surface = RecordingSurface::cancel_after(2);
        scheduler().run(&two_frame_video(), &mut surface);

        // Call pattern per frame: clear, points, colors, (reset), poll, render.
        assert_eq!(surface.calls[0], Call::Clear);
        assert_eq!(surface.count(|c| matches!(c, Call::Clear)), 3);
    }
}
