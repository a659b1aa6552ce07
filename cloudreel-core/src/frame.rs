//! Frame and frame-video containers

use crate::point::Point3f;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// One decoded, sanitized batch of 3D points.
///
/// A frame corresponds to exactly one container record. Point order is the
/// arrival order in the record payload. A frame may be empty (every point in
/// the payload was dropped by sanitization).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub points: Vec<Point3f>,
}

impl Frame {
    /// Create a new empty frame
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new frame with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a frame from a vector of points
    pub fn from_points(points: Vec<Point3f>) -> Self {
        Self { points }
    }

    /// Get the number of points in the frame
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the frame is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the frame
    pub fn push(&mut self, point: Point3f) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point3f> {
        self.points.iter()
    }
}

impl Index<usize> for Frame {
    type Output = Point3f;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IntoIterator for Frame {
    type Item = Point3f;
    type IntoIter = std::vec::IntoIter<Point3f>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = &'a Point3f;
    type IntoIter = std::slice::Iter<'a, Point3f>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point3f> for Frame {
    fn extend<I: IntoIterator<Item = Point3f>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point3f> for Frame {
    fn from_iter<I: IntoIterator<Item = Point3f>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}

/// The complete ordered sequence of frames decoded from one container.
///
/// Produced once by the decoder and read repeatedly by the playback loop;
/// there is no mutating API beyond construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameVideo {
    frames: Vec<Frame>,
}

impl FrameVideo {
    /// Create a frame video from an ordered sequence of frames
    pub fn from_frames(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// Get the number of frames in the video
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if the video holds no frames
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Get an iterator over the frames
    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Get the frames as a slice
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Total number of points across all frames
    pub fn point_count(&self) -> usize {
        self.frames.iter().map(Frame::len).sum()
    }
}

impl Index<usize> for FrameVideo {
    type Output = Frame;

    fn index(&self, index: usize) -> &Self::Output {
        &self.frames[index]
    }
}

impl<'a> IntoIterator for &'a FrameVideo {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

impl FromIterator<Frame> for FrameVideo {
    fn from_iter<I: IntoIterator<Item = Frame>>(iter: I) -> Self {
        Self {
            frames: Vec::from_iter(iter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_preserves_insertion_order() {
        let mut frame = Frame::new();
        frame.push(Point3f::new(1.0, 0.0, 0.0));
        frame.push(Point3f::new(2.0, 0.0, 0.0));
        frame.push(Point3f::new(3.0, 0.0, 0.0));

        assert_eq!(frame.len(), 3);
        assert_eq!(frame[0].x, 1.0);
        assert_eq!(frame[2].x, 3.0);
    }

    #[test]
    fn video_indexes_frames_in_order() {
        let video = FrameVideo::from_frames(vec![
            Frame::from_points(vec![Point3f::origin()]),
            Frame::new(),
        ]);

        assert_eq!(video.len(), 2);
        assert_eq!(video[0].len(), 1);
        assert!(video[1].is_empty());
        assert_eq!(video.point_count(), 1);
    }
}
