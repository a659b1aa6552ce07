//! Point and color types

use bytemuck::{Pod, Zeroable};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D point with floating point coordinates
pub type Point3f = Point3<f32>;

/// A 3D vector with floating point components
pub type Vector3f = Vector3<f32>;

/// Size in bytes of one point on the wire: three packed `f32` coordinates.
pub const POINT_SIZE: usize = 12;

/// An RGB color with components in `[0, 1]`, derived per point at render
/// time and never stored alongside the frame data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct ColorSample {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

unsafe impl Pod for ColorSample {}
unsafe impl Zeroable for ColorSample {}

impl ColorSample {
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for ColorSample {
    fn default() -> Self {
        Self {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        }
    }
}
