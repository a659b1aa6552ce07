//! Core data structures for cloudreel
//!
//! This crate provides the fundamental types for point-cloud frame videos:
//! points, colors, frames, the decoded frame-video container, plus point
//! sanitization and small vector helpers.

pub mod point;
pub mod frame;
pub mod sanitize;
pub mod ops;
pub mod error;

pub use point::*;
pub use frame::*;
pub use sanitize::*;
pub use ops::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};

/// Common result type for cloudreel operations
pub type Result<T> = std::result::Result<T, Error>;
