//! I/O for cloudreel frame videos
//!
//! This crate reads the framed binary point-cloud container from disk and
//! decodes it into a [`FrameVideo`]. The whole container is read into memory
//! before decoding begins; there is no streaming path and no encoder.

pub mod container;

pub use container::{decode, HEADER_SIZE, MAGIC};

use cloudreel_core::{Error, FrameVideo, Result};
use std::fs;
use std::path::Path;

/// Read and decode a container file.
///
/// The only failure mode is acquisition: the file being absent or unreadable.
/// Structural anomalies inside the container never fail; decoding stops at
/// the first one and the valid prefix is returned.
pub fn read_video<P: AsRef<Path>>(path: P) -> Result<FrameVideo> {
    let path = path.as_ref();
    let buffer = fs::read(path).map_err(|source| Error::Acquisition {
        path: path.to_path_buf(),
        source,
    })?;

    let video = decode(&buffer);
    log::info!(
        "decoded {} frames ({} points) from {}",
        video.len(),
        video.point_count(),
        path.display()
    );
    Ok(video)
}
