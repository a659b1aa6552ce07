//! Error types for cloudreel
//!
//! Only source acquisition can fail. Structural anomalies inside a container
//! (bad magic, truncated payload, misaligned length) are absorbed by the
//! decoder, and non-finite points are dropped silently, so neither is
//! representable as an error.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for cloudreel operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read container {}: {source}", path.display())]
    Acquisition {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for cloudreel operations
pub type Result<T> = std::result::Result<T, Error>;
