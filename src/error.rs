//! Error types for asset and config loading

use std::path::PathBuf;
use thiserror::Error;

/// Failure loading an image into a texture holder
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("unable to read image {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("image {} is {width}x{height}, too large for a texture", .path.display())]
    TooLarge {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

/// Failure loading the RON config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
