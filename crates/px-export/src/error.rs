use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while producing an output raster.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Destination file could not be created.
    #[error("Failed to create output file {}: {source}", .path.display())]
    Create {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Image could not be serialized as PNG.
    #[error("Failed to encode image {}: {source}", .path.display())]
    Encode {
        /// Destination path.
        path: PathBuf,
        /// Underlying codec error.
        source: image::ImageError,
    },

    /// Encoded bytes could not be flushed to disk.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Nothing to encode: PNG needs at least one pixel.
    #[error("Refusing to write empty {width}×{height} image to {}", .path.display())]
    EmptyImage {
        /// Destination path.
        path: PathBuf,
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Canvas dimensions overflow or do not match the pixel buffer.
    #[error("Invalid canvas: {width}×{height}")]
    InvalidCanvas {
        /// Requested width.
        width: u64,
        /// Requested height.
        height: u64,
    },
}
