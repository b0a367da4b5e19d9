use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning an input file into pixels.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Input file missing or unreadable.
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// File read fine but is not a decodable image.
    #[error("Cannot decode {}: {source}", .path.display())]
    Decode {
        /// Path that was decoded.
        path: PathBuf,
        /// Underlying codec error.
        source: image::ImageError,
    },

    /// In-memory bytes are not a decodable image.
    #[error("Unrecognized image data: {0}")]
    Format(#[from] image::ImageError),
}
