use thiserror::Error;

/// Errors originating from the core module.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Pixel buffer length does not match the declared dimensions.
    #[error("Invalid dimensions: {width}×{height} for {len} values")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
        /// Number of values actually supplied.
        len: usize,
    },

    /// Character ramp with no characters to map luminance onto.
    #[error("Character ramp is empty")]
    EmptyRamp,

    /// Aspect ratio must be a finite positive number.
    #[error("Invalid aspect ratio: {0}")]
    InvalidAspectRatio(f64),
}
