/// Shared types, constants, and configuration for pixscii.
///
/// Every pipeline stage (extraction, grayscale, ASCII mapping, rasterizing)
/// communicates through the grids defined here.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::RampLut;
pub use config::{GlyphMetrics, PipelineConfig};
pub use error::CoreError;
pub use frame::{AsciiLines, GrayGrid, Grid, PixelGrid, Rgb};
pub use traits::PixelSource;
