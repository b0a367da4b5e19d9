pub mod grayscale;
/// Grayscale and ASCII conversion engine for pixscii.
///
/// Turns RGB grids into luminance grids, then luminance into text rows.
pub mod mapper;

pub use grayscale::{luminosity, to_grayscale};
pub use mapper::{AsciiMapper, map_ascii};
