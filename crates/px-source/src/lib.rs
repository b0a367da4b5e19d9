/// Pixel extraction for pixscii: file decoding and RGB grid building.

pub mod error;
pub mod extract;
pub mod image;

pub use error::SourceError;
pub use extract::{extract_pixels, normalize_channel, premultiply};
pub use self::image::{ImageSource, decode_bytes, load_image};
