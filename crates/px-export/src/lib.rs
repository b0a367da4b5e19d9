/// Output side of pixscii: text rasterizing and PNG writing.

pub mod error;
pub mod png;
pub mod rasterizer;

pub use error::ExportError;
pub use png::{save_ascii_png, save_gray_png, write_png};
pub use rasterizer::Rasterizer;
