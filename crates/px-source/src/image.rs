use std::path::Path;

use image::{ColorType, DynamicImage, ImageBuffer, ImageReader, Rgba, RgbaImage};
use px_core::traits::PixelSource;

use crate::error::SourceError;

/// Decoded image kept at its native channel depth.
///
/// 8-bit formats stay 8-bit; everything deeper (16-bit, float) is held as
/// 16-bit RGBA so the extractor can rescale without losing range.
///
/// # Example
/// ```
/// use image::{DynamicImage, RgbImage};
/// use px_core::traits::PixelSource;
/// use px_source::ImageSource;
///
/// let src = ImageSource::from_dynamic(DynamicImage::ImageRgb8(RgbImage::new(4, 3)));
/// assert_eq!(src.bounds(), (4, 3));
/// assert_eq!(src.max_channel_value(), 255);
/// ```
#[derive(Debug)]
pub enum ImageSource {
    /// 8 bits per channel.
    Rgba8(RgbaImage),
    /// 16 bits per channel.
    Rgba16(ImageBuffer<Rgba<u16>, Vec<u16>>),
}

impl ImageSource {
    /// Pick the storage depth matching the decoded color type.
    #[must_use]
    pub fn from_dynamic(img: DynamicImage) -> Self {
        match img.color() {
            ColorType::L8 | ColorType::La8 | ColorType::Rgb8 | ColorType::Rgba8 => {
                Self::Rgba8(img.into_rgba8())
            }
            _ => Self::Rgba16(img.into_rgba16()),
        }
    }
}

impl PixelSource for ImageSource {
    fn bounds(&self) -> (u32, u32) {
        match self {
            Self::Rgba8(buf) => buf.dimensions(),
            Self::Rgba16(buf) => buf.dimensions(),
        }
    }

    fn max_channel_value(&self) -> u16 {
        match self {
            Self::Rgba8(_) => u16::from(u8::MAX),
            Self::Rgba16(_) => u16::MAX,
        }
    }

    #[inline]
    fn rgba_at(&self, x: u32, y: u32) -> [u16; 4] {
        match self {
            Self::Rgba8(buf) => buf.get_pixel(x, y).0.map(u16::from),
            Self::Rgba16(buf) => buf.get_pixel(x, y).0,
        }
    }
}

/// Open and decode an image file. Format is sniffed from the content.
///
/// # Errors
/// `SourceError::Read` if the file cannot be opened, `SourceError::Decode`
/// if its content is not a supported image.
///
/// # Example
/// ```no_run
/// use px_source::load_image;
/// let src = load_image("assets/picka.png".as_ref()).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<ImageSource, SourceError> {
    let read_err = |source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    };
    let reader = ImageReader::open(path)
        .map_err(read_err)?
        .with_guessed_format()
        .map_err(read_err)?;
    let img = reader.decode().map_err(|source| SourceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "Loaded {} ({}×{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );
    Ok(ImageSource::from_dynamic(img))
}

/// Decode an in-memory encoded image (PNG, JPEG, BMP, GIF).
///
/// # Errors
/// Returns `SourceError::Format` if the bytes are not a supported image.
pub fn decode_bytes(bytes: &[u8]) -> Result<ImageSource, SourceError> {
    let img = image::load_from_memory(bytes)?;
    Ok(ImageSource::from_dynamic(img))
}
