use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{EncodableLayout, GrayImage, ImageBuffer, PixelWithColorType};
use px_core::frame::{AsciiLines, GrayGrid};

use crate::error::ExportError;
use crate::rasterizer::Rasterizer;

/// Encode `image` as PNG at `path`.
///
/// The file handle is closed on every return path; a failure after creation
/// may leave a truncated file behind.
///
/// # Errors
/// `EmptyImage` for a zero-sized image (nothing is created), `Create` if the
/// file cannot be opened for writing, `Encode` if serialization fails,
/// `Write` if the final flush fails.
pub fn write_png<P>(
    image: &ImageBuffer<P, Vec<P::Subpixel>>,
    path: &Path,
) -> Result<(), ExportError>
where
    P: PixelWithColorType,
    [P::Subpixel]: EncodableLayout,
{
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyImage {
            path: path.to_path_buf(),
            width,
            height,
        });
    }

    let file = File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    image
        .write_with_encoder(PngEncoder::new(&mut writer))
        .map_err(|source| ExportError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    writer.flush().map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log::info!("Wrote {width}×{height} PNG to {}", path.display());
    Ok(())
}

/// Save a gray grid as an 8-bit single-channel PNG of the same size.
///
/// # Errors
/// See [`write_png`].
pub fn save_gray_png(gray: &GrayGrid, path: &Path) -> Result<(), ExportError> {
    let (width, height) = (gray.width(), gray.height());
    let img = GrayImage::from_raw(width, height, gray.as_slice().to_vec()).ok_or(
        ExportError::InvalidCanvas {
            width: u64::from(width),
            height: u64::from(height),
        },
    )?;
    write_png(&img, path)
}

/// Rasterize `lines` with the fixed 7×13 font and save them as RGBA PNG.
///
/// # Errors
/// `InvalidCanvas` if the text block is too large, otherwise see [`write_png`].
pub fn save_ascii_png(lines: &AsciiLines, path: &Path) -> Result<(), ExportError> {
    let canvas = Rasterizer::default().render(lines)?;
    write_png(&canvas, path)
}
