use px_core::frame::{GrayGrid, PixelGrid, Rgb};

/// Luminosity weights in hundredths: 0.21 R + 0.72 G + 0.07 B.
pub const LUMA_WEIGHTS: (u32, u32, u32) = (21, 72, 7);

/// Luminosity-method gray level of one pixel, truncated.
///
/// Integer math keeps the result exactly `floor(0.21 R + 0.72 G + 0.07 B)`;
/// weights sum to 100 so the result never exceeds 255.
///
/// # Example
/// ```
/// use px_core::frame::Rgb;
/// use px_ascii::luminosity;
/// assert_eq!(luminosity(Rgb::new(255, 255, 255)), 255);
/// assert_eq!(luminosity(Rgb::new(128, 128, 128)), 128);
/// assert_eq!(luminosity(Rgb::new(100, 0, 0)), 21);
/// ```
#[inline(always)]
#[must_use]
pub fn luminosity(px: Rgb) -> u8 {
    let (wr, wg, wb) = LUMA_WEIGHTS;
    ((u32::from(px.r) * wr + u32::from(px.g) * wg + u32::from(px.b) * wb) / 100) as u8
}

/// Convert every pixel to its gray level. Output has the input's shape.
#[must_use]
pub fn to_grayscale(pixels: &PixelGrid) -> GrayGrid {
    let gray = pixels.map(|px| luminosity(*px));
    log::info!("Grayscale: {}×{}", gray.width(), gray.height());
    gray
}
