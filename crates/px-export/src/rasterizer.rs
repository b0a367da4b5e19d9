use std::collections::HashMap;

use font8x8::{BASIC_FONTS, UnicodeFonts};
use image::{Rgba, RgbaImage};
use px_core::config::{GlyphMetrics, PADDING};
use px_core::frame::AsciiLines;

use crate::error::ExportError;

/// Glyph ink color. Background stays fully transparent.
pub const TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Rows in a font8x8 bitmap; the last one sits on the baseline (descenders).
const BITMAP_ROWS: u32 = 8;

/// Converts text rows into an RGBA image using a fixed monospace bitmap font.
///
/// Glyph masks for printable ASCII are built once at construction. Each
/// mask covers one `metrics.width × metrics.height` cell whose row
/// `metrics.ascent` is the baseline.
///
/// # Example
/// ```
/// use px_core::frame::AsciiLines;
/// use px_export::Rasterizer;
///
/// let lines = AsciiLines::from(vec!["@@".to_string()]);
/// let img = Rasterizer::default().render(&lines).unwrap();
/// assert_eq!(img.dimensions(), (7 * 2 + 20, 13 + 20));
/// ```
pub struct Rasterizer {
    metrics: GlyphMetrics,
    padding: u32,
    /// Maps a char to its coverage mask (size = width * height).
    glyph_cache: HashMap<char, Vec<bool>>,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new(GlyphMetrics::FIXED_7X13, PADDING)
    }
}

impl Rasterizer {
    /// Initialise le rasterizer en pré-calculant les masques U+0020..=U+007E.
    #[must_use]
    pub fn new(metrics: GlyphMetrics, padding: u32) -> Self {
        let mut rasterizer = Self {
            metrics,
            padding,
            glyph_cache: HashMap::new(),
        };
        rasterizer.cache_charset(0x20..=0x7E);
        rasterizer
    }

    fn cache_charset(&mut self, range: std::ops::RangeInclusive<u32>) {
        let (cell_w, cell_h) = (self.metrics.width, self.metrics.height);
        // Top of the 8-row bitmap relative to the cell top, so that its
        // last row lands on the baseline.
        let top = i64::from(self.metrics.ascent) - i64::from(BITMAP_ROWS - 1);

        for codepoint in range {
            let Some(ch) = char::from_u32(codepoint) else {
                continue;
            };
            let Some(bitmap) = BASIC_FONTS.get(ch) else {
                continue;
            };

            let mut mask = vec![false; (cell_w * cell_h) as usize];
            for (row, &bitmap_row) in bitmap.iter().enumerate() {
                let cy = top + row as i64;
                if cy < 0 || cy >= i64::from(cell_h) {
                    continue;
                }
                // Bit 0 is the leftmost pixel.
                for col in 0..cell_w.min(8) {
                    if bitmap_row & (1u8 << col) != 0 {
                        mask[cy as usize * cell_w as usize + col as usize] = true;
                    }
                }
            }
            self.glyph_cache.insert(ch, mask);
        }
    }

    /// Canvas size for a block of `columns × rows` characters plus padding.
    ///
    /// # Errors
    /// Returns `ExportError::InvalidCanvas` if a dimension overflows `u32`.
    pub fn target_dimensions(
        &self,
        columns: usize,
        rows: usize,
    ) -> Result<(u32, u32), ExportError> {
        let pad = 2 * u64::from(self.padding);
        let width = u64::from(self.metrics.width)
            .saturating_mul(columns as u64)
            .saturating_add(pad);
        let height = u64::from(self.metrics.height)
            .saturating_mul(rows as u64)
            .saturating_add(pad);
        match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(ExportError::InvalidCanvas { width, height }),
        }
    }

    /// Draw `lines` on a transparent canvas sized to fit them.
    ///
    /// Line `i` has its baseline at `padding + (i + 1) * height`; characters
    /// advance by the cell width from `x = padding`. Characters without a
    /// glyph leave their cell blank.
    ///
    /// # Errors
    /// Returns `ExportError::InvalidCanvas` if the canvas would be too large.
    pub fn render(&self, lines: &AsciiLines) -> Result<RgbaImage, ExportError> {
        let (img_w, img_h) = self.target_dimensions(lines.max_line_chars(), lines.len())?;
        log::debug!(
            "Rasterizing {} lines onto {img_w}×{img_h} canvas",
            lines.len()
        );

        // RGBA à zéro : fond entièrement transparent.
        let mut canvas = RgbaImage::new(img_w, img_h);

        let (cell_w, cell_h) = (
            u64::from(self.metrics.width),
            u64::from(self.metrics.height),
        );
        let padding = u64::from(self.padding);
        let ascent = u64::from(self.metrics.ascent);

        for (i, line) in lines.iter().enumerate() {
            let baseline = padding + (i as u64 + 1) * cell_h;
            let cell_top = baseline.saturating_sub(ascent);
            for (j, ch) in line.chars().enumerate() {
                let Some(mask) = self.glyph_cache.get(&ch) else {
                    continue;
                };
                let cell_left = padding + j as u64 * cell_w;
                self.blit(&mut canvas, mask, cell_left, cell_top);
            }
        }

        Ok(canvas)
    }

    fn blit(&self, canvas: &mut RgbaImage, mask: &[bool], left: u64, top: u64) {
        let (img_w, img_h) = (u64::from(canvas.width()), u64::from(canvas.height()));
        let cell_w = self.metrics.width as usize;
        for (idx, _) in mask.iter().enumerate().filter(|(_, on)| **on) {
            let x = left + (idx % cell_w) as u64;
            let y = top + (idx / cell_w) as u64;
            if x < img_w && y < img_h {
                canvas.put_pixel(x as u32, y as u32, TEXT_COLOR);
            }
        }
    }
}
