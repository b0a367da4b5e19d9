use px_core::charset::RampLut;
use px_core::config::ASPECT_RATIO;
use px_core::error::CoreError;
use px_core::frame::{AsciiLines, GrayGrid};

/// Downsamples a gray grid and maps each sample onto a character ramp.
///
/// Columns are kept 1:1; rows are thinned by the aspect ratio so the text
/// keeps the image's proportions once drawn in tall glyph cells.
///
/// # Example
/// ```
/// use px_core::frame::GrayGrid;
/// use px_ascii::AsciiMapper;
///
/// let gray = GrayGrid::from_fn(10, 4, |_, _| 128);
/// let lines = AsciiMapper::default().map(&gray);
/// assert_eq!(lines.to_string(), "++++++++++\n++++++++++");
/// ```
#[derive(Clone, Debug)]
pub struct AsciiMapper {
    lut: RampLut,
    aspect_ratio: f64,
}

impl Default for AsciiMapper {
    fn default() -> Self {
        Self {
            lut: RampLut::default(),
            aspect_ratio: ASPECT_RATIO,
        }
    }
}

impl AsciiMapper {
    /// Mapper over a custom ramp (sparse→dense) and aspect ratio.
    ///
    /// # Errors
    /// `CoreError::EmptyRamp` for an empty ramp, `CoreError::InvalidAspectRatio`
    /// unless `aspect_ratio` is finite and positive.
    pub fn new(ramp: &str, aspect_ratio: f64) -> Result<Self, CoreError> {
        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(CoreError::InvalidAspectRatio(aspect_ratio));
        }
        Ok(Self {
            lut: RampLut::new(ramp)?,
            aspect_ratio,
        })
    }

    /// Number of text rows produced for a grid `height` pixels tall.
    #[must_use]
    pub fn sample_height(&self, height: u32) -> u32 {
        (f64::from(height) / self.aspect_ratio).floor() as u32
    }

    /// Convert `gray` into text rows.
    ///
    /// Produces `floor(height / aspect_ratio)` rows of `width` characters.
    /// Grids too short for a single row give no rows at all.
    #[must_use]
    pub fn map(&self, gray: &GrayGrid) -> AsciiLines {
        let (width, height) = (gray.width(), gray.height());
        let sample_width = width;
        let sample_height = self.sample_height(height);

        if sample_height == 0 {
            log::debug!("Grid {width}×{height} too short for one text row");
            return AsciiLines::default();
        }

        let step_x = if sample_width == 0 {
            1.0
        } else {
            f64::from(width) / f64::from(sample_width)
        };
        let step_y = f64::from(height) / f64::from(sample_height);
        log::debug!("Sampling {sample_width}×{sample_height}, step {step_x}×{step_y}");

        let mut lines = Vec::with_capacity(sample_height as usize);
        for y in 0..sample_height {
            // Float steps can land one past the last row/column; clamp back in.
            let sample_y = ((f64::from(y) * step_y) as u32).min(height - 1);
            let mut line = String::with_capacity(sample_width as usize);
            for x in 0..sample_width {
                let sample_x = ((f64::from(x) * step_x) as u32).min(width - 1);
                line.push(self.lut.map(gray.get(sample_x, sample_y)));
            }
            lines.push(line);
        }

        let lines = AsciiLines::from(lines);
        log::info!("ASCII: {} rows × {} columns", lines.len(), sample_width);
        lines
    }
}

/// Map with the standard ramp and aspect ratio.
#[must_use]
pub fn map_ascii(gray: &GrayGrid) -> AsciiLines {
    AsciiMapper::default().map(gray)
}
