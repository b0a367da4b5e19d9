use px_core::frame::{PixelGrid, Rgb};
use px_core::traits::PixelSource;

/// Rescale a channel from `[0, max]` onto `[0, 255]`, truncating.
///
/// Out-of-range values saturate at 255. A zero `max` maps everything to 0.
///
/// # Example
/// ```
/// use px_source::normalize_channel;
/// assert_eq!(normalize_channel(65535, u16::MAX), 255);
/// assert_eq!(normalize_channel(0x8000, u16::MAX), 127);
/// assert_eq!(normalize_channel(200, 255), 200);
/// ```
#[inline]
#[must_use]
pub fn normalize_channel(value: u16, max: u16) -> u8 {
    if max == 0 {
        return 0;
    }
    (u32::from(value.min(max)) * 255 / u32::from(max)) as u8
}

/// Scale a straight-alpha channel by `alpha / max`, truncating.
///
/// Fully transparent pixels come out black, opaque ones unchanged.
///
/// # Example
/// ```
/// use px_source::premultiply;
/// assert_eq!(premultiply(200, 128, 255), 100);
/// assert_eq!(premultiply(255, 0, 255), 0);
/// assert_eq!(premultiply(0x1234, u16::MAX, u16::MAX), 0x1234);
/// ```
#[inline]
#[must_use]
pub fn premultiply(value: u16, alpha: u16, max: u16) -> u16 {
    if max == 0 {
        return 0;
    }
    let alpha = u32::from(alpha.min(max));
    (u32::from(value.min(max)) * alpha / u32::from(max)) as u16
}

/// Read every pixel of `source` in row-major order into a `PixelGrid`.
///
/// Channels are premultiplied by alpha before normalization, then alpha is
/// dropped: transparent areas read as black. An image with a zero dimension
/// yields an empty grid.
///
/// # Example
/// ```
/// use px_core::traits::PixelSource;
/// use px_source::extract_pixels;
///
/// struct Flat;
/// impl PixelSource for Flat {
///     fn bounds(&self) -> (u32, u32) { (10, 4) }
///     fn max_channel_value(&self) -> u16 { 255 }
///     fn rgba_at(&self, _x: u32, _y: u32) -> [u16; 4] { [128, 128, 128, 255] }
/// }
/// let grid = extract_pixels(&Flat);
/// assert_eq!((grid.width(), grid.height()), (10, 4));
/// ```
pub fn extract_pixels<S: PixelSource + ?Sized>(source: &S) -> PixelGrid {
    let (width, height) = source.bounds();
    let max = source.max_channel_value();
    let grid = PixelGrid::from_fn(width, height, |x, y| {
        let [r, g, b, a] = source.rgba_at(x, y);
        let channel = |v| normalize_channel(premultiply(v, a, max), max);
        Rgb::new(channel(r), channel(g), channel(b))
    });
    log::debug!("Extracted {width}×{height} pixel grid (max channel {max})");
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Gradient16 {
        width: u32,
        height: u32,
    }

    impl PixelSource for Gradient16 {
        fn bounds(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        fn max_channel_value(&self) -> u16 {
            u16::MAX
        }

        fn rgba_at(&self, x: u32, y: u32) -> [u16; 4] {
            let v = ((x + y * self.width) * 257) as u16;
            [v, u16::MAX - v, 0, u16::MAX]
        }
    }

    #[test]
    fn normalize_is_identity_for_8bit() {
        for v in 0..=255u16 {
            assert_eq!(u16::from(normalize_channel(v, 255)), v);
        }
    }

    #[test]
    fn normalize_16bit_truncates() {
        assert_eq!(normalize_channel(0, u16::MAX), 0);
        assert_eq!(normalize_channel(257, u16::MAX), 1);
        assert_eq!(normalize_channel(256, u16::MAX), 0);
        assert_eq!(normalize_channel(u16::MAX - 1, u16::MAX), 254);
    }

    #[test]
    fn normalize_saturates_and_handles_zero_max() {
        assert_eq!(normalize_channel(300, 255), 255);
        assert_eq!(normalize_channel(10, 0), 0);
    }

    #[test]
    fn extract_preserves_dimensions_and_order() {
        let grid = extract_pixels(&Gradient16 {
            width: 6,
            height: 3,
        });
        assert_eq!((grid.width(), grid.height()), (6, 3));
        assert_eq!(grid.get(0, 0), Rgb::new(0, 255, 0));
        assert_eq!(grid.get(5, 2), Rgb::new(17, 238, 0));
    }

    struct Sprite;

    impl PixelSource for Sprite {
        fn bounds(&self) -> (u32, u32) {
            (3, 1)
        }

        fn max_channel_value(&self) -> u16 {
            255
        }

        fn rgba_at(&self, x: u32, _y: u32) -> [u16; 4] {
            match x {
                0 => [255, 255, 255, 0],
                1 => [200, 100, 50, 128],
                _ => [200, 100, 50, 255],
            }
        }
    }

    #[test]
    fn alpha_darkens_before_normalizing() {
        let grid = extract_pixels(&Sprite);
        assert_eq!(grid.get(0, 0), Rgb::new(0, 0, 0));
        assert_eq!(grid.get(1, 0), Rgb::new(100, 50, 25));
        assert_eq!(grid.get(2, 0), Rgb::new(200, 100, 50));
    }

    #[test]
    fn premultiply_16bit_half_alpha() {
        assert_eq!(premultiply(u16::MAX, 0x8000, u16::MAX), 0x8000);
        assert_eq!(premultiply(u16::MAX, 0, u16::MAX), 0);
        assert_eq!(premultiply(500, 300, 255), 255);
        assert_eq!(premultiply(10, 10, 0), 0);
    }

    #[test]
    fn zero_sized_source_gives_empty_grid() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let grid = extract_pixels(&Gradient16 {
                width: w,
                height: h,
            });
            assert!(grid.is_empty());
            assert_eq!((grid.width(), grid.height()), (w, h));
        }
    }
}
