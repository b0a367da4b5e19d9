/// Decoded image the extractor reads from.
///
/// Implemented by `ImageSource` (decoded files) and by in-memory test
/// fixtures. Channels come back at the source's native depth; the
/// extractor rescales them against `max_channel_value`.
///
/// # Example
/// ```
/// use px_core::traits::PixelSource;
///
/// struct Flat;
/// impl PixelSource for Flat {
///     fn bounds(&self) -> (u32, u32) { (2, 2) }
///     fn max_channel_value(&self) -> u16 { 255 }
///     fn rgba_at(&self, _x: u32, _y: u32) -> [u16; 4] { [128, 128, 128, 255] }
/// }
/// assert_eq!(Flat.bounds(), (2, 2));
/// ```
pub trait PixelSource {
    /// (width, height) in pixels.
    fn bounds(&self) -> (u32, u32);

    /// Largest value any channel can take (255 for 8-bit, 65535 for 16-bit).
    fn max_channel_value(&self) -> u16;

    /// Raw RGBA channels at (x, y). Only called with in-bounds coordinates.
    fn rgba_at(&self, x: u32, y: u32) -> [u16; 4];
}
