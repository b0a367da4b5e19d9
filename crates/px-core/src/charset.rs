use crate::error::CoreError;

/// 9 characters, sparse → dense. The only ramp the converter ships with.
pub const ASCII_RAMP: &str = ".:-=+*#%@";

/// Lookup table mapping luminance [0..255] → ramp character.
///
/// Index for luminance `g` over a ramp of `n` characters is
/// `g * (n - 1) / 255`, i.e. `floor(g / 255 * (n - 1))` without float error.
///
/// # Example
/// ```
/// use px_core::charset::{RampLut, ASCII_RAMP};
/// let lut = RampLut::new(ASCII_RAMP).unwrap();
/// assert_eq!(lut.map(0), '.');
/// assert_eq!(lut.map(128), '+');
/// assert_eq!(lut.map(255), '@');
/// ```
#[derive(Clone, Debug)]
pub struct RampLut {
    lut: [char; 256],
    index: [usize; 256],
}

impl RampLut {
    /// Build a LUT from a ramp ordered sparse→dense.
    ///
    /// # Errors
    /// Returns `CoreError::EmptyRamp` if `ramp` has no characters.
    pub fn new(ramp: &str) -> Result<Self, CoreError> {
        let chars: Vec<char> = ramp.chars().collect();
        if chars.is_empty() {
            return Err(CoreError::EmptyRamp);
        }
        Ok(Self::build(&chars))
    }

    /// `chars` must not be empty.
    fn build(chars: &[char]) -> Self {
        let last = chars.len() - 1;
        let mut lut = [' '; 256];
        let mut index = [0usize; 256];
        for (g, (slot, idx)) in lut.iter_mut().zip(index.iter_mut()).enumerate() {
            let i = g * last / 255;
            *slot = chars[i];
            *idx = i;
        }
        Self { lut, index }
    }

    /// Map a luminance value [0..255] to a character.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }

    /// Ramp position chosen for `luminance`.
    #[inline(always)]
    #[must_use]
    pub fn index(&self, luminance: u8) -> usize {
        self.index[luminance as usize]
    }
}

impl Default for RampLut {
    /// LUT over [`ASCII_RAMP`].
    fn default() -> Self {
        let chars: Vec<char> = ASCII_RAMP.chars().collect();
        Self::build(&chars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_lut_maps_extremes() {
        let lut = RampLut::new(ASCII_RAMP).unwrap();
        assert_eq!(lut.map(0), '.');
        assert_eq!(lut.map(255), '@');
        assert_eq!(lut.index(255), 8);
    }

    #[test]
    fn ramp_lut_monotonic() {
        let lut = RampLut::new(ASCII_RAMP).unwrap();
        let mut prev_idx = 0usize;
        for g in 0..=255u8 {
            let idx = lut.index(g);
            assert!(idx >= prev_idx, "LUT not monotonic at luminance {g}");
            prev_idx = idx;
        }
    }

    #[test]
    fn ramp_lut_matches_float_floor() {
        let lut = RampLut::new(ASCII_RAMP).unwrap();
        for g in 0..=255u8 {
            let expected = (f64::from(g) / 255.0 * 8.0).floor() as usize;
            assert_eq!(lut.index(g), expected, "luminance {g}");
        }
    }

    #[test]
    fn mid_gray_lands_on_plus() {
        let lut = RampLut::new(ASCII_RAMP).unwrap();
        assert_eq!(lut.index(128), 4);
        assert_eq!(lut.map(128), '+');
    }

    #[test]
    fn single_char_ramp_always_maps_to_it() {
        let lut = RampLut::new("#").unwrap();
        assert!((0..=255u8).all(|g| lut.map(g) == '#'));
    }

    #[test]
    fn default_uses_standard_ramp() {
        let lut = RampLut::default();
        assert_eq!(lut.map(0), '.');
        assert_eq!(lut.map(255), '@');
    }

    #[test]
    fn empty_ramp_is_rejected() {
        assert!(matches!(RampLut::new(""), Err(CoreError::EmptyRamp)));
    }
}
