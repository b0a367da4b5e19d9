use std::fmt;

use crate::error::CoreError;

/// One 8-bit RGB pixel. Alpha is dropped at extraction time.
///
/// # Example
/// ```
/// use px_core::frame::Rgb;
/// let px = Rgb::new(10, 20, 30);
/// assert_eq!(px.g, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Build a pixel from its three channels.
    #[inline(always)]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Dense rectangular grid, row-major. Immutable once built.
///
/// Zero-width or zero-height grids are valid and simply hold no values.
///
/// # Example
/// ```
/// use px_core::frame::Grid;
/// let grid = Grid::from_fn(3, 2, |x, y| (x + y * 3) as u8);
/// assert_eq!(grid.get(2, 1), 5);
/// assert_eq!(grid.row(1), &[3, 4, 5]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    data: Vec<T>,
    width: u32,
    height: u32,
}

/// Grid of RGB pixels produced by the extractor.
pub type PixelGrid = Grid<Rgb>;

/// Grid of luminance bytes, same shape as its source `PixelGrid`.
pub type GrayGrid = Grid<u8>;

impl<T: Copy> Grid<T> {
    /// Wrap a row-major buffer.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if `data.len() != width * height`.
    ///
    /// # Example
    /// ```
    /// use px_core::frame::GrayGrid;
    /// assert!(GrayGrid::from_raw(2, 2, vec![0; 4]).is_ok());
    /// assert!(GrayGrid::from_raw(2, 2, vec![0; 3]).is_err());
    /// ```
    pub fn from_raw(width: u32, height: u32, data: Vec<T>) -> Result<Self, CoreError> {
        if data.len() != width as usize * height as usize {
            return Err(CoreError::InvalidDimensions {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a grid by visiting every coordinate in row-major order.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
    }

    /// Width in cells.
    #[inline(always)]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    #[inline(always)]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when the grid holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at (x, y).
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the grid.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> T {
        assert!(
            x < self.width && y < self.height,
            "grid access out of bounds"
        );
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Row `y` as a slice.
    ///
    /// # Panics
    /// Panics if `y >= height`.
    #[must_use]
    pub fn row(&self, y: u32) -> &[T] {
        assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Iterate rows top to bottom. Works for zero-width grids too.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    /// Apply `f` to every value, keeping the shape.
    #[must_use]
    pub fn map<U: Copy>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            data: self.data.iter().map(f).collect(),
            width: self.width,
            height: self.height,
        }
    }

    /// Row-major backing slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the grid and return its row-major buffer.
    #[must_use]
    pub fn into_raw(self) -> Vec<T> {
        self.data
    }
}

/// Text rows produced by the ASCII mapper, top to bottom.
///
/// # Example
/// ```
/// use px_core::frame::AsciiLines;
/// let lines = AsciiLines::from(vec!["..".to_string(), "@@@".to_string()]);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines.max_line_chars(), 3);
/// assert_eq!(lines.to_string(), "..\n@@@");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiLines {
    lines: Vec<String>,
}

impl AsciiLines {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when there are no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate rows top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Length of the longest row, counted in characters rather than bytes.
    #[must_use]
    pub fn max_line_chars(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl From<Vec<String>> for AsciiLines {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl fmt::Display for AsciiLines {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
