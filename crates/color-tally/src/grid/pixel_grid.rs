//! Row-major RGB pixel grid.

use super::error::GridError;
use crate::color::Rgb;

/// An immutable `width x height` grid of [`Rgb`] pixels in row-major order.
///
/// # Example
///
/// ```
/// use color_tally::{PixelGrid, Rgb};
///
/// // Two pixels, raw interleaved bytes as produced by a decoder
/// let grid = PixelGrid::from_raw_rgb(&[255, 0, 0, 0, 0, 255], 2, 1).unwrap();
///
/// assert_eq!(grid.get(0, 0), Some(Rgb::new(255, 0, 0)));
/// assert_eq!(grid.get(1, 0), Some(Rgb::new(0, 0, 255)));
/// assert_eq!(grid.get(2, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    pixels: Vec<Rgb>,
    width: u32,
    height: u32,
}

/// Colors read from the left and right edge of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSample {
    /// Row index the pixels were read from
    pub row: u32,
    /// Pixel at column 0
    pub left: Rgb,
    /// Pixel at column `width - 1`
    pub right: Rgb,
}

impl EdgeSample {
    /// True when the two edge colors differ.
    pub fn is_gradient(&self) -> bool {
        self.left != self.right
    }
}

impl PixelGrid {
    /// Build a grid from row-major pixels.
    ///
    /// # Errors
    ///
    /// [`GridError::DimensionMismatch`] if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<Rgb>, width: u32, height: u32) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build a grid from interleaved `R, G, B` bytes.
    ///
    /// # Errors
    ///
    /// [`GridError::DimensionMismatch`] if `bytes.len() != width * height * 3`.
    pub fn from_raw_rgb(bytes: &[u8], width: u32, height: u32) -> Result<Self, GridError> {
        let expected = width as usize * height as usize * 3;
        if bytes.len() != expected {
            return Err(GridError::DimensionMismatch {
                width,
                height,
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pixel at column `x`, row `y`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Read column 0 and column `width - 1` of row `height / 2`.
    ///
    /// Returns `None` for an empty grid. For a one-pixel-wide grid both
    /// sides are the same pixel.
    pub fn sample_edges(&self) -> Option<EdgeSample> {
        if self.is_empty() {
            return None;
        }
        let row = self.height / 2;
        Some(EdgeSample {
            row,
            left: self.get(0, row)?,
            right: self.get(self.width - 1, row)?,
        })
    }
}
