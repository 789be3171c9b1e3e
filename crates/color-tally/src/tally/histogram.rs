//! Exact color histogram.
//!
//! Every distinct 8-bit RGB value gets its own bucket; nothing is quantized
//! or merged. On a 150x150 grid there are at most 22 500 buckets.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::color::Rgb;
use crate::grid::PixelGrid;

/// One histogram bucket: how many pixels have `color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorCount {
    pub count: u32,
    pub color: Rgb,
}

impl ColorCount {
    #[inline]
    pub fn new(count: u32, color: Rgb) -> Self {
        Self { count, color }
    }

    /// Ranking order: higher count first, then lower packed color value.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.color.cmp(&other.color))
    }
}

/// Occurrence count of every distinct color in a set of pixels.
#[derive(Debug, Clone, Default)]
pub struct ColorHistogram {
    counts: HashMap<Rgb, u32>,
    total: u64,
}

impl ColorHistogram {
    /// Tally a slice of pixels.
    pub fn from_pixels(pixels: &[Rgb]) -> Self {
        let mut histogram = Self::default();
        histogram.extend(pixels.iter().copied());
        histogram
    }

    /// Tally every pixel of a grid.
    pub fn from_grid(grid: &PixelGrid) -> Self {
        Self::from_pixels(grid.pixels())
    }

    /// Count one more pixel of `color`.
    pub fn add(&mut self, color: Rgb) {
        *self.counts.entry(color).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of distinct colors.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of pixels tallied.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Drop a color's bucket, returning how many pixels it held.
    ///
    /// The removed pixels no longer count toward [`total`](Self::total).
    pub fn remove(&mut self, color: Rgb) -> u32 {
        let count = self.counts.remove(&color).unwrap_or(0);
        self.total -= u64::from(count);
        count
    }

    /// All buckets, most frequent first.
    ///
    /// Equal counts are ordered by ascending packed color value so the
    /// result does not depend on hash iteration order.
    pub fn ranked(&self) -> Vec<ColorCount> {
        let mut ranked: Vec<ColorCount> = self
            .counts
            .iter()
            .map(|(&color, &count)| ColorCount::new(count, color))
            .collect();
        ranked.sort_unstable_by(ColorCount::rank);
        ranked
    }

    /// The `n` most frequent colors, in [`ranked`](Self::ranked) order.
    ///
    /// Returns fewer than `n` entries when the image has fewer distinct colors.
    pub fn top(&self, n: usize) -> Vec<ColorCount> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

impl Extend<Rgb> for ColorHistogram {
    fn extend<I: IntoIterator<Item = Rgb>>(&mut self, iter: I) {
        for color in iter {
            self.add(color);
        }
    }
}

impl FromIterator<Rgb> for ColorHistogram {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        let mut histogram = Self::default();
        histogram.extend(iter);
        histogram
    }
}
