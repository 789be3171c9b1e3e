use color_tally::{ColorCount, EdgeSample};
use std::path::PathBuf;

/// Everything the report prints, derived from one resized image
#[derive(Debug, Clone, PartialEq)]
pub struct ColorReport {
    /// Path the image was read from
    pub source: PathBuf,

    /// Dimensions of the resized grid the counts refer to
    pub width: u32,
    pub height: u32,

    /// Number of distinct colors in the resized grid, ignored colors excluded
    pub distinct_colors: usize,

    /// Requested list length (the header says "Top N")
    pub requested_top: usize,

    /// Most frequent colors, at most `requested_top`, highest count first
    pub top_colors: Vec<ColorCount>,

    /// Left and right edge colors of the middle row
    pub gradient: EdgeSample,
}

impl ColorReport {
    /// Pixels in the resized grid
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}
