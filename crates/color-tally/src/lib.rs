//! color-tally: pixel color frequency counting for RGB images
//!
//! This library counts how often each distinct color occurs in an RGB pixel
//! grid, ranks the colors by frequency, and samples the left and right edges
//! of the grid to detect horizontal gradients. It has no dependencies:
//! decoding and resizing happen in the caller, which hands over raw RGB bytes.
//!
//! # Quick Start
//!
//! ```
//! use color_tally::{ColorHistogram, PixelGrid, Rgb};
//!
//! let red = Rgb::new(255, 0, 0);
//! let blue = Rgb::new(0, 0, 255);
//! let grid = PixelGrid::new(vec![red, red, red, blue], 2, 2).unwrap();
//!
//! let histogram = ColorHistogram::from_grid(&grid);
//! let top = histogram.top(5);
//!
//! assert_eq!(top[0].color, red);
//! assert_eq!(top[0].count, 3);
//! assert_eq!(top[0].color.to_string(), "#ff0000");
//! ```
//!
//! # Edge Sampling
//!
//! [`PixelGrid::sample_edges()`] reads the first and last pixel of the middle
//! row (`height / 2`, integer division):
//!
//! ```
//! use color_tally::{PixelGrid, Rgb};
//!
//! let black = Rgb::new(0, 0, 0);
//! let white = Rgb::new(255, 255, 255);
//! let grid = PixelGrid::new(vec![black, white, black, white], 2, 2).unwrap();
//!
//! let edges = grid.sample_edges().unwrap();
//! assert_eq!(edges.row, 1);
//! assert_eq!(edges.left, black);
//! assert_eq!(edges.right, white);
//! assert!(edges.is_gradient());
//! ```
//!
//! # Ordering
//!
//! [`ColorHistogram::ranked()`] sorts by count, highest first. Colors with
//! equal counts are ordered by their packed `0xRRGGBB` value, lowest first,
//! so the ranking is identical across runs regardless of hash order.

pub mod color;
pub mod grid;
pub mod tally;


pub use color::{ParseColorError, Rgb};
pub use grid::{EdgeSample, GridError, PixelGrid};
pub use tally::{ColorCount, ColorHistogram};
