//! Pixel grid and edge sampling.
//!
//! [`PixelGrid`] holds the resized image as row-major [`Rgb`](crate::Rgb)
//! values. [`EdgeSample`] is the result of the left/right gradient probe.

mod error;
mod pixel_grid;

pub use error::GridError;
pub use pixel_grid::{EdgeSample, PixelGrid};
