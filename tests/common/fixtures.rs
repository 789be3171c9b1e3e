//! Fixture images and config files.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Named colors used across tests
pub mod colors {
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
    pub const TEAL: [u8; 3] = [12, 34, 56];
    pub const NEAR_BLACK: [u8; 3] = [0, 0, 5];
}

/// Write a single-color PNG
pub fn solid_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .expect("Failed to write solid fixture");
}

/// Write a PNG whose left half is `left` and right half is `right`
pub fn split_png(path: &Path, width: u32, height: u32, left: [u8; 3], right: [u8; 3]) {
    RgbImage::from_fn(width, height, |x, _| {
        if x < width / 2 {
            Rgb(left)
        } else {
            Rgb(right)
        }
    })
    .save(path)
    .expect("Failed to write split fixture");
}

/// Write a PNG with a red-to-blue ramp across the width
pub fn ramp_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, _| {
        let t = (x * 255 / (width - 1)) as u8;
        Rgb([255 - t, 0, t])
    })
    .save(path)
    .expect("Failed to write ramp fixture");
}

/// Write a noisy PNG with many distinct colors
pub fn noise_png(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        let v = x.wrapping_mul(2654435761).wrapping_add(y.wrapping_mul(40503));
        Rgb([(v >> 24) as u8, (v >> 16) as u8, (v >> 8) as u8])
    })
    .save(path)
    .expect("Failed to write noise fixture");
}

/// Write a fully transparent RGBA PNG
pub fn transparent_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbaImage::from_pixel(width, height, Rgba([color[0], color[1], color[2], 0]))
        .save(path)
        .expect("Failed to write transparent fixture");
}

/// Write a file that is not an image at all
pub fn garbage_file(path: &Path) {
    std::fs::write(path, b"this is not an image").expect("Failed to write garbage fixture");
}

/// Write a YAML config file
pub fn config_yaml(path: &Path, yaml: &str) {
    std::fs::write(path, yaml).expect("Failed to write config fixture");
}

/// Lowercase `#rrggbb` for a color triple
pub fn hex(color: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", color[0], color[1], color[2])
}
