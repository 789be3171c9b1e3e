use color_tally::GridError;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that stops a color report from being produced.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has no pixels: {}", .path.display())]
    EmptyImage { path: PathBuf },

    #[error("Pixel grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Resize dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Resize grid {width}x{height} exceeds the limit of {max} pixels")]
    GridTooLarge { width: u32, height: u32, max: u64 },

    #[error("Number of colors to report must be at least 1")]
    InvalidTop,
}
