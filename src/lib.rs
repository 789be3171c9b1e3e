//! Huetally - dominant colors of an image
//!
//! Decodes an image, downscales it to a small fixed grid, counts how often
//! each exact color occurs, and reports the most frequent ones together
//! with the left and right edge colors of the middle row.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;

pub use error::{ConfigError, ReportError};
pub use models::{ColorReport, ReportConfig};
pub use services::ColorReporter;
