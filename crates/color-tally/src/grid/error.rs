//! Error type for grid construction

use std::fmt;

/// Error returned when a pixel buffer does not describe a `width x height` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Buffer length disagrees with the declared dimensions
    DimensionMismatch {
        /// Declared width in pixels
        width: u32,
        /// Declared height in pixels
        height: u32,
        /// Number of elements the dimensions require
        expected: usize,
        /// Number of elements actually supplied
        actual: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::DimensionMismatch {
                width,
                height,
                expected,
                actual,
            } => write!(
                f,
                "pixel buffer for {}x{} grid needs {} elements, got {}",
                width, height, expected, actual
            ),
        }
    }
}

impl std::error::Error for GridError {}
