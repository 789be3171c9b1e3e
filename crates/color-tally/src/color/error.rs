//! Error type for hex color parsing

use std::fmt;
use std::num::ParseIntError;

/// Returned by `"...".parse::<Rgb>()` when the input is not a hex color.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseColorError {
    /// Digit count after stripping `#` was neither 3 nor 6.
    InvalidLength {
        /// Number of characters found
        len: usize,
    },
    /// A character outside `[0-9a-fA-F]`.
    InvalidHex(ParseIntError),
}

impl From<ParseIntError> for ParseColorError {
    fn from(err: ParseIntError) -> Self {
        ParseColorError::InvalidHex(err)
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { len } => {
                write!(f, "expected 3 or 6 hex digits, found {}", len)
            }
            ParseColorError::InvalidHex(err) => write!(f, "not a hex digit: {}", err),
        }
    }
}

impl std::error::Error for ParseColorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseColorError::InvalidHex(err) => Some(err),
            ParseColorError::InvalidLength { .. } => None,
        }
    }
}
