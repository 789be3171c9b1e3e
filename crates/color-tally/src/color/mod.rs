//! RGB color type and hex string handling
//!
//! [`Rgb`] is the only color type in this crate. Pixels are compared and
//! hashed by their exact 8-bit channel values; there is no color-space math.
//!
//! # Example
//!
//! ```
//! use color_tally::Rgb;
//!
//! let color: Rgb = "#1A2B3C".parse().unwrap();
//! assert_eq!(color.to_string(), "#1a2b3c");
//! assert_eq!(color.to_u32(), 0x1a2b3c);
//! ```

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::Rgb;
