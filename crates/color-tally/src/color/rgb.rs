//! 8-bit RGB color
//!
//! One pixel value as it comes out of the decoder after alpha is dropped.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An 8-bit-per-channel RGB color.
///
/// Ordering follows the packed `0xRRGGBB` value (red is most significant),
/// which the histogram uses to break ties between equally frequent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array `[R, G, B]`.
    ///
    /// # Example
    /// ```
    /// use color_tally::Rgb;
    /// assert_eq!(Rgb::from_bytes([1, 2, 3]), Rgb::new(1, 2, 3));
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Channels as a byte array `[R, G, B]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Pack into `0xRRGGBB`.
    ///
    /// # Example
    /// ```
    /// use color_tally::Rgb;
    /// assert_eq!(Rgb::new(0x12, 0x34, 0x56).to_u32(), 0x123456);
    /// ```
    #[inline]
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    /// Formats as `#rrggbb`: lowercase, zero-padded, always six digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`.
    ///
    /// Case-insensitive, surrounding whitespace is ignored. Shorthand digits
    /// are doubled (`#f80` is `#ff8800`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);

        if !digits.is_ascii() {
            return Err(ParseColorError::InvalidLength {
                len: digits.chars().count(),
            });
        }

        match digits.len() {
            3 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
                Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
            }
            len => Err(ParseColorError::InvalidLength { len }),
        }
    }
}
