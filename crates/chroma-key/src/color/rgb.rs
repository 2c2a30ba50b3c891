//! 8-bit pixel and reference color types
//!
//! [`Rgba`] is the unit of storage in an [`RgbaBuffer`](crate::RgbaBuffer).
//! [`Rgb`] is the reference color pixels are compared against; alpha never
//! takes part in the comparison.

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// An RGB color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A pixel with 8-bit red, green, blue and alpha channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Rgba {
    /// Fully transparent white, the value keyed-out pixels are replaced with.
    pub const TRANSPARENT: Rgba = Rgba::new(255, 255, 255, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// The color channels of this pixel, alpha discarded.
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Returns true if the alpha channel is zero.
    #[inline]
    pub fn is_fully_transparent(self) -> bool {
        self.a == 0
    }
}

/// Manhattan (L1) distance between the color channels of a pixel and a
/// reference color. Alpha is ignored. The result is at most `3 * 255`.
///
/// # Example
/// ```
/// use chroma_key::{l1_distance, Rgb, Rgba};
///
/// let bg = Rgb::new(10, 10, 10);
/// assert_eq!(l1_distance(Rgba::new(20, 5, 10, 0), bg), 15);
/// ```
#[inline]
pub fn l1_distance(pixel: Rgba, reference: Rgb) -> u32 {
    pixel.r.abs_diff(reference.r) as u32
        + pixel.g.abs_diff(reference.g) as u32
        + pixel.b.abs_diff(reference.b) as u32
}

impl fmt::Display for Rgba {
    /// Tuple form, `(r, g, b, a)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` - standard 6-digit hex with hash
    /// - `RRGGBB` - standard 6-digit hex without hash
    /// - `#RGB` - shorthand 3-digit hex with hash (expands to RRGGBB)
    /// - `RGB` - shorthand 3-digit hex without hash
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use chroma_key::Rgb;
    ///
    /// let white: Rgb = "#FFFFFF".parse().unwrap();
    /// assert_eq!(white, Rgb::new(255, 255, 255));
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let s = input.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if let Some(found) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit {
                input: input.to_string(),
                found,
            });
        }

        // Every byte is an ASCII hex digit from here on.
        let digits: Vec<u8> = s.bytes().map(hex_value).collect();
        match digits[..] {
            // Shorthand: 0xF -> 0xFF
            [r, g, b] => Ok(Self::new(r * 17, g * 17, b * 17)),
            [r1, r0, g1, g0, b1, b0] => Ok(Self::new(
                (r1 << 4) | r0,
                (g1 << 4) | g0,
                (b1 << 4) | b0,
            )),
            _ => Err(ParseColorError::InvalidLength {
                input: input.to_string(),
                digits: digits.len(),
            }),
        }
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}
