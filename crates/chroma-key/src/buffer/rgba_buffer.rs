//! Owned, row-major RGBA pixel grid.

use std::fmt;

use crate::color::Rgba;

/// Error type for buffer construction.
#[derive(Debug, Clone, PartialEq)]
pub enum BufferError {
    /// Width or height is zero
    EmptyDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Pixel count (or raw byte count) doesn't match the dimensions
    LengthMismatch {
        /// Length implied by width and height
        expected: usize,
        /// Length actually provided
        actual: usize,
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::EmptyDimensions { width, height } => {
                write!(f, "image dimensions must be positive, got {}x{}", width, height)
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "pixel data length mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}

/// A 2D grid of [`Rgba`] pixels stored in row-major order.
///
/// Width and height are positive and fixed at construction. Pixel `(x, y)`
/// lives at index `y * width + x`.
///
/// # Example
///
/// ```
/// use chroma_key::{Rgba, RgbaBuffer};
///
/// let mut image = RgbaBuffer::filled(3, 2, Rgba::new(0, 0, 0, 255)).unwrap();
/// assert!(image.set(2, 1, Rgba::new(255, 0, 0, 255)));
/// assert_eq!(image.get(2, 1), Some(Rgba::new(255, 0, 0, 255)));
/// assert_eq!(image.get(3, 0), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl RgbaBuffer {
    /// Wrap row-major pixels.
    ///
    /// # Errors
    ///
    /// [`BufferError::EmptyDimensions`] for a zero width or height,
    /// [`BufferError::LengthMismatch`] if `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba>) -> Result<Self, BufferError> {
        let expected = checked_area(width, height)?;
        if pixels.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer where every pixel has the same value.
    pub fn filled(width: u32, height: u32, pixel: Rgba) -> Result<Self, BufferError> {
        let area = checked_area(width, height)?;
        Self::new(width, height, vec![pixel; area])
    }

    /// Build from interleaved `[R, G, B, A, R, G, B, A, ...]` bytes, the
    /// layout produced by RGBA8 image decoders.
    pub fn from_raw_rgba8(width: u32, height: u32, bytes: &[u8]) -> Result<Self, BufferError> {
        let expected = checked_area(width, height)? * 4;
        if bytes.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Interleaved RGBA8 bytes, length `width * height * 4`.
    pub fn to_raw_rgba8(&self) -> Vec<u8> {
        let mut raw = Vec::with_capacity(self.pixels.len() * 4);
        for px in &self.pixels {
            raw.extend_from_slice(&px.to_bytes());
        }
        raw
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// The pixel at index 0, i.e. coordinate `(0, 0)`.
    #[inline]
    pub fn first_pixel(&self) -> Rgba {
        // Non-empty by construction.
        self.pixels[0]
    }

    /// Pixel at `(x, y)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(x, y)`. Returns false when out of range.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: Rgba) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    #[inline]
    fn index_of(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

fn checked_area(width: u32, height: u32) -> Result<usize, BufferError> {
    if width == 0 || height == 0 {
        return Err(BufferError::EmptyDimensions { width, height });
    }
    Ok(width as usize * height as usize)
}
