//! Unified error type for the chroma-key public API.

use crate::buffer::BufferError;
use crate::color::ParseColorError;
use std::fmt;

/// Unified error type for the chroma-key public API.
///
/// Wraps all error types from the crate into a single enum for
/// convenient `?` propagation in application code.
///
/// # Example
///
/// ```
/// use chroma_key::{ChromaKeyError, Rgb, Rgba, RgbaBuffer};
///
/// fn solid(hex: &str) -> Result<RgbaBuffer, ChromaKeyError> {
///     let c: Rgb = hex.parse()?;
///     Ok(RgbaBuffer::filled(2, 2, Rgba::new(c.r, c.g, c.b, 255))?)
/// }
///
/// assert!(solid("#fff").is_ok());
/// assert!(solid("#ff").is_err());
/// ```
#[derive(Debug)]
pub enum ChromaKeyError {
    /// Pixel buffer construction error (zero size or length mismatch)
    Buffer(BufferError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
}

impl fmt::Display for ChromaKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChromaKeyError::Buffer(err) => write!(f, "buffer error: {}", err),
            ChromaKeyError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for ChromaKeyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChromaKeyError::Buffer(err) => Some(err),
            ChromaKeyError::ParseColor(err) => Some(err),
        }
    }
}

impl From<BufferError> for ChromaKeyError {
    fn from(err: BufferError) -> Self {
        ChromaKeyError::Buffer(err)
    }
}

impl From<ParseColorError> for ChromaKeyError {
    fn from(err: ParseColorError) -> Self {
        ChromaKeyError::ParseColor(err)
    }
}
