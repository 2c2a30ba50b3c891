//! chroma-key: color-distance background removal for RGBA pixel buffers
//!
//! This library keys out pixels that are close in color to a reference
//! background and crops the result to its visible content. It does no file
//! I/O; decoding and encoding belong to the caller.
//!
//! # Quick Start
//!
//! ```
//! use chroma_key::{ChromaKeyer, Rgba, RgbaBuffer, Tolerance};
//!
//! let mut image = RgbaBuffer::filled(4, 4, Rgba::new(10, 10, 10, 255)).unwrap();
//! image.set(2, 2, Rgba::new(200, 200, 200, 255));
//!
//! let outcome = ChromaKeyer::new(Tolerance::GENERIC).apply(image);
//!
//! assert_eq!(outcome.image.pixels(), &[Rgba::new(200, 200, 200, 255)]);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RgbaBuffer
//!     |
//!     v
//! BackgroundSource::resolve   (explicit color, or RGB of pixel (0, 0))
//!     |
//!     v
//! key_out                     (L1 distance < tolerance -> (255, 255, 255, 0))
//!     |
//!     v
//! bounding_box                (pixels with alpha != 0)
//!     |
//!     v
//! crop                        (skipped when nothing opaque remains)
//! ```
//!
//! # Distance Metric
//!
//! [`l1_distance`] sums absolute per-channel differences of red, green and
//! blue. Alpha never participates. A pixel is background when its distance
//! is strictly less than the [`Tolerance`]; a distance equal to the
//! tolerance is foreground.

pub mod buffer;
pub mod color;
pub mod error;
pub mod key;


pub use buffer::{bounding_box, crop, BoundingBox, BufferError, RgbaBuffer};
pub use color::{l1_distance, ParseColorError, Rgb, Rgba};
pub use error::ChromaKeyError;
pub use key::{key_out, BackgroundSource, ChromaKeyer, KeyOutcome, Tolerance};
