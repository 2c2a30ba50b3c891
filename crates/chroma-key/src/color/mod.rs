//! Color types and the distance metric used for keying
//!
//! # Example
//!
//! ```
//! use chroma_key::{l1_distance, Rgb, Rgba};
//!
//! let background: Rgb = "#0A0A0A".parse().unwrap();
//! let pixel = Rgba::new(200, 200, 200, 255);
//! assert_eq!(l1_distance(pixel, background), 570);
//! ```

mod error;
mod rgb;

pub use error::ParseColorError;
pub use rgb::{l1_distance, Rgb, Rgba};
