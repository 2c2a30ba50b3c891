//! Pixel storage, bounding box and crop.

mod bbox;
mod rgba_buffer;

pub use bbox::{bounding_box, crop, BoundingBox};
pub use rgba_buffer::{BufferError, RgbaBuffer};
