//! Content bounding box and cropping.
//!
//! "Content" is any pixel whose alpha is non-zero. Color channels of fully
//! transparent pixels are irrelevant to the box.

use super::rgba_buffer::RgbaBuffer;

/// A half-open pixel rectangle: columns `left..right`, rows `top..bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    #[inline]
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Returns true if this box covers the whole of a `width` x `height` image.
    pub fn covers(&self, width: u32, height: u32) -> bool {
        self.left == 0 && self.top == 0 && self.right == width && self.bottom == height
    }
}

/// Smallest box containing every pixel with non-zero alpha.
///
/// Returns `None` when the image is fully transparent.
///
/// # Example
///
/// ```
/// use chroma_key::{bounding_box, BoundingBox, Rgba, RgbaBuffer};
///
/// let mut image = RgbaBuffer::filled(4, 4, Rgba::TRANSPARENT).unwrap();
/// assert_eq!(bounding_box(&image), None);
///
/// image.set(2, 1, Rgba::new(0, 0, 0, 1));
/// assert_eq!(
///     bounding_box(&image),
///     Some(BoundingBox { left: 2, top: 1, right: 3, bottom: 2 })
/// );
/// ```
pub fn bounding_box(image: &RgbaBuffer) -> Option<BoundingBox> {
    let width = image.width() as usize;
    let mut found: Option<BoundingBox> = None;

    for (y, row) in image.pixels().chunks_exact(width).enumerate() {
        let Some(first) = row.iter().position(|p| !p.is_fully_transparent()) else {
            continue;
        };
        // A row with a first opaque pixel always has a last one.
        let last = row
            .iter()
            .rposition(|p| !p.is_fully_transparent())
            .unwrap_or(first);
        let (y, first, last) = (y as u32, first as u32, last as u32);

        found = Some(match found {
            None => BoundingBox {
                left: first,
                top: y,
                right: last + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(first),
                top: b.top,
                right: b.right.max(last + 1),
                bottom: y + 1,
            },
        });
    }

    found
}

/// Copy the region `bbox` out of `image` into a new buffer.
///
/// Returns `None` if the box is empty or extends past the image.
pub fn crop(image: &RgbaBuffer, bbox: BoundingBox) -> Option<RgbaBuffer> {
    if bbox.left >= bbox.right
        || bbox.top >= bbox.bottom
        || bbox.right > image.width()
        || bbox.bottom > image.height()
    {
        return None;
    }

    let src_width = image.width() as usize;
    let (left, right) = (bbox.left as usize, bbox.right as usize);
    let mut pixels = Vec::with_capacity(bbox.width() as usize * bbox.height() as usize);
    for y in bbox.top as usize..bbox.bottom as usize {
        let row = &image.pixels()[y * src_width..(y + 1) * src_width];
        pixels.extend_from_slice(&row[left..right]);
    }

    RgbaBuffer::new(bbox.width(), bbox.height(), pixels).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    const INK: Rgba = Rgba::new(0, 0, 0, 255);

    fn canvas(width: u32, height: u32, ink: &[(u32, u32)]) -> RgbaBuffer {
        let mut image = RgbaBuffer::filled(width, height, Rgba::TRANSPARENT).unwrap();
        for &(x, y) in ink {
            assert!(image.set(x, y, INK));
        }
        image
    }

    #[test]
    fn test_bbox_fully_transparent() {
        assert_eq!(bounding_box(&canvas(5, 3, &[])), None);
    }

    #[test]
    fn test_bbox_spans_scattered_pixels() {
        let image = canvas(10, 8, &[(7, 1), (2, 4), (5, 6)]);
        assert_eq!(
            bounding_box(&image),
            Some(BoundingBox {
                left: 2,
                top: 1,
                right: 8,
                bottom: 7
            })
        );
    }

    #[test]
    fn test_bbox_ignores_color_of_transparent_pixels() {
        let mut image = canvas(3, 3, &[(1, 1)]);
        image.set(0, 0, Rgba::new(0, 0, 0, 0));
        assert_eq!(
            bounding_box(&image),
            Some(BoundingBox {
                left: 1,
                top: 1,
                right: 2,
                bottom: 2
            })
        );
    }

    #[test]
    fn test_bbox_counts_low_alpha_as_content() {
        let mut image = canvas(4, 1, &[]);
        image.set(3, 0, Rgba::new(255, 255, 255, 1));
        assert_eq!(bounding_box(&image).map(|b| (b.left, b.right)), Some((3, 4)));
    }

    #[test]
    fn test_crop_copies_region() {
        let pixels = (0..12).map(|i| Rgba::new(i, 0, 0, 255)).collect();
        let image = RgbaBuffer::new(4, 3, pixels).unwrap();
        let out = crop(
            &image,
            BoundingBox {
                left: 1,
                top: 1,
                right: 3,
                bottom: 3,
            },
        )
        .unwrap();
        assert_eq!((out.width(), out.height()), (2, 2));
        let reds: Vec<u8> = out.pixels().iter().map(|p| p.r).collect();
        assert_eq!(reds, vec![5, 6, 9, 10]);
    }

    #[test]
    fn test_crop_rejects_out_of_range_or_empty() {
        let image = canvas(4, 4, &[]);
        let too_wide = BoundingBox {
            left: 0,
            top: 0,
            right: 5,
            bottom: 4,
        };
        let empty = BoundingBox {
            left: 2,
            top: 2,
            right: 2,
            bottom: 3,
        };
        assert!(crop(&image, too_wide).is_none());
        assert!(crop(&image, empty).is_none());
    }

    #[test]
    fn test_covers() {
        let b = BoundingBox {
            left: 0,
            top: 0,
            right: 4,
            bottom: 3,
        };
        assert!(b.covers(4, 3));
        assert!(!b.covers(5, 3));
    }
}
