//! ChromaKeyer builder -- the primary entry point for background removal.
//!
//! [`ChromaKeyer`] runs the full pipeline over an owned [`RgbaBuffer`]:
//! resolve the reference color, key out near-background pixels, then crop to
//! what is left.

use crate::buffer::{bounding_box, crop, BoundingBox, RgbaBuffer};
use crate::color::{l1_distance, Rgb, Rgba};

use super::tolerance::Tolerance;

/// Where the background reference color comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundSource {
    /// Use this color.
    Explicit(Rgb),
    /// Use the RGB channels of the pixel at `(0, 0)`, discarding its alpha.
    #[default]
    FirstPixel,
}

impl BackgroundSource {
    /// Resolve to a concrete color for `image`.
    pub fn resolve(self, image: &RgbaBuffer) -> Rgb {
        match self {
            BackgroundSource::Explicit(rgb) => rgb,
            BackgroundSource::FirstPixel => image.first_pixel().rgb(),
        }
    }
}

impl From<Option<Rgb>> for BackgroundSource {
    fn from(color: Option<Rgb>) -> Self {
        color.map_or(BackgroundSource::FirstPixel, BackgroundSource::Explicit)
    }
}

/// Replace every pixel within `tolerance` of `background` with
/// [`Rgba::TRANSPARENT`]. Other pixels, alpha included, are untouched.
///
/// Returns the number of pixels replaced.
pub fn key_out(image: &mut RgbaBuffer, background: Rgb, tolerance: Tolerance) -> usize {
    let mut keyed = 0;
    for px in image.pixels_mut() {
        if tolerance.admits(l1_distance(*px, background)) {
            *px = Rgba::TRANSPARENT;
            keyed += 1;
        }
    }
    keyed
}

/// Result of [`ChromaKeyer::apply`].
#[derive(Debug, Clone, PartialEq)]
pub struct KeyOutcome {
    /// The keyed (and possibly cropped) image.
    pub image: RgbaBuffer,
    /// Reference color the pixels were compared against.
    pub background: Rgb,
    /// Number of pixels replaced with transparent white.
    pub keyed_pixels: usize,
    /// Region the image was cropped to, if cropping happened.
    ///
    /// `None` when cropping was disabled or nothing opaque remained.
    pub crop_box: Option<BoundingBox>,
}

/// Background removal builder.
///
/// The tolerance is a required constructor argument; there is no implicit
/// default threshold.
///
/// # Example
///
/// ```
/// use chroma_key::{ChromaKeyer, Rgb, Rgba, RgbaBuffer, Tolerance};
///
/// let mut image = RgbaBuffer::filled(4, 4, Rgba::new(10, 10, 10, 255)).unwrap();
/// image.set(2, 2, Rgba::new(200, 200, 200, 255));
///
/// let outcome = ChromaKeyer::new(Tolerance::GENERIC).apply(image);
///
/// assert_eq!(outcome.background, Rgb::new(10, 10, 10));
/// assert_eq!(outcome.keyed_pixels, 15);
/// assert_eq!((outcome.image.width(), outcome.image.height()), (1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct ChromaKeyer {
    tolerance: Tolerance,
    background: BackgroundSource,
    crop: bool,
}

impl ChromaKeyer {
    /// Create a keyer that samples the background from the first pixel and
    /// crops to content.
    pub fn new(tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            background: BackgroundSource::FirstPixel,
            crop: true,
        }
    }

    /// Set where the reference color comes from.
    #[inline]
    pub fn background(mut self, source: BackgroundSource) -> Self {
        self.background = source;
        self
    }

    /// Enable or disable cropping to the non-transparent bounding box.
    #[inline]
    pub fn crop(mut self, enabled: bool) -> Self {
        self.crop = enabled;
        self
    }

    /// Run keying and cropping over `image`.
    ///
    /// The reference color is resolved before any pixel is modified. If no
    /// pixel with non-zero alpha survives keying, the image keeps its full
    /// dimensions.
    pub fn apply(&self, mut image: RgbaBuffer) -> KeyOutcome {
        let background = self.background.resolve(&image);
        let keyed_pixels = key_out(&mut image, background, self.tolerance);

        let mut crop_box = None;
        if self.crop {
            if let Some(bbox) = bounding_box(&image) {
                if let Some(cropped) = crop(&image, bbox) {
                    image = cropped;
                    crop_box = Some(bbox);
                }
            }
        }

        KeyOutcome {
            image,
            background,
            keyed_pixels,
            crop_box,
        }
    }
}
