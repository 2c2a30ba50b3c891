//! Test fixtures: synthetic images written into a temporary directory.

use chroma_key::{Rgba, RgbaBuffer};
use image::{DynamicImage, ImageFormat, RgbImage, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Colors used across tests
pub mod colors {
    use chroma_key::Rgba;

    /// Near-black background of the worked 4x4 example
    pub const DARK_BG: Rgba = Rgba::new(10, 10, 10, 255);

    /// Foreground pixel of the worked 4x4 example
    pub const LIGHT_INK: Rgba = Rgba::new(200, 200, 200, 255);
}

/// A temporary directory that is removed when dropped.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `image` as lossless PNG data. The format does not follow the
    /// extension, so `name` may be `logo.jpg` or just `logo`.
    pub fn write_png(&self, name: &str, image: &RgbaBuffer) -> PathBuf {
        let path = self.path(name);
        to_rgba_image(image)
            .save_with_format(&path, ImageFormat::Png)
            .expect("Failed to write PNG fixture");
        path
    }

    /// Write the RGB channels of `image` as a JPEG (alpha dropped).
    pub fn write_jpeg(&self, name: &str, image: &RgbaBuffer) -> PathBuf {
        let path = self.path(name);
        let rgb = DynamicImage::ImageRgba8(to_rgba_image(image)).into_rgb8();
        DynamicImage::ImageRgb8(rgb)
            .save_with_format(&path, ImageFormat::Jpeg)
            .expect("Failed to write JPEG fixture");
        path
    }

    /// Write arbitrary bytes.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }
}

/// Decode any image file as RGBA8.
pub fn read_rgba(path: &Path) -> RgbaBuffer {
    let img = image::open(path).expect("Failed to decode output").into_rgba8();
    RgbaBuffer::from_raw_rgba8(img.width(), img.height(), img.as_raw())
        .expect("Decoded buffer should be consistent")
}

fn to_rgba_image(image: &RgbaBuffer) -> RgbaImage {
    RgbaImage::from_raw(image.width(), image.height(), image.to_raw_rgba8())
        .expect("Buffer length should match dimensions")
}

/// 4x4 dark image with a single light pixel at (2, 2).
pub fn single_ink_pixel() -> RgbaBuffer {
    let mut image = RgbaBuffer::filled(4, 4, colors::DARK_BG).unwrap();
    image.set(2, 2, colors::LIGHT_INK);
    image
}

/// Image whose every pixel encodes its own coordinate, with distinct alpha.
pub fn coordinate_grid(width: u32, height: u32) -> RgbaBuffer {
    let mut pixels = Vec::with_capacity((width * height) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push(Rgba::new(x as u8, y as u8, (x * y) as u8, 255 - y as u8));
        }
    }
    RgbaBuffer::new(width, height, pixels).unwrap()
}

/// Grey-on-grey "logo": a light square aligned to JPEG macroblocks so that
/// lossy encoding keeps the background flat.
pub fn grey_logo_48() -> RgbaBuffer {
    let mut image = RgbaBuffer::filled(48, 48, Rgba::new(20, 20, 20, 255)).unwrap();
    for y in 16..32 {
        for x in 16..32 {
            image.set(x, y, Rgba::new(230, 230, 230, 255));
        }
    }
    image
}
