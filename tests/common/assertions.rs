//! Assertion helpers for tests.

use chroma_key::{bounding_box, Rgba, RgbaBuffer};
use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert the file at `path` starts with the PNG signature
pub fn assert_png_file(path: &Path) {
    let bytes = std::fs::read(path).expect("Output file should exist");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert every pixel is exactly transparent white
pub fn assert_fully_transparent(image: &RgbaBuffer) {
    for (i, px) in image.pixels().iter().enumerate() {
        assert_eq!(*px, Rgba::TRANSPARENT, "pixel index {i}");
    }
}

/// Assert every edge row and column holds at least one visible pixel
pub fn assert_tightly_cropped(image: &RgbaBuffer) {
    let bbox = bounding_box(image).expect("Image should have visible content");
    assert!(
        bbox.covers(image.width(), image.height()),
        "Bounding box {:?} does not cover {}x{}",
        bbox,
        image.width(),
        image.height()
    );
}
