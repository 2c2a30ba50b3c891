use chroma_key::Rgba;
use std::fmt;

/// A pixel value read at a specific coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplePoint {
    pub x: u32,
    pub y: u32,
    pub pixel: Rgba,
}

/// Diagnostic summary of an image: its size and the RGBA values at the four
/// corners and two edge midpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionReport {
    pub width: u32,
    pub height: u32,
    /// Top-left, top-right, bottom-left, bottom-right
    pub corners: [SamplePoint; 4],
    /// Left edge at `height / 2`, then top edge at `width / 2`
    pub edge_midpoints: [SamplePoint; 2],
}

impl fmt::Display for InspectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image size: {}x{}", self.width, self.height)?;
        writeln!(f, "Corner pixel values (RGBA):")?;
        for s in &self.corners {
            writeln!(f, "  ({}, {}): {}", s.x, s.y, s.pixel)?;
        }
        writeln!(f, "Sample edge pixels:")?;
        for s in &self.edge_midpoints {
            writeln!(f, "  ({}, {}): {}", s.x, s.y, s.pixel)?;
        }
        Ok(())
    }
}
