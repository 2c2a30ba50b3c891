use crate::error::{ConfigError, RemoveError};
use crate::models::{RemoveBgConfig, RemoveBgOverrides};
use crate::rendering::{load_rgba, write_png};
use chroma_key::{BackgroundSource, BoundingBox, ChromaKeyer, Rgb, Tolerance};
use std::path::PathBuf;

/// Parameters for one background removal run.
#[derive(Debug, Clone)]
pub struct RemovalRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub background: BackgroundSource,
    pub tolerance: Tolerance,
    /// Crop to the non-transparent bounding box
    pub crop: bool,
    /// Re-compress the PNG with oxipng
    pub optimize: bool,
}

impl RemovalRequest {
    /// A request that samples the background from pixel (0, 0), crops, and
    /// writes an unoptimized PNG.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, tolerance: Tolerance) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            background: BackgroundSource::FirstPixel,
            tolerance,
            crop: true,
            optimize: false,
        }
    }

    /// Merge command-line values over config defaults.
    ///
    /// A value given on the command line always wins; the config background
    /// is only parsed when no `--background` was given.
    pub fn resolve(
        overrides: RemoveBgOverrides,
        defaults: &RemoveBgConfig,
    ) -> Result<Self, ConfigError> {
        let input = overrides
            .input
            .or_else(|| defaults.input.clone())
            .ok_or(ConfigError::MissingPath {
                what: "input image",
                argument: "INPUT",
                key: "remove_bg.input",
            })?;
        let output = overrides
            .output
            .or_else(|| defaults.output.clone())
            .ok_or(ConfigError::MissingPath {
                what: "output path",
                argument: "OUTPUT",
                key: "remove_bg.output",
            })?;
        let background = match overrides.background {
            Some(rgb) => Some(rgb),
            None => defaults.background_color()?,
        };

        Ok(Self {
            input,
            output,
            background: BackgroundSource::from(background),
            tolerance: overrides.tolerance.unwrap_or_else(|| defaults.tolerance()),
            crop: overrides.crop.unwrap_or(defaults.crop),
            optimize: overrides.optimize.unwrap_or(defaults.optimize),
        })
    }
}

/// What a removal run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub background: Rgb,
    pub tolerance: Tolerance,
    pub keyed_pixels: usize,
    /// Decoded input dimensions
    pub original_size: (u32, u32),
    /// Written output dimensions
    pub final_size: (u32, u32),
    pub crop_box: Option<BoundingBox>,
    pub bytes_written: usize,
}

/// Decode, key out the background, crop, and write the result as PNG.
pub fn remove_background(request: &RemovalRequest) -> Result<RemovalSummary, RemoveError> {
    let image = load_rgba(&request.input).map_err(RemoveError::Input)?;
    let original_size = (image.width(), image.height());

    let outcome = ChromaKeyer::new(request.tolerance)
        .background(request.background)
        .crop(request.crop)
        .apply(image);
    tracing::debug!(
        background = %outcome.background.to_hex(),
        tolerance = %request.tolerance,
        keyed = outcome.keyed_pixels,
        crop_box = ?outcome.crop_box,
        "Keyed out background"
    );
    if request.crop && outcome.crop_box.is_none() {
        tracing::warn!(
            input = %request.input.display(),
            "No visible content left after keying, skipping crop"
        );
    }

    let final_size = (outcome.image.width(), outcome.image.height());
    let bytes_written =
        write_png(&request.output, &outcome.image, request.optimize).map_err(RemoveError::Output)?;
    tracing::info!(
        output = %request.output.display(),
        width = final_size.0,
        height = final_size.1,
        bytes = bytes_written,
        "Saved keyed image"
    );

    Ok(RemovalSummary {
        input: request.input.clone(),
        output: request.output.clone(),
        background: outcome.background,
        tolerance: request.tolerance,
        keyed_pixels: outcome.keyed_pixels,
        original_size,
        final_size,
        crop_box: outcome.crop_box,
        bytes_written,
    })
}
