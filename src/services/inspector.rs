use crate::error::{ConfigError, InspectError};
use crate::models::{AppConfig, ConfigSource, InspectionReport, SamplePoint};
use crate::rendering::load_rgba;
use chroma_key::RgbaBuffer;
use std::path::{Path, PathBuf};

/// Inspect `path`, or `inspect.path` from the config file when no path is
/// given. The config file is not read at all when `path` is set.
pub fn inspect_or_configured(
    path: Option<PathBuf>,
    source: &ConfigSource,
) -> Result<InspectionReport, InspectError> {
    let path = match path {
        Some(path) => path,
        None => AppConfig::load(source)?
            .inspect
            .path
            .ok_or(ConfigError::MissingPath {
                what: "image path",
                argument: "PATH",
                key: "inspect.path",
            })?,
    };
    inspect(&path)
}

/// Decode the image at `path` and sample its corners and edge midpoints.
///
/// Read-only: nothing is written and the decoded image is dropped on return.
pub fn inspect(path: &Path) -> Result<InspectionReport, InspectError> {
    let image = load_rgba(path)?;
    let report = inspect_buffer(&image)?;
    tracing::info!(
        path = %path.display(),
        width = report.width,
        height = report.height,
        "Inspected image"
    );
    Ok(report)
}

/// Sample an already-decoded image.
pub fn inspect_buffer(image: &RgbaBuffer) -> Result<InspectionReport, InspectError> {
    let (w, h) = (image.width(), image.height());
    let last_x = w.saturating_sub(1);
    let last_y = h.saturating_sub(1);

    Ok(InspectionReport {
        width: w,
        height: h,
        corners: [
            sample(image, 0, 0)?,
            sample(image, last_x, 0)?,
            sample(image, 0, last_y)?,
            sample(image, last_x, last_y)?,
        ],
        edge_midpoints: [sample(image, 0, h / 2)?, sample(image, w / 2, 0)?],
    })
}

fn sample(image: &RgbaBuffer, x: u32, y: u32) -> Result<SamplePoint, InspectError> {
    image
        .get(x, y)
        .map(|pixel| SamplePoint { x, y, pixel })
        .ok_or(InspectError::OutOfBounds {
            x,
            y,
            width: image.width(),
            height: image.height(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_key::Rgba;

    /// Pixel value encodes its own coordinate.
    fn coordinate_image(width: u32, height: u32) -> RgbaBuffer {
        let mut pixels = Vec::new();
        for y in 0..height {
            for x in 0..width {
                pixels.push(Rgba::new(x as u8, y as u8, 7, 255 - x as u8));
            }
        }
        RgbaBuffer::new(width, height, pixels).unwrap()
    }

    fn coords(points: &[SamplePoint]) -> Vec<(u32, u32)> {
        points.iter().map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_sample_coordinates() {
        let report = inspect_buffer(&coordinate_image(5, 7)).unwrap();
        assert_eq!((report.width, report.height), (5, 7));
        assert_eq!(
            coords(&report.corners),
            vec![(0, 0), (4, 0), (0, 6), (4, 6)]
        );
        assert_eq!(coords(&report.edge_midpoints), vec![(0, 3), (2, 0)]);
    }

    #[test]
    fn test_sampled_values_match_pixels() {
        let image = coordinate_image(6, 4);
        let report = inspect_buffer(&image).unwrap();
        for s in report.corners.iter().chain(report.edge_midpoints.iter()) {
            assert_eq!(Some(s.pixel), image.get(s.x, s.y));
        }
        assert_eq!(report.corners[3].pixel, Rgba::new(5, 3, 7, 250));
    }

    #[test]
    fn test_single_pixel_image() {
        let image = RgbaBuffer::filled(1, 1, Rgba::new(9, 8, 7, 6)).unwrap();
        let report = inspect_buffer(&image).unwrap();
        assert!(report
            .corners
            .iter()
            .chain(report.edge_midpoints.iter())
            .all(|s| (s.x, s.y) == (0, 0) && s.pixel == Rgba::new(9, 8, 7, 6)));
    }

    #[test]
    fn test_explicit_path_skips_config() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("logo.png");
        crate::rendering::write_png(&image, &coordinate_image(3, 2), false).unwrap();
        let broken = dir.path().join("logo-keyer.yaml");
        std::fs::write(&broken, "inspect: [unclosed").unwrap();

        let report =
            inspect_or_configured(Some(image), &ConfigSource::WorkingDir(broken.clone())).unwrap();
        assert_eq!((report.width, report.height), (3, 2));

        let err = inspect_or_configured(None, &ConfigSource::WorkingDir(broken)).unwrap_err();
        assert!(matches!(err, InspectError::Config(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_configured_path_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("logo.png");
        crate::rendering::write_png(&image, &coordinate_image(4, 4), false).unwrap();
        let config = dir.path().join("logo-keyer.yaml");
        std::fs::write(&config, format!("inspect:\n  path: {}\n", image.display())).unwrap();

        let report = inspect_or_configured(None, &ConfigSource::Flag(config)).unwrap();
        assert_eq!((report.width, report.height), (4, 4));
    }

    #[test]
    fn test_no_path_anywhere() {
        let err = inspect_or_configured(None, &ConfigSource::Defaults).unwrap_err();
        assert!(matches!(
            err,
            InspectError::Config(ConfigError::MissingPath { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = inspect(Path::new("/nonexistent/logo.png")).unwrap_err();
        assert!(matches!(err, InspectError::Codec(_)));
    }
}
