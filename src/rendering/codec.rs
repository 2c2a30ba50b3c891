use crate::error::CodecError;
use chroma_key::RgbaBuffer;
use image::{ImageError, ImageReader};
use std::io::Cursor;
use std::path::Path;

/// Decode an image file of any supported container format and convert it to
/// 8-bit RGBA, regardless of the source color type.
///
/// The format is identified from the file contents; the extension is only
/// a fallback when the leading bytes match no known signature.
pub fn load_rgba(path: &Path) -> Result<RgbaBuffer, CodecError> {
    let decode_error = |source| CodecError::Decode {
        path: path.to_path_buf(),
        source,
    };
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;
    tracing::debug!(
        path = %path.display(),
        color = ?decoded.color(),
        width = decoded.width(),
        height = decoded.height(),
        "Decoded image"
    );

    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(RgbaBuffer::from_raw_rgba8(width, height, rgba.as_raw())?)
}

/// Encode an RGBA buffer as an 8-bit RGBA PNG.
pub fn encode_png(image: &RgbaBuffer) -> Result<Vec<u8>, CodecError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&image.to_raw_rgba8())
            .map_err(|e| CodecError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Re-compress a PNG with oxipng (zopfli + adaptive filter selection).
///
/// Alpha optimization stays off: it rewrites the color channels of fully
/// transparent pixels. Falls back to the input bytes if oxipng fails.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            png_bytes
        }
    }
}

/// Encode `image` as PNG and write it to `path`. Returns the bytes written.
pub fn write_png(path: &Path, image: &RgbaBuffer, optimize: bool) -> Result<usize, CodecError> {
    let mut png_bytes = encode_png(image)?;
    if optimize {
        png_bytes = optimize_png(png_bytes);
    }
    std::fs::write(path, &png_bytes).map_err(|source| CodecError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(png_bytes.len())
}
