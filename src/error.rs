use std::path::PathBuf;
use thiserror::Error;

/// Failures of the image codec layer (decode, encode, file I/O).
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid pixel data: {0}")]
    Buffer(#[from] chroma_key::BufferError),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum InspectError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Pixel ({x}, {y}) out of range for {width}x{height} image")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

#[derive(Debug, Error)]
pub enum RemoveError {
    #[error("Failed to load input: {0}")]
    Input(#[source] CodecError),

    #[error("Failed to save output: {0}")]
    Output(#[source] CodecError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid remove_bg.background: {0}")]
    Background(#[source] chroma_key::ParseColorError),

    #[error("No {what} given (pass {argument} or set {key} in the config file)")]
    MissingPath {
        what: &'static str,
        argument: &'static str,
        key: &'static str,
    },
}
