use crate::error::ConfigError;
use chroma_key::{Rgb, Tolerance};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "CONFIG_FILE";

/// Config file picked up from the working directory when nothing else is set.
pub const DEFAULT_CONFIG_FILE: &str = "logo-keyer.yaml";

/// Application configuration loaded from YAML
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Defaults for the `inspect` command
    pub inspect: InspectConfig,

    /// Defaults for the `remove-bg` command
    pub remove_bg: RemoveBgConfig,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct InspectConfig {
    /// Image to inspect when no path is given on the command line
    pub path: Option<PathBuf>,
}

/// Defaults for background removal
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RemoveBgConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,

    /// L1 color distance threshold
    pub tolerance: u32,

    /// Hex background color; unset means "sample pixel (0, 0)"
    pub background: Option<String>,

    /// Crop to the non-transparent bounding box
    pub crop: bool,

    /// Re-compress output with oxipng
    pub optimize: bool,
}

impl Default for RemoveBgConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: None,
            tolerance: Tolerance::GENERIC.get(),
            background: None,
            crop: true,
            optimize: false,
        }
    }
}

impl RemoveBgConfig {
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::new(self.tolerance)
    }

    /// Parse the configured background color, if any.
    pub fn background_color(&self) -> Result<Option<Rgb>, ConfigError> {
        self.background
            .as_deref()
            .map(|value| value.parse::<Rgb>().map_err(ConfigError::Background))
            .transpose()
    }
}

/// Values given for `remove-bg` on the command line.
///
/// Each field left `None` falls back to the matching [`RemoveBgConfig`]
/// value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoveBgOverrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub tolerance: Option<Tolerance>,
    pub background: Option<Rgb>,
    pub crop: Option<bool>,
    pub optimize: Option<bool>,
}

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// `--config` on the command line
    Flag(PathBuf),
    /// The `CONFIG_FILE` environment variable
    Env(PathBuf),
    /// `logo-keyer.yaml` found in the working directory
    WorkingDir(PathBuf),
    /// No file; built-in defaults
    Defaults,
}

impl ConfigSource {
    /// Pick the config source: flag, then environment, then working directory.
    pub fn locate(flag: Option<PathBuf>) -> Self {
        if let Some(path) = flag {
            return ConfigSource::Flag(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|v| !v.is_empty()) {
            return ConfigSource::Env(PathBuf::from(path));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.is_file() {
            ConfigSource::WorkingDir(local)
        } else {
            ConfigSource::Defaults
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Flag(p) | ConfigSource::Env(p) | ConfigSource::WorkingDir(p) => Some(p),
            ConfigSource::Defaults => None,
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag(p) => write!(f, "{} (--config)", p.display()),
            ConfigSource::Env(p) => write!(f, "{} ({CONFIG_ENV})", p.display()),
            ConfigSource::WorkingDir(p) => write!(f, "{} (working directory)", p.display()),
            ConfigSource::Defaults => write!(f, "(built-in defaults)"),
        }
    }
}

impl AppConfig {
    /// Load configuration from the given source.
    ///
    /// A named file that cannot be read or parsed is an error; it is never
    /// silently replaced by defaults.
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        let Some(path) = source.path() else {
            tracing::debug!("No config file, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}
